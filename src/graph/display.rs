use super::FlowGraph;
use std::collections::HashSet;
use std::fmt;

/// Renders the subgraph reachable from one node as an indented tree.
///
/// Branches appear as siblings. A node that was already printed is shown
/// once more with a `(seen)` marker and not expanded, which keeps merges and
/// cycles finite.
pub struct DisplayPath<'a> {
    pub graph: &'a FlowGraph,
    pub root: &'a str,
}

impl<'a> fmt::Display for DisplayPath<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.graph.index_of(self.root) else {
            return writeln!(f, "└── <Unknown node '{}'>", self.root);
        };

        let mut printed = HashSet::new();
        // (node, prefix, is_last); children are pushed reversed so the first
        // outgoing edge is printed first.
        let mut stack = vec![(root, String::new(), true)];

        while let Some((i, prefix, is_last)) = stack.pop() {
            let node_marker = if is_last { "└── " } else { "├── " };
            let node = self.graph.node_at(i);
            let role = node.role().map_or("?", |r| r.as_str());
            write!(f, "{}{}{} [{}]", prefix, node_marker, node.id(), role)?;

            if !printed.insert(i) {
                writeln!(f, " (seen)")?;
                continue;
            }
            writeln!(f)?;

            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            let children = self.graph.outgoing_of(i);
            for (pos, &child) in children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), pos + 1 == children.len()));
            }
        }
        Ok(())
    }
}
