use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for host data models that can be converted into a `FlowDefinition`.
///
/// Hosts that persist their graphs in a shape other than the editor's
/// `{nodes, edges}` JSON implement this to feed the engine without going
/// through JSON at all.
///
/// # Example
///
/// ```rust
/// use jidou::prelude::*;
/// use jidou::error::FlowConversionError;
///
/// struct StoredStep { key: String, kind: String, next: Option<String> }
/// struct StoredAutomation { steps: Vec<StoredStep> }
///
/// impl IntoFlow for StoredAutomation {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         let mut nodes = Vec::new();
///         let mut edges = Vec::new();
///         for step in self.steps {
///             if step.key.is_empty() {
///                 return Err(FlowConversionError::ValidationError("empty step key".into()));
///             }
///             if let Some(next) = step.next {
///                 edges.push(FlowEdgeDefinition::new(step.key.clone(), next));
///             }
///             nodes.push(FlowNodeDefinition::new(step.key, step.kind));
///         }
///         Ok(FlowDefinition::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow description.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
