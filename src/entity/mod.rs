use crate::graph::{FlowNode, NodeRole};
use ahash::AHashMap;
use serde_json::Value as JsonValue;
use tracing::trace;

mod records;

pub use records::*;

/// Records keyed by their integer id.
pub type EntityMap<E> = AHashMap<EntityId, E>;

/// A domain record that a graph node of a given role can point at.
pub trait FlowEntity {
    const ROLE: NodeRole;
    fn id(&self) -> EntityId;
}

impl FlowEntity for Trigger {
    const ROLE: NodeRole = NodeRole::Trigger;
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FlowEntity for Condition {
    const ROLE: NodeRole = NodeRole::Condition;
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FlowEntity for Action {
    const ROLE: NodeRole = NodeRole::Action;
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Trigger, condition and action records of one automation, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct EntityCollections {
    pub triggers: EntityMap<Trigger>,
    pub conditions: EntityMap<Condition>,
    pub actions: EntityMap<Action>,
}

impl EntityCollections {
    pub fn new(triggers: Vec<Trigger>, conditions: Vec<Condition>, actions: Vec<Action>) -> Self {
        Self {
            triggers: keyed(triggers),
            conditions: keyed(conditions),
            actions: keyed(actions),
        }
    }

    pub fn resolver(&self) -> EntityResolver<'_> {
        EntityResolver { collections: self }
    }
}

impl From<RecordSet> for EntityCollections {
    fn from(records: RecordSet) -> Self {
        Self::new(records.triggers, records.conditions, records.actions)
    }
}

fn keyed<E: FlowEntity>(records: Vec<E>) -> EntityMap<E> {
    records.into_iter().map(|r| (r.id(), r)).collect()
}

/// Looks up the records behind graph nodes.
pub struct EntityResolver<'a> {
    collections: &'a EntityCollections,
}

impl<'a> EntityResolver<'a> {
    pub fn trigger(&self, node: &FlowNode) -> Option<&'a Trigger> {
        let collections = self.collections;
        resolve_entity(node, &collections.triggers)
    }

    pub fn condition(&self, node: &FlowNode) -> Option<&'a Condition> {
        let collections = self.collections;
        resolve_entity(node, &collections.conditions)
    }

    pub fn action(&self, node: &FlowNode) -> Option<&'a Action> {
        let collections = self.collections;
        resolve_entity(node, &collections.actions)
    }
}

/// Finds the record a node refers to.
///
/// Tried in order, first hit wins:
/// 1. `data.entityId`
/// 2. the role's legacy field (`triggerId`, `conditionId` or `actionId`)
/// 3. a node id of the form `{role}-{integer}`, e.g. `trigger-42`
///
/// References that are present but point at no record fall through to the
/// next tier. Nodes whose role does not match `E` never resolve.
pub fn resolve_entity<'a, E: FlowEntity>(
    node: &FlowNode,
    records: &'a EntityMap<E>,
) -> Option<&'a E> {
    if !node.is(E::ROLE) {
        return None;
    }

    let data = node.data();
    let explicit = data.get("entityId").and_then(reference_id);
    let legacy = E::ROLE
        .legacy_reference_field()
        .and_then(|field| data.get(field))
        .and_then(reference_id);
    let from_id = id_suffix(node.id(), E::ROLE);

    [("entityId", explicit), ("legacy", legacy), ("node_id", from_id)]
        .into_iter()
        .find_map(|(tier, id)| {
            let record = records.get(&id?)?;
            trace!(node_id = node.id(), tier, "Resolved node entity");
            Some(record)
        })
}

fn reference_id(value: &JsonValue) -> Option<EntityId> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as EntityId)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn id_suffix(node_id: &str, role: NodeRole) -> Option<EntityId> {
    let digits = node_id.strip_prefix(role.as_str())?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
