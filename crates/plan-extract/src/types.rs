use serde::{Deserialize, Serialize};

/// Structured project plan pulled out of a model response. Built once per
/// response and immutable afterwards; a plan always carries at least one
/// workstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub workstreams: Vec<Workstream>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workstream {
    /// Short display code ("A", "B", ...). Cosmetic, not a key.
    pub id: String,
    pub title: String,
    pub description: String,
    pub deliverables: Vec<Deliverable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Short display code ("A1", "B2", ...).
    pub id: String,
    pub title: String,
    pub description: String,
}
