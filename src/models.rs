// Data models for the todo store

use serde::{Deserialize, Serialize};

/// A single todo entry.
///
/// Serialized field names match the snapshot layout on disk:
/// `{"id": 1, "title": "buy milk", "isCompleted": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// Whole-store state: the id counter plus the task list in insertion order.
///
/// Invariant: `next_id` is strictly greater than every id ever assigned, so
/// ids are never reused even after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "nextId")]
    pub next_id: u64,
    pub tasks: Vec<Task>,
}

impl Default for State {
    fn default() -> Self {
        State {
            next_id: 1,
            tasks: Vec::new(),
        }
    }
}
