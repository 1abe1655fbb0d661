// todostore - persistent todo-list store with action dispatch and filtered views

pub mod filter;
pub mod models;
pub mod persist;
pub mod store;

// Re-export main types for convenience
pub use filter::{FilterMode, visible_tasks};
pub use models::{State, Task};
pub use persist::{JsonFile, Persist};
pub use store::{Action, ListenerId, StoreError, TodoStore};
