// Derived-view filtering over the task list

use crate::models::Task;

/// Which subset of tasks the presentation layer wants to see.
///
/// Held by the caller, never part of store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Whether a task is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.is_completed,
            FilterMode::Completed => task.is_completed,
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!(
                "invalid filter mode: {} (expected all, active or completed)",
                other
            )),
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Active => write!(f, "active"),
            FilterMode::Completed => write!(f, "completed"),
        }
    }
}

/// Pure derivation of the visible subset, preserving original order.
///
/// Recomputed on every call; no caching.
pub fn visible_tasks(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t)).collect()
}
