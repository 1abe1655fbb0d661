// Action-dispatch store: the single choke point for all task mutation

use crate::models::{State, Task};
use crate::persist::Persist;
use thiserror::Error;
use tracing::debug;

/// The closed set of mutations the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(String),
    ToggleTask(u64),
    DeleteTask(u64),
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Toggle or delete named an id that is not in the store. The caller
    /// handed us a stale or invented id; state is left untouched.
    #[error("no task with id {0}")]
    NotFound(u64),

    /// Writing the snapshot after a mutation failed. The in-memory mutation
    /// and change notification have already taken effect; only durability
    /// is lost.
    #[error("failed to persist state: {0}")]
    Persist(eyre::Report),
}

/// Handle returned by [`TodoStore::on_change`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&State)>;

/// Owner of the task list. All mutation goes through [`dispatch`]; external
/// code reads state through [`state`]/[`tasks`] and re-renders on change
/// notifications.
///
/// Everything is synchronous and single-threaded: each dispatch applies its
/// mutation, runs the listener loop, writes the snapshot, and only then
/// returns. Listeners receive `&State` and cannot re-enter the store, so
/// nested dispatch is impossible by construction.
///
/// [`dispatch`]: TodoStore::dispatch
/// [`state`]: TodoStore::state
/// [`tasks`]: TodoStore::tasks
pub struct TodoStore {
    state: State,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    persist: Option<Box<dyn Persist>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::with_state(State::default())
    }
}

impl TodoStore {
    /// In-memory store with no persistence hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// In-memory store seeded with an explicit state.
    pub fn with_state(state: State) -> Self {
        TodoStore {
            state,
            listeners: Vec::new(),
            next_listener_id: 0,
            persist: None,
        }
    }

    /// Open a store backed by a persister: seed initial state from its
    /// snapshot (default empty state if absent) and save after every
    /// successful mutation.
    pub fn open<P: Persist + 'static>(persister: P) -> eyre::Result<Self> {
        let state = persister.load()?.unwrap_or_default();
        debug!(
            next_id = state.next_id,
            task_count = state.tasks.len(),
            "Opened store"
        );

        let mut store = Self::with_state(state);
        store.persist = Some(Box::new(persister));
        Ok(store)
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Read-only view of the task list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Register a change listener. It is invoked synchronously, once per
    /// successful mutation, after the mutation is fully applied and before
    /// `dispatch` returns. No batching or coalescing.
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&State) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Returns false if the id was
    /// already unsubscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Apply one action, all-or-nothing.
    ///
    /// A blank `AddTask` title is a silent no-op: `Ok(())`, no notification,
    /// no save. An unknown id on toggle/delete is `StoreError::NotFound` with
    /// state untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let changed = match action {
            Action::AddTask(title) => self.add_task(title),
            Action::ToggleTask(id) => {
                self.toggle_task(id)?;
                true
            }
            Action::DeleteTask(id) => {
                self.delete_task(id)?;
                true
            }
        };

        if changed {
            self.notify();

            if let Some(persist) = &self.persist {
                persist.save(&self.state).map_err(StoreError::Persist)?;
            }
        }

        Ok(())
    }

    fn add_task(&mut self, title: String) -> bool {
        let title = title.trim();
        if title.is_empty() {
            debug!("Ignoring task with blank title");
            return false;
        }

        let task = Task {
            id: self.state.next_id,
            title: title.to_string(),
            is_completed: false,
        };
        debug!(id = task.id, "Adding task");

        self.state.next_id += 1;
        self.state.tasks.push(task);
        true
    }

    fn toggle_task(&mut self, id: u64) -> Result<(), StoreError> {
        let task = self
            .state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        task.is_completed = !task.is_completed;
        debug!(id, is_completed = task.is_completed, "Toggled task");
        Ok(())
    }

    fn delete_task(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self
            .state
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        // Shifting removal keeps the remaining tasks in insertion order
        self.state.tasks.remove(index);
        debug!(id, "Deleted task");
        Ok(())
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}
