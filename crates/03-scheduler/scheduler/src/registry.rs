use std::cmp::Reverse;
use std::fmt;

use priority::{ConfigError, EncodedPriority};
use smallvec::SmallVec;

use crate::pacing::Pacing;
use crate::scheduler::CycleError;
use crate::task::Task;

/// Registration sequence number; earlier registrations win priority ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only row of the arbitration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskInfo<'a> {
    /// Registration handle.
    pub id: TaskId,
    /// Unit name.
    pub name: &'a str,
    /// Priority captured at registration.
    pub priority: EncodedPriority,
}

/// Object-safe view of a [`Task`] that runs check and action back to back,
/// so a unit's scratch never leaves the call that produced it.
pub(crate) trait Slot<C: ?Sized> {
    fn name(&self) -> &str;
    fn attempt(&mut self, ctx: &C) -> Result<Option<Pacing>, CycleError>;
}

impl<C: ?Sized, T: Task<C>> Slot<C> for T {
    fn name(&self) -> &str {
        Task::name(self)
    }

    fn attempt(&mut self, ctx: &C) -> Result<Option<Pacing>, CycleError> {
        let scratch = match self.check(ctx) {
            Ok(Some(scratch)) => scratch,
            Ok(None) => return Ok(None),
            Err(err) => {
                return Err(CycleError::Eligibility {
                    task: Task::name(self).to_owned(),
                    source: Box::new(err),
                })
            }
        };
        log::trace!("`{}` eligible; acting", Task::name(self));
        self.act(ctx, scratch)
            .map(Some)
            .map_err(|err| CycleError::Action {
                task: Task::name(self).to_owned(),
                source: Box::new(err),
            })
    }
}

pub(crate) struct Entry<C: ?Sized> {
    pub(crate) id: TaskId,
    pub(crate) priority: EncodedPriority,
    pub(crate) task: Box<dyn Slot<C> + Send>,
}

enum Change<C: ?Sized> {
    Add(Entry<C>),
    Remove(TaskId),
}

/// Ordered set of registered units plus the changes waiting for the next
/// cycle boundary.
pub struct Registry<C: ?Sized> {
    entries: Vec<Entry<C>>,
    pending: SmallVec<[Change<C>; 8]>,
    next_id: u64,
}

impl<C: ?Sized> Registry<C> {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Queues `task` for addition at the next cycle boundary.
    ///
    /// The priority is read here, once. A name already live or queued is
    /// rejected.
    pub fn register<T>(&mut self, task: T) -> Result<TaskId, ConfigError>
    where
        T: Task<C> + Send + 'static,
    {
        let name = Task::name(&task);
        if self.name_taken(name) {
            return Err(ConfigError::DuplicateTask(name.to_owned()));
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let priority = task.priority();
        log::debug!("queued `{name}` as {id} with priority {priority}");
        self.pending.push(Change::Add(Entry {
            id,
            priority,
            task: Box::new(task),
        }));
        Ok(id)
    }

    /// Queues removal of `id`. Returns `false` when `id` is unknown or
    /// already queued for removal.
    pub fn unregister(&mut self, id: TaskId) -> bool {
        if self.removal_pending(id) {
            return false;
        }
        let known = self.entries.iter().any(|e| e.id == id)
            || self
                .pending
                .iter()
                .any(|c| matches!(c, Change::Add(e) if e.id == id));
        if known {
            self.pending.push(Change::Remove(id));
        }
        known
    }

    /// Applies queued changes in the order they were made and restores the
    /// arbitration order. Returns `(added, removed)`.
    pub fn apply_pending(&mut self) -> (usize, usize) {
        if self.pending.is_empty() {
            return (0, 0);
        }
        let mut added = 0;
        let mut removed = 0;
        for change in self.pending.drain(..) {
            match change {
                Change::Add(entry) => {
                    self.entries.push(entry);
                    added += 1;
                }
                Change::Remove(id) => {
                    let before = self.entries.len();
                    self.entries.retain(|e| e.id != id);
                    removed += before - self.entries.len();
                }
            }
        }
        self.entries.sort_by_key(|e| (Reverse(e.priority), e.id));
        log::info!(
            "registry updated: +{added} -{removed}, {} live",
            self.entries.len()
        );
        (added, removed)
    }

    /// Number of live units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no unit is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued additions and removals.
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    /// Live units in arbitration order.
    pub fn ordered(&self) -> Vec<TaskInfo<'_>> {
        self.entries
            .iter()
            .map(|e| TaskInfo {
                id: e.id,
                name: e.task.name(),
                priority: e.priority,
            })
            .collect()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry<C>] {
        &mut self.entries
    }

    fn removal_pending(&self, id: TaskId) -> bool {
        self.pending
            .iter()
            .any(|c| matches!(c, Change::Remove(r) if *r == id))
    }

    fn name_taken(&self, name: &str) -> bool {
        let live = self
            .entries
            .iter()
            .any(|e| e.task.name() == name && !self.removal_pending(e.id));
        let queued = self.pending.iter().any(|c| match c {
            Change::Add(e) => e.task.name() == name && !self.removal_pending(e.id),
            Change::Remove(_) => false,
        });
        live || queued
    }
}

impl<C: ?Sized> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}
