//! Ordering engine for the board sequence.
//!
//! The in-memory sequence is the single source of truth for display order:
//! after any reconciliation here, every task's `order_index` equals its array
//! position. Deletes are the one gap-tolerant exception — survivors keep
//! their stored indices until the next bulk reorder closes the gaps.
//!
//! These are pure reducers over the sequence; persistence and failure
//! handling live with the caller.

use crate::store::TaskPatch;
use crate::task::Task;

/// Append position for a newly created task: the current sequence length.
#[must_use]
pub fn next_position(tasks: &[Task]) -> i32 {
    tasks.len() as i32
}

/// Rewrite every task's `order_index` to its array position (dense,
/// zero-based).
pub fn reindex(tasks: &mut [Task]) {
    for (position, task) in tasks.iter_mut().enumerate() {
        task.order_index = position as i32;
    }
}

/// Move the task at `from` so it lands at `to`, shifting everything between
/// the two positions by one slot, then reindex the whole sequence.
///
/// Returns `false` without touching the sequence when the move is a no-op:
/// fewer than 2 tasks, `from == to`, or either position out of range.
pub fn move_task(tasks: &mut Vec<Task>, from: usize, to: usize) -> bool {
    if tasks.len() < 2 || from == to || from >= tasks.len() || to >= tasks.len() {
        return false;
    }

    let task = tasks.remove(from);
    tasks.insert(to, task);
    reindex(tasks);
    true
}

/// Reorder the sequence to follow an externally suggested id order.
///
/// Tasks appear in the order their id appears in `ids`; tasks whose id is
/// absent from `ids` are placed after all recognized ids in their prior
/// relative order (stable, unknown-last). Ids in `ids` that match no task
/// have no effect. The sequence is reindexed afterwards.
///
/// Returns `false` without touching the sequence when fewer than 2 tasks
/// exist.
pub fn apply_suggested_order(tasks: &mut Vec<Task>, ids: &[String]) -> bool {
    if tasks.len() < 2 {
        return false;
    }

    tasks.sort_by_key(|task| {
        ids.iter()
            .position(|id| *id == task.id)
            .unwrap_or(usize::MAX)
    });
    reindex(tasks);
    true
}

/// Merge an edit into a task in place. Ordering and creation time are not
/// part of a patch and cannot change here.
pub fn merge_patch(task: &mut Task, patch: &TaskPatch) {
    task.title = patch.title.clone();
    task.description = patch.description.clone();
    task.priority = patch.priority;
    task.color = patch.color;
}

/// Remove the task with the given id. Survivors are deliberately not
/// reindexed; gaps in the stored indices are tolerated until the next bulk
/// reorder. Returns `false` if no task matched.
pub fn remove_by_id(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Find a task's position in the sequence by id.
#[must_use]
pub fn position_of(tasks: &[Task], id: &str) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}
