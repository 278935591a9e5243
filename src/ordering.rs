//! Display Ordering
//!
//! Incomplete tasks first, completed after, each group by ascending `order`.

use crate::models::Task;

/// Stable sort by `(done, order)`
pub fn sort_for_display(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| (t.done, t.order));
    sorted
}

/// Reassign `order` to `0..n-1` following the slice order
pub fn renumber(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.order = i as i32;
    }
}
