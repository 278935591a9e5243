//! UI Components
//!
//! Reusable Leptos components.

mod title_bar;
mod new_task_form;
mod task_list;
mod task_row;

pub use title_bar::TitleBar;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
