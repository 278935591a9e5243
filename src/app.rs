//! Desktop Todolist Frontend App
//!
//! Title bar, input form and the task list in a fixed-size window.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskList, TitleBar};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx);

    // Load on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="app-shell">
            <TitleBar />
            <NewTaskForm />
            <div class="task-scroll">
                <TaskList />
            </div>
            <p class="task-count">
                {move || {
                    let tasks = ctx.display();
                    let open = tasks.iter().filter(|t| !t.done).count();
                    format!("{} 项未完成 / 共 {} 项", open, tasks.len())
                }}
            </p>
        </div>
    }
}
