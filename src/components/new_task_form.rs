//! New Task Form Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Single-line form appending a task on submit
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Cleared only once the save commits
        ctx.add(&new_text.get_untracked(), move || set_new_text.set(String::new()));
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="添加待办..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || ctx.store.with(|s| !s.is_loaded() || s.is_saving())>"+"</button>
        </form>
    }
}
