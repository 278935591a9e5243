//! Task List Component
//!
//! Renders the store in display order, or an empty-state marker.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::AppContext;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Revision in the key redraws rows after every settled save, so a
    // rejected change never leaves a checkbox in the wrong state
    let rows = move || {
        let revision = ctx.store.with(|s| s.revision());
        ctx.display()
            .into_iter()
            .enumerate()
            .map(move |(index, task)| (revision, index, task))
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !ctx.display().is_empty()
            fallback=|| view! { <p class="empty-state">"暂无待办"</p> }
        >
            <ul class="task-list">
                <For
                    each=rows
                    key=|(revision, index, task)| (*revision, *index, task.id.clone(), task.done, task.text.clone())
                    children=move |(_, _, task)| view! { <TaskRow task=task /> }
                />
            </ul>
        </Show>
    }
}
