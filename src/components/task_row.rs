//! Task Row Component
//!
//! Checkbox, click-to-edit text and delete button for one task.

use leptos::html;
use leptos::prelude::*;
use gloo_timers::callback::Timeout;

use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = StoredValue::new(task.id.clone());
    let done = task.done;
    let text = StoredValue::new(task.text.clone());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.text.clone());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus once the input is in the DOM
    Effect::new(move |_| {
        if editing.get() {
            Timeout::new(0, move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                    input.select();
                }
            })
            .forget();
        }
    });

    let begin_edit = move |_| {
        set_draft.set(text.get_value());
        set_editing.set(true);
    };

    // Blur also fires after Enter/Escape removed the input; `editing` guards it
    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        ctx.set_text(&id.get_value(), &draft.get_untracked());
    };

    let cancel = move || {
        set_editing.set(false);
        set_draft.set(text.get_value());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit();
        }
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        _ => {}
    };

    view! {
        <li class={if done { "task-row completed" } else { "task-row" }}>
            <input
                type="checkbox"
                class="task-check"
                prop:checked=done
                on:change=move |ev| ctx.set_done(&id.get_value(), event_target_checked(&ev))
            />

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="task-text" title="点击编辑" on:click=begin_edit>
                        {text.get_value()}
                    </span>
                }
            >
                <input
                    type="text"
                    class="task-edit"
                    node_ref=input_ref
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    on:blur=move |_| commit()
                />
            </Show>

            <button class="delete-btn" title="删除" on:click=move |_| ctx.remove(&id.get_value())>
                "×"
            </button>
        </li>
    }
}
