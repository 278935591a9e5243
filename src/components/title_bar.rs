//! Custom Title Bar Component
//!
//! Drag region plus pin / autostart / minimize / close controls for the
//! borderless window.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

/// Custom title bar with window controls
#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Primary button only; the OS runs the drag loop
    let start_drag = move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            spawn_local(commands::begin_window_drag());
        }
    };

    let minimize = move |_| {
        spawn_local(async {
            let _ = commands::minimize_window().await;
        });
    };

    let close = move |_| {
        spawn_local(async {
            let _ = commands::close_window().await;
        });
    };

    let is_pinned = move || ctx.pin.get().displayed();

    view! {
        <div class="custom-titlebar">
            <div class="titlebar-drag-region" on:mousedown=start_drag>
                <span class="titlebar-title">"待办"</span>
            </div>

            <div class="titlebar-controls">
                <label
                    class="autostart-toggle"
                    title="开机启动"
                    class:pending=move || ctx.autostart.get().is_pending()
                >
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.autostart.get().displayed()
                        prop:disabled=move || ctx.autostart.get().is_pending()
                        on:change=move |_| ctx.toggle_autostart()
                    />
                    "自启"
                </label>
                <button
                    class=move || if is_pinned() { "titlebar-btn pin active" } else { "titlebar-btn pin" }
                    title=move || if is_pinned() { "取消置顶" } else { "窗口置顶" }
                    disabled=move || ctx.pin.get().is_pending()
                    on:click=move |_| ctx.toggle_pin()
                >
                    "📌"
                </button>
                <button class="titlebar-btn minimize" title="最小化" on:click=minimize>
                    "─"
                </button>
                <button class="titlebar-btn close" title="关闭" on:click=close>
                    "✕"
                </button>
            </div>
        </div>
    }
}
