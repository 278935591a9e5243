//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the handlers that turn
//! UI gestures into store mutations and host calls.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Task;
use crate::task_store::TaskStore;
use crate::toggle::{ToggleOutcome, ToggleState};

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Show a blocking host dialog; falls back to the console if even that fails
pub fn notify_error(title: &'static str, message: String) {
    spawn_local(async move {
        if let Err(e) = commands::show_notice(title, &message).await {
            log(&format!("[NOTICE] {}: {} ({})", title, message, e));
        }
    });
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The task list
    pub store: RwSignal<TaskStore>,
    /// Always-on-top switch
    pub pin: RwSignal<ToggleState>,
    /// Launch-at-login switch
    pub autostart: RwSignal<ToggleState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(TaskStore::default()),
            pin: RwSignal::new(ToggleState::Idle(true)),
            autostart: RwSignal::new(ToggleState::Idle(false)),
        }
    }

    /// Fetch tasks, window prefs and autostart state from the host
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let tasks = match commands::load_tasks().await {
                Ok(tasks) => {
                    log(&format!("[STORE] Loaded {} tasks", tasks.len()));
                    tasks
                }
                Err(e) => {
                    log(&format!("[STORE] Load failed, starting empty: {}", e));
                    Vec::new()
                }
            };
            if !ctx.store.try_update(|s| s.finish_load(tasks)).unwrap_or(false) {
                log("[STORE] Save in progress, loaded list ignored");
            }
            if let Ok(prefs) = commands::load_window_prefs().await {
                ctx.pin.set(ToggleState::Idle(prefs.pinned));
            }
            if let Ok(enabled) = commands::query_autostart().await {
                ctx.autostart.set(ToggleState::Idle(enabled));
            }
        });
    }

    /// Tasks in display order (tracked)
    pub fn display(&self) -> Vec<Task> {
        self.store.with(|s| s.display())
    }

    // ========================
    // Task handlers
    // ========================

    /// `on_saved` runs once the new task is committed
    pub fn add(&self, text: &str, on_saved: impl FnOnce() + 'static) {
        self.persist(self.store.with_untracked(|s| s.add(text)), on_saved);
    }

    pub fn remove(&self, id: &str) {
        self.persist(self.store.with_untracked(|s| s.remove(id)), || {});
    }

    pub fn set_text(&self, id: &str, text: &str) {
        self.persist(self.store.with_untracked(|s| s.set_text(id, text)), || {});
    }

    pub fn set_done(&self, id: &str, done: bool) {
        // A rejected change still bumps the revision so the checkbox redraws
        if !self.persist(self.store.with_untracked(|s| s.set_done(id, done)), || {}) {
            self.store.update(|s| s.refresh());
        }
    }

    /// Send `next` to the host and commit it once saved. Returns whether a
    /// save was started.
    fn persist(&self, next: Option<Vec<Task>>, on_saved: impl FnOnce() + 'static) -> bool {
        let Some(next) = next else {
            return false;
        };
        let Some(to_save) = self.store.try_update(|s| s.begin_save(next)).flatten() else {
            log("[STORE] Not loaded yet or save in progress, change dropped");
            return false;
        };

        let store = self.store;
        spawn_local(async move {
            match commands::save_tasks(&to_save).await {
                Ok(()) => {
                    if store.try_update(|s| s.finish_save(true)).unwrap_or(false) {
                        on_saved();
                    }
                }
                Err(e) => {
                    log(&format!("[STORE] Save failed: {}", e));
                    store.update(|s| {
                        s.finish_save(false);
                    });
                    notify_error("保存失败", format!("待办未能保存，请重试。\n\n{}", e));
                }
            }
        });
        true
    }

    // ========================
    // Toggle handlers
    // ========================

    pub fn toggle_pin(&self) {
        let Some(requested) = self.pin.try_update(|t| t.request()).flatten() else {
            return;
        };
        let pin = self.pin;
        spawn_local(async move {
            let applied = commands::set_pinned(requested).await;
            if let Err(e) = &applied {
                notify_error("置顶设置失败", e.clone());
            }
            let outcome = settle(pin, requested, applied.is_ok(), commands::query_pinned()).await;
            log(&format!("[TOGGLE] pin -> {}: {:?}", requested, outcome));
        });
    }

    pub fn toggle_autostart(&self) {
        let Some(requested) = self.autostart.try_update(|t| t.request()).flatten() else {
            return;
        };
        let autostart = self.autostart;
        spawn_local(async move {
            let applied = commands::set_autostart(requested).await;
            if let Err(e) = &applied {
                notify_error("开机启动设置失败", e.clone());
            }
            let outcome =
                settle(autostart, requested, applied.is_ok(), commands::query_autostart()).await;
            log(&format!("[TOGGLE] autostart -> {}: {:?}", requested, outcome));
            if let Some(ToggleOutcome::Reconciled(actual)) = outcome {
                notify_error(
                    "开机启动未生效",
                    format!(
                        "开机启动当前为「{}」，可能是权限不足或被安全软件拦截。",
                        if actual { "开启" } else { "关闭" }
                    ),
                );
            }
        });
    }
}

/// Re-query after a successful change, roll back after a failed one.
/// A failed re-query trusts the requested value.
async fn settle<Q>(
    toggle: RwSignal<ToggleState>,
    requested: bool,
    applied: bool,
    query: Q,
) -> Option<ToggleOutcome>
where
    Q: Future<Output = Result<bool, String>>,
{
    if applied {
        let actual = query.await.unwrap_or(requested);
        toggle.try_update(|t| t.confirm(actual)).flatten()
    } else {
        toggle.try_update(|t| t.fail()).flatten()
    }
}
