//! Window Placement
//!
//! Restores the saved position / pinned flag at startup and writes the
//! position back (debounced) while the user drags the window around.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tauri::{AppHandle, Manager, PhysicalPosition, WebviewWindow, WindowEvent};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::constants::{MAIN_WINDOW_LABEL, MOVE_DEBOUNCE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::domain::WindowPrefs;
use crate::repository::{DocumentRepository, WindowPrefsRepository};

/// Whether a `width`×`height` window at (`x`, `y`) at least partly overlaps the monitor
pub fn is_position_valid_on_monitor(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    mon_pos: (i32, i32),
    mon_size: (u32, u32),
) -> bool {
    // Saved coordinates may be anywhere in i32
    let (x, y) = (x as i64, y as i64);
    let (w, h) = (width as i64, height as i64);
    let (mx, my) = (mon_pos.0 as i64, mon_pos.1 as i64);
    let (mw, mh) = (mon_size.0 as i64, mon_size.1 as i64);
    let x_overlap = x < mx + mw && x + w > mx;
    let y_overlap = y < my + mh && y + h > my;
    x_overlap && y_overlap
}

/// Fallback check used when no monitor is reported
pub fn is_within_coordinate_range(x: i32, y: i32) -> bool {
    (-32768..=32767).contains(&x) && (-32768..=32767).contains(&y)
}

/// Apply saved prefs to the main window. Failures are logged only.
pub fn restore_main_window(app: &AppHandle, prefs: &WindowPrefs) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        log::warn!("Main window missing, skipping restore");
        return;
    };

    if let Err(e) = window.set_always_on_top(prefs.pinned) {
        log::warn!("Failed to apply pinned state: {}", e);
    }

    let valid = match window.primary_monitor() {
        Ok(Some(monitor)) => {
            let pos = monitor.position();
            let size = monitor.size();
            is_position_valid_on_monitor(
                prefs.x,
                prefs.y,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                (pos.x, pos.y),
                (size.width, size.height),
            )
        }
        _ => is_within_coordinate_range(prefs.x, prefs.y),
    };

    if valid {
        if let Err(e) = window.set_position(PhysicalPosition::new(prefs.x, prefs.y)) {
            log::warn!("Failed to restore window position: {}", e);
        }
    } else {
        log::info!("Saved position ({}, {}) is off-screen, keeping default", prefs.x, prefs.y);
    }
}

/// Current position + always-on-top of `window`; `fallback` fills what can't be read
pub fn current_prefs(window: &WebviewWindow, fallback: WindowPrefs) -> WindowPrefs {
    let (x, y) = window
        .outer_position()
        .map(|p| (p.x, p.y))
        .unwrap_or((fallback.x, fallback.y));
    let pinned = window.is_always_on_top().unwrap_or(fallback.pinned);
    WindowPrefs { x, y, pinned }
}

/// Run `on_settle` once per burst of signals, after `quiet` has passed with no
/// new signal. A pending burst is flushed when the sender side closes.
pub async fn debounce<F, Fut>(mut rx: UnboundedReceiver<()>, quiet: Duration, mut on_settle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    while rx.recv().await.is_some() {
        loop {
            match tokio::time::timeout(quiet, rx.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => {
                    on_settle().await;
                    return;
                }
                Err(_) => break,
            }
        }
        on_settle().await;
    }
}

/// Persist the main window position whenever a drag settles
pub fn watch_position(app: &AppHandle, repo: Arc<WindowPrefsRepository>) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let (tx, rx) = unbounded_channel();
    window.on_window_event(move |event| {
        if let WindowEvent::Moved(_) = event {
            let _ = tx.send(());
        }
    });

    let app_handle = app.clone();
    tauri::async_runtime::spawn(debounce(rx, MOVE_DEBOUNCE, move || {
        let app_handle = app_handle.clone();
        let repo = repo.clone();
        async move {
            let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
                return;
            };
            let saved = repo.load().await;
            let prefs = current_prefs(&window, saved);
            if let Err(e) = repo.save(&prefs).await {
                log::warn!("Failed to save window position: {}", e);
            }
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_position_inside_monitor() {
        assert!(is_position_valid_on_monitor(100, 100, 320, 400, (0, 0), (1920, 1080)));
    }

    #[test]
    fn test_partially_visible_counts_as_valid() {
        assert!(is_position_valid_on_monitor(-300, 900, 320, 400, (0, 0), (1920, 1080)));
    }

    #[test]
    fn test_position_off_monitor() {
        assert!(!is_position_valid_on_monitor(1920, 0, 320, 400, (0, 0), (1920, 1080)));
        assert!(!is_position_valid_on_monitor(-320, 0, 320, 400, (0, 0), (1920, 1080)));
        assert!(!is_position_valid_on_monitor(0, 5000, 320, 400, (0, 0), (1920, 1080)));
    }

    #[test]
    fn test_monitor_with_offset_origin() {
        assert!(is_position_valid_on_monitor(-1500, 200, 320, 400, (-1920, 0), (1920, 1080)));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        assert!(!is_position_valid_on_monitor(2147483600, 0, 320, 400, (0, 0), (1920, 1080)));
        assert!(!is_position_valid_on_monitor(0, i32::MAX, 320, 400, (0, 0), (1920, 1080)));
        assert!(!is_position_valid_on_monitor(i32::MIN, i32::MIN, 320, 400, (0, 0), (1920, 1080)));
        assert!(is_position_valid_on_monitor(
            i32::MAX - 10,
            0,
            320,
            400,
            (i32::MAX - 100, 0),
            (u32::MAX, 1080)
        ));
    }

    #[test]
    fn test_coordinate_range_fallback() {
        assert!(is_within_coordinate_range(0, 0));
        assert!(is_within_coordinate_range(-32768, 32767));
        assert!(!is_within_coordinate_range(40000, 0));
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() -> std::future::Ready<()>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        })
    }

    #[tokio::test]
    async fn test_debounce_coalesces_burst() {
        let (tx, rx) = unbounded_channel();
        let (count, on_settle) = counter();
        for _ in 0..5 {
            tx.send(()).unwrap();
        }
        drop(tx);

        debounce(rx, Duration::from_millis(20), on_settle).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_debounce_separate_bursts() {
        let (tx, rx) = unbounded_channel();
        let (count, on_settle) = counter();
        let handle = tokio::spawn(debounce(rx, Duration::from_millis(10), on_settle));

        tx.send(()).unwrap();
        tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(()).unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_debounce_without_signals_never_settles() {
        let (tx, rx) = unbounded_channel::<()>();
        let (count, on_settle) = counter();
        drop(tx);

        debounce(rx, Duration::from_millis(10), on_settle).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
