use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Blocking error dialog for failures the user has to know about
#[command]
pub async fn show_notice<R: Runtime>(app: AppHandle<R>, title: String, message: String) -> Result<(), String> {
    app.dialog()
        .message(message)
        .title(title)
        .kind(MessageDialogKind::Error)
        .blocking_show();
    Ok(())
}
