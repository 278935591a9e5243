//! Launch at Login
//!
//! Windows keeps per-user startup entries under `HKCU\...\Run`. Other
//! platforms report autostart as unsupported / disabled.

use crate::domain::DomainResult;
#[cfg(windows)]
use crate::domain::DomainError;

/// Strip surrounding quotes and whitespace so stored and current paths compare equal
pub fn normalize_path(path: &str) -> String {
    path.trim()
        .trim_start_matches('"')
        .trim_end_matches('"')
        .trim()
        .to_string()
}

/// Registry data for an exe path; quoted when it contains spaces
pub fn run_value(exe_path: &str) -> String {
    if exe_path.contains(' ') {
        format!("\"{}\"", exe_path)
    } else {
        exe_path.to_string()
    }
}

/// True when the stored `Run` value points at `exe_path`
pub fn matches_exe(stored: &str, exe_path: &str) -> bool {
    let stored = normalize_path(stored);
    !stored.is_empty() && stored == normalize_path(exe_path)
}

#[cfg(windows)]
fn current_exe_string() -> DomainResult<String> {
    let exe = std::env::current_exe()
        .map_err(|e| DomainError::Internal(format!("Cannot resolve exe path: {}", e)))?;
    exe.to_str()
        .map(str::to_string)
        .ok_or_else(|| DomainError::Internal("Exe path is not valid UTF-8".to_string()))
}

#[cfg(windows)]
fn permission_hint(err: &std::io::Error) -> DomainError {
    if err.raw_os_error() == Some(5) {
        DomainError::PermissionDenied(format!(
            "{}. The registry Run key is not writable; try running as administrator or check antivirus settings",
            err
        ))
    } else {
        DomainError::Io(err.to_string())
    }
}

/// Add (`enabled`) or remove the startup entry for the current exe
#[cfg(windows)]
pub fn set_autostart(enabled: bool) -> DomainResult<()> {
    use crate::constants::{
        AUTOSTART_MAX_RETRIES, AUTOSTART_RETRY_DELAY, AUTOSTART_RUN_KEY, AUTOSTART_VALUE_NAME,
    };
    use std::io::ErrorKind;
    use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE, KEY_WRITE};
    use winreg::RegKey;

    let value = run_value(&current_exe_string()?);

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let run_key = hkcu
        .open_subkey_with_flags(AUTOSTART_RUN_KEY, KEY_WRITE)
        .or_else(|_| hkcu.open_subkey_with_flags(AUTOSTART_RUN_KEY, KEY_SET_VALUE))
        .map_err(|e| permission_hint(&e))?;

    let mut last_error = None;
    for attempt in 1..=AUTOSTART_MAX_RETRIES {
        let result = if enabled {
            run_key.set_value(AUTOSTART_VALUE_NAME, &value)
        } else {
            match run_key.delete_value(AUTOSTART_VALUE_NAME) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            }
        };

        match result {
            Ok(()) => return Ok(()),
            Err(e) => {
                log::warn!("Autostart write attempt {} failed: {}", attempt, e);
                last_error = Some(e);
                if attempt < AUTOSTART_MAX_RETRIES {
                    std::thread::sleep(AUTOSTART_RETRY_DELAY * attempt);
                }
            }
        }
    }

    Err(last_error
        .map(|e| permission_hint(&e))
        .unwrap_or_else(|| DomainError::Internal("Autostart write failed".to_string())))
}

/// Whether the `Run` entry exists and points at the current exe
#[cfg(windows)]
pub fn is_autostart_enabled() -> DomainResult<bool> {
    use crate::constants::{AUTOSTART_RUN_KEY, AUTOSTART_VALUE_NAME};
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
    use winreg::RegKey;

    let exe = current_exe_string()?;
    let run_key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(AUTOSTART_RUN_KEY, KEY_READ)
        .map_err(|e| DomainError::Io(format!("Cannot open Run key: {}", e)))?;

    let stored: String = run_key.get_value(AUTOSTART_VALUE_NAME).unwrap_or_default();
    Ok(matches_exe(&stored, &exe))
}

#[cfg(not(windows))]
pub fn set_autostart(_enabled: bool) -> DomainResult<()> {
    Err(crate::domain::DomainError::Unsupported(
        "Launch at login is only available on Windows".to_string(),
    ))
}

#[cfg(not(windows))]
pub fn is_autostart_enabled() -> DomainResult<bool> {
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_quotes_and_spaces() {
        assert_eq!(normalize_path("  \"C:\\Apps\\todo.exe\" "), "C:\\Apps\\todo.exe");
        assert_eq!(normalize_path("C:\\todo.exe"), "C:\\todo.exe");
    }

    #[test]
    fn test_run_value_quotes_paths_with_spaces() {
        assert_eq!(run_value("C:\\Program Files\\todo.exe"), "\"C:\\Program Files\\todo.exe\"");
        assert_eq!(run_value("C:\\todo.exe"), "C:\\todo.exe");
    }

    #[test]
    fn test_matches_exe_ignores_quoting() {
        let exe = "C:\\Program Files\\todo.exe";
        assert!(matches_exe(&run_value(exe), exe));
        assert!(!matches_exe("", exe));
        assert!(!matches_exe("C:\\other.exe", exe));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unsupported_off_windows() {
        assert!(set_autostart(true).is_err());
        assert_eq!(is_autostart_enabled(), Ok(false));
    }
}
