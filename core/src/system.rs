use std::process::Command;

use leash_common::session::SessionLock;
use tracing::{debug, warn};

/// Locks the session by running a platform command.
pub struct SystemSessionLock {
    command: Vec<String>,
}

impl SystemSessionLock {
    /// Uses `command` when given and non-empty, the platform default otherwise.
    pub fn new(command: Option<Vec<String>>) -> Self {
        let command = command
            .filter(|c| !c.is_empty())
            .unwrap_or_else(platform_command);
        Self { command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl SessionLock for SystemSessionLock {
    fn lock(&self) -> bool {
        let Some((program, args)) = self.command.split_first() else {
            warn!("No lock command available on this platform");
            return false;
        };

        debug!("Running {}", self.command.join(" "));
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                warn!("{program} exited with {status}");
                false
            }
            Err(e) => {
                warn!("Failed to run {program}: {e}");
                false
            }
        }
    }
}

fn platform_command() -> Vec<String> {
    #[cfg(target_os = "linux")]
    let command: &[&str] = &["loginctl", "lock-session"];
    #[cfg(target_os = "macos")]
    let command: &[&str] = &["pmset", "displaysleepnow"];
    #[cfg(target_os = "windows")]
    let command: &[&str] = &["rundll32.exe", "user32.dll,LockWorkStation"];
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let command: &[&str] = &[];

    command.iter().map(|s| s.to_string()).collect()
}
