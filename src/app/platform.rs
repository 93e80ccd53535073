//! Best-effort system theme detection.

/// Ask the desktop environment whether it prefers a dark theme.
///
/// Only Linux (gsettings) and macOS (`defaults`) are probed; anywhere else,
/// or when detection fails, the answer is light.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if String::from_utf8_lossy(&output.stdout).contains("prefer-dark") {
                return true;
            }
        }

        // Older desktops expose the preference through the GTK theme name.
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if String::from_utf8_lossy(&output.stdout)
                .to_lowercase()
                .contains("dark")
            {
                return true;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
            {
                return true;
            }
        }
    }

    false
}
