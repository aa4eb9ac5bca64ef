//! Process liveness probing.
//!
//! The single-instance record stores a PID; before trusting it, the reader
//! probes whether that process is still running.

/// Check if a process with the given PID is alive.
///
/// # Platform Behavior
/// - **Linux/macOS**: Uses a `kill(pid, 0)` signal check via `nix`
/// - **Windows**: Uses `OpenProcess` with `PROCESS_QUERY_LIMITED_INFORMATION`
pub fn is_process_alive(pid: u32) -> bool {
    #[cfg(unix)]
    {
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        // Signal None doesn't actually send a signal, just checks existence
        kill(Pid::from_raw(pid as i32), None).is_ok()
    }

    #[cfg(windows)]
    // SAFETY: OpenProcess/CloseHandle with a query-only access right; the
    // handle is closed before returning and never aliased.
    #[allow(unsafe_code)]
    {
        use windows_sys::Win32::Foundation::CloseHandle;
        use windows_sys::Win32::System::Threading::{
            OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
        };

        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if !handle.is_null() {
                CloseHandle(handle);
                true
            } else {
                false
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        tracing::warn!("Process alive check not implemented for this platform");
        true
    }
}
