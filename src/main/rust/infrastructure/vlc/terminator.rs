use std::ffi::OsStr;

use sysinfo::{Pid, Process, ProcessesToUpdate, Signal, System};

use crate::domain::errors::TerminateError;
use crate::domain::ports::ProcessTerminator;

fn kill_process(process: &Process) -> bool {
    // Graceful signal first; fall back to a hard kill where the platform
    // has no notion of SIGTERM.
    match process.kill_with(Signal::Term) {
        Some(sent) => sent,
        None => process.kill(),
    }
}

fn refreshed_system() -> System {
    let mut sys = System::new_all();
    sys.refresh_processes(ProcessesToUpdate::All, true);
    sys
}

/// Kills every process whose executable name matches, not just the tracked
/// child. Known limitation: unrelated player instances on the same host die
/// too. Blunt, but acceptable for a single-user LAN tool; `HandleTerminator`
/// is the PID-scoped alternative.
pub struct NameTerminator;

impl ProcessTerminator for NameTerminator {
    fn terminate(&self, process_name: &str, _pid: Option<u32>) -> Result<(), TerminateError> {
        let sys = refreshed_system();

        let mut matched = 0usize;
        let mut killed = 0usize;
        for process in sys.processes_by_name(OsStr::new(process_name)) {
            matched += 1;
            if kill_process(process) {
                killed += 1;
            }
        }

        tracing::debug!(process_name, matched, killed, "Name-based terminate");

        if matched > 0 && killed == 0 {
            return Err(TerminateError::KillFailed(format!(
                "no process named {process_name:?} accepted the kill signal"
            )));
        }
        Ok(())
    }
}

/// Kills only the tracked child's PID. Safer than `NameTerminator` but
/// observably different behavior, so it has to be chosen explicitly.
pub struct HandleTerminator;

impl ProcessTerminator for HandleTerminator {
    fn terminate(&self, process_name: &str, pid: Option<u32>) -> Result<(), TerminateError> {
        let Some(pid) = pid else {
            // The OS never reported a pid for the child; nothing to scope
            // the kill to.
            return Err(TerminateError::KillFailed(format!(
                "no pid tracked for {process_name:?}"
            )));
        };

        let sys = refreshed_system();
        match sys.process(Pid::from_u32(pid)) {
            // Already gone counts as stopped.
            None => Ok(()),
            Some(process) => {
                if kill_process(process) {
                    Ok(())
                } else {
                    Err(TerminateError::KillFailed(format!(
                        "pid {pid} did not accept the kill signal"
                    )))
                }
            }
        }
    }
}
