//! Heuristic detection of the C runtime library on Linux.
//!
//! There is no reliable API to ask which libc a process links against, so the prober asks the
//! system tools that ship with each libc:
//!
//! 1. `getconf GNU_LIBC_VERSION` only succeeds with glibc.
//! 2. `ldd --version` names its libc in the version report (musl's `ldd` exits non-zero but
//!    still prints its banner).

use std::process::Command;

use crate::environment::Libc;

const GETCONF: &str = "getconf";
const LDD: &str = "ldd";

/// The result of running a system tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// True if the tool exited with status 0
    pub success: bool,

    /// Everything the tool wrote to stdout, followed by everything it wrote to stderr
    pub output: Vec<u8>,
}

/// Runs the system tools consulted by [`probe_libc`].
pub trait LibcProbeStrategy {
    /// Runs `tool` with the given arguments. Returns `None` if the tool could not be found or
    /// could not be started.
    fn run(&self, tool: &str, args: &[&str]) -> Option<ToolOutput>;
}

/// Looks up tools on `PATH` and runs them as child processes.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemProbe;

impl LibcProbeStrategy for SystemProbe {
    fn run(&self, tool: &str, args: &[&str]) -> Option<ToolOutput> {
        let path = match which::which(tool) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("`{tool}` is not available: {e}");
                return None;
            }
        };

        log::trace!("running {} {}", path.display(), args.join(" "));
        let output = match Command::new(&path).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                log::debug!("failed to run {}: {e}", path.display());
                return None;
            }
        };

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Some(ToolOutput {
            success: output.status.success(),
            output: combined,
        })
    }
}

/// Determines the libc family using the tools provided by `strategy`. Missing or failing tools
/// are not an error: they make the prober try the next tool, and [`Libc::Unknown`] is returned
/// if nothing conclusive was found.
pub fn probe_libc(strategy: &dyn LibcProbeStrategy) -> Libc {
    if let Some(getconf) = strategy.run(GETCONF, &["GNU_LIBC_VERSION"]) {
        if getconf.success {
            log::debug!("`{GETCONF}` reports a GNU libc version");
            return Libc::Gnu;
        }
        log::debug!("`{GETCONF}` does not know GNU_LIBC_VERSION");
    }

    if let Some(ldd) = strategy.run(LDD, &["--version"]) {
        let report = String::from_utf8_lossy(&ldd.output).to_lowercase();
        log::trace!("`{LDD} --version`: {report}");
        if report.contains("musl") {
            log::debug!("`{LDD}` belongs to musl");
            return Libc::Musl;
        }
        if report.contains("glibc") {
            log::debug!("`{LDD}` belongs to glibc");
            return Libc::Gnu;
        }
        log::debug!("`{LDD}` does not name a known libc");
    }

    Libc::Unknown
}
