//! This crate detects the platform it runs on and names it with a target triple, the way
//! toolchains do (e.g. `x86_64-linux-gnu` or `arm-linux-musleabihf`).
//!
//! Detection looks at the architecture and operating system the process was built for, probes
//! the C runtime library on Linux and checks the floating-point unit on ARM. The result is an
//! [`Environment`] which renders as an LLVM-style triple through [`Environment::triple`].

mod cpu;
mod detect;
mod environment;
mod probe;
mod triple;

pub use cpu::{CpuFeatures, HostCpu};
pub use detect::{detect, detect_with, DetectError, Host};
pub use environment::{Arch, Environment, Libc, Os};
pub use probe::{probe_libc, LibcProbeStrategy, SystemProbe, ToolOutput};

/// Returns the target triple of the host.
pub fn host_triple() -> Result<String, DetectError> {
    detect().map(|env| env.triple())
}
