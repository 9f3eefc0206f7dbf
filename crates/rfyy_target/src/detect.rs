use displaydoc::Display;
use thiserror::Error;

use crate::cpu::{CpuFeatures, HostCpu};
use crate::environment::{Arch, Environment, Libc, Os};
use crate::probe::{probe_libc, LibcProbeStrategy, SystemProbe};

#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// the host did not report its {0}
    EmptyIdentifier(&'static str),
}

/// The raw platform identifiers of a host.
///
/// Both the names used by the Rust toolchain (`x86_64`, `aarch64`, `macos`, ...) and the
/// external spelling of [`Arch`] and [`Os`] (`amd64`, `arm64`, `darwin`, ...) are understood.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Host<'a> {
    arch: &'a str,
    os: &'a str,
    little_endian: bool,
}

impl<'a> Host<'a> {
    pub fn new(arch: &'a str, os: &'a str, little_endian: bool) -> Self {
        Host {
            arch,
            os,
            little_endian,
        }
    }

    /// The platform this process was compiled for.
    pub fn current() -> Host<'static> {
        Host::new(
            std::env::consts::ARCH,
            std::env::consts::OS,
            cfg!(target_endian = "little"),
        )
    }

    pub fn arch(&self) -> Result<Arch, DetectError> {
        Ok(match self.arch {
            "" => return Err(DetectError::EmptyIdentifier("architecture")),
            "x86" => Arch::X86,
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Arm64,
            "powerpc64" if self.little_endian => Arch::Ppc64le,
            "powerpc64" => Arch::Ppc64,
            "wasm32" => Arch::Wasm32,
            other => Arch::from(other),
        })
    }

    pub fn os(&self) -> Result<Os, DetectError> {
        Ok(match self.os {
            "" => return Err(DetectError::EmptyIdentifier("operating system")),
            "macos" => Os::Darwin,
            other => Os::from(other),
        })
    }
}

/// Detects the environment of the current process.
pub fn detect() -> Result<Environment, DetectError> {
    detect_with(&Host::current(), &SystemProbe, &HostCpu)
}

/// Detects the environment of `host`, running tools through `libc_probe` and querying the FPU
/// through `cpu`.
pub fn detect_with(
    host: &Host<'_>,
    libc_probe: &dyn LibcProbeStrategy,
    cpu: &dyn CpuFeatures,
) -> Result<Environment, DetectError> {
    let arch = host.arch()?;
    let os = host.os()?;

    let libc = match os {
        Os::Linux => probe_libc(libc_probe),
        Os::Windows => Libc::Msvc,
        Os::Android => Libc::Unknown,
        _ => Libc::None,
    };

    // VFPv3 is required for hardfloat
    let softfloat = arch == Arch::Arm && !cpu.has_vfpv3();

    let env = Environment {
        os,
        arch,
        libc,
        softfloat,
    };
    log::debug!("detected environment: {env:?}");
    Ok(env)
}
