/// Queries features of the CPU the process runs on.
pub trait CpuFeatures {
    /// Returns true if the floating-point unit supports VFPv3, which the ARM hardfloat ABI
    /// requires.
    fn has_vfpv3(&self) -> bool;
}

/// The CPU of the current process.
#[derive(Copy, Clone, Debug, Default)]
pub struct HostCpu;

#[cfg(any(target_os = "linux", target_os = "android"))]
const HWCAP_VFPV3: libc::c_ulong = 1 << 13;

impl CpuFeatures for HostCpu {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn has_vfpv3(&self) -> bool {
        // SAFETY: `getauxval` has no preconditions, it returns 0 for entries the kernel did not
        // provide.
        let hwcap = unsafe { libc::getauxval(libc::AT_HWCAP) };
        log::trace!("AT_HWCAP = {hwcap:#x}");
        hwcap & HWCAP_VFPV3 != 0
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn has_vfpv3(&self) -> bool {
        cfg!(target_abi = "eabihf")
    }
}
