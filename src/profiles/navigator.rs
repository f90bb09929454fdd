/// Fixed `navigator.platform` and `navigator.vendor` values for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorProfile {
    /// `navigator.platform`.
    pub platform: &'static str,
    /// `navigator.vendor`.
    pub vendor: &'static str,
}

/// Navigator identity keyed by platform table key.
pub static NAVIGATOR_PROFILES: phf::Map<&'static str, NavigatorProfile> = phf::phf_map! {
    "windows" => NavigatorProfile { platform: "Win32", vendor: "Google Inc." },
    "macos" => NavigatorProfile { platform: "MacIntel", vendor: "Apple Computer, Inc." },
    "linux" => NavigatorProfile { platform: "Linux x86_64", vendor: "Google Inc." },
    "android" => NavigatorProfile { platform: "Linux armv8l", vendor: "Google Inc." },
    "ios" => NavigatorProfile { platform: "iPhone", vendor: "Apple Computer, Inc." },
};

/// `navigator.hardwareConcurrency` for phones.
pub static MOBILE_HARDWARE_CONCURRENCY: &[u32] = &[4, 6, 8];
/// `navigator.hardwareConcurrency` for desktops.
pub static DESKTOP_HARDWARE_CONCURRENCY: &[u32] = &[4, 8, 12, 16];
/// `navigator.deviceMemory` in GB for phones.
pub static MOBILE_DEVICE_MEMORY: &[u32] = &[4, 6, 8];
/// `navigator.deviceMemory` in GB for desktops.
pub static DESKTOP_DEVICE_MEMORY: &[u32] = &[8, 16, 32];
