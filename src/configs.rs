use crate::errors::FingerprintError;
use std::str::FromStr;

/// The operating system a generated identity claims to run on.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    #[default]
    /// Windows.
    Windows,
    /// Mac.
    MacOs,
    /// Linux.
    Linux,
    /// Android.
    Android,
    /// Iphone or ipad.
    Ios,
}

impl Platform {
    /// Every platform in table order.
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::MacOs,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
    ];

    /// The key used by the reference tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Touch device platform.
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Android | Platform::Ios)
    }

    /// Resolve the platform used for generation. A mobile request always wins over a desktop
    /// platform: mac becomes ios and every other desktop platform becomes android.
    pub fn coerce_mobile(self, mobile: bool) -> Platform {
        if !mobile || self.is_mobile() {
            self
        } else if self == Platform::MacOs {
            Platform::Ios
        } else {
            Platform::Android
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" | "win32" => Ok(Platform::Windows),
            "macos" | "mac" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            "android" => Ok(Platform::Android),
            "ios" | "iphone" | "ipad" => Ok(Platform::Ios),
            _ => Err(FingerprintError::InvalidPlatform(s.to_string())),
        }
    }
}

/// How the `Sec-Ch-Ua-Mobile` and `Sec-Ch-Ua-Platform` client hints are filled.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientHintsPolicy {
    /// Desktop Windows hints on every identity, whatever the platform.
    StaticWindows,
    /// Hints follow the resolved platform.
    MatchPlatform,
}

impl Default for ClientHintsPolicy {
    fn default() -> Self {
        *DEFAULT_CLIENT_HINTS_POLICY
    }
}

/// Where the canvas and audio noise tokens come from.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseSeedPolicy {
    #[default]
    /// Fresh random bytes on every call, seeded or not.
    Entropy,
    /// Derived from the seed when one is set so the whole identity replays.
    Seeded,
}

lazy_static::lazy_static! {
    /// The client hints policy, configurable via the `BROWSER_IDENTITY_CLIENT_HINTS` env variable.
    /// Set it to `platform` to emit hints that follow the generated platform.
    pub static ref DEFAULT_CLIENT_HINTS_POLICY: ClientHintsPolicy = std::env::var("BROWSER_IDENTITY_CLIENT_HINTS")
        .ok()
        .map(|v| {
            if v.trim().eq_ignore_ascii_case("platform") {
                ClientHintsPolicy::MatchPlatform
            } else {
                ClientHintsPolicy::StaticWindows
            }
        })
        .unwrap_or(ClientHintsPolicy::StaticWindows);
}

/// Input preferences for a generated identity. Every field is defaulted independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FingerprintOptions {
    /// The requested platform.
    pub platform: Platform,
    /// Country code used for the timezone and language tables. Unknown codes use the defaults.
    pub country: String,
    /// Generate a touch device. Overrides a desktop platform.
    pub mobile: bool,
    /// Makes every draw reproducible.
    pub seed: Option<String>,
    /// Client hints header behavior.
    pub client_hints: ClientHintsPolicy,
    /// Noise token behavior.
    pub noise: NoiseSeedPolicy,
}

impl Default for FingerprintOptions {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            country: "US".into(),
            mobile: false,
            seed: None,
            client_hints: ClientHintsPolicy::default(),
            noise: NoiseSeedPolicy::default(),
        }
    }
}

impl FingerprintOptions {
    /// Set the platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Request a mobile device.
    pub fn with_mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the client hints policy.
    pub fn with_client_hints(mut self, client_hints: ClientHintsPolicy) -> Self {
        self.client_hints = client_hints;
        self
    }

    /// Set the noise token policy.
    pub fn with_noise(mut self, noise: NoiseSeedPolicy) -> Self {
        self.noise = noise;
        self
    }

    /// The platform after the mobile override.
    pub fn effective_platform(&self) -> Platform {
        self.platform.coerce_mobile(self.mobile)
    }
}
