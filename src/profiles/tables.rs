use super::locale::{LanguageConfig, LANGUAGES, TIMEZONES};
use super::navigator::{
    NavigatorProfile, DESKTOP_DEVICE_MEMORY, DESKTOP_HARDWARE_CONCURRENCY, MOBILE_DEVICE_MEMORY,
    MOBILE_HARDWARE_CONCURRENCY, NAVIGATOR_PROFILES,
};
use super::screen::{DESKTOP_SCREENS, MOBILE_SCREENS};
use super::user_agents::USER_AGENTS;
use super::webgl::{WebGlProfile, WEBGL_PROFILES};
use crate::fingerprint::ScreenFingerprint;

/// Key of the fallback entry in the country keyed tables.
pub const DEFAULT_KEY: &str = "default";
/// Key of the fallback entry in the platform keyed tables.
pub const FALLBACK_PLATFORM_KEY: &str = "windows";

/// Outcome of a keyed table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<V> {
    /// The requested key was present.
    Found(V),
    /// The requested key was absent and the fallback entry was used.
    Fallback(V),
}

impl<V> Lookup<V> {
    /// The value regardless of how it was found.
    pub fn into_inner(self) -> V {
        match self {
            Lookup::Found(v) | Lookup::Fallback(v) => v,
        }
    }

    /// Was the fallback entry used?
    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// Look a key up, falling back to `fallback_key`. `None` only when both keys are absent.
pub fn lookup_with_fallback<V: Copy>(
    table: &phf::Map<&'static str, V>,
    key: &str,
    fallback_key: &str,
) -> Option<Lookup<V>> {
    if let Some(v) = table.get(key) {
        return Some(Lookup::Found(*v));
    }
    let fallback = table.get(fallback_key).copied().map(Lookup::Fallback);
    if fallback.is_some() {
        tracing::trace!(key, fallback_key, "reference table lookup fell back");
    }
    fallback
}

/// Read only reference data the generator samples from.
///
/// The builtin instance is [`REFERENCE_TABLES`]. Tests and callers that need a narrower
/// distribution can build their own from `static` slices and `phf` maps.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    /// Desktop screen pool.
    pub desktop_screens: &'static [ScreenFingerprint],
    /// Phone screen pool.
    pub mobile_screens: &'static [ScreenFingerprint],
    /// User agents keyed by platform.
    pub user_agents: &'static phf::Map<&'static str, &'static [&'static str]>,
    /// Shared WebGL pool.
    pub webgl: &'static [WebGlProfile],
    /// Timezones keyed by country.
    pub timezones: &'static phf::Map<&'static str, &'static [&'static str]>,
    /// Language configurations keyed by country.
    pub languages: &'static phf::Map<&'static str, LanguageConfig>,
    /// Navigator platform and vendor keyed by platform.
    pub navigators: &'static phf::Map<&'static str, NavigatorProfile>,
    /// CPU core counts for desktops.
    pub desktop_hardware_concurrency: &'static [u32],
    /// CPU core counts for phones.
    pub mobile_hardware_concurrency: &'static [u32],
    /// Memory sizes for desktops.
    pub desktop_device_memory: &'static [u32],
    /// Memory sizes for phones.
    pub mobile_device_memory: &'static [u32],
}

/// The builtin reference tables.
pub static REFERENCE_TABLES: ReferenceTables = ReferenceTables {
    desktop_screens: DESKTOP_SCREENS,
    mobile_screens: MOBILE_SCREENS,
    user_agents: &USER_AGENTS,
    webgl: WEBGL_PROFILES,
    timezones: &TIMEZONES,
    languages: &LANGUAGES,
    navigators: &NAVIGATOR_PROFILES,
    desktop_hardware_concurrency: DESKTOP_HARDWARE_CONCURRENCY,
    mobile_hardware_concurrency: MOBILE_HARDWARE_CONCURRENCY,
    desktop_device_memory: DESKTOP_DEVICE_MEMORY,
    mobile_device_memory: MOBILE_DEVICE_MEMORY,
};

impl Default for ReferenceTables {
    fn default() -> Self {
        REFERENCE_TABLES
    }
}

impl ReferenceTables {
    /// The builtin tables.
    pub fn builtin() -> &'static ReferenceTables {
        &REFERENCE_TABLES
    }

    /// User agent pool for a platform key, falling back to windows.
    pub fn user_agents_for(&self, platform: &str) -> Option<Lookup<&'static [&'static str]>> {
        lookup_with_fallback(self.user_agents, platform, FALLBACK_PLATFORM_KEY)
    }

    /// Navigator identity for a platform key, falling back to windows.
    pub fn navigator_for(&self, platform: &str) -> Option<Lookup<NavigatorProfile>> {
        lookup_with_fallback(self.navigators, platform, FALLBACK_PLATFORM_KEY)
    }

    /// Timezone pool for a country, falling back to the default list.
    pub fn timezones_for(&self, country: &str) -> Option<Lookup<&'static [&'static str]>> {
        lookup_with_fallback(self.timezones, country, DEFAULT_KEY)
    }

    /// Language configuration for a country, falling back to the default configuration.
    pub fn language_for(&self, country: &str) -> Option<Lookup<LanguageConfig>> {
        lookup_with_fallback(self.languages, country, DEFAULT_KEY)
    }

    /// Screen pool for the device class.
    pub fn screens(&self, mobile: bool) -> &'static [ScreenFingerprint] {
        if mobile {
            self.mobile_screens
        } else {
            self.desktop_screens
        }
    }

    /// Core count pool for the device class.
    pub fn hardware_concurrency(&self, mobile: bool) -> &'static [u32] {
        if mobile {
            self.mobile_hardware_concurrency
        } else {
            self.desktop_hardware_concurrency
        }
    }

    /// Memory pool for the device class.
    pub fn device_memory(&self, mobile: bool) -> &'static [u32] {
        if mobile {
            self.mobile_device_memory
        } else {
            self.desktop_device_memory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::Platform;

    #[test]
    fn every_platform_has_user_agents_and_navigator() {
        let tables = ReferenceTables::builtin();
        for platform in Platform::ALL {
            let agents = tables.user_agents_for(platform.as_str()).unwrap();
            assert!(!agents.is_fallback(), "{platform} fell back");
            assert!(!agents.into_inner().is_empty());
            assert!(!tables.navigator_for(platform.as_str()).unwrap().is_fallback());
        }
    }

    #[test]
    fn tables_fall_back_independently() {
        let tables = ReferenceTables::builtin();
        // AU has timezones but no language entry, IN likewise.
        let tz = tables.timezones_for("AU").unwrap();
        assert_eq!(
            tz,
            Lookup::Found(&["Australia/Sydney", "Australia/Melbourne"][..])
        );
        let lang = tables.language_for("AU").unwrap();
        assert!(lang.is_fallback());
        assert_eq!(lang.into_inner().primary, "en-US");

        let tz = tables.timezones_for("ZZ").unwrap();
        assert!(tz.is_fallback());
        assert_eq!(
            tz.into_inner(),
            &["America/New_York", "Europe/London", "Asia/Tokyo"][..]
        );
    }

    #[test]
    fn missing_fallback_key_yields_none() {
        static NO_DEFAULT: phf::Map<&'static str, u32> = phf::phf_map! { "US" => 1 };
        assert_eq!(
            lookup_with_fallback(&NO_DEFAULT, "US", DEFAULT_KEY),
            Some(Lookup::Found(1))
        );
        assert!(lookup_with_fallback(&NO_DEFAULT, "FR", DEFAULT_KEY).is_none());
    }

    #[test]
    fn primary_locale_leads_its_list() {
        for (country, config) in LANGUAGES.entries() {
            assert_eq!(config.list.first(), Some(&config.primary), "{country}");
        }
    }
}
