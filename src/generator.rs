use crate::configs::{FingerprintOptions, NoiseSeedPolicy, Platform};
use crate::errors::{FingerprintError, Result};
use crate::fingerprint::{BrowserFingerprint, NavigatorFingerprint, WebGlFingerprint, APP_VERSION};
use crate::prng::{Draw, EntropyDraw, SeededRandom};
use crate::profiles::locale::LanguageConfig;
use crate::profiles::tables::{ReferenceTables, REFERENCE_TABLES};
use crate::spoof_headers::build_headers;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of the hex id.
pub const ID_LEN: usize = 16;
/// Bytes behind each noise token and session id.
const TOKEN_BYTES: usize = 16;
/// `navigator.maxTouchPoints` reported by phones.
pub const MOBILE_TOUCH_POINTS: u32 = 5;

/// Builds browser identities from a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintGenerator<'a> {
    tables: &'a ReferenceTables,
}

impl Default for FingerprintGenerator<'static> {
    fn default() -> Self {
        Self::new(&REFERENCE_TABLES)
    }
}

impl<'a> FingerprintGenerator<'a> {
    /// Generator over the given tables.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// The tables this generator samples from.
    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// Generate one identity. With a seed every draw replays; otherwise the thread rng is used.
    pub fn generate(&self, options: &FingerprintOptions) -> Result<BrowserFingerprint> {
        match options.seed.as_deref() {
            Some(seed) => self.generate_with(options, &mut SeededRandom::new(seed)),
            None => self.generate_with(options, &mut EntropyDraw::thread()),
        }
    }

    /// Generate the identity bound to a session. The session id is used as the seed.
    pub fn session(
        &self,
        session_id: &str,
        options: &FingerprintOptions,
    ) -> Result<BrowserFingerprint> {
        let mut options = options.clone();
        options.seed = Some(session_id.to_string());
        self.generate(&options)
    }

    /// Generate one identity drawing from `rng`.
    ///
    /// Draw order: user agent, screen, webgl, timezone, hardware concurrency, device memory.
    pub fn generate_with<D: Draw>(
        &self,
        options: &FingerprintOptions,
        rng: &mut D,
    ) -> Result<BrowserFingerprint> {
        let tables = self.tables;
        let platform = options.effective_platform();
        let mobile = platform.is_mobile();
        let country = options.country.as_str();

        let user_agents = tables
            .user_agents_for(platform.as_str())
            .ok_or(FingerprintError::EmptyPool("user_agents"))?
            .into_inner();
        let user_agent = *rng
            .pick(user_agents)
            .ok_or(FingerprintError::EmptyPool("user_agents"))?;

        let screen = *rng
            .pick(tables.screens(mobile))
            .ok_or(FingerprintError::EmptyPool("screens"))?;

        let webgl = rng
            .pick(tables.webgl)
            .ok_or(FingerprintError::EmptyPool("webgl"))?;

        let timezones = tables
            .timezones_for(country)
            .ok_or(FingerprintError::EmptyPool("timezones"))?
            .into_inner();
        let timezone = *rng
            .pick(timezones)
            .ok_or(FingerprintError::EmptyPool("timezones"))?;

        let language = tables
            .language_for(country)
            .ok_or(FingerprintError::EmptyPool("languages"))?
            .into_inner();

        let navigator = self.build_navigator(platform, &language, rng)?;

        let (canvas_noise_seed, audio_noise_seed) = match (options.noise, options.seed.as_deref())
        {
            (NoiseSeedPolicy::Seeded, Some(seed)) => {
                (derived_token(seed, "canvas"), derived_token(seed, "audio"))
            }
            _ => (random_token(), random_token()),
        };

        let id = fingerprint_id(user_agent, &screen.to_json(), timezone, unix_millis());

        let headers = build_headers(user_agent, language.list, options.client_hints, platform);

        let fingerprint = BrowserFingerprint {
            id,
            user_agent: user_agent.into(),
            navigator,
            screen,
            webgl: WebGlFingerprint::from(webgl),
            headers,
            canvas_noise_seed,
            audio_noise_seed,
            timezone: timezone.into(),
            locale: language.primary.into(),
        };

        tracing::debug!(
            fingerprint_id = %fingerprint.id,
            platform = %platform,
            country,
            "fingerprint generated"
        );

        Ok(fingerprint)
    }

    /// The navigator record for a platform and language configuration.
    fn build_navigator<D: Draw>(
        &self,
        platform: Platform,
        language: &LanguageConfig,
        rng: &mut D,
    ) -> Result<NavigatorFingerprint> {
        let mobile = platform.is_mobile();
        let profile = self
            .tables
            .navigator_for(platform.as_str())
            .ok_or(FingerprintError::EmptyPool("navigators"))?
            .into_inner();

        let hardware_concurrency = *rng
            .pick(self.tables.hardware_concurrency(mobile))
            .ok_or(FingerprintError::EmptyPool("hardware_concurrency"))?;
        let device_memory = *rng
            .pick(self.tables.device_memory(mobile))
            .ok_or(FingerprintError::EmptyPool("device_memory"))?;

        Ok(NavigatorFingerprint {
            platform: profile.platform.into(),
            language: language.primary.into(),
            languages: language.list.iter().map(|l| l.to_string()).collect(),
            hardware_concurrency,
            device_memory,
            max_touch_points: if mobile { MOBILE_TOUCH_POINTS } else { 0 },
            vendor: profile.vendor.into(),
            app_version: APP_VERSION.into(),
        })
    }
}

/// Generate an identity from the builtin tables.
///
/// ```
/// use browser_identity::{generate_fingerprint, FingerprintOptions};
///
/// let fp = generate_fingerprint(&FingerprintOptions::default()).unwrap();
/// assert_eq!(fp.navigator.platform, "Win32");
/// assert_eq!(fp.locale, "en-US");
/// ```
pub fn generate_fingerprint(options: &FingerprintOptions) -> Result<BrowserFingerprint> {
    FingerprintGenerator::default().generate(options)
}

/// Generate the identity bound to `session_id` from the builtin tables. Any seed in
/// `options` is replaced by the session id.
pub fn create_session_fingerprint(
    session_id: &str,
    options: &FingerprintOptions,
) -> Result<BrowserFingerprint> {
    FingerprintGenerator::default().session(session_id, options)
}

/// A fresh random session id, 32 hex chars.
pub fn generate_fingerprint_session_id() -> String {
    random_token()
}

/// Short id: the first 16 hex chars of SHA-256 over the user agent, screen json, timezone and time.
pub fn fingerprint_id(user_agent: &str, screen_json: &str, timezone: &str, millis: u128) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_agent.as_bytes());
    hasher.update(screen_json.as_bytes());
    hasher.update(timezone.as_bytes());
    hasher.update(millis.to_string().as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}

/// 16 random bytes as hex from the thread rng.
fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// 16 bytes of SHA-256 over the seed and a label as hex.
fn derived_token(seed: &str, label: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(b":");
    hasher.update(label.as_bytes());
    hex::encode(&hasher.finalize()[..TOKEN_BYTES])
}

/// Milliseconds since the unix epoch.
fn unix_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::ScreenFingerprint;
    use crate::profiles::navigator::NavigatorProfile;
    use crate::profiles::webgl::WebGlProfile;

    static ONE_SCREEN: &[ScreenFingerprint] = &[ScreenFingerprint::new(800, 600, 800, 560, 24, 1.0)];
    static ONE_PHONE: &[ScreenFingerprint] = &[ScreenFingerprint::new(320, 640, 320, 640, 32, 2.0)];
    static ONE_WEBGL: &[WebGlProfile] = &[WebGlProfile {
        vendor: "Test Vendor",
        renderer: "Test Renderer",
        version: "WebGL 1.0",
    }];
    static WINDOWS_ONLY: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
        "windows" => &["windows-agent"],
    };
    static NO_TIMEZONES: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
        "US" => &[],
    };
    static ONE_LANGUAGE: phf::Map<&'static str, LanguageConfig> = phf::phf_map! {
        "default" => LanguageConfig { primary: "xx-XX", list: &["xx-XX", "xx"] },
    };
    static ONE_NAVIGATOR: phf::Map<&'static str, NavigatorProfile> = phf::phf_map! {
        "windows" => NavigatorProfile { platform: "TestOS", vendor: "Test Inc." },
    };
    static ONE_TIMEZONE: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
        "default" => &["Etc/UTC"],
    };

    fn reduced_tables() -> ReferenceTables {
        ReferenceTables {
            desktop_screens: ONE_SCREEN,
            mobile_screens: ONE_PHONE,
            user_agents: &WINDOWS_ONLY,
            webgl: ONE_WEBGL,
            timezones: &ONE_TIMEZONE,
            languages: &ONE_LANGUAGE,
            navigators: &ONE_NAVIGATOR,
            desktop_hardware_concurrency: &[2],
            mobile_hardware_concurrency: &[3],
            desktop_device_memory: &[4],
            mobile_device_memory: &[1],
        }
    }

    #[test]
    fn reduced_tables_pin_every_draw() {
        let tables = reduced_tables();
        let generator = FingerprintGenerator::new(&tables);
        let fp = generator
            .generate(&FingerprintOptions::default().with_platform(Platform::Linux))
            .unwrap();

        // linux is missing from both platform keyed tables and falls back to windows.
        assert_eq!(fp.user_agent, "windows-agent");
        assert_eq!(fp.navigator.platform, "TestOS");
        assert_eq!(fp.screen, ONE_SCREEN[0]);
        assert_eq!(fp.webgl, ONE_WEBGL[0]);
        assert_eq!(fp.timezone, "Etc/UTC");
        assert_eq!(fp.locale, "xx-XX");
        assert_eq!(fp.navigator.languages, vec!["xx-XX", "xx"]);
        assert_eq!(fp.navigator.hardware_concurrency, 2);
        assert_eq!(fp.navigator.device_memory, 4);
        assert_eq!(fp.navigator.max_touch_points, 0);
        assert_eq!(fp.headers.get("Accept-Language"), Some("xx-XX,xx"));
    }

    #[test]
    fn reduced_tables_mobile_uses_phone_pools() {
        let tables = reduced_tables();
        let fp = FingerprintGenerator::new(&tables)
            .generate(&FingerprintOptions::default().with_mobile(true))
            .unwrap();
        assert_eq!(fp.screen, ONE_PHONE[0]);
        assert_eq!(fp.navigator.hardware_concurrency, 3);
        assert_eq!(fp.navigator.device_memory, 1);
        assert_eq!(fp.navigator.max_touch_points, MOBILE_TOUCH_POINTS);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut tables = reduced_tables();
        tables.timezones = &NO_TIMEZONES;
        let err = FingerprintGenerator::new(&tables)
            .generate(&FingerprintOptions::default())
            .unwrap_err();
        assert!(matches!(err, FingerprintError::EmptyPool("timezones")));
    }

    #[test]
    fn id_is_sixteen_hex_chars_and_time_dependent() {
        let a = fingerprint_id("ua", "{}", "UTC", 1);
        let b = fingerprint_id("ua", "{}", "UTC", 2);
        assert_eq!(a.len(), ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
        assert_eq!(a, fingerprint_id("ua", "{}", "UTC", 1));
    }

    #[test]
    fn id_hashes_the_concatenated_fields() {
        let mut hasher = Sha256::new();
        hasher.update(b"ua{}UTC1700000000000");
        let expected = hex::encode(hasher.finalize());
        assert_eq!(
            fingerprint_id("ua", "{}", "UTC", 1_700_000_000_000),
            &expected[..ID_LEN]
        );
    }

    #[test]
    fn noise_tokens_entropy_vs_seeded() {
        let opts = FingerprintOptions::default().with_seed("noise");
        let a = generate_fingerprint(&opts).unwrap();
        let b = generate_fingerprint(&opts).unwrap();
        assert_eq!(a.canvas_noise_seed.len(), 32);
        assert_ne!(a.canvas_noise_seed, b.canvas_noise_seed);
        assert_ne!(a.canvas_noise_seed, a.audio_noise_seed);

        let opts = opts.with_noise(NoiseSeedPolicy::Seeded);
        let a = generate_fingerprint(&opts).unwrap();
        let b = generate_fingerprint(&opts).unwrap();
        assert_eq!(a.canvas_noise_seed, b.canvas_noise_seed);
        assert_eq!(a.audio_noise_seed, b.audio_noise_seed);
        assert_ne!(a.canvas_noise_seed, a.audio_noise_seed);
    }

    #[test]
    fn session_ids_are_random_hex() {
        let a = generate_fingerprint_session_id();
        let b = generate_fingerprint_session_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn session_overrides_any_seed() {
        let opts = FingerprintOptions::default().with_seed("ignored");
        let a = create_session_fingerprint("abc", &opts).unwrap();
        let b = generate_fingerprint(&FingerprintOptions::default().with_seed("abc")).unwrap();
        assert_eq!(a.user_agent, b.user_agent);
        assert_eq!(a.screen, b.screen);
        assert_eq!(a.webgl, b.webgl);
        assert_eq!(a.navigator, b.navigator);
    }
}
