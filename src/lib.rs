/// Option and policy types.
pub mod configs;
/// Error types.
pub mod errors;
/// The generated identity types.
pub mod fingerprint;
/// Identity generation.
pub mod generator;
/// Seeded and entropy backed draws.
pub mod prng;
/// Static reference tables.
pub mod profiles;
/// HTTP headers.
pub mod spoof_headers;
/// Viewport and browser context options.
pub mod spoof_viewport;
/// Shape and consistency checks.
pub mod validate;

pub use configs::{ClientHintsPolicy, FingerprintOptions, NoiseSeedPolicy, Platform};
pub use errors::{FingerprintError, Result};
pub use fingerprint::{
    BrowserFingerprint, FingerprintHeaders, NavigatorFingerprint, ScreenFingerprint,
    WebGlFingerprint,
};
pub use generator::{
    create_session_fingerprint, generate_fingerprint, generate_fingerprint_session_id,
    FingerprintGenerator,
};
pub use profiles::tables::{ReferenceTables, REFERENCE_TABLES};
pub use spoof_headers::build_headers;
pub use validate::{check_consistency, validate_fingerprint};

#[cfg(feature = "headers")]
pub use http;

lazy_static::lazy_static! {
    pub static ref MOBILE_PATTERNS: [&'static str; 38] = [
        // Apple
        "iphone", "ipad", "ipod",
        // Android
        "android",
        // Generic mobile
        "mobi", "mobile", "touch",
        // Specific Android browsers/devices
        "silk", "nexus", "pixel", "huawei", "honor", "xiaomi", "miui", "redmi",
        "oneplus", "samsung", "galaxy", "lenovo", "oppo", "vivo", "realme",
        // Mobile browsers
        "opera mini", "opera mobi", "ucbrowser", "ucweb", "baidubrowser", "qqbrowser",
        "dolfin", "crmo", "fennec", "iemobile", "webos", "blackberry", "bb10",
        "playbook", "palm", "nokia"
    ];

    /// Common mobile indicators for user-agent detection.
    pub static ref MOBILE_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(MOBILE_PATTERNS.as_ref())
        .expect("failed to compile AhoCorasick patterns");

    /// Matcher over [`OS_TOKENS`].
    static ref OS_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(OS_TOKENS.iter().map(|(token, _)| *token))
        .expect("valid os patterns");
}

/// User agent OS tokens and the platform they imply, highest priority first. Android agents
/// also carry `Linux` and iOS agents also carry `Mac OS X`.
const OS_TOKENS: [(&str, Platform); 8] = [
    ("iphone", Platform::Ios),
    ("ipad", Platform::Ios),
    ("ipod", Platform::Ios),
    ("android", Platform::Android),
    ("windows", Platform::Windows),
    ("macintosh", Platform::MacOs),
    ("mac os x", Platform::MacOs),
    ("linux", Platform::Linux),
];

/// Returns `true` if the user-agent is likely a mobile browser.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_MATCHER.find(user_agent).is_some()
}

/// Get the platform a user agent claims.
pub fn platform_from_user_agent(user_agent: &str) -> Option<Platform> {
    OS_MATCHER
        .find_iter(user_agent)
        .map(|m| m.pattern().as_usize())
        .min()
        .map(|idx| OS_TOKENS[idx].1)
}
