use crate::configs::{ClientHintsPolicy, Platform};
use crate::fingerprint::FingerprintHeaders;

/// Chrome's default navigation `Accept` header.
pub const ACCEPT_DOCUMENT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
/// Encodings a desktop browser advertises.
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
/// The Chrome major version the `Sec-Ch-Ua` brand list claims.
pub const BASELINE_CHROME_MAJOR: u32 = 120;

lazy_static::lazy_static! {
    /// The `Sec-Ch-Ua` brand list.
    pub static ref SEC_CH_UA: String = format!(
        r#""Not_A Brand";v="8", "Chromium";v="{BASELINE_CHROME_MAJOR}", "Google Chrome";v="{BASELINE_CHROME_MAJOR}""#
    );
}

/// Number of headers emitted by [`build_headers`].
const HEADER_COUNT: usize = 14;

/// The `Sec-Ch-Ua-Mobile` and `Sec-Ch-Ua-Platform` values for a client hints policy.
pub fn client_hints(policy: ClientHintsPolicy, platform: Platform) -> (&'static str, &'static str) {
    match policy {
        ClientHintsPolicy::StaticWindows => ("?0", r#""Windows""#),
        ClientHintsPolicy::MatchPlatform => {
            let mobile = if platform.is_mobile() { "?1" } else { "?0" };
            let name = match platform {
                Platform::Windows => r#""Windows""#,
                Platform::MacOs => r#""macOS""#,
                Platform::Linux => r#""Linux""#,
                Platform::Android => r#""Android""#,
                Platform::Ios => r#""iOS""#,
            };
            (mobile, name)
        }
    }
}

/// Build the navigation request headers for a user agent and language list.
///
/// Apart from `User-Agent` and `Accept-Language` every value is a constant recent Chrome on
/// Windows baseline. With [`ClientHintsPolicy::StaticWindows`] the platform hints stay
/// `"Windows"` even for mac, linux or mobile user agents.
///
/// ```
/// use browser_identity::configs::{ClientHintsPolicy, Platform};
/// use browser_identity::spoof_headers::build_headers;
///
/// let headers = build_headers(
///     "Mozilla/5.0",
///     &["de-DE", "de", "en"],
///     ClientHintsPolicy::StaticWindows,
///     Platform::Linux,
/// );
/// assert_eq!(headers.get("Accept-Language"), Some("de-DE,de,en"));
/// assert_eq!(headers.get("Sec-Ch-Ua-Platform"), Some("\"Windows\""));
/// ```
pub fn build_headers<S: AsRef<str>>(
    user_agent: &str,
    languages: &[S],
    hints: ClientHintsPolicy,
    platform: Platform,
) -> FingerprintHeaders {
    let accept_language = languages
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    let (ua_mobile, ua_platform) = client_hints(hints, platform);

    let mut headers = FingerprintHeaders::with_capacity(HEADER_COUNT);

    headers.insert("User-Agent", user_agent);
    headers.insert("Accept", ACCEPT_DOCUMENT);
    headers.insert("Accept-Language", accept_language);
    headers.insert("Accept-Encoding", ACCEPT_ENCODING);
    headers.insert("Cache-Control", "no-cache");
    headers.insert("Pragma", "no-cache");
    headers.insert("Sec-Ch-Ua", SEC_CH_UA.as_str());
    headers.insert("Sec-Ch-Ua-Mobile", ua_mobile);
    headers.insert("Sec-Ch-Ua-Platform", ua_platform);
    headers.insert("Sec-Fetch-Dest", "document");
    headers.insert("Sec-Fetch-Mode", "navigate");
    headers.insert("Sec-Fetch-Site", "none");
    headers.insert("Sec-Fetch-User", "?1");
    headers.insert("Upgrade-Insecure-Requests", "1");

    headers
}
