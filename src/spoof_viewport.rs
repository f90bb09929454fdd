use crate::fingerprint::{BrowserFingerprint, FingerprintHeaders};

/// The viewport a browser context should be created with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Viewport {
    /// Device screen width in pixels.
    pub width: u32,
    /// Device screen height in pixels.
    pub height: u32,
    /// Device scale factor.
    pub device_scale_factor: Option<f64>,
    /// Emulating Mobile?
    pub emulating_mobile: bool,
    /// Use landscape mode instead of portrait.
    pub is_landscape: bool,
    /// Touch screen device?
    pub has_touch: bool,
}

impl Viewport {
    /// The viewport matching a fingerprint's screen and device class.
    pub fn from_fingerprint(fingerprint: &BrowserFingerprint) -> Self {
        let mobile = fingerprint.is_mobile();
        Self {
            width: fingerprint.screen.width,
            height: fingerprint.screen.height,
            device_scale_factor: Some(fingerprint.screen.pixel_ratio),
            emulating_mobile: mobile,
            is_landscape: !fingerprint.screen.is_portrait(),
            has_touch: mobile,
        }
    }
}

/// Everything a browser automation layer needs to open a context that matches a fingerprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrowserContextOptions<'a> {
    /// The user agent.
    pub user_agent: &'a str,
    /// The viewport.
    pub viewport: Viewport,
    /// Device pixel ratio.
    pub device_scale_factor: f64,
    /// Context locale.
    pub locale: &'a str,
    /// IANA timezone id.
    pub timezone_id: &'a str,
    /// Headers sent with every request.
    #[cfg_attr(feature = "serde", serde(rename = "extraHTTPHeaders"))]
    pub extra_http_headers: &'a FingerprintHeaders,
}

impl<'a> From<&'a BrowserFingerprint> for BrowserContextOptions<'a> {
    fn from(fingerprint: &'a BrowserFingerprint) -> Self {
        Self {
            user_agent: &fingerprint.user_agent,
            viewport: Viewport::from_fingerprint(fingerprint),
            device_scale_factor: fingerprint.screen.pixel_ratio,
            locale: &fingerprint.locale,
            timezone_id: &fingerprint.timezone,
            extra_http_headers: &fingerprint.headers,
        }
    }
}

/// Context options for a fingerprint.
pub fn context_options(fingerprint: &BrowserFingerprint) -> BrowserContextOptions<'_> {
    BrowserContextOptions::from(fingerprint)
}
