use crate::profiles::webgl::WebGlProfile;

/// The `navigator.appVersion` prefix every modern browser reports.
pub const APP_VERSION: &str = "5.0";

/// Screen geometry of a generated device.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScreenFingerprint {
    /// `screen.width`.
    pub width: u32,
    /// `screen.height`.
    pub height: u32,
    /// `screen.availWidth`.
    pub avail_width: u32,
    /// `screen.availHeight`, smaller than the height on desktops because of the taskbar.
    pub avail_height: u32,
    /// `screen.colorDepth`.
    pub color_depth: u32,
    /// `window.devicePixelRatio`.
    pub pixel_ratio: f64,
}

impl ScreenFingerprint {
    /// Constructs a new `ScreenFingerprint`.
    pub const fn new(
        width: u32,
        height: u32,
        avail_width: u32,
        avail_height: u32,
        color_depth: u32,
        pixel_ratio: f64,
    ) -> Self {
        Self {
            width,
            height,
            avail_width,
            avail_height,
            color_depth,
            pixel_ratio,
        }
    }

    /// Compact JSON with camelCase keys in declaration order. Used as hash input for the id.
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"width":{},"height":{},"availWidth":{},"availHeight":{},"colorDepth":{},"pixelRatio":{}}}"#,
            self.width,
            self.height,
            self.avail_width,
            self.avail_height,
            self.color_depth,
            self.pixel_ratio
        )
    }

    /// Portrait orientation.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// The `navigator` values of a generated device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NavigatorFingerprint {
    /// `navigator.platform` e.g. `Win32`.
    pub platform: String,
    /// `navigator.language`.
    pub language: String,
    /// `navigator.languages`.
    pub languages: Vec<String>,
    /// `navigator.hardwareConcurrency`.
    pub hardware_concurrency: u32,
    /// `navigator.deviceMemory` in GB.
    pub device_memory: u32,
    /// `navigator.maxTouchPoints`, zero on desktops.
    pub max_touch_points: u32,
    /// `navigator.vendor`.
    pub vendor: String,
    /// `navigator.appVersion` prefix.
    pub app_version: String,
}

/// The WebGL identity of a generated device.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WebGlFingerprint {
    /// Unmasked vendor.
    pub vendor: String,
    /// Unmasked renderer.
    pub renderer: String,
    /// Context version.
    pub version: String,
}

impl From<&WebGlProfile> for WebGlFingerprint {
    fn from(profile: &WebGlProfile) -> Self {
        Self {
            vendor: profile.vendor.into(),
            renderer: profile.renderer.into(),
            version: profile.version.into(),
        }
    }
}

impl PartialEq<WebGlProfile> for WebGlFingerprint {
    fn eq(&self, other: &WebGlProfile) -> bool {
        self.vendor == other.vendor
            && self.renderer == other.renderer
            && self.version == other.version
    }
}

/// Ordered HTTP headers. Names keep their casing and lookups ignore it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintHeaders(Vec<(String, String)>);

impl FingerprintHeaders {
    /// Empty header set with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Set a header, replacing any value already stored under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .0
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Header value by case insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Header names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No headers set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(feature = "headers")]
    /// Convert into an `http::HeaderMap`. Entries that are not valid header names or values are skipped.
    pub fn to_header_map(&self) -> http::HeaderMap {
        let mut map = http::HeaderMap::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            if let (Ok(name), Ok(value)) = (
                http::header::HeaderName::from_bytes(name.as_bytes()),
                http::HeaderValue::from_str(value),
            ) {
                map.insert(name, value);
            }
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FingerprintHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = FingerprintHeaders::default();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FingerprintHeaders {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FingerprintHeaders {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> serde::de::Visitor<'de> for HeadersVisitor {
            type Value = FingerprintHeaders;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut headers =
                    FingerprintHeaders::with_capacity(access.size_hint().unwrap_or(16));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    headers.insert(k, v);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

/// One synthesized browser identity. Built fresh per generator call and never mutated after.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrowserFingerprint {
    /// Short correlation id. Includes the generation time, so it differs between seeded calls.
    pub id: String,
    /// The user agent.
    pub user_agent: String,
    /// Navigator values.
    pub navigator: NavigatorFingerprint,
    /// Screen geometry.
    pub screen: ScreenFingerprint,
    /// WebGL identity.
    pub webgl: WebGlFingerprint,
    /// Request headers matching the identity.
    pub headers: FingerprintHeaders,
    /// Hex token seeding canvas noise downstream.
    pub canvas_noise_seed: String,
    /// Hex token seeding audio noise downstream.
    pub audio_noise_seed: String,
    /// IANA timezone.
    pub timezone: String,
    /// Primary locale.
    pub locale: String,
}

impl BrowserFingerprint {
    /// Is this a touch device?
    pub fn is_mobile(&self) -> bool {
        self.navigator.max_touch_points > 0
    }
}
