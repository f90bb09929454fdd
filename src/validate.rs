use crate::fingerprint::BrowserFingerprint;
use crate::generator::MOBILE_TOUCH_POINTS;
use crate::profiles::tables::ReferenceTables;
use crate::{is_mobile_user_agent, platform_from_user_agent};

/// Fields that must be strings.
const STRING_FIELDS: [&str; 4] = ["id", "userAgent", "timezone", "locale"];
/// Fields that must be objects.
const OBJECT_FIELDS: [&str; 3] = ["navigator", "screen", "webgl"];

/// Shallow shape check for a value claiming to be a serialized [`BrowserFingerprint`].
///
/// Only the presence and JSON type of `id`, `userAgent`, `navigator`, `screen`, `webgl`,
/// `timezone` and `locale` are checked. Nested contents and cross field consistency are not,
/// use [`check_consistency`] for those.
///
/// ```
/// use browser_identity::validate::validate_fingerprint;
///
/// let value = serde_json::json!({
///     "id": "a", "userAgent": "b", "navigator": {}, "screen": {}, "webgl": {},
///     "timezone": "UTC", "locale": "en-US"
/// });
/// assert!(validate_fingerprint(&value));
/// ```
pub fn validate_fingerprint(value: &serde_json::Value) -> bool {
    shape_error(value).is_none()
}

/// The first shape problem found, if any.
fn shape_error(value: &serde_json::Value) -> Option<String> {
    let object = match value.as_object() {
        Some(o) => o,
        None => return Some("expected an object".into()),
    };
    for field in STRING_FIELDS {
        if !object.get(field).map_or(false, |v| v.is_string()) {
            return Some(format!("`{field}` must be a string"));
        }
    }
    for field in OBJECT_FIELDS {
        if !object.get(field).map_or(false, |v| v.is_object()) {
            return Some(format!("`{field}` must be an object"));
        }
    }
    None
}

#[cfg(feature = "serde")]
/// Shape check then full deserialization, for fingerprints loaded from storage.
pub fn parse_fingerprint(value: serde_json::Value) -> crate::Result<BrowserFingerprint> {
    if let Some(reason) = shape_error(&value) {
        return Err(crate::FingerprintError::InvalidShape(reason));
    }
    Ok(serde_json::from_value(value)?)
}

/// A broken invariant between fields that describe the same device.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Inconsistency {
    /// `navigator.languages` is empty.
    #[error("navigator.languages is empty")]
    NoLanguages,
    /// `navigator.languages[0]` differs from the locale.
    #[error("navigator.languages[0] is {first:?} but the locale is {locale:?}")]
    LanguagesLocale { first: String, locale: String },
    /// `navigator.language` differs from the locale.
    #[error("navigator.language is {language:?} but the locale is {locale:?}")]
    LanguageLocale { language: String, locale: String },
    /// The WebGL tuple is not one of the known tuples.
    #[error("webgl tuple ({vendor}, {renderer}) is not a known profile")]
    UnknownWebGl { vendor: String, renderer: String },
    /// The screen is not in the pool for the device class.
    #[error("screen {width}x{height} is not a known {class} resolution")]
    Screen {
        width: u32,
        height: u32,
        class: &'static str,
    },
    /// The user agent and touch support disagree about the device class.
    #[error("user agent mobile={user_agent_mobile} but maxTouchPoints={max_touch_points}")]
    DeviceClass {
        user_agent_mobile: bool,
        max_touch_points: u32,
    },
    /// `maxTouchPoints` is neither zero nor the phone value.
    #[error("maxTouchPoints={0} is not a generated value")]
    TouchPoints(u32),
    /// `navigator.platform` does not match the os in the user agent.
    #[error("navigator.platform is {actual:?} but the user agent implies {expected:?}")]
    Platform { expected: String, actual: String },
    /// `hardwareConcurrency` is outside the pool for the device class.
    #[error("hardwareConcurrency={0} is not plausible for the device class")]
    HardwareConcurrency(u32),
    /// `deviceMemory` is outside the pool for the device class.
    #[error("deviceMemory={0} is not plausible for the device class")]
    DeviceMemory(u32),
}

/// Result of [`check_consistency`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    /// Every broken invariant found.
    pub errors: Vec<Inconsistency>,
}

impl ConsistencyReport {
    /// No broken invariants.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Verify that every field of a fingerprint describes the same device, against `tables`.
pub fn check_consistency(
    fingerprint: &BrowserFingerprint,
    tables: &ReferenceTables,
) -> ConsistencyReport {
    let mut errors = Vec::new();
    let nav = &fingerprint.navigator;
    let mobile = nav.max_touch_points > 0;

    match nav.languages.first() {
        None => errors.push(Inconsistency::NoLanguages),
        Some(first) if *first != fingerprint.locale => {
            errors.push(Inconsistency::LanguagesLocale {
                first: first.clone(),
                locale: fingerprint.locale.clone(),
            })
        }
        _ => (),
    }

    if nav.language != fingerprint.locale {
        errors.push(Inconsistency::LanguageLocale {
            language: nav.language.clone(),
            locale: fingerprint.locale.clone(),
        });
    }

    if !tables.webgl.iter().any(|p| fingerprint.webgl == *p) {
        errors.push(Inconsistency::UnknownWebGl {
            vendor: fingerprint.webgl.vendor.clone(),
            renderer: fingerprint.webgl.renderer.clone(),
        });
    }

    if !tables.screens(mobile).contains(&fingerprint.screen) {
        errors.push(Inconsistency::Screen {
            width: fingerprint.screen.width,
            height: fingerprint.screen.height,
            class: if mobile { "mobile" } else { "desktop" },
        });
    }

    if nav.max_touch_points != 0 && nav.max_touch_points != MOBILE_TOUCH_POINTS {
        errors.push(Inconsistency::TouchPoints(nav.max_touch_points));
    }

    let user_agent_mobile = is_mobile_user_agent(&fingerprint.user_agent);
    if user_agent_mobile != mobile {
        errors.push(Inconsistency::DeviceClass {
            user_agent_mobile,
            max_touch_points: nav.max_touch_points,
        });
    }

    if let Some(expected) = platform_from_user_agent(&fingerprint.user_agent)
        .and_then(|p| tables.navigator_for(p.as_str()))
        .map(|l| l.into_inner().platform)
    {
        if expected != nav.platform {
            errors.push(Inconsistency::Platform {
                expected: expected.into(),
                actual: nav.platform.clone(),
            });
        }
    }

    if !tables
        .hardware_concurrency(mobile)
        .contains(&nav.hardware_concurrency)
    {
        errors.push(Inconsistency::HardwareConcurrency(nav.hardware_concurrency));
    }

    if !tables.device_memory(mobile).contains(&nav.device_memory) {
        errors.push(Inconsistency::DeviceMemory(nav.device_memory));
    }

    ConsistencyReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::{FingerprintOptions, Platform};
    use crate::generate_fingerprint;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "id": "a",
            "userAgent": "b",
            "navigator": {},
            "screen": {},
            "webgl": {},
            "timezone": "UTC",
            "locale": "en-US"
        })
    }

    #[test]
    fn shape_check_accepts_minimal_object() {
        assert!(validate_fingerprint(&minimal()));
    }

    #[test]
    fn shape_check_rejects_missing_or_mistyped_fields() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("screen");
        assert!(!validate_fingerprint(&value));

        let mut value = minimal();
        value["id"] = serde_json::json!(7);
        assert!(!validate_fingerprint(&value));

        let mut value = minimal();
        value["webgl"] = serde_json::Value::Null;
        assert!(!validate_fingerprint(&value));

        assert!(!validate_fingerprint(&serde_json::Value::Null));
        assert!(!validate_fingerprint(&serde_json::json!("fingerprint")));
    }

    #[test]
    fn shape_check_rejects_arrays_for_nested_records() {
        for field in OBJECT_FIELDS {
            let mut value = minimal();
            value[field] = serde_json::json!([]);
            assert!(!validate_fingerprint(&value), "{field}");
            assert_eq!(
                shape_error(&value),
                Some(format!("`{field}` must be an object"))
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_round_trips_a_generated_fingerprint() {
        let fp = generate_fingerprint(&FingerprintOptions::default().with_seed("parse")).unwrap();
        let value = serde_json::to_value(&fp).unwrap();
        assert!(validate_fingerprint(&value));
        let parsed = parse_fingerprint(value).unwrap();
        assert_eq!(parsed.user_agent, fp.user_agent);
        assert_eq!(parsed.navigator, fp.navigator);
        assert_eq!(parsed.screen, fp.screen);
        assert_eq!(parsed.webgl, fp.webgl);
        assert_eq!(parsed.id, fp.id);
        // `Value` objects sort their keys, so only the header set survives.
        let mut left: Vec<_> = parsed.headers.iter().collect();
        let mut right: Vec<_> = fp.headers.iter().collect();
        left.sort();
        right.sort();
        assert_eq!(left, right);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_reports_shape_before_deserializing() {
        let err = parse_fingerprint(serde_json::json!({ "id": "a" })).unwrap_err();
        assert!(matches!(err, crate::FingerprintError::InvalidShape(_)));
        // The shallow check passes but the nested records are incomplete.
        let err = parse_fingerprint(minimal()).unwrap_err();
        assert!(matches!(err, crate::FingerprintError::Json(_)));
    }

    #[test]
    fn generated_fingerprints_are_consistent() {
        let tables = ReferenceTables::builtin();
        for platform in Platform::ALL {
            for mobile in [false, true] {
                for country in ["US", "DE", "JP", "AU", "ZZ"] {
                    let opts = FingerprintOptions::default()
                        .with_platform(platform)
                        .with_mobile(mobile)
                        .with_country(country);
                    let fp = generate_fingerprint(&opts).unwrap();
                    let report = check_consistency(&fp, tables);
                    assert!(report.is_valid(), "{opts:?}: {:?}", report.errors);
                }
            }
        }
    }

    #[test]
    fn tampered_fingerprint_is_reported() {
        let tables = ReferenceTables::builtin();
        let mut fp = generate_fingerprint(&FingerprintOptions::default()).unwrap();
        fp.locale = "fr-FR".into();
        fp.webgl.vendor = "Google Inc. (NVIDIA)".into();
        fp.webgl.renderer = "Apple M2 Max".into();
        fp.navigator.max_touch_points = 5;
        let report = check_consistency(&fp, tables);
        assert!(!report.is_valid());
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, Inconsistency::LanguagesLocale { .. })));
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, Inconsistency::UnknownWebGl { .. })));
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, Inconsistency::DeviceClass { .. })));
    }
}
