/// The primary locale of a country with its ordered `navigator.languages` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Primary locale, always the first entry of `list`.
    pub primary: &'static str,
    /// Ordered language list.
    pub list: &'static [&'static str],
}

/// Timezones keyed by country code with a `default` entry.
pub static TIMEZONES: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "US" => &["America/New_York", "America/Chicago", "America/Denver", "America/Los_Angeles"],
    "UK" => &["Europe/London"],
    "DE" => &["Europe/Berlin"],
    "FR" => &["Europe/Paris"],
    "JP" => &["Asia/Tokyo"],
    "CN" => &["Asia/Shanghai"],
    "AU" => &["Australia/Sydney", "Australia/Melbourne"],
    "BR" => &["America/Sao_Paulo"],
    "IN" => &["Asia/Kolkata"],
    "default" => &["America/New_York", "Europe/London", "Asia/Tokyo"],
};

/// Languages keyed by country code with a `default` entry.
pub static LANGUAGES: phf::Map<&'static str, LanguageConfig> = phf::phf_map! {
    "US" => LanguageConfig { primary: "en-US", list: &["en-US", "en"] },
    "UK" => LanguageConfig { primary: "en-GB", list: &["en-GB", "en"] },
    "DE" => LanguageConfig { primary: "de-DE", list: &["de-DE", "de", "en"] },
    "FR" => LanguageConfig { primary: "fr-FR", list: &["fr-FR", "fr", "en"] },
    "JP" => LanguageConfig { primary: "ja-JP", list: &["ja-JP", "ja", "en"] },
    "CN" => LanguageConfig { primary: "zh-CN", list: &["zh-CN", "zh", "en"] },
    "BR" => LanguageConfig { primary: "pt-BR", list: &["pt-BR", "pt", "en"] },
    "default" => LanguageConfig { primary: "en-US", list: &["en-US", "en"] },
};
