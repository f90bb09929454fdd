use crate::fingerprint::ScreenFingerprint;

/// Common desktop screen resolutions.
pub static DESKTOP_SCREENS: &[ScreenFingerprint] = &[
    ScreenFingerprint::new(1920, 1080, 1920, 1040, 24, 1.0),
    ScreenFingerprint::new(1366, 768, 1366, 728, 24, 1.0),
    ScreenFingerprint::new(1536, 864, 1536, 824, 24, 1.25),
    ScreenFingerprint::new(1440, 900, 1440, 860, 24, 2.0),
    ScreenFingerprint::new(1280, 720, 1280, 680, 24, 1.0),
    ScreenFingerprint::new(2560, 1440, 2560, 1400, 24, 1.0),
    ScreenFingerprint::new(3840, 2160, 3840, 2120, 24, 1.0),
    ScreenFingerprint::new(1600, 900, 1600, 860, 24, 1.0),
];

/// Common phone screen resolutions.
pub static MOBILE_SCREENS: &[ScreenFingerprint] = &[
    // iPhone X
    ScreenFingerprint::new(375, 812, 375, 812, 32, 3.0),
    // iPhone 12
    ScreenFingerprint::new(390, 844, 390, 844, 32, 3.0),
    // Pixel 6
    ScreenFingerprint::new(412, 915, 412, 915, 24, 2.625),
    // Samsung Galaxy
    ScreenFingerprint::new(360, 800, 360, 800, 24, 3.0),
    // iPhone 11
    ScreenFingerprint::new(414, 896, 414, 896, 32, 2.0),
];
