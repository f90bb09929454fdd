/// A WebGL identity. The three values are only ever used together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WebGlProfile {
    /// The `VENDOR` / `UNMASKED_VENDOR_WEBGL` value.
    pub vendor: &'static str,
    /// The `RENDERER` / `UNMASKED_RENDERER_WEBGL` value.
    pub renderer: &'static str,
    /// The `VERSION` value.
    pub version: &'static str,
}

const CHROMIUM_WEBGL2: &str = "WebGL 2.0 (OpenGL ES 3.0 Chromium)";
const APPLE_WEBGL2: &str = "WebGL 2.0 (OpenGL ES 3.0)";

/// Known good vendor, renderer and version tuples.
pub static WEBGL_PROFILES: &[WebGlProfile] = &[
    WebGlProfile {
        vendor: "Google Inc. (NVIDIA)",
        renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3080 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        version: CHROMIUM_WEBGL2,
    },
    WebGlProfile {
        vendor: "Google Inc. (NVIDIA)",
        renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 4090 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        version: CHROMIUM_WEBGL2,
    },
    WebGlProfile {
        vendor: "Google Inc. (AMD)",
        renderer: "ANGLE (AMD, AMD Radeon RX 6800 XT Direct3D11 vs_5_0 ps_5_0, D3D11)",
        version: CHROMIUM_WEBGL2,
    },
    WebGlProfile {
        vendor: "Google Inc. (Intel)",
        renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        version: CHROMIUM_WEBGL2,
    },
    // Apple silicon
    WebGlProfile {
        vendor: "Apple Inc.",
        renderer: "Apple M1 Pro",
        version: APPLE_WEBGL2,
    },
    WebGlProfile {
        vendor: "Apple Inc.",
        renderer: "Apple M2 Max",
        version: APPLE_WEBGL2,
    },
];
