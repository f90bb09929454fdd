/// Language and timezone tables keyed by country.
pub mod locale;
/// Navigator platform and vendor per platform.
pub mod navigator;
/// Screen resolutions.
pub mod screen;
/// The tables bundle injected into the generator.
pub mod tables;
/// User agents per platform.
pub mod user_agents;
/// WebGL vendor, renderer and version tuples.
pub mod webgl;
