//! Platform probes for the hosting environment.

/// Whether the user agent currently prefers a light color scheme.
///
/// Without a usable media-query signal (native builds, `matchMedia` missing)
/// this reports `false`, so an `auto` theme resolves to dark.
#[cfg(target_arch = "wasm32")]
pub fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_light() -> bool {
    false
}
