//! Platform abstraction layer
//!
//! Browser queries made once at startup:
//! - Device class (coarse touch pointer vs. fine mouse pointer)
//! - URL query parameters

/// True on touch-first devices. Decided once per session.
#[cfg(target_arch = "wasm32")]
pub fn prefers_coarse_pointer() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    coarse || window.navigator().max_touch_points() > 0
}

/// Native builds have no touch screen
#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_coarse_pointer() -> bool {
    false
}

/// Value of `?name=` in the page URL
#[cfg(target_arch = "wasm32")]
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn query_param(_name: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_stubs() {
        assert!(!prefers_coarse_pointer());
        assert_eq!(query_param("variant"), None);
    }
}
