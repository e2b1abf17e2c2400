//! URL-hash persistence for the selected view.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only; SSR reads nothing and renders the default view, then the
//! hydrated client switches if the hash names another view.

use crate::state::nav::View;

/// View named by the current `location.hash`, if any.
pub fn read_view() -> Option<View> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        View::from_slug(&hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Replace the hash without adding a history entry.
pub fn write_view(view: View) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let url = format!("#{}", view.slug());
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::debug!("history.replaceState failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
    }
}
