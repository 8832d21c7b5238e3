//! Board configuration from the host page.
//!
//! The page may embed a `<script id="board-config" type="application/json">`
//! element. Missing or malformed config falls back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use projects::config::BoardConfig;

/// Id of the element holding the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// Parse embedded config text, logging and falling back to defaults when it
/// is unusable.
pub fn parse(raw: Option<&str>) -> BoardConfig {
    let Some(raw) = raw else {
        return BoardConfig::default();
    };
    BoardConfig::from_json(raw).unwrap_or_else(|e| {
        log::error!("{e}; using default board config");
        BoardConfig::default()
    })
}

/// Read the config embedded in the current document.
pub fn load() -> BoardConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        parse(None)
    }
}
