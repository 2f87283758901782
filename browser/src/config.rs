//! The server base URL comes from the build (`DEVBOOK_SERVER`) with an
//! optional runtime override in `window.DEVBOOK_CONFIG.server`, so static
//! deployments can point somewhere else without rebuilding. With neither, we
//! talk to whoever served the page.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL requests are sent to
    pub server: String,
}

impl Config {
    /// Load config from the build environment, the window's runtime config,
    /// and the page's origin, in increasing order of precedence for the
    /// first two and as a last resort for the third.
    pub fn load(window: &Window) -> Self {
        let origin = window.location().origin().unwrap_or_default();

        Self::resolve(option_env!("DEVBOOK_SERVER"), runtime_server(window), &origin)
    }

    /// Pick a server from the candidates.
    fn resolve(build: Option<&str>, runtime: Option<String>, origin: &str) -> Self {
        let server = runtime
            .as_deref()
            .and_then(normalize)
            .or_else(|| build.and_then(normalize))
            .unwrap_or_else(|| origin.to_string());

        Self { server }
    }
}

/// Read `window.DEVBOOK_CONFIG.server`, if it's there.
fn runtime_server(window: &Window) -> Option<String> {
    let config = Reflect::get(window, &JsValue::from_str("DEVBOOK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }

    Reflect::get(&config, &JsValue::from_str("server"))
        .ok()?
        .as_string()
}

/// Trim a configured value, treating blank as unset.
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, Config};
    use devbook_core::Client;

    #[test]
    fn normalize_trims_and_rejects_empty() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(
            normalize("  https://devbook.example "),
            Some("https://devbook.example".to_string())
        );
    }

    #[test]
    fn falls_back_to_the_page_origin() {
        let config = Config::resolve(None, None, "http://localhost:3000");

        assert_eq!(config.server, "http://localhost:3000");
    }

    #[test]
    fn build_setting_beats_the_origin() {
        let config = Config::resolve(Some("https://api.example"), None, "http://localhost:3000");

        assert_eq!(config.server, "https://api.example");
    }

    #[test]
    fn runtime_setting_beats_everything() {
        let config = Config::resolve(
            Some("https://api.example"),
            Some(" https://override.example ".to_string()),
            "http://localhost:3000",
        );

        assert_eq!(config.server, "https://override.example");
    }

    #[test]
    fn blank_settings_are_ignored() {
        let config = Config::resolve(Some("  "), Some(String::new()), "http://localhost:3000");

        assert_eq!(config.server, "http://localhost:3000");
    }

    #[test]
    fn null_origin_still_gives_a_client() {
        let config = Config::resolve(None, None, "null");
        let client = Client::new(&config.server);

        assert_eq!(client.server(), "null");
        assert!(client.base_url().is_err());
    }
}
