use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "YouTube Viral Topics Tool";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Looks up `key` on the `window.ENV_CONFIG` object written by `index.html`.
pub fn get_env_var(key: &str) -> Option<String> {
    let env_config = js_sys::Reflect::get(&window()?.into(), &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    js_sys::Reflect::get(&env_config, &key.into())
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.trim().is_empty())
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .and_then(|flag| flag.parse().ok())
        .unwrap_or(false)
}
