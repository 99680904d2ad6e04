use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ErrorResponse, ScanConfig, ScanResponse};
use gloo_net::http::Request;
use yew::prelude::*;

pub async fn fetch_scan_config(
    scan_config: UseStateHandle<Option<ScanConfig>>,
    error_message: UseStateHandle<Option<String>>,
) {
    let url = format!("{}/config", &*BACKEND_URL);

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<ScanConfig>().await {
                    Ok(config) => scan_config.set(Some(config)),
                    Err(e) => handle_error(&error_message, format!("Failed to parse config: {e}")),
                }
            } else {
                let status = response.status();
                handle_error(&error_message, format!("Failed to load config: HTTP {status}"));
            }
        }
        Err(e) => handle_error(&error_message, format!("Failed to connect to backend: {e}")),
    }
}

pub async fn execute_scan(
    days: u32,
    scan_response: UseStateHandle<Option<ScanResponse>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!("{}/scan?days={}", &*BACKEND_URL, days);

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<ScanResponse>().await {
                    Ok(result) => {
                        scan_response.set(Some(result));
                        error_message.set(None);
                    }
                    Err(e) => {
                        handle_error(&error_message, format!("Failed to parse response: {e}"))
                    }
                }
            } else {
                let status = response.status();
                match response.text().await {
                    Ok(error_text) => match serde_json::from_str::<ErrorResponse>(&error_text) {
                        Ok(error_response) => handle_error(&error_message, error_response.message),
                        Err(_) => handle_error(
                            &error_message,
                            format!("Fetch failed ({status}): {error_text}"),
                        ),
                    },
                    Err(_) => {
                        handle_error(&error_message, format!("Fetch failed with status: {status}"))
                    }
                }
            }
        }
        Err(e) => handle_error(&error_message, format!("Network error: {e}")),
    }

    loading.set(false);
}

fn handle_error(error_message: &UseStateHandle<Option<String>>, error: String) {
    error_message.set(Some(error.clone()));
    log::error!("{error}");
    web_sys::console::error_1(&error.into());
}
