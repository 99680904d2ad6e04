use crate::models::ScanConfig;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

/// Active keyword list, threshold and lookback bounds, used by the UI to bound its inputs.
#[get("/")]
pub fn get_config(state: &State<AppState>) -> Json<ScanConfig> {
    Json(state.scan_config.clone())
}

#[cfg(test)]
mod tests {
    use crate::build_rocket;
    use crate::models::ScanConfig;
    use crate::services::testing::FakeYoutube;
    use crate::AppState;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use std::sync::Arc;

    #[rocket::async_test]
    async fn config_reports_active_scan_settings() {
        let state = AppState {
            api: Arc::new(FakeYoutube::default()).api(),
            scan_config: ScanConfig::default(),
        };
        let client = Client::tracked(build_rocket(state)).await.unwrap();

        let response = client.get("/config").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let config: ScanConfig = response.into_json().await.unwrap();
        assert_eq!(config, ScanConfig::default());
        assert_eq!(config.lookback.max, 30);
    }
}
