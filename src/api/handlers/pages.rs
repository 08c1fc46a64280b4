use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::{Html, IntoResponse},
};
use log::warn;
use std::path::Path;
use std::sync::Arc;

use super::AppState;
use crate::api::user_agent::is_mobile;

const DESKTOP_PAGE: &str = "index.html";
const MOBILE_PAGE: &str = "mobile.html";

/// Entry page, picked by the browser's user agent.
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    let page = if is_mobile(user_agent) {
        MOBILE_PAGE
    } else {
        DESKTOP_PAGE
    };

    let path = Path::new(&state.config.server.static_dir).join(page);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            warn!("Cannot serve {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
