use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::sync::Arc;

use super::AppState;
use crate::domain::TransformOutput;
use crate::errors::ServiceError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub last_fetch: Option<DateTime<Utc>>,
}

pub async fn get_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TransformOutput>, ServiceError> {
    let records = state.cache.get_or_fetch(state.source.as_ref()).await?;
    let output = state.transformer.transform(&records);
    info!("Serving {} timing rows", output.timing.len());
    Ok(Json(output))
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        last_fetch: state.cache.last_fetch().await,
    })
}
