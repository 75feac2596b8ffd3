use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use fieldrelay_core::{parse_fields, Error as CoreError, ExtractionMode};

use crate::state::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct SetTypeQuery {
    pub type_id: i64,
}

#[derive(Debug, Serialize)]
pub struct SetTypeResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub type_id: u8,
}

pub async fn set_type(
    State(state): State<AppState>,
    Query(query): Query<SetTypeQuery>,
) -> Result<Json<SetTypeResponse>, ApiError> {
    let mode = ExtractionMode::from_type_id(query.type_id)?;
    *state.mode.write().await = Some(mode);

    info!(type_id = query.type_id, "extraction type set to {}", mode.display_name());
    Ok(Json(SetTypeResponse {
        message: format!("Extraction type set to: {}", mode.display_name()),
        type_id: mode.type_id(),
    }))
}

pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Snapshot the mode once; a concurrent set-type does not affect this
    // request from here on.
    let mode = (*state.mode.read().await).ok_or(CoreError::NotConfigured)?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if let Some(file_name) = field.file_name() {
            let file_name = file_name.to_string();
            let data = field.bytes().await?;
            upload = Some((file_name, data));
            break;
        }
    }
    let (file_name, data) = upload.ok_or(ApiError::MissingFile)?;

    info!(%file_name, bytes = data.len(), "processing upload");
    let text = state.extractor.extract(&file_name, &data).await?;
    if text.trim().is_empty() {
        return Err(CoreError::EmptyDocument.into());
    }

    let raw = state.fields.extract_fields(&text, mode).await?;
    let fields = parse_fields(&raw)?;
    Ok(Json(fields))
}
