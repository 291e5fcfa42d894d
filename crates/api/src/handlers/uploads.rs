use super::models::AppState;
use crate::errors::ApiError;
use crate::models::{DeleteResponse, ExistsResponse, FileQuery, SaveResponse};
use axum::{
    extract::{multipart::Field, Multipart, Query, State},
    response::Json,
};
use kodo_events::AppEvent;
use kodo_storage::UploadedFile;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;

/// Accepts exactly one multipart field named `file`, spools it to the upload
/// directory and hands it to the store. The scratch file is removed when the
/// request finishes, whatever the outcome.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SaveResponse>, ApiError> {
    let mut spooled: Option<(TempPath, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if spooled.is_some() {
            return Err(ApiError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'".to_string(),
            ));
        }

        let name = field
            .file_name()
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidInput("File field has no filename".to_string()))?;

        let path = spool(&state, field).await?;
        spooled = Some((path, name));
    }

    let (path, name) = spooled
        .ok_or_else(|| ApiError::InvalidInput("Missing multipart field 'file'".to_string()))?;

    let file = UploadedFile::new(path.to_path_buf(), name);
    let url = state.store.save(&file).await?;

    state.events.emit(AppEvent::FileSaved {
        name: file.name,
        url: url.clone(),
    });

    Ok(Json(SaveResponse { url }))
}

async fn spool(state: &AppState, mut field: Field<'_>) -> Result<TempPath, ApiError> {
    let path = tempfile::Builder::new()
        .prefix("upload-")
        .tempfile_in(state.upload_dir.as_path())?
        .into_temp_path();

    let mut out = tokio::fs::File::create(&path).await?;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::InvalidInput(format!("Failed to read file data: {}", e)))?
    {
        out.write_all(&chunk).await?;
    }
    out.flush().await?;

    tracing::debug!("Spooled upload to {}", path.display());
    Ok(path)
}

pub async fn file_exists(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = state
        .store
        .exists(&query.filename, query.target_dir.as_deref())
        .await?;
    Ok(Json(ExistsResponse { exists }))
}

pub async fn delete_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state
        .store
        .delete(&query.filename, query.target_dir.as_deref())
        .await?;
    Ok(Json(DeleteResponse { deleted }))
}
