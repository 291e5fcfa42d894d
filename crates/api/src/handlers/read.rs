use super::models::AppState;
use crate::errors::ApiError;
use crate::models::{ReadQuery, ReadResponse};
use axum::{
    extract::{Query, State},
    response::Json,
};

pub async fn read_file(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<ReadResponse>, ApiError> {
    let url = state.store.read(&query.path).await?;
    Ok(Json(ReadResponse { url }))
}
