mod models;
mod state;
mod uploads;
mod read;
mod serve;

pub use models::AppState;
pub use uploads::{delete_file, file_exists, upload_file};
pub use read::read_file;
pub use serve::serve;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Adapter routes; transport layers (limits, CORS, timeouts) are added by the binary
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/uploads", post(upload_file).delete(delete_file))
        .route("/uploads/exists", get(file_exists))
        .route("/read", get(read_file))
        .layer(middleware::from_fn(serve))
        .with_state(state)
}
