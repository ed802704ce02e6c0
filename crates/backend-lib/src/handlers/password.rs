// ============================
// crates/backend-lib/src/handlers/password.rs
// ============================
//! Password generation handler.
use axum::{extract::State, Extension, Json};
use metrics::counter;
use passgen_common::PasswordResponse;

use crate::error::AppError;
use crate::generator::thread_draw;
use crate::metrics::PASSWORD_GENERATED;
use crate::validation::GenerationRequest;
use crate::AppState;

/// `GET /` — the requested password plus letter-, number- and symbol-only
/// variants.
///
/// Runs behind [`require_valid_request`](crate::middleware::require_valid_request),
/// which supplies the validated [`GenerationRequest`]. Generation is CPU-bound
/// and grows with `MaxSize`, so it runs on the blocking pool.
pub async fn generate_passwords(
    State(state): State<AppState>,
    Extension(request): Extension<GenerationRequest>,
) -> Result<Json<PasswordResponse>, AppError> {
    let generator = state.generator;
    let response = tokio::task::spawn_blocking(move || {
        let mut draw = thread_draw();
        generator.generate_variants(&mut draw, request.max_size, request.options)
    })
    .await
    .map_err(|e| AppError::Internal(format!("generation task failed: {e}")))?;

    counter!(PASSWORD_GENERATED).increment(4);
    tracing::trace!(max_size = request.max_size, "passwords generated");

    Ok(Json(response))
}
