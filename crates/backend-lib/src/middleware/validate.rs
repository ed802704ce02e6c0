use axum::{
    extract::{Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};
use metrics::counter;
use passgen_common::PasswordQuery;

use crate::metrics::{REQUEST_ACCEPTED, REQUEST_REJECTED};
use crate::validation::validate_request;
use crate::{error::AppError, AppState};

/// Gate in front of the generation handler.
///
/// Parses the query once, runs the key, size and option checks, and on
/// success stores the resulting [`GenerationRequest`](crate::validation::GenerationRequest)
/// in the request extensions for the handler.
pub async fn require_valid_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let query = parse_query(request.uri());

    match validate_request(&query, &state.credential, state.settings.max_size_cap) {
        Ok(generation) => {
            counter!(REQUEST_ACCEPTED).increment(1);
            request.extensions_mut().insert(generation);
            Ok(next.run(request).await)
        }
        Err(err) => {
            tracing::debug!(code = err.error_code(), status = %err.status_code(), "request rejected");
            counter!(REQUEST_REJECTED, "code" => err.error_code()).increment(1);
            Err(err)
        }
    }
}

/// Decode the query string into a [`PasswordQuery`]; an undecodable query is
/// treated as empty
pub fn parse_query(uri: &Uri) -> PasswordQuery {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| PasswordQuery::from_pairs(pairs))
        .unwrap_or_default()
}
