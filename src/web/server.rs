use super::state::AppState;
use crate::backup;
use crate::error::{BackupError, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn start_server(state: Arc<AppState>, port: u16) -> Result<()> {
    let app = Router::new()
        .route("/tasks/manual_backup", get(manual_backup_handler))
        .route("/tasks/trim_history", get(trim_history_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("Task server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BackupError::Config(format!("failed to bind {}: {}", addr, e)))?;
    axum::serve(listener, app).await.map_err(BackupError::Io)?;
    Ok(())
}

#[derive(Deserialize)]
struct ManualBackupParams {
    #[serde(rename = "secretKey")]
    secret_key: Option<String>,
    #[serde(rename = "configVar")]
    config_var: Option<String>,
    label: Option<String>,
}

#[derive(Deserialize)]
struct TrimHistoryParams {
    #[serde(rename = "secretKey")]
    secret_key: Option<String>,
    #[serde(rename = "configVar")]
    config_var: Option<String>,
    days: Option<String>,
}

/// 403 when the key is absent, 401 when it does not match the configured
/// secret. An unset SECRET_KEY rejects every request.
fn check_secret(
    provided: Option<&str>,
    expected: Option<&str>,
) -> Option<(StatusCode, &'static str)> {
    match provided {
        None | Some("") => Some((StatusCode::FORBIDDEN, "No secret key provided")),
        Some(key) => {
            if expected == Some(key) {
                None
            } else {
                Some((StatusCode::UNAUTHORIZED, "Invalid secret key"))
            }
        }
    }
}

fn error_response(err: BackupError) -> Response {
    error!("Request failed: {}", err);
    let status = match err {
        BackupError::Config(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}

async fn manual_backup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ManualBackupParams>,
) -> Response {
    if let Some(rejection) = check_secret(
        params.secret_key.as_deref(),
        state.config.secret_key.as_deref(),
    ) {
        return rejection.into_response();
    }

    let config_var = match params.config_var.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => return (StatusCode::BAD_REQUEST, "Missing configVar parameter").into_response(),
    };

    match backup::manual_backup(
        state.backend.as_ref(),
        state.notifier.as_ref(),
        config_var,
        params.label.as_deref(),
    )
    .await
    {
        Ok(backup_file) => format!(
            "Manual backup completed. Label: {}, Database: {}, Backup file: {}",
            params.label.as_deref().unwrap_or("None"),
            config_var,
            backup_file
        )
        .into_response(),
        Err(err) => error_response(err),
    }
}

async fn trim_history_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrimHistoryParams>,
) -> Response {
    if let Some(rejection) = check_secret(
        params.secret_key.as_deref(),
        state.config.secret_key.as_deref(),
    ) {
        return rejection.into_response();
    }

    let config_var = match params.config_var.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => return (StatusCode::BAD_REQUEST, "Missing configVar parameter").into_response(),
    };
    let days = match params.days.as_deref() {
        None => return (StatusCode::BAD_REQUEST, "Missing days parameter").into_response(),
        Some(raw) => match raw.parse::<i64>() {
            Ok(days) => days,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("days must be a number, got '{}'", raw),
                )
                    .into_response()
            }
        },
    };

    match backup::trim_backup_history(
        state.backend.as_ref(),
        state.notifier.as_ref(),
        config_var,
        days,
    )
    .await
    {
        Ok((deleted, failed)) => format!(
            "Trim history completed. Deleted files: {:?}, Failed deletes: {:?}",
            deleted, failed
        )
        .into_response(),
        Err(err) => error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_secret_is_forbidden() {
        let rejection = check_secret(None, Some("s3cret")).unwrap();
        assert_eq!(rejection.0, StatusCode::FORBIDDEN);

        let rejection = check_secret(Some(""), Some("s3cret")).unwrap();
        assert_eq!(rejection.0, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let rejection = check_secret(Some("nope"), Some("s3cret")).unwrap();
        assert_eq!(rejection.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unset_secret_rejects_everything() {
        let rejection = check_secret(Some("anything"), None).unwrap();
        assert_eq!(rejection.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_matching_secret_passes() {
        assert!(check_secret(Some("s3cret"), Some("s3cret")).is_none());
    }
}
