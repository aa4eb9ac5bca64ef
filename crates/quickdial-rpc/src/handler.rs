//! JSON-RPC request handlers.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use quickdial_shortcuts::config::AppConfig;
use quickdial_shortcuts::{IconInstaller, LaunchSignal, QuickdialError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Main JSON-RPC handler.
pub async fn handle_rpc(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    // Handle built-in methods
    if method == "health_check" {
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "ok"}))),
        );
    }

    if method == "shutdown" {
        // Give the response a moment to flush before the main task tears
        // the process down.
        let shutdown_state = state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            shutdown_state.shutdown.notify_one();
        });
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "shutting_down"}))),
        );
    }

    // Dispatch to API methods
    let result = dispatch_method(&state, method, &params).await;

    match result {
        Ok(value) => (StatusCode::OK, Json(JsonRpcResponse::success(id, value))),
        Err(e) => {
            error!("RPC error for {}: {}", method, e);
            let code = e.to_rpc_error_code();
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(id, code, e.to_string())),
            )
        }
    }
}

// ============================================================================
// Method dispatcher
// ============================================================================

/// Dispatch a method call to the appropriate API handler.
async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> quickdial_shortcuts::Result<Value> {
    let api = &state.api;

    match method {
        // ====================================================================
        // Shortcut registration
        // ====================================================================
        "register_dynamic_shortcut" => {
            let outcome = api.register_dynamic();
            Ok(json!({
                "success": true,
                "registered": outcome.registered(),
                "status": outcome.as_str()
            }))
        }

        "register_pinned_shortcut" => {
            let outcome = api.register_pinned();
            Ok(json!({
                "success": true,
                "registered": outcome.registered(),
                "status": outcome.as_str()
            }))
        }

        // ====================================================================
        // Capability & surface state
        // ====================================================================
        "get_shortcut_support" => {
            let support = api.shortcut_support();
            Ok(with_success(serde_json::to_value(support)?))
        }

        "get_shortcut_state" => {
            let surfaces = api.shortcut_state();
            Ok(with_success(serde_json::to_value(surfaces)?))
        }

        // ====================================================================
        // Selection & launch delivery
        // ====================================================================
        "get_selection" => {
            let kind = api.selection();
            Ok(json!({
                "success": true,
                "kind": kind.map(|k| k.as_str()),
                "label": api.selection_label()
            }))
        }

        "deliver_launch" => {
            let signal: LaunchSignal =
                serde_json::from_value(params.clone()).map_err(|e| {
                    QuickdialError::InvalidParams {
                        message: format!("invalid launch signal: {}", e),
                    }
                })?;
            let routed = api.handle_launch(Some(&signal));
            Ok(json!({
                "success": true,
                "routed": routed.map(|k| k.as_str())
            }))
        }

        // ====================================================================
        // Desktop integration
        // ====================================================================
        "install_icon" => {
            let Some(source) = packaged_icon_path() else {
                warn!("Packaged icon not found next to the executable");
                return Ok(json!({"success": true, "installed": false}));
            };

            let installer = match &state.icon_theme_dir {
                Some(dir) => IconInstaller::with_theme_dir(dir),
                None => match IconInstaller::new() {
                    Ok(installer) => installer,
                    Err(e) => {
                        warn!("No icon theme directory on this host: {}", e);
                        return Ok(json!({"success": true, "installed": false}));
                    }
                },
            };

            if let Err(e) = installer.install_scalable(&source) {
                warn!("Icon install failed: {}", e);
                return Ok(json!({"success": true, "installed": false}));
            }

            Ok(json!({
                "success": true,
                "installed": true,
                "path": installer.installed_path(&source).display().to_string()
            }))
        }

        // ====================================================================
        // Unknown
        // ====================================================================
        _ => {
            warn!("Method not found: {}", method);
            Err(QuickdialError::MethodNotFound {
                method: method.to_string(),
            })
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Inject `success: true` into an object produced by serializing an API type.
fn with_success(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.insert("success".to_string(), json!(true));
    }
    value
}

/// Locate the packaged scalable icon.
///
/// Looks for a `resources/` directory next to the executable first, then
/// walks up so development builds under `target/` find the checked-in asset.
fn packaged_icon_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let mut dir = exe.parent()?.to_path_buf();

    for _ in 0..5 {
        let candidate = dir
            .join("resources")
            .join("icons")
            .join(format!("{}.svg", AppConfig::ICON_NAME));
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?.to_path_buf();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdial_shortcuts::{QuickdialApi, UnsupportedShortcutService};

    fn test_state() -> AppState {
        AppState {
            api: QuickdialApi::with_service(Arc::new(UnsupportedShortcutService)),
            icon_theme_dir: None,
            shutdown: tokio::sync::Notify::new(),
        }
    }

    #[test]
    fn test_json_rpc_response_success() {
        let response = JsonRpcResponse::success(Some(json!(1)), json!({"data": "test"}));
        assert!(response.error.is_none());
        assert!(response.result.is_some());
    }

    #[test]
    fn test_json_rpc_response_error() {
        let response = JsonRpcResponse::error(Some(json!(1)), -32600, "Test error".into());
        assert!(response.error.is_some());
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[test]
    fn test_with_success_injects_flag() {
        let value = with_success(json!({"supported": false}));
        assert_eq!(value.get("success"), Some(&json!(true)));
        assert_eq!(value.get("supported"), Some(&json!(false)));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_method() {
        let state = test_state();
        let err = dispatch_method(&state, "register_everything", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32601);
    }

    #[tokio::test]
    async fn test_deliver_launch_rejects_malformed_params() {
        let state = test_state();
        let err = dispatch_method(&state, "deliver_launch", &json!({"extras": "not-a-map"}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);
    }

    #[tokio::test]
    async fn test_selection_round_trip_through_dispatch() {
        let state = test_state();

        let empty = dispatch_method(&state, "get_selection", &json!({}))
            .await
            .unwrap();
        assert_eq!(empty.get("kind"), Some(&Value::Null));
        assert_eq!(empty.get("label"), Some(&json!("")));

        let delivered = dispatch_method(
            &state,
            "deliver_launch",
            &json!({"extras": {"shortcut_id": "Static"}}),
        )
        .await
        .unwrap();
        assert_eq!(delivered.get("routed"), Some(&json!("Static")));

        let selection = dispatch_method(&state, "get_selection", &json!({}))
            .await
            .unwrap();
        assert_eq!(selection.get("kind"), Some(&json!("Static")));
        assert_eq!(
            selection.get("label"),
            Some(&json!("Static Shortcut Clicked"))
        );
    }

    #[tokio::test]
    async fn test_register_pinned_unsupported_reports_status() {
        let state = test_state();
        let value = dispatch_method(&state, "register_pinned_shortcut", &json!({}))
            .await
            .unwrap();
        assert_eq!(value.get("success"), Some(&json!(true)));
        assert_eq!(value.get("registered"), Some(&json!(false)));
        assert_eq!(value.get("status"), Some(&json!("unsupported")));
    }

    #[tokio::test]
    async fn test_support_report_carries_service_name() {
        let state = test_state();
        let value = dispatch_method(&state, "get_shortcut_support", &json!({}))
            .await
            .unwrap();
        assert_eq!(value.get("success"), Some(&json!(true)));
        assert_eq!(value.get("supported"), Some(&json!(false)));
        assert_eq!(value.get("service"), Some(&json!("unsupported")));
    }
}
