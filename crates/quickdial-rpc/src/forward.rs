//! Launch-signal forwarding to an already-running primary instance.
//!
//! When a shortcut activation starts a second process while a primary is
//! alive, the secondary does not open its own server. It posts the launch
//! signal to the primary's `deliver_launch` method and exits, so the
//! selection change lands in the process the user is already looking at.

use quickdial_shortcuts::config::InstanceConfig;
use quickdial_shortcuts::instance::InstanceRecord;
use quickdial_shortcuts::{LaunchSignal, QuickdialError, Result};
use serde_json::{json, Value};
use tracing::debug;

/// Forward a launch signal to the primary and return the kind it routed to.
pub async fn deliver_to_primary(
    record: &InstanceRecord,
    signal: Option<&LaunchSignal>,
) -> Result<Option<String>> {
    let client = reqwest::Client::builder()
        .timeout(InstanceConfig::FORWARD_TIMEOUT)
        .build()
        .map_err(|e| QuickdialError::Other(format!("HTTP client setup failed: {}", e)))?;

    let extras = signal.map(|s| s.extras.clone()).unwrap_or_default();
    let request = json!({
        "jsonrpc": "2.0",
        "method": "deliver_launch",
        "params": {"extras": extras},
        "id": 1
    });

    debug!("Forwarding launch signal to {}", record.rpc_url());

    let payload: Value = client
        .post(record.rpc_url())
        .json(&request)
        .send()
        .await
        .map_err(|e| QuickdialError::Other(format!("forward request failed: {}", e)))?
        .json()
        .await
        .map_err(|e| QuickdialError::Other(format!("forward response unreadable: {}", e)))?;

    if let Some(error) = payload.get("error") {
        return Err(QuickdialError::Other(format!(
            "primary rejected launch signal: {}",
            error
        )));
    }

    let routed = payload
        .pointer("/result/routed")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(routed)
}
