//! HTTP request handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use tracing::{debug, warn};

use ddaybot_line::signature::SIGNATURE_HEADER;
use ddaybot_line::types::{WebhookEvent, WebhookRequest};
use ddaybot_line::verify_signature;
use ddaybot_scheduler::{SendOutcome, days_remaining, message};

use crate::GatewayState;

/// GET /health — simple HTTP health check.
pub async fn health_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /callback — LINE webhook.
///
/// The raw body is authenticated against the `x-line-signature` header
/// before parsing. Events are handled independently: one bad event logs a
/// warning and the rest still get their replies.
pub async fn callback_handler(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, StatusCode> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;

    if !verify_signature(&state.config.channel_secret, &body, signature) {
        warn!("webhook signature verification failed");
        return Err(StatusCode::BAD_REQUEST);
    }

    let request: WebhookRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("webhook payload parse failed: {e}");
        StatusCode::BAD_REQUEST
    })?;

    for event in request.events {
        if let Err(e) = handle_event(&state, event).await {
            warn!("webhook event handling failed: {e}");
        }
    }

    Ok("OK")
}

/// GET /test — push the countdown immediately, for operational testing.
///
/// Shares the scheduler's send path (and its mutual exclusion) but never
/// consumes the day's scheduled delivery.
pub async fn test_handler(State(state): State<Arc<GatewayState>>) -> Result<String, StatusCode> {
    let now = state.clock.now_local();
    match state.notifier.send_now(now).await {
        Ok(SendOutcome::Delivered { days_left }) => Ok(format!("Sent! Days left: {days_left}")),
        Ok(SendOutcome::Skipped { days_left }) => {
            Ok(format!("No destination configured. Days left: {days_left}"))
        }
        Err(e) => {
            warn!("manual countdown push failed: {e}");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Reply to a single webhook event, if it is a text message.
async fn handle_event(state: &GatewayState, event: WebhookEvent) -> anyhow::Result<()> {
    if event.event_type != "message" {
        return Ok(());
    }
    let Some(reply_token) = event.reply_token else {
        return Ok(());
    };
    let Some(content) = event.message else {
        return Ok(());
    };
    if content.message_type != "text" {
        return Ok(());
    }
    let Some(text) = content.text else {
        return Ok(());
    };

    let now = state.clock.now_local();
    let days_left = days_remaining(state.config.target_date, now);
    let reply = message::reply_for(
        &text,
        days_left,
        state.config.target_date,
        state.config.window_start,
    );

    debug!(days_left, "replying to inbound message");
    state.api.reply_message(&reply_token, &reply).await
}
