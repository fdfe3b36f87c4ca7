//! ddaybot-gateway: HTTP server + scheduler wiring.
//!
//! Provides:
//! - `POST /callback` — signed LINE webhook, keyword replies
//! - `GET /health` — liveness check
//! - `GET /test` — manual countdown push for operational testing
//! - the background daily delivery task
//!
//! The webhook path and the scheduler task share only the read-only
//! [`Config`]; the send state lives inside the [`Notifier`], which
//! serializes the manual trigger against the daily loop itself.

pub mod handlers;
pub mod sink;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio_util::sync::CancellationToken;
use tracing::info;

use ddaybot_config::Config;
use ddaybot_line::LineApi;
use ddaybot_scheduler::{Clock, DeliveryWindow, Notifier, SystemClock, run_daily_loop};
use sink::LineSink;

/// Shared request-handler state.
pub struct GatewayState {
    pub api: Arc<LineApi>,
    pub config: Config,
    pub notifier: Arc<Notifier>,
    pub clock: Arc<dyn Clock>,
}

/// Build the route table over the given state.
pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/callback", post(handlers::callback_handler))
        .route("/health", get(handlers::health_handler))
        .route("/test", get(handlers::test_handler))
        .with_state(state)
}

/// Start the gateway server and the daily scheduler task.
///
/// This is the main entry point. It wires the LINE client into the
/// scheduler, spawns the delivery loop, binds the listener, and serves
/// until the process exits.
pub async fn start_gateway(
    config: Config,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let port = port_override.unwrap_or(config.port);

    let api = Arc::new(LineApi::new(&config.channel_access_token));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sink = Arc::new(LineSink::new(api.clone()));
    let notifier = Arc::new(Notifier::new(
        config.target_date,
        DeliveryWindow {
            start: config.window_start,
            end: config.window_end,
        },
        config.recheck_interval,
        config.group_id.clone(),
        sink,
    ));

    let cancel = CancellationToken::new();
    let scheduler_handle = tokio::spawn(run_daily_loop(
        notifier.clone(),
        clock.clone(),
        cancel.child_token(),
    ));

    let state = Arc::new(GatewayState {
        api,
        config,
        notifier,
        clock,
    });
    let app = router(state);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Gateway listening on {addr}");
    info!("  Webhook: http://{addr}/callback");
    info!("  Health:  http://{addr}/health");
    info!("  Trigger: http://{addr}/test");
    info!("  Daily scheduler: active");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    cancel.cancel();
    let _ = scheduler_handle.await;

    Ok(())
}
