use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tokio::sync::Notify;
use tracing::info;

use attendance_api::config::ApiConfig;
use attendance_api::router::build_router;
use attendance_api::state::{AppState, OtpSettings};
use attendance_api_migration::{Migrator, MigratorTrait};
use attendance_core::clock::SystemClock;
use attendance_core::config::Config;
use attendance_core::shutdown::{serve_with_drain, shutdown_signal};
use attendance_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before tracing, so a `RUST_LOG` in `.env` takes effect.
    let config = ApiConfig::load().context("load configuration")?;
    config.check_ranges().context("invalid configuration")?;
    init_tracing("attendance_api=info,tower_http=info");

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;
    if config.run_migrations {
        Migrator::up(&db, None).await.context("run migrations")?;
    }

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        clock: Arc::new(SystemClock),
        otp: OtpSettings {
            ttl: config.otp_ttl(),
            policy: config.otp_issue_policy,
            expose_in_response: config.expose_otp_in_response,
        },
        session_ttl_secs: config.session_ttl_secs,
        request_timeout: config.request_timeout(),
    };
    if state.otp.expose_in_response {
        tracing::warn!("EXPOSE_OTP_IN_RESPONSE is on; login codes are returned to callers");
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("api listening on {addr}");

    // Stop accepting on the first signal, then give in-flight requests
    // `shutdown_timeout` to finish.
    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, router).with_graceful_shutdown({
        let stop = Arc::clone(&stop);
        async move { stop.notified().await }
    });
    let signal = async move {
        shutdown_signal().await;
        stop.notify_one();
    };
    let drained = serve_with_drain(server.into_future(), signal, config.shutdown_timeout())
        .await
        .context("server error")?;
    info!(drained, "api stopped");
    Ok(())
}
