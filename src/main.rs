// Main entry point - wiring and lifecycle
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::application::dashboard_api::DashboardApi;
use crate::application::dispatcher::ActionDispatcher;
use crate::application::poller::PollScheduler;
use crate::application::push_listener::PushListener;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpDashboardApi;
use crate::infrastructure::push_channel;
use crate::presentation::page::{PageSurface, TracingSurface};
use crate::presentation::render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Backend API client (infrastructure layer)
    let api: Arc<dyn DashboardApi> =
        Arc::new(HttpDashboardApi::new(config.server.base_url.clone()));

    // Headless page surface: every widget mutation is logged
    let surface: Arc<dyn PageSurface> = Arc::new(TracingSurface);

    // Periodic refresh jobs (application layer)
    let mut scheduler = PollScheduler::new();
    scheduler.spawn_dashboard_jobs(api.clone(), surface.clone(), &config.polling);

    // Push channel and listener
    let push_url = format!(
        "{}{}",
        config.server.base_url.trim_end_matches('/'),
        config.server.push_path
    );
    let listener = Arc::new(PushListener::new(surface.clone()));
    let push_listener = listener.clone();
    let push_task = tokio::spawn(async move {
        let messages = push_channel::subscribe(reqwest::Client::new(), push_url);
        push_listener.run(Box::pin(messages)).await;
    });

    // User actions come in over stdin while headless
    let dispatcher = ActionDispatcher::new(api, surface.clone());

    info!("factory dashboard running, commands: next <id> | reorder | ack | toggle | scroll <y>");
    tokio::select! {
        _ = run_console(&dispatcher, &listener, &surface) => {}
        _ = tokio::signal::ctrl_c() => {}
    }

    info!("shutting down");
    push_task.abort();
    scheduler.shutdown();

    Ok(())
}

/// Minimal operator console standing in for the host page's buttons.
async fn run_console(
    dispatcher: &ActionDispatcher,
    listener: &PushListener,
    surface: &Arc<dyn PageSurface>,
) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.trim().split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("next"), Some(order_id)) => dispatcher.advance_workflow(order_id).await,
            (Some("reorder"), None) => dispatcher.trigger_auto_reorder().await,
            (Some("ack"), None) => listener.acknowledge(),
            (Some("toggle"), None) => surface.apply(&render::toggle_notifications()),
            (Some("scroll"), Some(y)) => match y.parse() {
                Ok(y) => surface.apply(&render::navbar_scroll(y)),
                Err(_) => warn!(y, "scroll offset is not a number"),
            },
            (None, _) => {}
            (Some(cmd), _) => warn!(cmd, "unknown command"),
        }
    }

    // Stay up headless once stdin closes.
    futures::future::pending::<()>().await;
}
