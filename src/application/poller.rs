// Poll scheduler - cancelable periodic refresh jobs
use crate::application::dashboard_api::{ApiError, DashboardApi};
use crate::infrastructure::config::PollingSettings;
use crate::presentation::page::PageSurface;
use crate::presentation::render;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Owns the periodic refresh timers. Jobs start when spawned and run until
/// `shutdown` (or drop) aborts them. A fetch is awaited before the next tick
/// is armed, so a slow response can never overwrite a newer one.
pub struct PollScheduler {
    jobs: Vec<(&'static str, JoinHandle<()>)>,
}

impl PollScheduler {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Register a named periodic job. The first tick fires immediately.
    /// A failed tick is logged and swallowed; the next tick is the retry.
    pub fn spawn_job<F, Fut>(&mut self, name: &'static str, interval: Duration, mut job: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = job().await {
                    debug!(job = name, error = %e, "poll failed, keeping previous render");
                }
            }
        });
        info!(job = name, interval_ms = interval.as_millis() as u64, "poll job started");
        self.jobs.push((name, handle));
    }

    /// Register the three dashboard refresh jobs: alerts, maintenance and
    /// the operator task queue.
    pub fn spawn_dashboard_jobs(
        &mut self,
        api: Arc<dyn DashboardApi>,
        surface: Arc<dyn PageSurface>,
        intervals: &PollingSettings,
    ) {
        let (alerts_api, alerts_surface) = (api.clone(), surface.clone());
        self.spawn_job(
            "alerts",
            Duration::from_millis(intervals.alerts_ms),
            move || {
                let (api, surface) = (alerts_api.clone(), alerts_surface.clone());
                async move {
                    let alerts = api.fetch_alerts().await?;
                    surface.apply_all(&render::render_alerts(&alerts));
                    Ok(())
                }
            },
        );

        let (maint_api, maint_surface) = (api.clone(), surface.clone());
        self.spawn_job(
            "maintenance",
            Duration::from_millis(intervals.maintenance_ms),
            move || {
                let (api, surface) = (maint_api.clone(), maint_surface.clone());
                async move {
                    let snapshot = api.fetch_maintenance().await?;
                    surface.apply_all(&render::render_maintenance(&snapshot));
                    Ok(())
                }
            },
        );

        self.spawn_job(
            "orders",
            Duration::from_millis(intervals.orders_ms),
            move || {
                let (api, surface) = (api.clone(), surface.clone());
                async move {
                    let orders = api.fetch_orders().await?;
                    surface.apply_all(&render::render_orders(&orders));
                    Ok(())
                }
            },
        );
    }

    /// Abort all jobs. Idempotent.
    pub fn shutdown(&mut self) {
        for (name, handle) in self.jobs.drain(..) {
            handle.abort();
            info!(job = name, "poll job stopped");
        }
    }
}

impl Default for PollScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
