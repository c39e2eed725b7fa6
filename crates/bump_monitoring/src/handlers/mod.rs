use crate::config::{Config, SyncPlan};
use crate::errors::BumpMonitoringResult;
use crate::service::{SyncReport, Syncer};

/// Run a full sync with the monitoring mixin layout
pub async fn run(config: Config) -> BumpMonitoringResult<SyncReport> {
    let report = Syncer::new(config, SyncPlan::default())?
        .sync_all()
        .await
        .inspect_err(|e| {
            tracing::debug!("sync aborted: {:?}", e);
        })?;

    tracing::info!(
        "Copied {} file(s) for {} optional and {} required config path(s)",
        report.copied().len(),
        report.optional().len(),
        report.required().len()
    );

    Ok(report)
}
