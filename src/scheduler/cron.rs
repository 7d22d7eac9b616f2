//! Cron registration for the background jobs.

use std::sync::Arc;

use chrono::Duration;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::config::Config;
use crate::service::roster::{RosterService, RosterTransport};

use super::config::roster as roster_config;

/// Initialize and start the cron job scheduler.
///
/// Registers the roster pruning sweep with the threshold taken from
/// `config`; the job shares nothing with in-flight resolutions beyond the
/// database itself.
pub async fn start_scheduler(
    db: &DatabaseConnection,
    config: &Config,
    transport: Arc<dyn RosterTransport>,
) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let db_clone = db.clone();
    let inactive_after = Duration::days(config.inactive_after_days);

    sched
        .add(Job::new_async(
            roster_config::CRON_EXPRESSION,
            move |_, _| {
                let db = db_clone.clone();
                let transport = transport.clone();

                Box::pin(async move {
                    let roster_service = RosterService::new(&db, transport.as_ref());

                    match roster_service.prune_inactive(inactive_after).await {
                        Ok(count) => {
                            tracing::info!("Removed {} inactive player(s) from the roster", count)
                        }
                        Err(e) => tracing::error!("Error pruning inactive roster members: {:?}", e),
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;
    Ok(())
}
