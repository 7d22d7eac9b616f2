use std::sync::Arc;

use async_trait::async_trait;
use whompah_test_utils::prelude::*;

use whompah::config::Config;
use whompah::error::Error;
use whompah::scheduler::cron::start_scheduler;
use whompah::service::roster::RosterTransport;

struct NoopTransport;

#[async_trait]
impl RosterTransport for NoopTransport {
    async fn remove_from_roster(&self, _user_id: i64) -> Result<(), Error> {
        Ok(())
    }
}

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        user_agent: whompah_test_utils::constant::TEST_USER_AGENT.to_string(),
        people_endpoint: "http://127.0.0.1/bio/{name}".to_string(),
        rubika_endpoint: "http://127.0.0.1/asmx?name={name}".to_string(),
        inactive_after_days: 30,
    }
}

/// Expect the scheduler to start with the pruning job registered; this
/// pins the cron expression as parseable.
#[tokio::test]
async fn starts_with_pruning_job() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Player)?;

    let result = start_scheduler(&test.db, &test_config(), Arc::new(NoopTransport)).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}
