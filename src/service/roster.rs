//! Inactivity-based roster pruning.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::data::player::PlayerRepository;
use crate::error::Error;

/// The chat-layer seam the pruning sweep drives.
///
/// Implemented by the host bot over its chat connection. Implementors map
/// their own failures into [`Error::ChatError`].
#[async_trait]
pub trait RosterTransport: Send + Sync {
    /// Removes `user_id` from the chat roster.
    async fn remove_from_roster(&self, user_id: i64) -> Result<(), Error>;
}

/// Demotes roster members who have gone inactive and drops them from the
/// live chat roster.
pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    transport: &'a dyn RosterTransport,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection, transport: &'a dyn RosterTransport) -> Self {
        Self { db, transport }
    }

    /// Demotes every roster member unseen for longer than `inactive_after`
    /// and issues one roster removal per demoted record.
    ///
    /// The demotion is one bulk update over exactly the selected ids, and
    /// removals are only sent once that write has committed. A store
    /// failure aborts the whole sweep with access levels intact; a removal
    /// failure is logged per record and does not stop the remaining
    /// removals. Returns the number of demoted records.
    pub async fn prune_inactive(&self, inactive_after: Duration) -> Result<usize, Error> {
        let cutoff = (Utc::now() - inactive_after).naive_utc();

        let player_repo = PlayerRepository::new(self.db);
        let inactive = player_repo.find_inactive(cutoff).await?;
        if inactive.is_empty() {
            return Ok(0);
        }

        let user_ids: Vec<i64> = inactive.iter().map(|player| player.user_id).collect();
        player_repo.demote(&user_ids).await?;

        for player in &inactive {
            if let Err(err) = self.transport.remove_from_roster(player.user_id).await {
                // The record stays demoted; the next sweep will not retry
                // the removal.
                tracing::warn!(
                    "Failed to remove user {} ({}) from roster: {}",
                    player.user_id,
                    player.name,
                    err
                );
            }
        }

        Ok(inactive.len())
    }
}
