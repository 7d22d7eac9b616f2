//! The character resolution pipeline.

use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::UnboundedSender;

use crate::data::player::PlayerRepository;
use crate::error::Error;
use crate::model::event::CharacterReady;
use crate::provider::{parser::parse_character, LookupClient, Source};

/// Resolves a chat user's character through the lookup sites and persists it.
///
/// One generic flow covers both sites: fetch, parse in the site's dialect,
/// upsert, notify. The fallback site is tried exactly once and only after a
/// transport failure from the primary; an empty "no such character" answer
/// is authoritative and short-circuits without touching the fallback.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    lookup_client: &'a LookupClient,
    ready_tx: Option<UnboundedSender<CharacterReady>>,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, lookup_client: &'a LookupClient) -> Self {
        Self {
            db,
            lookup_client,
            ready_tx: None,
        }
    }

    /// Registers a channel that receives one [`CharacterReady`] event per
    /// successful resolution, sent only after the record is persisted.
    pub fn with_ready_channel(mut self, ready_tx: UnboundedSender<CharacterReady>) -> Self {
        self.ready_tx = Some(ready_tx);
        self
    }

    /// Resolves `character_name` for `user_id` and persists the result.
    ///
    /// Returns the persisted record, or `None` when the lookup sites
    /// confirm the character does not exist. The returned future is the
    /// awaitable form of the ready signal; callers that only care about the
    /// side effects can drop the value and listen on the ready channel.
    pub async fn resolve_character(
        &self,
        user_id: i64,
        character_name: &str,
    ) -> Result<Option<entity::player::Model>, Error> {
        let result = self.resolve_with_fallback(user_id, character_name).await;

        if let Err(err) = &result {
            if !matches!(err, Error::ProviderError(_)) {
                tracing::error!("Failed to resolve character {}: {}", character_name, err);
            }
        }

        result
    }

    async fn resolve_with_fallback(
        &self,
        user_id: i64,
        character_name: &str,
    ) -> Result<Option<entity::player::Model>, Error> {
        match self
            .resolve_from(Source::PeopleAnarchyOnline, user_id, character_name)
            .await
        {
            Err(Error::ProviderError(err)) => {
                tracing::warn!(
                    "Character lookup for {} via {} failed, trying {}: {}",
                    character_name,
                    Source::PeopleAnarchyOnline,
                    Source::RubiKa,
                    err
                );

                self.resolve_from(Source::RubiKa, user_id, character_name)
                    .await
                    .map_err(|err| {
                        if let Error::ProviderError(provider_err) = &err {
                            tracing::warn!(
                                "Character lookup for {} via fallback {} failed: {}",
                                character_name,
                                provider_err.provider(),
                                provider_err
                            );
                        }
                        err
                    })
            }
            other => other,
        }
    }

    /// The single-site flow: fetch, parse, upsert, notify.
    async fn resolve_from(
        &self,
        source: Source,
        user_id: i64,
        character_name: &str,
    ) -> Result<Option<entity::player::Model>, Error> {
        let body = self.lookup_client.fetch(source, character_name).await?;

        let Some(sheet) = parse_character(source, &body)? else {
            tracing::debug!("{} has no record of character {}", source, character_name);
            return Ok(None);
        };

        let player_repo = PlayerRepository::new(self.db);
        let player = player_repo.upsert(user_id, sheet, source).await?;

        // Notification strictly follows the confirmed write. A dropped
        // receiver is the listener's business, not a resolution failure.
        if let Some(ready_tx) = &self.ready_tx {
            let _ = ready_tx.send(CharacterReady {
                user_id,
                character_name: player.name.clone(),
            });
        }

        Ok(Some(player))
    }
}
