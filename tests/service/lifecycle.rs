//! End-to-end flow across the public API: resolve a character, join the
//! roster, go inactive, get swept.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::mpsc;
use whompah_test_utils::prelude::*;

use whompah::data::player::{PlayerRepository, ACCESS_LEVEL_MEMBER, ACCESS_LEVEL_REMOVED};
use whompah::error::Error;
use whompah::provider::LookupClient;
use whompah::service::character::CharacterService;
use whompah::service::roster::{RosterService, RosterTransport};

#[derive(Default)]
struct RecordingTransport {
    removed: Mutex<Vec<i64>>,
}

#[async_trait]
impl RosterTransport for RecordingTransport {
    async fn remove_from_roster(&self, user_id: i64) -> Result<(), Error> {
        self.removed.lock().unwrap().push(user_id);
        Ok(())
    }
}

fn test_client(test: &TestSetup) -> LookupClient {
    LookupClient::builder()
        .user_agent(whompah_test_utils::constant::TEST_USER_AGENT)
        .people_endpoint(&test.people_endpoint())
        .rubika_endpoint(&test.rubika_endpoint())
        .build()
        .unwrap()
}

/// A user's character is resolved and persisted, the user joins the roster,
/// then falls inactive and the sweep demotes and removes them.
#[tokio::test]
async fn resolved_member_is_swept_after_inactivity() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Player)?;
    let body = factory::bio_document("Nucleus", 220, "Clan", Some(("Steadfast", "Member")));
    let endpoint = test.character().create_bio_endpoint("Nucleus", &body, 1);

    let lookup_client = test_client(&test);
    let (ready_tx, mut ready_rx) = mpsc::unbounded_channel();
    let character_service =
        CharacterService::new(&test.db, &lookup_client).with_ready_channel(ready_tx);

    // Resolution persists the record and signals readiness.
    let resolved = character_service
        .resolve_character(1001, "Nucleus")
        .await
        .unwrap()
        .expect("character exists upstream");
    assert_eq!(ready_rx.try_recv().unwrap().character_name, "Nucleus");
    endpoint.assert();

    // The roster-management flow puts the user on the roster.
    let player_repo = PlayerRepository::new(&test.db);
    player_repo
        .set_access_level(resolved.user_id, ACCESS_LEVEL_MEMBER)
        .await?;

    // With a zero-day threshold everyone already persisted counts as
    // inactive, so the sweep picks the member up immediately.
    let transport = RecordingTransport::default();
    let roster_service = RosterService::new(&test.db, &transport);
    let demoted = roster_service
        .prune_inactive(Duration::zero())
        .await
        .unwrap();

    assert_eq!(demoted, 1);
    assert_eq!(*transport.removed.lock().unwrap(), vec![1001]);

    let swept = player_repo.find_by_user_id(1001).await?.unwrap();
    assert_eq!(swept.access_level, ACCESS_LEVEL_REMOVED);
    // the character record itself survives the sweep
    assert_eq!(swept.name, "Nucleus");
    assert_eq!(swept.organization_name, "Steadfast");

    Ok(())
}

/// A second resolution through the fallback site overwrites the source tag
/// but leaves roster membership alone.
#[tokio::test]
async fn re_resolution_via_fallback_keeps_roster_state() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Player)?;
    let bio_body = factory::bio_document("Nucleus", 220, "Clan", None);
    let first_endpoint = test.character().create_bio_endpoint("Nucleus", &bio_body, 1);

    let lookup_client = test_client(&test);
    let character_service = CharacterService::new(&test.db, &lookup_client);

    character_service
        .resolve_character(1001, "Nucleus")
        .await
        .unwrap()
        .expect("first resolution");
    first_endpoint.assert();

    let player_repo = PlayerRepository::new(&test.db);
    player_repo
        .set_access_level(1001, ACCESS_LEVEL_MEMBER)
        .await?;

    // Primary goes down; the fallback site answers with newer data.
    let _failing = test.character().create_bio_endpoint_error("Nucleus", 502, 1);
    let rubika_body = factory::rubika_document("Nucleus", 221, "Clan", None);
    let rubika_endpoint = test
        .character()
        .create_rubika_endpoint("Nucleus", &rubika_body, 1);

    let updated = character_service
        .resolve_character(1001, "Nucleus")
        .await
        .unwrap()
        .expect("fallback resolution");
    rubika_endpoint.assert();

    assert_eq!(updated.level, 221);
    assert_eq!(updated.source, "Rubi-Ka.net");
    assert_eq!(updated.access_level, ACCESS_LEVEL_MEMBER);

    Ok(())
}
