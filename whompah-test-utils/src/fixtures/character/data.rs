//! Player row insertion utilities.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, fixtures::character::CharacterFixtures, model::PlayerModel};

impl<'a> CharacterFixtures<'a> {
    /// Insert a mock player row.
    ///
    /// Creates a player record with standard character values, parameterized
    /// on the roster fields the pruning tests care about. If a row for
    /// `user_id` already exists, returns the existing record instead of
    /// creating a duplicate.
    pub async fn insert_mock_player(
        &mut self,
        user_id: i64,
        access_level: i32,
        last_seen: NaiveDateTime,
    ) -> Result<PlayerModel, TestError> {
        if let Some(existing_player) = entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.eq(user_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_player);
        }

        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                first_name: ActiveValue::Set("John".to_string()),
                name: ActiveValue::Set(format!("Testchar{}", user_id)),
                last_name: ActiveValue::Set("Doe".to_string()),
                level: ActiveValue::Set(220),
                breed: ActiveValue::Set("Solitus".to_string()),
                gender: ActiveValue::Set("Male".to_string()),
                faction: ActiveValue::Set("Clan".to_string()),
                profession: ActiveValue::Set("Engineer".to_string()),
                profession_title: ActiveValue::Set("Master Engineer".to_string()),
                ai_rank: ActiveValue::Set("Vindicator".to_string()),
                ai_level: ActiveValue::Set(27),
                organization_name: ActiveValue::Set("No organization".to_string()),
                organization_rank: ActiveValue::Set("None".to_string()),
                source: ActiveValue::Set("people.anarchy-online.com".to_string()),
                access_level: ActiveValue::Set(access_level),
                last_seen: ActiveValue::Set(last_seen),
                created_at: ActiveValue::Set(last_seen),
                updated_at: ActiveValue::Set(last_seen),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
