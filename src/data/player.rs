//! Repository for persisted player character records.

use chrono::{NaiveDateTime, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::character::CharacterSheet;
use crate::provider::Source;

/// `access_level` of an active roster member.
pub const ACCESS_LEVEL_MEMBER: i32 = 1;
/// `access_level` of a user removed from the roster.
pub const ACCESS_LEVEL_REMOVED: i32 = 0;

/// Queries and writes for the `player` table.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates the character record for `user_id`.
    ///
    /// One statement keyed on the unique `user_id` column. A fresh insert
    /// gets the roster defaults (not a member, seen now); a conflicting row
    /// has only its character fields, `source` and `updated_at` replaced,
    /// leaving `access_level` and `last_seen` to the roster flows that own
    /// them. Re-running with an identical sheet changes nothing observable.
    pub async fn upsert(
        &self,
        user_id: i64,
        sheet: CharacterSheet,
        source: Source,
    ) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let organization_name = sheet.organization_name().to_string();
        let organization_rank = sheet.organization_rank().to_string();

        let player = entity::player::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            first_name: ActiveValue::Set(sheet.first_name),
            name: ActiveValue::Set(sheet.nick),
            last_name: ActiveValue::Set(sheet.last_name),
            level: ActiveValue::Set(sheet.level),
            breed: ActiveValue::Set(sheet.breed),
            gender: ActiveValue::Set(sheet.gender),
            faction: ActiveValue::Set(sheet.faction),
            profession: ActiveValue::Set(sheet.profession),
            profession_title: ActiveValue::Set(sheet.profession_title),
            ai_rank: ActiveValue::Set(sheet.defender_rank),
            ai_level: ActiveValue::Set(sheet.defender_rank_id),
            organization_name: ActiveValue::Set(organization_name),
            organization_rank: ActiveValue::Set(organization_rank),
            source: ActiveValue::Set(source.label().to_string()),
            access_level: ActiveValue::Set(ACCESS_LEVEL_REMOVED),
            last_seen: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Player::insert(player)
            .on_conflict(
                OnConflict::column(entity::player::Column::UserId)
                    .update_columns([
                        entity::player::Column::FirstName,
                        entity::player::Column::Name,
                        entity::player::Column::LastName,
                        entity::player::Column::Level,
                        entity::player::Column::Breed,
                        entity::player::Column::Gender,
                        entity::player::Column::Faction,
                        entity::player::Column::Profession,
                        entity::player::Column::ProfessionTitle,
                        entity::player::Column::AiRank,
                        entity::player::Column::AiLevel,
                        entity::player::Column::OrganizationName,
                        entity::player::Column::OrganizationRank,
                        entity::player::Column::Source,
                        entity::player::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Looks up the record owned by `user_id`.
    pub async fn find_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Roster members whose last activity is at or before `cutoff`.
    pub async fn find_inactive(
        &self,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::AccessLevel.eq(ACCESS_LEVEL_MEMBER))
            .filter(entity::player::Column::LastSeen.lte(cutoff))
            .all(self.db)
            .await
    }

    /// Demotes the given users off the roster in one bulk update.
    ///
    /// Returns the number of rows touched.
    pub async fn demote(&self, user_ids: &[i64]) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::AccessLevel,
                Expr::value(ACCESS_LEVEL_REMOVED),
            )
            .col_expr(
                entity::player::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player::Column::UserId.is_in(user_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the roster membership flag for `user_id`.
    ///
    /// Consumed by the roster-management flows outside the resolution
    /// pipeline (joining the roster sets [`ACCESS_LEVEL_MEMBER`]).
    pub async fn set_access_level(&self, user_id: i64, access_level: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::AccessLevel, Expr::value(access_level))
            .col_expr(
                entity::player::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Stamps `user_id`'s `last_seen` with the current time.
    ///
    /// Called by the host bot whenever the user shows activity; the roster
    /// sweep reads what this writes.
    pub async fn touch_last_seen(&self, user_id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::LastSeen,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
