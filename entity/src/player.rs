use sea_orm::entity::prelude::*;

/// A chat user's in-game character record, one row per chat user.
///
/// Character fields are overwritten on every successful lookup; the roster
/// fields (`access_level`, `last_seen`) belong to the roster-management
/// flows and survive character updates untouched.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Chat user id owning this character. Upsert key.
    #[sea_orm(unique)]
    pub user_id: i64,
    pub first_name: String,
    /// Display name (the character's nick).
    pub name: String,
    pub last_name: String,
    pub level: i32,
    pub breed: String,
    pub gender: String,
    pub faction: String,
    pub profession: String,
    pub profession_title: String,
    pub ai_rank: String,
    pub ai_level: i32,
    /// `"No organization"` when the character is unaffiliated.
    pub organization_name: String,
    /// `"None"` when the character is unaffiliated.
    pub organization_rank: String,
    /// Which lookup site last wrote this record.
    pub source: String,
    /// Roster membership flag: 1 = member, 0 = removed.
    pub access_level: i32,
    pub last_seen: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
