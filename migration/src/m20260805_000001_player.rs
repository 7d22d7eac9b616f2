use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_ACCESS_LEVEL_LAST_SEEN: &str = "idx-player-access_level-last_seen";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(big_integer_uniq(Player::UserId))
                    .col(string(Player::FirstName))
                    .col(string(Player::Name))
                    .col(string(Player::LastName))
                    .col(integer(Player::Level))
                    .col(string(Player::Breed))
                    .col(string(Player::Gender))
                    .col(string(Player::Faction))
                    .col(string(Player::Profession))
                    .col(string(Player::ProfessionTitle))
                    .col(string(Player::AiRank))
                    .col(integer(Player::AiLevel))
                    .col(string(Player::OrganizationName))
                    .col(string(Player::OrganizationRank))
                    .col(string(Player::Source))
                    .col(integer(Player::AccessLevel))
                    .col(timestamp(Player::LastSeen))
                    .col(timestamp(Player::CreatedAt))
                    .col(timestamp(Player::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // The roster sweep filters on membership and inactivity together.
        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_ACCESS_LEVEL_LAST_SEEN)
                    .table(Player::Table)
                    .col(Player::AccessLevel)
                    .col(Player::LastSeen)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_ACCESS_LEVEL_LAST_SEEN)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    UserId,
    FirstName,
    Name,
    LastName,
    Level,
    Breed,
    Gender,
    Faction,
    Profession,
    ProfessionTitle,
    AiRank,
    AiLevel,
    OrganizationName,
    OrganizationRank,
    Source,
    AccessLevel,
    LastSeen,
    CreatedAt,
    UpdatedAt,
}
