//! The normalized character document produced by the provider parsers.

use serde::{Deserialize, Serialize};

/// Organization name persisted for characters without an organization.
pub const NO_ORGANIZATION: &str = "No organization";
/// Organization rank persisted for characters without an organization.
pub const NO_ORGANIZATION_RANK: &str = "None";

/// A character document as parsed from either lookup site.
///
/// Both provider dialects decode into this one shape; the persistence layer
/// does not know or care which site a sheet came from beyond the source tag
/// it is handed separately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub first_name: String,
    /// The character's nick, used as display name.
    pub nick: String,
    pub last_name: String,
    pub level: i32,
    pub breed: String,
    pub gender: String,
    pub faction: String,
    pub profession: String,
    pub profession_title: String,
    /// Alien-invasion defender rank label.
    pub defender_rank: String,
    /// Numeric id behind the defender rank label.
    pub defender_rank_id: i32,
    /// Present only when the character belongs to an organization.
    pub organization: Option<OrganizationMembership>,
}

/// The optional organization block of a character document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationMembership {
    pub name: String,
    pub rank: String,
}

impl CharacterSheet {
    /// Organization name with the unaffiliated sentinel applied.
    pub fn organization_name(&self) -> &str {
        self.organization
            .as_ref()
            .map(|org| org.name.as_str())
            .unwrap_or(NO_ORGANIZATION)
    }

    /// Organization rank with the unaffiliated sentinel applied.
    pub fn organization_rank(&self) -> &str {
        self.organization
            .as_ref()
            .map(|org| org.rank.as_str())
            .unwrap_or(NO_ORGANIZATION_RANK)
    }
}
