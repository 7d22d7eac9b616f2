//! Parser for the rubi-ka.net ASMX dialect.
//!
//! Layout: a namespaced `<AoCharacter>` root holding `<Name>`, `<Stats>`
//! and an optional `<Organization>` block, all PascalCase. The faction
//! field is called `Side` in this dialect.

use roxmltree::Document;

use crate::error::Error;
use crate::model::character::{CharacterSheet, OrganizationMembership};
use crate::provider::parser::{child, required_child, required_i32, required_text, text_of};

pub(super) fn parse(document: &Document) -> Result<CharacterSheet, Error> {
    let root = document.root_element();
    if root.tag_name().name() != "AoCharacter" {
        return Err(Error::ParseError(format!(
            "unexpected root element <{}>",
            root.tag_name().name()
        )));
    }

    let name = required_child(root, "Name")?;
    let stats = required_child(root, "Stats")?;

    let organization = match child(root, "Organization") {
        Some(block) => Some(OrganizationMembership {
            name: required_text(block, "Name")?,
            rank: required_text(block, "Rank")?,
        }),
        None => None,
    };

    Ok(CharacterSheet {
        first_name: text_of(name, "First"),
        nick: text_of(name, "Nick"),
        last_name: text_of(name, "Last"),
        level: required_i32(stats, "Level")?,
        breed: required_text(stats, "Breed")?,
        gender: required_text(stats, "Gender")?,
        faction: required_text(stats, "Side")?,
        profession: required_text(stats, "Profession")?,
        profession_title: required_text(stats, "ProfessionTitle")?,
        defender_rank: required_text(stats, "DefenderRank")?,
        defender_rank_id: required_i32(stats, "DefenderRankId")?,
        organization,
    })
}

#[cfg(test)]
mod tests {
    use crate::model::character::NO_ORGANIZATION;
    use crate::provider::parser::parse_character;
    use crate::provider::Source;

    use super::*;

    const FULL_DOCUMENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<AoCharacter xmlns="https://rubi-ka.net/schemas/character">
  <Name>
    <First>Jane</First>
    <Nick>Photon</Nick>
    <Last>Roe</Last>
  </Name>
  <Stats>
    <Level>150</Level>
    <Breed>Opifex</Breed>
    <Gender>Female</Gender>
    <Side>Omni</Side>
    <Profession>Agent</Profession>
    <ProfessionTitle>Assassin</ProfessionTitle>
    <DefenderRank>Defender</DefenderRank>
    <DefenderRankId>15</DefenderRankId>
  </Stats>
  <Organization>
    <Name>Omni-Pol</Name>
    <Rank>Officer</Rank>
  </Organization>
</AoCharacter>"#;

    /// Expect every field of a complete ASMX document to come through,
    /// including the namespaced root
    #[test]
    fn parses_full_document() {
        let sheet = parse_character(Source::RubiKa, FULL_DOCUMENT)
            .unwrap()
            .unwrap();

        assert_eq!(sheet.first_name, "Jane");
        assert_eq!(sheet.nick, "Photon");
        assert_eq!(sheet.last_name, "Roe");
        assert_eq!(sheet.level, 150);
        assert_eq!(sheet.breed, "Opifex");
        assert_eq!(sheet.gender, "Female");
        assert_eq!(sheet.faction, "Omni");
        assert_eq!(sheet.profession, "Agent");
        assert_eq!(sheet.profession_title, "Assassin");
        assert_eq!(sheet.defender_rank, "Defender");
        assert_eq!(sheet.defender_rank_id, 15);

        let org = sheet.organization.expect("organization block");
        assert_eq!(org.name, "Omni-Pol");
        assert_eq!(org.rank, "Officer");
    }

    /// Expect the sentinel accessors when the organization block is absent
    #[test]
    fn missing_organization_block_yields_sentinels() {
        let body = FULL_DOCUMENT.replace(
            "<Organization>\n    <Name>Omni-Pol</Name>\n    <Rank>Officer</Rank>\n  </Organization>",
            "",
        );

        let sheet = parse_character(Source::RubiKa, &body).unwrap().unwrap();

        assert_eq!(sheet.organization, None);
        assert_eq!(sheet.organization_name(), NO_ORGANIZATION);
    }

    /// Expect a bio-dialect document fed to this parser to be rejected
    #[test]
    fn bio_dialect_is_not_accepted() {
        let body = "<character><name><nick>Nucleus</nick></name></character>";

        let result = parse_character(Source::RubiKa, body);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    /// Expect a non-numeric defender rank id to be a parse error
    #[test]
    fn non_numeric_rank_id_is_a_parse_error() {
        let body =
            FULL_DOCUMENT.replace("<DefenderRankId>15</DefenderRankId>", "<DefenderRankId>?</DefenderRankId>");

        let result = parse_character(Source::RubiKa, &body);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
