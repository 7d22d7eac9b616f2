//! Parser for the people.anarchy-online.com `bio.xml` dialect.
//!
//! Layout: a `<character>` root holding `<name>`, `<basic_stats>` and an
//! optional `<organization_membership>` block, all snake_case.

use roxmltree::Document;

use crate::error::Error;
use crate::model::character::{CharacterSheet, OrganizationMembership};
use crate::provider::parser::{child, required_child, required_i32, required_text, text_of};

pub(super) fn parse(document: &Document) -> Result<CharacterSheet, Error> {
    let root = document.root_element();
    if root.tag_name().name() != "character" {
        return Err(Error::ParseError(format!(
            "unexpected root element <{}>",
            root.tag_name().name()
        )));
    }

    let name = required_child(root, "name")?;
    let stats = required_child(root, "basic_stats")?;

    let organization = match child(root, "organization_membership") {
        Some(block) => Some(OrganizationMembership {
            name: required_text(block, "organization_name")?,
            rank: required_text(block, "rank")?,
        }),
        None => None,
    };

    Ok(CharacterSheet {
        first_name: text_of(name, "firstname"),
        nick: text_of(name, "nick"),
        last_name: text_of(name, "lastname"),
        level: required_i32(stats, "level")?,
        breed: required_text(stats, "breed")?,
        gender: required_text(stats, "gender")?,
        faction: required_text(stats, "faction")?,
        profession: required_text(stats, "profession")?,
        profession_title: required_text(stats, "profession_title")?,
        defender_rank: required_text(stats, "defender_rank")?,
        defender_rank_id: required_i32(stats, "defender_rank_id")?,
        organization,
    })
}

#[cfg(test)]
mod tests {
    use crate::model::character::{NO_ORGANIZATION, NO_ORGANIZATION_RANK};
    use crate::provider::parser::parse_character;
    use crate::provider::Source;

    use super::*;

    const FULL_BIO: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<character>
  <name>
    <firstname>John</firstname>
    <nick>Nucleus</nick>
    <lastname>Doe</lastname>
  </name>
  <basic_stats>
    <level>220</level>
    <breed>Solitus</breed>
    <gender>Male</gender>
    <faction>Clan</faction>
    <profession>Engineer</profession>
    <profession_title>Master Engineer</profession_title>
    <defender_rank>Vindicator</defender_rank>
    <defender_rank_id>27</defender_rank_id>
  </basic_stats>
  <organization_membership>
    <organization_name>Steadfast</organization_name>
    <rank>Squad Commander</rank>
  </organization_membership>
</character>"#;

    /// Expect every field of a complete bio document to come through
    #[test]
    fn parses_full_document() {
        let sheet = parse_character(Source::PeopleAnarchyOnline, FULL_BIO)
            .unwrap()
            .unwrap();

        assert_eq!(sheet.first_name, "John");
        assert_eq!(sheet.nick, "Nucleus");
        assert_eq!(sheet.last_name, "Doe");
        assert_eq!(sheet.level, 220);
        assert_eq!(sheet.breed, "Solitus");
        assert_eq!(sheet.gender, "Male");
        assert_eq!(sheet.faction, "Clan");
        assert_eq!(sheet.profession, "Engineer");
        assert_eq!(sheet.profession_title, "Master Engineer");
        assert_eq!(sheet.defender_rank, "Vindicator");
        assert_eq!(sheet.defender_rank_id, 27);

        let org = sheet.organization.expect("organization block");
        assert_eq!(org.name, "Steadfast");
        assert_eq!(org.rank, "Squad Commander");
    }

    /// Expect the sentinels when the organization block is absent
    #[test]
    fn missing_organization_block_yields_sentinels() {
        let body = FULL_BIO.replace(
            "<organization_membership>\n    <organization_name>Steadfast</organization_name>\n    <rank>Squad Commander</rank>\n  </organization_membership>",
            "",
        );

        let sheet = parse_character(Source::PeopleAnarchyOnline, &body)
            .unwrap()
            .unwrap();

        assert_eq!(sheet.organization, None);
        assert_eq!(sheet.organization_name(), NO_ORGANIZATION);
        assert_eq!(sheet.organization_rank(), NO_ORGANIZATION_RANK);
    }

    /// Expect empty name elements to come through as empty strings
    #[test]
    fn empty_name_parts_are_allowed() {
        let body = FULL_BIO
            .replace("<firstname>John</firstname>", "<firstname/>")
            .replace("<lastname>Doe</lastname>", "");

        let sheet = parse_character(Source::PeopleAnarchyOnline, &body)
            .unwrap()
            .unwrap();

        assert_eq!(sheet.first_name, "");
        assert_eq!(sheet.last_name, "");
        assert_eq!(sheet.nick, "Nucleus");
    }

    /// Expect a non-numeric level to be a parse error
    #[test]
    fn non_numeric_level_is_a_parse_error() {
        let body = FULL_BIO.replace("<level>220</level>", "<level>twohundred</level>");

        let result = parse_character(Source::PeopleAnarchyOnline, &body);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    /// Expect a document missing its stats block to be a parse error
    #[test]
    fn missing_stats_block_is_a_parse_error() {
        let body = "<character><name><nick>Nucleus</nick></name></character>";

        let result = parse_character(Source::PeopleAnarchyOnline, body);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    /// Expect an unrelated document shape to be rejected
    #[test]
    fn wrong_root_element_is_a_parse_error() {
        let body = "<html><body>maintenance page</body></html>";

        let result = parse_character(Source::PeopleAnarchyOnline, body);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
