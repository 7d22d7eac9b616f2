//! XML document factories for both lookup-site dialects.
//!
//! Fields not exposed as parameters carry fixed test values; tests that
//! need a broken document build it inline instead.

/// A people.anarchy-online.com `bio.xml` document.
pub fn bio_document(
    nick: &str,
    level: i32,
    faction: &str,
    organization: Option<(&str, &str)>,
) -> String {
    let organization_block = match organization {
        Some((name, rank)) => format!(
            "<organization_membership><organization_name>{}</organization_name><rank>{}</rank></organization_membership>",
            name, rank
        ),
        None => String::new(),
    };

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<character><name><firstname>John</firstname><nick>{}</nick><lastname>Doe</lastname></name><basic_stats><level>{}</level><breed>Solitus</breed><gender>Male</gender><faction>{}</faction><profession>Engineer</profession><profession_title>Master Engineer</profession_title><defender_rank>Vindicator</defender_rank><defender_rank_id>27</defender_rank_id></basic_stats>{}</character>"#,
        nick, level, faction, organization_block
    )
}

/// A rubi-ka.net ASMX character document.
pub fn rubika_document(
    nick: &str,
    level: i32,
    faction: &str,
    organization: Option<(&str, &str)>,
) -> String {
    let organization_block = match organization {
        Some((name, rank)) => format!(
            "<Organization><Name>{}</Name><Rank>{}</Rank></Organization>",
            name, rank
        ),
        None => String::new(),
    };

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<AoCharacter xmlns="https://rubi-ka.net/schemas/character"><Name><First>John</First><Nick>{}</Nick><Last>Doe</Last></Name><Stats><Level>{}</Level><Breed>Solitus</Breed><Gender>Male</Gender><Side>{}</Side><Profession>Engineer</Profession><ProfessionTitle>Master Engineer</ProfessionTitle><DefenderRank>Vindicator</DefenderRank><DefenderRankId>27</DefenderRankId></Stats>{}</AoCharacter>"#,
        nick, level, faction, organization_block
    )
}
