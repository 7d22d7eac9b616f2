//! Character document parsers, one per lookup-site dialect.
//!
//! Both sites answer HTTP 200 with a stub body when a character does not
//! exist, so "document too short" is a successful no-data outcome here, not
//! a failure. Everything longer must decode into a full
//! [`CharacterSheet`]; any structural surprise is a
//! [`Error::ParseError`] and never a panic.

mod bio;
mod rubika;

use roxmltree::{Document, Node};

use crate::error::Error;
use crate::model::character::CharacterSheet;
use crate::provider::Source;

/// Bodies at or under this many bytes mean "no such character" upstream.
pub const EMPTY_BODY_THRESHOLD: usize = 10;

/// Parses a raw lookup response body in the dialect of `source`.
///
/// Returns `Ok(None)` when the body is the site's empty "character not
/// found" stub; that outcome is authoritative and must not trigger the
/// fallback site.
pub fn parse_character(source: Source, body: &str) -> Result<Option<CharacterSheet>, Error> {
    if body.len() <= EMPTY_BODY_THRESHOLD {
        return Ok(None);
    }

    let document = Document::parse(body).map_err(|err| Error::ParseError(err.to_string()))?;

    let sheet = match source {
        Source::PeopleAnarchyOnline => bio::parse(&document)?,
        Source::RubiKa => rubika::parse(&document)?,
    };

    Ok(Some(sheet))
}

// Element lookups compare local names only so document namespaces (the ASMX
// dialect carries one) never matter.

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|candidate| candidate.is_element() && candidate.tag_name().name() == name)
}

fn required_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Result<Node<'a, 'input>, Error> {
    child(node, name).ok_or_else(|| Error::ParseError(format!("missing <{}> element", name)))
}

/// Text of an optional element; missing or empty elements become `""`.
fn text_of(node: Node<'_, '_>, name: &str) -> String {
    child(node, name)
        .and_then(|element| element.text())
        .unwrap_or_default()
        .to_string()
}

fn required_text(node: Node<'_, '_>, name: &str) -> Result<String, Error> {
    let element = required_child(node, name)?;
    Ok(element.text().unwrap_or_default().to_string())
}

fn required_i32(node: Node<'_, '_>, name: &str) -> Result<i32, Error> {
    let text = required_text(node, name)?;
    text.trim()
        .parse()
        .map_err(|_| Error::ParseError(format!("non-numeric <{}> value: {:?}", name, text)))
}
