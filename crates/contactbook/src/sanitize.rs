//! Markup cleaning for submitted contact fields.
//!
//! Names and email lose all markup and come back as plain text, so `&` stays
//! `&` rather than `&amp;`. Notes keep a small set of inline formatting tags
//! plus links, with `href` as the only surviving attribute, and stay HTML.
//! The contents of `script` and `style` elements are dropped entirely.
//! Cleaning already-clean text returns it unchanged.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;

use crate::contact::ContactDraft;

/// Tags allowed to survive in notes.
pub const NOTES_ALLOWED_TAGS: [&str; 5] = ["b", "i", "em", "strong", "a"];

/// The references ammonia's serializer writes into text nodes.
const TEXT_REFERENCES: [(&str, char); 4] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&nbsp;", '\u{a0}'),
];

static PLAIN_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::new())
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new());
    builder
});

static NOTES_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(NOTES_ALLOWED_TAGS.into_iter().collect())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .generic_attributes(HashSet::new())
        .link_rel(None);
    builder
});

/// Remove all markup from `text` and trim surrounding whitespace.
///
/// The result is plain text, not HTML. Escaped markup such as `&lt;b&gt;`
/// decodes to a tag and is stripped on the next pass, so cleaning repeats
/// until the text stops changing.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    decode_text(PLAIN_CLEANER.clean(text.trim()).to_string().trim())
        .trim()
        .to_string()
}

/// Undo the escaping of a serialized text node.
fn decode_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let (ch, len) = TEXT_REFERENCES
            .iter()
            .find(|(reference, _)| rest.starts_with(reference))
            .map_or(('&', 1), |(reference, ch)| (*ch, reference.len()));
        out.push(ch);
        rest = &rest[len..];
    }
    out.push_str(rest);
    out
}

/// Reduce the markup in `text` to the notes allow-list and trim it.
#[must_use]
pub fn clean_notes(text: &str) -> String {
    NOTES_CLEANER.clean(text.trim()).to_string().trim().to_string()
}

/// Clean every field of a draft that has already passed validation.
#[must_use]
pub fn sanitize_draft(draft: &ContactDraft) -> ContactDraft {
    ContactDraft {
        first_name: strip_markup(&draft.first_name),
        last_name: strip_markup(&draft.last_name),
        email: strip_markup(&draft.email),
        notes: clean_notes(&draft.notes),
    }
}
