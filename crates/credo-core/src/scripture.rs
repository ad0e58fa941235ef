//! Scripture reference handling.
//!
//! References are compared through their normalized slug form
//! (`"1 Corinthians 11:23-29"` ↔ `"1-corinthians-11-23-29"`). The reverse
//! mapping, [`parse_slug`], is a heuristic: a book name with an internal
//! space and no leading numeral (e.g. "Song of Solomon") does not round-trip.
//! [`crate::Dataset::resolve_slug`] gives an exact answer for references that
//! exist in a dataset.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::node::Node;

// ─── Slugs ───────────────────────────────────────────────────────────────────

/// Normalize a reference into a lowercase, hyphen-separated slug.
///
/// Whitespace runs, colons, and en/em dashes all become hyphens. Idempotent.
pub fn normalize_ref(reference: &str) -> String {
  let mut slug = String::with_capacity(reference.len());
  let mut in_whitespace = false;
  for ch in reference.trim().chars() {
    if ch.is_whitespace() {
      if !in_whitespace {
        slug.push('-');
      }
      in_whitespace = true;
      continue;
    }
    in_whitespace = false;
    match ch {
      ':' | '\u{2013}' | '\u{2014}' => slug.push('-'),
      other => slug.extend(other.to_lowercase()),
    }
  }
  slug
}

/// Turn a slug back into a display reference.
///
/// A purely numeric first token joins the next token to form the book
/// (`"1-john-4-8"` → `"1 John 4:8"`); otherwise the first token alone is the
/// book. Up to three further tokens become `chapter`, `chapter:verse` or
/// `chapter:start-end`.
pub fn parse_slug(slug: &str) -> String {
  let tokens: Vec<&str> = slug.split('-').filter(|t| !t.is_empty()).collect();
  let (book, rest) = match tokens.as_slice() {
    [] => return String::new(),
    [first, second, rest @ ..] if is_numeric(first) => {
      (format!("{first} {}", capitalize(second)), rest)
    }
    [first, rest @ ..] => (capitalize(first), rest),
  };
  match rest {
    [] => book,
    [chapter] => format!("{book} {chapter}"),
    [chapter, verse] => format!("{book} {chapter}:{verse}"),
    [chapter, start, end, ..] => format!("{book} {chapter}:{start}-{end}"),
  }
}

fn is_numeric(token: &str) -> bool { token.bytes().all(|b| b.is_ascii_digit()) }

fn capitalize(token: &str) -> String {
  let mut chars = token.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

// ─── Structured references ───────────────────────────────────────────────────

/// A reference split into its book, chapter and verse components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureRef {
  pub book:        String,
  pub chapter:     u32,
  pub verse_start: Option<u32>,
  pub verse_end:   Option<u32>,
}

/// Split a display reference such as `"John 3:5"` or `"1 Corinthians
/// 11:23–29"` into its components. Returns `None` when the text has no
/// parseable chapter.
pub fn parse_reference(reference: &str) -> Option<ScriptureRef> {
  let (book, locator) = reference.trim().rsplit_once(char::is_whitespace)?;
  let book = book.trim();
  if book.is_empty() {
    return None;
  }

  let (chapter, verses) = match locator.split_once(':') {
    Some((chapter, verses)) => (chapter, Some(verses)),
    None => (locator, None),
  };
  let chapter = chapter.parse().ok()?;

  let (verse_start, verse_end) = match verses {
    None => (None, None),
    Some(verses) => {
      match verses.split_once(['-', '\u{2013}', '\u{2014}']) {
        Some((start, end)) => {
          // "3:16-4:2" spans chapters; only the verse of the end is kept.
          let end = end.rsplit(':').next().unwrap_or(end);
          (start.parse().ok(), end.parse().ok())
        }
        None => (verses.parse().ok(), None),
      }
    }
  };

  Some(ScriptureRef {
    book: book.to_string(),
    chapter,
    verse_start,
    verse_end,
  })
}

// ─── Canonical ordering ──────────────────────────────────────────────────────

/// The 66 books in Protestant canonical order.
pub const CANONICAL_BOOKS: [&str; 66] = [
  "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua",
  "Judges", "Ruth", "1 Samuel", "2 Samuel", "1 Kings", "2 Kings",
  "1 Chronicles", "2 Chronicles", "Ezra", "Nehemiah", "Esther", "Job",
  "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon", "Isaiah",
  "Jeremiah", "Lamentations", "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
  "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah", "Haggai",
  "Zechariah", "Malachi", "Matthew", "Mark", "Luke", "John", "Acts",
  "Romans", "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
  "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians",
  "1 Timothy", "2 Timothy", "Titus", "Philemon", "Hebrews", "James",
  "1 Peter", "2 Peter", "1 John", "2 John", "3 John", "Jude", "Revelation",
];

/// Common alternate names, mapped to their entry in [`CANONICAL_BOOKS`].
const BOOK_ALIASES: [(&str, &str); 4] = [
  ("Psalm", "Psalms"),
  ("Song of Songs", "Song of Solomon"),
  ("Canticles", "Song of Solomon"),
  ("Revelations", "Revelation"),
];

/// Position of `book` in [`CANONICAL_BOOKS`], compared case-insensitively.
/// The aliases in `BOOK_ALIASES` (e.g. the singular "Psalm") resolve to
/// their canonical book; any other spelling or abbreviation is unknown.
pub fn book_position(book: &str) -> Option<usize> {
  let book = book.trim();
  let book = BOOK_ALIASES
    .iter()
    .find(|(alias, _)| alias.eq_ignore_ascii_case(book))
    .map_or(book, |&(_, canonical)| canonical);
  CANONICAL_BOOKS
    .iter()
    .position(|canonical| canonical.eq_ignore_ascii_case(book))
}

/// Sort Scripture nodes by canonical book, then chapter, then first verse.
/// Books outside the canon sort after it, alphabetically.
pub fn sort_scripture(nodes: &mut [&Node]) {
  nodes.sort_by(|a, b| compare_scripture(a, b));
}

fn compare_scripture(a: &Node, b: &Node) -> Ordering {
  let book_a = a.book.as_deref().unwrap_or_default();
  let book_b = b.book.as_deref().unwrap_or_default();
  let position_a = book_position(book_a).unwrap_or(usize::MAX);
  let position_b = book_position(book_b).unwrap_or(usize::MAX);
  position_a
    .cmp(&position_b)
    .then_with(|| book_a.to_lowercase().cmp(&book_b.to_lowercase()))
    .then_with(|| a.chapter.cmp(&b.chapter))
    .then_with(|| a.verse_start.cmp(&b.verse_start))
}
