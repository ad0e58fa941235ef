//! Sources: citable primary and secondary works.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SourceClass {
  Primary,
  Secondary,
}

/// A citable work, with an optional verbatim excerpt and a note on why the
/// excerpt matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
  pub id:             String,
  pub classification: SourceClass,
  /// Chicago-style citation.
  pub citation:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:            Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub excerpt:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub significance:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tradition:      Option<String>,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub source_type:    Option<String>,
}
