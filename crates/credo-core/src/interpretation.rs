//! Interpretations: how a family of traditions reads a claim.
//!
//! Each interpretation aggregates every raw tradition position that shares a
//! `(claim, lens)` pair, so at most one exists per pair.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A theological lens: the family of traditions an interpretation speaks for.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Lens {
  Consensus,
  Catholic,
  Orthodox,
  Lutheran,
  Reformed,
  ZwinglianBaptistic,
  Protestant,
}

impl Lens {
  /// URL-safe form used in interpretation identifiers.
  pub fn slug(self) -> &'static str {
    match self {
      Self::Consensus => "consensus",
      Self::Catholic => "catholic",
      Self::Orthodox => "orthodox",
      Self::Lutheran => "lutheran",
      Self::Reformed => "reformed",
      Self::ZwinglianBaptistic => "zwinglian-baptistic",
      Self::Protestant => "protestant",
    }
  }
}

/// One point of an interpretation, with the sources that back it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
  pub text:      String,
  #[serde(default)]
  pub citations: Vec<String>,
}

/// A single tradition's stance, kept alongside the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraditionPosition {
  pub tradition: String,
  pub stance:    String,
  #[serde(default)]
  pub summary:   String,
  #[serde(default)]
  pub citations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
  pub id:              String,
  pub claim_id:        String,
  pub lens:            Lens,
  /// Representative summary: the longest one seen during aggregation.
  pub summary:         String,
  #[serde(default)]
  pub key_points:      Vec<KeyPoint>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tradition_count: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dominant_stance: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub positions:       Vec<TraditionPosition>,
}

/// The conventional identifier for the interpretation of `claim_id` through
/// `lens`.
pub fn interpretation_id(claim_id: &str, lens: Lens) -> String {
  format!("{claim_id}-{}", lens.slug())
}
