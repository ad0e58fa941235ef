//! Aggregation of raw tradition positions into one interpretation per
//! `(doctrine, lens)` pair.
//!
//! Tie-breaks are first-encountered throughout: among equally long summaries
//! the earliest wins, and among equally frequent stances the earliest wins.

use std::collections::HashMap;

use credo_core::interpretation::{
  Interpretation, KeyPoint, Lens, TraditionPosition, interpretation_id,
};

use crate::{classify::classify_lens, rows::PositionRow, rows::split_list};

/// Accumulates every position sharing one `(claim, lens)` pair.
struct Group {
  claim_id:   String,
  lens:       Lens,
  summary:    String,
  /// `(stance, votes)` in first-encountered order.
  stances:    Vec<(String, usize)>,
  traditions: Vec<String>,
  key_points: Vec<KeyPoint>,
  positions:  Vec<TraditionPosition>,
}

impl Group {
  fn new(claim_id: &str, lens: Lens) -> Self {
    Self {
      claim_id: claim_id.to_string(),
      lens,
      summary: String::new(),
      stances: Vec::new(),
      traditions: Vec::new(),
      key_points: Vec::new(),
      positions: Vec::new(),
    }
  }

  fn add(&mut self, row: &PositionRow) {
    let citations: Vec<String> = split_list(&row.source_ids).map(str::to_string).collect();

    if row.summary.chars().count() > self.summary.chars().count() {
      self.summary = row.summary.clone();
    }

    if !row.stance.is_empty() {
      match self.stances.iter_mut().find(|(stance, _)| *stance == row.stance) {
        Some((_, votes)) => *votes += 1,
        None => self.stances.push((row.stance.clone(), 1)),
      }
    }

    if !row.tradition.is_empty() && !self.traditions.contains(&row.tradition) {
      self.traditions.push(row.tradition.clone());
    }

    for text in split_list(&row.key_points) {
      match self.key_points.iter_mut().find(|point| point.text == text) {
        Some(point) => {
          for citation in &citations {
            if !point.citations.contains(citation) {
              point.citations.push(citation.clone());
            }
          }
        }
        None => self.key_points.push(KeyPoint {
          text:      text.to_string(),
          citations: citations.clone(),
        }),
      }
    }

    self.positions.push(TraditionPosition {
      tradition: row.tradition.clone(),
      stance: row.stance.clone(),
      summary: row.summary.clone(),
      citations,
    });
  }

  fn dominant_stance(&self) -> Option<String> {
    let mut best: Option<&(String, usize)> = None;
    for candidate in &self.stances {
      if best.is_none_or(|(_, votes)| candidate.1 > *votes) {
        best = Some(candidate);
      }
    }
    best.map(|(stance, _)| stance.clone())
  }

  fn finish(self) -> Interpretation {
    Interpretation {
      id:              interpretation_id(&self.claim_id, self.lens),
      dominant_stance: self.dominant_stance(),
      tradition_count: u32::try_from(self.traditions.len()).ok(),
      claim_id:        self.claim_id,
      lens:            self.lens,
      summary:         self.summary,
      key_points:      self.key_points,
      positions:       self.positions,
    }
  }
}

/// Group `rows` by `(doctrine, lens)` and build one interpretation per group,
/// in order of each group's first row. Rows without a doctrine id are skipped.
pub fn aggregate_positions(rows: &[PositionRow]) -> Vec<Interpretation> {
  let mut groups: Vec<Group> = Vec::new();
  let mut index: HashMap<(&str, Lens), usize> = HashMap::new();

  for row in rows.iter().filter(|row| !row.doctrine_id.is_empty()) {
    let lens = classify_lens(&row.tradition);
    let slot = *index.entry((row.doctrine_id.as_str(), lens)).or_insert_with(|| {
      groups.push(Group::new(&row.doctrine_id, lens));
      groups.len() - 1
    });
    groups[slot].add(row);
  }

  groups.into_iter().map(Group::finish).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(doctrine: &str, tradition: &str, stance: &str, summary: &str) -> PositionRow {
    PositionRow {
      doctrine_id: doctrine.into(),
      tradition:   tradition.into(),
      stance:      stance.into(),
      summary:     summary.into(),
      key_points:  String::new(),
      source_ids:  String::new(),
    }
  }

  #[test]
  fn one_interpretation_per_doctrine_lens_pair() {
    let rows = vec![
      row("D1", "Roman Catholic", "Affirms", "a"),
      row("D1", "Old Catholic", "Affirms", "bb"),
      row("D1", "Eastern Orthodox", "Affirms", "c"),
      row("D2", "Roman Catholic", "Denies", "d"),
      row("D1", "Anglo-Catholic", "Qualified", "e"),
    ];
    let interpretations = aggregate_positions(&rows);
    let pairs: Vec<_> = interpretations
      .iter()
      .map(|i| (i.claim_id.as_str(), i.lens))
      .collect();
    assert_eq!(
      pairs,
      [("D1", Lens::Catholic), ("D1", Lens::Orthodox), ("D2", Lens::Catholic)]
    );
    assert_eq!(interpretations[0].positions.len(), 3);
    assert_eq!(interpretations[0].tradition_count, Some(3));
    assert_eq!(interpretations[0].id, "D1-catholic");
  }

  #[test]
  fn summary_is_the_longest_first_on_ties() {
    let rows = vec![
      row("D1", "Lutheran", "", "short"),
      row("D1", "Lutheran (LCMS)", "", "equally longest!"),
      row("D1", "ELCA Lutheran", "", "also the longest"),
      row("D1", "Lutheran (WELS)", "", "mid length"),
    ];
    let interpretations = aggregate_positions(&rows);
    assert_eq!(interpretations.len(), 1);
    assert_eq!(interpretations[0].lens, Lens::Lutheran);
    assert_eq!(interpretations[0].summary, "equally longest!");

    let rows = vec![
      row("D1", "Lutheran", "", "abcd"),
      row("D1", "Lutheran (LCMS)", "", "wxyz"),
    ];
    let interpretations = aggregate_positions(&rows);
    assert_eq!(interpretations.len(), 1);
    assert_eq!(interpretations[0].summary, "abcd");
  }

  #[test]
  fn summary_length_counts_characters_not_bytes() {
    let rows = vec![
      row("D1", "Reformed", "", "ééé"),
      row("D1", "Presbyterian", "", "abcd"),
    ];
    assert_eq!(aggregate_positions(&rows)[0].summary, "abcd");
  }

  #[test]
  fn dominant_stance_is_plurality_first_on_ties() {
    let rows = vec![
      row("D1", "Baptist", "Symbolic", ""),
      row("D1", "Mennonite", "Memorial", ""),
      row("D1", "Zwinglian", "Memorial", ""),
      row("D1", "Anabaptist", "Symbolic", ""),
      row("D1", "Free Will Baptist", "", ""),
    ];
    let interpretation = &aggregate_positions(&rows)[0];
    assert_eq!(interpretation.lens, Lens::ZwinglianBaptistic);
    assert_eq!(interpretation.dominant_stance.as_deref(), Some("Symbolic"));

    let rows = vec![row("D1", "Baptist", "", "")];
    assert_eq!(aggregate_positions(&rows)[0].dominant_stance, None);
  }

  #[test]
  fn key_points_are_distinct_and_merge_citations() {
    let mut first = row("D1", "Calvinist", "Affirms", "");
    first.key_points = "Sign and seal; Covenant".into();
    first.source_ids = "S1".into();
    let mut second = row("D1", "Presbyterian", "Affirms", "");
    second.key_points = "Covenant; Means of grace".into();
    second.source_ids = "S2; S1".into();

    let interpretation = &aggregate_positions(&[first, second])[0];
    let texts: Vec<_> = interpretation.key_points.iter().map(|k| k.text.as_str()).collect();
    assert_eq!(texts, ["Sign and seal", "Covenant", "Means of grace"]);
    assert_eq!(interpretation.key_points[1].citations, ["S1", "S2"]);
    assert_eq!(interpretation.positions[1].citations, ["S2", "S1"]);
  }

  #[test]
  fn unknown_traditions_aggregate_under_consensus() {
    let rows = vec![row("D1", "Ecumenical", "Affirms", "shared")];
    assert_eq!(aggregate_positions(&rows)[0].lens, Lens::Consensus);
  }
}
