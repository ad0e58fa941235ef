//! Keyword classifiers for raw spreadsheet text.

use credo_core::{interpretation::Lens, node::NodeType, source::SourceClass};

/// Classify a raw source type into a node type. The first matching keyword
/// group wins: council, creed/confession, scripture/bible, person/father.
/// Anything else is a text.
pub fn classify_node_type(raw: &str) -> NodeType {
  const RULES: [(&[&str], NodeType); 4] = [
    (&["council"], NodeType::Council),
    (&["creed", "confession"], NodeType::Creed),
    (&["scripture", "bible"], NodeType::Scripture),
    (&["person", "father"], NodeType::Person),
  ];

  let raw = raw.to_lowercase();
  RULES
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|k| raw.contains(k)))
    .map_or(NodeType::Text, |&(_, node_type)| node_type)
}

/// Classify a tradition name into the lens its positions aggregate under.
/// Traditions matching no keyword fall into [`Lens::Consensus`].
pub fn classify_lens(tradition: &str) -> Lens {
  const RULES: [(&[&str], Lens); 6] = [
    (&["catholic"], Lens::Catholic),
    (&["orthodox"], Lens::Orthodox),
    (&["lutheran"], Lens::Lutheran),
    (&["reformed", "calvinist", "presbyterian"], Lens::Reformed),
    (
      &["baptist", "zwingli", "anabaptist", "mennonite"],
      Lens::ZwinglianBaptistic,
    ),
    (&["anglican", "methodist", "pentecostal"], Lens::Protestant),
  ];

  let tradition = tradition.to_lowercase();
  RULES
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|k| tradition.contains(k)))
    .map_or(Lens::Consensus, |&(_, lens)| lens)
}

/// Anything mentioning "secondary" is secondary; everything else primary.
pub fn classify_source(primary_secondary: &str) -> SourceClass {
  if primary_secondary.to_lowercase().contains("secondary") {
    SourceClass::Secondary
  } else {
    SourceClass::Primary
  }
}
