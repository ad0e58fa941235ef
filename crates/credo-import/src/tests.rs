//! End-to-end tests for the import pipeline.

use std::collections::HashSet;

use credo_core::{
  Dataset,
  edge::Confidence,
  interpretation::Lens,
  node::NodeType,
  source::SourceClass,
};

use crate::{
  Error, ImportWarning, RawRows, import,
  rows::{DoctrineRow, PositionRow, SourceRow},
};

fn doctrine(id: &str, category: &str, source_ids: &str) -> DoctrineRow {
  DoctrineRow {
    doctrine_id: id.into(),
    category:    category.into(),
    short_label: format!("{id} label"),
    statement:   format!("{id} statement"),
    definitions: "first; second".into(),
    source_ids:  source_ids.into(),
  }
}

fn source(id: &str, source_type: &str, title: &str, date: &str) -> SourceRow {
  SourceRow {
    source_id: id.into(),
    source_type: source_type.into(),
    primary_secondary: "Primary".into(),
    citation: format!("Citation for {id}."),
    title: title.into(),
    date: date.into(),
    ..SourceRow::default()
  }
}

fn position(doctrine: &str, tradition: &str, stance: &str, summary: &str) -> PositionRow {
  PositionRow {
    doctrine_id: doctrine.into(),
    tradition:   tradition.into(),
    stance:      stance.into(),
    summary:     summary.into(),
    ..PositionRow::default()
  }
}

fn rows() -> RawRows {
  let mut secondary = source("S4", "Monograph", "", "1999");
  secondary.primary_secondary = "Secondary".into();
  let mut john = source("S1", "Scripture", "John 3:5", "c. 90");
  john.excerpt = "Except a man be born of water and of the Spirit".into();

  RawRows {
    doctrines: vec![
      doctrine("D1", "Baptism & New Birth", "S1; S2; S1; S404"),
      doctrine("D2", "Eucharist", "S3;S4"),
      doctrine("D3", "Baptism & New Birth", "S2"),
      doctrine("D2", "Duplicate", ""),
    ],
    sources:   vec![
      john,
      source("S2", "Creed", "Nicene Creed", "325"),
      source("S3", "Ecumenical Council", "Fourth Lateran Council", "1215"),
      secondary,
    ],
    positions: vec![
      position("D1", "Roman Catholic", "Affirms", "Baptism regenerates."),
      position("D1", "Eastern Orthodox", "Affirms", "Illumination."),
      position("D1", "Old Catholic", "Affirms", "Baptism truly regenerates the infant."),
      position("D2", "Southern Baptist", "Denies", "A memorial meal."),
    ],
  }
}

#[test]
fn one_claim_per_distinct_doctrine() {
  let out = import(&rows()).unwrap();
  let ids: Vec<_> = out.records.claims.iter().map(|c| c.id.as_str()).collect();
  assert_eq!(ids, ["D1", "D2", "D3"]);
  assert_eq!(out.records.claims[0].definition_variants, ["first", "second"]);
  assert!(out.report.warnings.contains(&ImportWarning::DuplicateRow {
    sheet: "doctrine",
    id:    "D2".into(),
  }));
}

#[test]
fn modules_group_claims_by_category() {
  let out = import(&rows()).unwrap();
  let modules = &out.records.modules;
  assert_eq!(modules.len(), 2);
  assert_eq!(modules[0].id, "baptism-new-birth");
  assert_eq!(modules[0].title, "Baptism & New Birth");
  assert_eq!(modules[0].claim_ids, ["D1", "D3"]);
  assert_eq!(modules[1].id, "eucharist");
}

#[test]
fn nodes_are_classified_and_scripture_is_parsed() {
  let out = import(&rows()).unwrap();
  let nodes = &out.records.nodes;
  let types: Vec<_> = nodes.iter().map(|n| n.node_type).collect();
  assert_eq!(
    types,
    [NodeType::Scripture, NodeType::Creed, NodeType::Council, NodeType::Text]
  );

  let john = &nodes[0];
  assert_eq!(john.reference.as_deref(), Some("John 3:5"));
  assert_eq!(john.book.as_deref(), Some("John"));
  assert_eq!(john.chapter, Some(3));
  assert_eq!(john.verse_start, Some(5));
  assert!(john.verse_text.as_deref().unwrap().starts_with("Except"));
  assert_eq!(john.citations, ["S1"]);

  // Untitled sources fall back to their citation.
  assert_eq!(nodes[3].title, "Citation for S4.");
  assert_eq!(out.records.sources[3].classification, SourceClass::Secondary);
}

#[test]
fn edges_are_deduplicated_per_doctrine_and_source() {
  let out = import(&rows()).unwrap();
  let edges = &out.records.edges;
  let mut pairs = HashSet::new();
  for edge in edges {
    assert!(pairs.insert((&edge.claim_id, &edge.node_id)), "{}", edge.id);
    assert_eq!(edge.id, format!("{}-{}", edge.claim_id, edge.node_id));
  }
  let ids: Vec<_> = edges.iter().map(|e| e.id.as_str()).collect();
  assert_eq!(ids, ["D1-S1", "D1-S2", "D2-S3", "D2-S4", "D3-S2"]);
  assert_eq!(out.report.duplicate_edges, 1);
  assert_eq!(edges[3].confidence, Confidence::Medium);
  assert_eq!(edges[0].confidence, Confidence::High);
}

#[test]
fn unknown_sources_drop_edges_with_a_warning() {
  let out = import(&rows()).unwrap();
  assert_eq!(out.report.dropped_edges(), 1);
  assert!(out.report.warnings.contains(&ImportWarning::DroppedEdge {
    doctrine_id: "D1".into(),
    source_id:   "S404".into(),
  }));
  assert!(out.records.edges.iter().all(|e| e.node_id != "S404"));
}

#[test]
fn interpretations_aggregate_per_doctrine_and_lens() {
  let out = import(&rows()).unwrap();
  let interpretations = &out.records.interpretations;
  assert_eq!(interpretations.len(), 3);

  let catholic = interpretations
    .iter()
    .find(|i| i.claim_id == "D1" && i.lens == Lens::Catholic)
    .unwrap();
  assert_eq!(catholic.summary, "Baptism truly regenerates the infant.");
  assert_eq!(catholic.tradition_count, Some(2));
  assert_eq!(catholic.dominant_stance.as_deref(), Some("Affirms"));

  let baptist = interpretations.iter().find(|i| i.claim_id == "D2").unwrap();
  assert_eq!(baptist.lens, Lens::ZwinglianBaptistic);
}

#[test]
fn output_loads_into_a_dataset() {
  let out = import(&rows()).unwrap();
  let dataset = Dataset::new(out.records).unwrap();
  assert!(dataset.integrity().is_clean(), "{:?}", dataset.integrity());

  let trace = dataset.get_trace("D1").unwrap();
  let years: Vec<_> = trace.iter().map(|t| t.parsed_year).collect();
  assert_eq!(years, [90, 325]);
  assert_eq!(dataset.get_claims_for_scripture("S2").len(), 2);
}

#[test]
fn blank_doctrine_id_is_an_error() {
  let mut raw = rows();
  raw.doctrines.push(doctrine("", "Grace", ""));
  let err = import(&raw).unwrap_err();
  assert!(matches!(
    err,
    Error::EmptyField { sheet: "doctrine", row: 5, field: "doctrine_id" }
  ));
}

#[test]
fn colliding_edge_ids_fail_the_import() {
  let raw = RawRows {
    doctrines: vec![doctrine("A-B", "Grace", "C"), doctrine("A", "Grace", "B-C")],
    sources:   vec![
      source("C", "Creed", "Creed C", "325"),
      source("B-C", "Creed", "Creed B-C", "381"),
    ],
    positions: Vec::new(),
  };
  let err = import(&raw).unwrap_err();
  match err {
    Error::EdgeIdCollision { id, first, second } => {
      assert_eq!(id, "A-B-C");
      assert_eq!(first, ("A-B".to_string(), "C".to_string()));
      assert_eq!(second, ("A".to_string(), "B-C".to_string()));
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn hyphenated_ids_without_collision_still_load() {
  let raw = RawRows {
    doctrines: vec![doctrine("A-B", "Grace", "C"), doctrine("A", "Grace", "C")],
    sources:   vec![source("C", "Creed", "Creed C", "325")],
    positions: Vec::new(),
  };
  let out = import(&raw).unwrap();
  assert!(Dataset::new(out.records).is_ok());
}
