//! Record builders shared by unit tests.

use crate::{
  claim::Claim,
  edge::{Confidence, Edge, RelationType, edge_id},
  interpretation::{Interpretation, Lens, interpretation_id},
  node::{Node, NodeType},
  source::{Source, SourceClass},
};

pub(crate) fn claim(id: &str, cluster: &str) -> Claim {
  Claim {
    id:                  id.into(),
    cluster:             cluster.into(),
    short_label:         format!("label {id}"),
    full_statement:      format!("statement {id}"),
    definition_variants: Vec::new(),
  }
}

pub(crate) fn node(id: &str, node_type: NodeType, date_range: &str) -> Node {
  Node {
    id:          id.into(),
    node_type,
    title:       format!("title {id}"),
    date_range:  date_range.into(),
    region:      String::new(),
    summary:     String::new(),
    citations:   Vec::new(),
    book:        None,
    chapter:     None,
    verse_start: None,
    verse_end:   None,
    reference:   None,
    verse_text:  None,
  }
}

pub(crate) fn edge(claim_id: &str, node_id: &str) -> Edge {
  Edge {
    id:            edge_id(claim_id, node_id),
    claim_id:      claim_id.into(),
    node_id:       node_id.into(),
    relation_type: RelationType::Supports,
    note:          String::new(),
    confidence:    Confidence::High,
  }
}

pub(crate) fn source(id: &str) -> Source {
  Source {
    id:             id.into(),
    classification: SourceClass::Primary,
    citation:       format!("citation {id}"),
    url:            None,
    notes:          None,
    excerpt:        None,
    significance:   None,
    author:         None,
    year:           None,
    tradition:      None,
    source_type:    None,
  }
}

pub(crate) fn interpretation(claim_id: &str, lens: Lens) -> Interpretation {
  Interpretation {
    id:              interpretation_id(claim_id, lens),
    claim_id:        claim_id.into(),
    lens,
    summary:         format!("{lens} reading"),
    key_points:      Vec::new(),
    tradition_count: None,
    dominant_stance: None,
    positions:       Vec::new(),
  }
}

pub(crate) fn scripture(id: &str, reference: &str, date_range: &str) -> Node {
  let parsed = crate::scripture::parse_reference(reference);
  Node {
    title: reference.into(),
    book: parsed.as_ref().map(|r| r.book.clone()),
    chapter: parsed.as_ref().map(|r| r.chapter),
    verse_start: parsed.as_ref().and_then(|r| r.verse_start),
    verse_end: parsed.as_ref().and_then(|r| r.verse_end),
    reference: Some(reference.into()),
    ..node(id, NodeType::Scripture, date_range)
  }
}
