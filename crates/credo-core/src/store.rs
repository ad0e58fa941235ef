//! The [`Dataset`] record store and the [`RecordSource`] trait that loads it.
//!
//! A dataset is constructed once, validated, and never mutated. Query methods
//! live in [`crate::trace`], [`crate::query`] and [`crate::search`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  claim::{Claim, Module},
  edge::Edge,
  integrity::{IntegrityReport, IntegrityWarning},
  interpretation::Interpretation,
  node::Node,
  source::Source,
};

// ─── Records ─────────────────────────────────────────────────────────────────

/// The flat, normalized collections produced by the import pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
  pub claims:          Vec<Claim>,
  pub nodes:           Vec<Node>,
  pub edges:           Vec<Edge>,
  pub sources:         Vec<Source>,
  pub interpretations: Vec<Interpretation>,
  #[serde(default)]
  pub modules:         Vec<Module>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over wherever a dataset is persisted.
///
/// Backends (e.g. `credo-store-json`) implement this; callers hold the
/// resulting [`Dataset`] and pass it by reference to whatever needs it.
pub trait RecordSource {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read every collection and build a validated [`Dataset`].
  fn load(&self) -> Result<Dataset, Self::Error>;
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// The immutable in-memory record store.
///
/// Construction fails on duplicate identifiers, duplicate
/// `(claim_id, node_id)` edges and duplicate `(claim_id, lens)`
/// interpretations. Dangling references and unresolved citations are
/// tolerated and listed in [`Dataset::integrity`].
#[derive(Debug, Clone)]
pub struct Dataset {
  pub(crate) records:      Records,
  pub(crate) claim_index:  HashMap<String, usize>,
  pub(crate) node_index:   HashMap<String, usize>,
  pub(crate) source_index: HashMap<String, usize>,
  pub(crate) module_index: HashMap<String, usize>,
  report:                  IntegrityReport,
}

impl Dataset {
  /// Validate `records` and index them for direct lookup.
  pub fn new(records: Records) -> Result<Self> {
    let claim_index = index_by("claim", &records.claims, |c| &c.id)?;
    let node_index = index_by("node", &records.nodes, |n| &n.id)?;
    let source_index = index_by("source", &records.sources, |s| &s.id)?;
    let module_index = index_by("module", &records.modules, |m| &m.id)?;
    index_by("edge", &records.edges, |e| &e.id)?;
    index_by("interpretation", &records.interpretations, |i| &i.id)?;

    let mut pairs = HashSet::new();
    for edge in &records.edges {
      if !pairs.insert((edge.claim_id.as_str(), edge.node_id.as_str())) {
        return Err(Error::DuplicateEdge {
          claim_id: edge.claim_id.clone(),
          node_id:  edge.node_id.clone(),
        });
      }
    }

    let mut lenses = HashSet::new();
    for interpretation in &records.interpretations {
      if !lenses.insert((interpretation.claim_id.as_str(), interpretation.lens)) {
        return Err(Error::DuplicateInterpretation {
          claim_id: interpretation.claim_id.clone(),
          lens:     interpretation.lens,
        });
      }
    }

    let mut dataset = Self {
      records,
      claim_index,
      node_index,
      source_index,
      module_index,
      report: IntegrityReport::default(),
    };
    dataset.report = dataset.check_references();
    Ok(dataset)
  }

  /// An empty dataset.
  pub fn empty() -> Self {
    Self {
      records:      Records::default(),
      claim_index:  HashMap::new(),
      node_index:   HashMap::new(),
      source_index: HashMap::new(),
      module_index: HashMap::new(),
      report:       IntegrityReport::default(),
    }
  }

  fn check_references(&self) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let records = &self.records;

    for edge in &records.edges {
      if !self.claim_index.contains_key(&edge.claim_id) {
        report.push(IntegrityWarning::EdgeMissingClaim {
          edge_id:  edge.id.clone(),
          claim_id: edge.claim_id.clone(),
        });
      }
      if !self.node_index.contains_key(&edge.node_id) {
        report.push(IntegrityWarning::EdgeMissingNode {
          edge_id: edge.id.clone(),
          node_id: edge.node_id.clone(),
        });
      }
    }

    for node in &records.nodes {
      self.check_citations(&mut report, &format!("node {:?}", node.id), &node.citations);
    }

    for interpretation in &records.interpretations {
      if !self.claim_index.contains_key(&interpretation.claim_id) {
        report.push(IntegrityWarning::InterpretationMissingClaim {
          interpretation_id: interpretation.id.clone(),
          claim_id:          interpretation.claim_id.clone(),
        });
      }
      let cited_by = format!("interpretation {:?}", interpretation.id);
      for point in &interpretation.key_points {
        self.check_citations(&mut report, &cited_by, &point.citations);
      }
      for position in &interpretation.positions {
        self.check_citations(&mut report, &cited_by, &position.citations);
      }
    }

    for module in &records.modules {
      for claim_id in &module.claim_ids {
        if !self.claim_index.contains_key(claim_id) {
          report.push(IntegrityWarning::ModuleMissingClaim {
            module_id: module.id.clone(),
            claim_id:  claim_id.clone(),
          });
        }
      }
    }

    report
  }

  fn check_citations(
    &self,
    report: &mut IntegrityReport,
    cited_by: &str,
    citations: &[String],
  ) {
    for source_id in citations {
      if !self.source_index.contains_key(source_id) {
        report.push(IntegrityWarning::UnresolvedCitation {
          cited_by:  cited_by.to_string(),
          source_id: source_id.clone(),
        });
      }
    }
  }

  // ── Collections ───────────────────────────────────────────────────────

  pub fn claims(&self) -> &[Claim] { &self.records.claims }

  pub fn nodes(&self) -> &[Node] { &self.records.nodes }

  pub fn edges(&self) -> &[Edge] { &self.records.edges }

  pub fn sources(&self) -> &[Source] { &self.records.sources }

  pub fn interpretations(&self) -> &[Interpretation] {
    &self.records.interpretations
  }

  pub fn modules(&self) -> &[Module] { &self.records.modules }

  /// Borrow the underlying collections, e.g. to persist them.
  pub fn records(&self) -> &Records { &self.records }

  /// Soft violations found at construction time.
  pub fn integrity(&self) -> &IntegrityReport { &self.report }
}

/// Map each record's id to its position, rejecting duplicates.
fn index_by<T>(
  collection: &'static str,
  items: &[T],
  id: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>> {
  let mut index = HashMap::with_capacity(items.len());
  for (position, item) in items.iter().enumerate() {
    let key = id(item);
    if index.insert(key.clone(), position).is_some() {
      return Err(Error::DuplicateId {
        collection,
        id: key.clone(),
      });
    }
  }
  Ok(index)
}
