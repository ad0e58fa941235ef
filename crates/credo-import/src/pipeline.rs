//! Raw rows → normalized records.
//!
//! Pipeline:
//!   doctrine rows ─┬─ claims ── modules (grouped by category)
//!                  └─ edges (deduplicated, unknown sources dropped)
//!   source rows  ──── sources + nodes (type classified by keyword)
//!   position rows ─── interpretations (aggregated per doctrine and lens)

use std::collections::{HashMap, HashSet};

use credo_core::{
  Records,
  claim::{Claim, Module, module_id},
  edge::{Confidence, Edge, RelationType, edge_id},
  node::{Node, NodeType},
  scripture::parse_reference,
  source::{Source, SourceClass},
};

use crate::{
  Error, Result,
  aggregate::aggregate_positions,
  classify::{classify_node_type, classify_source},
  report::{ImportReport, ImportWarning},
  rows::{DoctrineRow, RawRows, SourceRow, split_list},
};

/// The normalized records plus an account of what was skipped.
#[derive(Debug, Clone)]
pub struct Import {
  pub records: Records,
  pub report:  ImportReport,
}

/// Transform the raw sheets into the normalized collections.
///
/// Fails on a blank doctrine or source identifier, and when two distinct
/// `(doctrine, source)` citations would share one `{doctrine}-{source}` edge
/// id (possible with hyphenated identifiers). Repeated identifiers,
/// repeated citations and citations of unknown sources are recorded in the
/// report and logged.
pub fn import(rows: &RawRows) -> Result<Import> {
  let mut warnings = Vec::new();

  let doctrines = unique_rows(
    ("doctrine", "doctrine_id"),
    &rows.doctrines,
    |r| &r.doctrine_id,
    &mut warnings,
  )?;
  let source_rows = unique_rows(
    ("source", "source_id"),
    &rows.sources,
    |r| &r.source_id,
    &mut warnings,
  )?;

  let claims: Vec<Claim> = doctrines.iter().map(|row| claim_from_row(row)).collect();
  let modules = group_modules(&claims);
  let sources: Vec<Source> = source_rows.iter().map(|row| source_from_row(row)).collect();
  let nodes: Vec<Node> = source_rows.iter().map(|row| node_from_row(row)).collect();

  let classes: HashMap<&str, SourceClass> = sources
    .iter()
    .map(|s| (s.id.as_str(), s.classification))
    .collect();

  let mut duplicate_edges = 0;
  let mut edges = Vec::new();
  let mut pairs = HashSet::new();
  let mut edge_ids: HashMap<String, (&str, &str)> = HashMap::new();
  for doctrine in &doctrines {
    for source_id in split_list(&doctrine.source_ids) {
      let Some(&class) = classes.get(source_id) else {
        tracing::warn!(
          doctrine_id = %doctrine.doctrine_id,
          source_id,
          "doctrine cites unknown source; dropping edge"
        );
        warnings.push(ImportWarning::DroppedEdge {
          doctrine_id: doctrine.doctrine_id.clone(),
          source_id:   source_id.to_string(),
        });
        continue;
      };
      if !pairs.insert((doctrine.doctrine_id.as_str(), source_id)) {
        duplicate_edges += 1;
        continue;
      }
      let id = edge_id(&doctrine.doctrine_id, source_id);
      if let Some(&(first_doctrine, first_source)) = edge_ids.get(&id) {
        return Err(Error::EdgeIdCollision {
          id,
          first:  (first_doctrine.to_string(), first_source.to_string()),
          second: (doctrine.doctrine_id.clone(), source_id.to_string()),
        });
      }
      edge_ids.insert(id.clone(), (doctrine.doctrine_id.as_str(), source_id));
      edges.push(Edge {
        id,
        claim_id:      doctrine.doctrine_id.clone(),
        node_id:       source_id.to_string(),
        relation_type: RelationType::Supports,
        note:          String::new(),
        confidence:    match class {
          SourceClass::Primary => Confidence::High,
          SourceClass::Secondary => Confidence::Medium,
        },
      });
    }
  }

  let interpretations = aggregate_positions(&rows.positions);

  let report = ImportReport {
    claims: claims.len(),
    modules: modules.len(),
    nodes: nodes.len(),
    sources: sources.len(),
    edges: edges.len(),
    duplicate_edges,
    interpretations: interpretations.len(),
    warnings,
  };
  tracing::info!(
    claims = report.claims,
    nodes = report.nodes,
    edges = report.edges,
    dropped_edges = report.dropped_edges(),
    interpretations = report.interpretations,
    "import complete"
  );

  Ok(Import {
    records: Records {
      claims,
      nodes,
      edges,
      sources,
      interpretations,
      modules,
    },
    report,
  })
}

/// Keep the first row for each identifier; blank identifiers are an error.
fn unique_rows<'a, T>(
  (sheet, field): (&'static str, &'static str),
  rows: &'a [T],
  id: impl Fn(&T) -> &String,
  warnings: &mut Vec<ImportWarning>,
) -> Result<Vec<&'a T>> {
  let mut seen = HashSet::new();
  let mut unique = Vec::with_capacity(rows.len());
  for (i, row) in rows.iter().enumerate() {
    let row_id = id(row);
    if row_id.is_empty() {
      return Err(Error::EmptyField { sheet, row: i + 1, field });
    }
    if seen.insert(row_id.as_str()) {
      unique.push(row);
    } else {
      tracing::warn!(sheet, id = %row_id, "duplicate row ignored");
      warnings.push(ImportWarning::DuplicateRow {
        sheet,
        id: row_id.clone(),
      });
    }
  }
  Ok(unique)
}

fn claim_from_row(row: &DoctrineRow) -> Claim {
  Claim {
    id:                  row.doctrine_id.clone(),
    cluster:             row.category.clone(),
    short_label:         row.short_label.clone(),
    full_statement:      row.statement.clone(),
    definition_variants: split_list(&row.definitions).map(str::to_string).collect(),
  }
}

/// One module per distinct category slug, in order of first appearance.
fn group_modules(claims: &[Claim]) -> Vec<Module> {
  let mut modules: Vec<Module> = Vec::new();
  for claim in claims {
    let (id, title) = match module_id(&claim.cluster) {
      id if id.is_empty() => ("uncategorized".to_string(), "Uncategorized"),
      id => (id, claim.cluster.as_str()),
    };
    match modules.iter_mut().find(|m| m.id == id) {
      Some(module) => module.claim_ids.push(claim.id.clone()),
      None => modules.push(Module {
        id,
        title: title.to_string(),
        claim_ids: vec![claim.id.clone()],
      }),
    }
  }
  modules
}

fn non_blank(cell: &str) -> Option<String> {
  (!cell.is_empty()).then(|| cell.to_string())
}

fn source_from_row(row: &SourceRow) -> Source {
  Source {
    id:             row.source_id.clone(),
    classification: classify_source(&row.primary_secondary),
    citation:       row.citation.clone(),
    url:            non_blank(&row.url),
    notes:          non_blank(&row.notes),
    excerpt:        non_blank(&row.excerpt),
    significance:   non_blank(&row.significance),
    author:         non_blank(&row.author),
    year:           non_blank(&row.date),
    tradition:      non_blank(&row.tradition),
    source_type:    non_blank(&row.source_type),
  }
}

fn node_from_row(row: &SourceRow) -> Node {
  let title = non_blank(&row.title).unwrap_or_else(|| row.citation.clone());
  let mut node = Node {
    id: row.source_id.clone(),
    node_type: classify_node_type(&row.source_type),
    title,
    date_range: row.date.clone(),
    region: row.region.clone(),
    summary: row.summary.clone(),
    citations: vec![row.source_id.clone()],
    book: None,
    chapter: None,
    verse_start: None,
    verse_end: None,
    reference: None,
    verse_text: None,
  };

  if node.node_type == NodeType::Scripture {
    if let Some(parsed) = parse_reference(&node.title) {
      node.book = Some(parsed.book);
      node.chapter = Some(parsed.chapter);
      node.verse_start = parsed.verse_start;
      node.verse_end = parsed.verse_end;
    }
    node.reference = Some(node.title.clone());
    node.verse_text = non_blank(&row.excerpt);
  }
  node
}
