//! Command implementations. Each writes its human-readable output to `out`.

use std::{io::Write, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use credo_core::{
  Dataset,
  claim::Claim,
  interpretation::Lens,
  node::Node,
  scripture::{normalize_ref, parse_slug},
};
use credo_import::{RawRows, import};
use credo_store_json::JsonDir;

// ─── Import ───────────────────────────────────────────────────────────────────

pub struct ImportPaths<'a> {
  pub doctrines: &'a Path,
  pub sources:   &'a Path,
  pub positions: &'a Path,
  pub out:       &'a Path,
}

pub fn import_rows(paths: ImportPaths<'_>, out: &mut impl Write) -> Result<()> {
  let rows = RawRows::read(paths.doctrines, paths.sources, paths.positions)
    .context("reading raw rows")?;
  let result = import(&rows).context("importing rows")?;
  let store = JsonDir::new(paths.out);
  store
    .write_records(&result.records)
    .context("writing dataset")?;

  let report = &result.report;
  writeln!(out, "Wrote dataset to {}", store.path().display())?;
  writeln!(out, "  claims:          {}", report.claims)?;
  writeln!(out, "  modules:         {}", report.modules)?;
  writeln!(out, "  nodes:           {}", report.nodes)?;
  writeln!(out, "  sources:         {}", report.sources)?;
  writeln!(out, "  edges:           {}", report.edges)?;
  writeln!(out, "  dropped edges:   {}", report.dropped_edges())?;
  writeln!(out, "  duplicate edges: {}", report.duplicate_edges)?;
  writeln!(out, "  interpretations: {}", report.interpretations)?;
  for warning in &report.warnings {
    writeln!(out, "warning: {warning}")?;
  }
  Ok(())
}

// ─── Check ────────────────────────────────────────────────────────────────────

/// Print the integrity report. Fails when any warning was found.
pub fn check(dataset: &Dataset, out: &mut impl Write) -> Result<()> {
  writeln!(
    out,
    "{} claims, {} nodes, {} edges, {} sources, {} interpretations, {} modules",
    dataset.claims().len(),
    dataset.nodes().len(),
    dataset.edges().len(),
    dataset.sources().len(),
    dataset.interpretations().len(),
    dataset.modules().len(),
  )?;
  let report = dataset.integrity();
  if report.is_clean() {
    writeln!(out, "no integrity warnings")?;
    return Ok(());
  }
  for warning in &report.warnings {
    writeln!(out, "warning: {warning}")?;
  }
  bail!("{} integrity warning(s)", report.warnings.len())
}

// ─── Trace ────────────────────────────────────────────────────────────────────

pub fn trace(
  dataset: &Dataset,
  claim_id: &str,
  json: bool,
  out: &mut impl Write,
) -> Result<()> {
  let claim = require_claim(dataset, claim_id)?;
  let trace = dataset.get_trace(claim_id)?;

  if json {
    serde_json::to_writer_pretty(&mut *out, &trace)?;
    writeln!(out)?;
    return Ok(());
  }

  writeln!(out, "{} ({})", claim.short_label, claim.id)?;
  if trace.is_empty() {
    writeln!(out, "  no evidence linked")?;
  }
  for item in &trace {
    writeln!(
      out,
      "  {:>5}  {:<10} {}  [{} / {}]",
      item.parsed_year,
      item.node.node_type.to_string(),
      item.node.title,
      item.edge.relation_type,
      item.edge.confidence,
    )?;
  }
  Ok(())
}

// ─── Search ───────────────────────────────────────────────────────────────────

pub fn search(
  dataset: &Dataset,
  query: &str,
  min_query_len: usize,
  out: &mut impl Write,
) -> Result<()> {
  let query = query.trim();
  if query.chars().count() < min_query_len {
    writeln!(out, "query must be at least {min_query_len} characters")?;
    return Ok(());
  }
  let results = dataset.search(query);
  if results.is_empty() {
    writeln!(out, "no matches for {query:?}")?;
    return Ok(());
  }
  if !results.claims.is_empty() {
    writeln!(out, "Claims:")?;
    write_claims(&results.claims.iter().collect::<Vec<_>>(), out)?;
  }
  if !results.nodes.is_empty() {
    writeln!(out, "Nodes:")?;
    for node in &results.nodes {
      write_node_line(node, out)?;
    }
  }
  Ok(())
}

// ─── Scripture and cross-references ──────────────────────────────────────────

/// Look a passage up by display reference or slug.
pub fn scripture(dataset: &Dataset, reference: &str, out: &mut impl Write) -> Result<()> {
  let slug = normalize_ref(reference);
  let heading = dataset
    .resolve_slug(&slug)
    .map(str::to_owned)
    .unwrap_or_else(|| parse_slug(&slug));
  let node = dataset
    .get_scripture_by_ref(&slug)
    .ok_or_else(|| anyhow!("no passage {heading} in the dataset"))?;

  writeln!(out, "{heading}")?;
  if let Some(text) = &node.verse_text {
    writeln!(out, "  {text}")?;
  }
  let claims = dataset.get_claims_for_scripture(&node.id);
  if claims.is_empty() {
    writeln!(out, "no claims cite this passage")?;
  } else {
    writeln!(out, "Claims:")?;
    write_claims(&claims, out)?;
  }
  Ok(())
}

pub fn claims_for(dataset: &Dataset, node_id: &str, out: &mut impl Write) -> Result<()> {
  let node = dataset
    .get_node(node_id)
    .ok_or_else(|| anyhow!("no node {node_id:?}"))?;
  writeln!(out, "{}", node.title)?;
  write_claims(&dataset.get_claims_for_scripture(node_id), out)
}

pub fn interpretations(
  dataset: &Dataset,
  claim_id: &str,
  lens: Option<Lens>,
  out: &mut impl Write,
) -> Result<()> {
  let claim = require_claim(dataset, claim_id)?;
  let interpretations = match lens {
    Some(lens) => dataset.get_interpretation(claim_id, lens).into_iter().collect(),
    None => dataset.get_interpretations(claim_id),
  };

  writeln!(out, "{} ({})", claim.short_label, claim.id)?;
  if interpretations.is_empty() {
    writeln!(out, "  no interpretations")?;
  }
  for interpretation in interpretations {
    write!(out, "[{}]", interpretation.lens)?;
    if let Some(stance) = &interpretation.dominant_stance {
      write!(out, " {stance}")?;
    }
    if let Some(count) = interpretation.tradition_count {
      write!(out, " ({count} traditions)")?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", interpretation.summary)?;
    for point in &interpretation.key_points {
      writeln!(out, "  - {}", point.text)?;
    }
  }
  Ok(())
}

pub fn source(dataset: &Dataset, source_id: &str, out: &mut impl Write) -> Result<()> {
  let source = dataset
    .get_source(source_id)
    .ok_or_else(|| anyhow!("no source {source_id:?}"))?;
  writeln!(out, "{} [{}]", source.citation, source.classification)?;
  let optional = [
    ("author", &source.author),
    ("year", &source.year),
    ("tradition", &source.tradition),
    ("url", &source.url),
    ("excerpt", &source.excerpt),
    ("significance", &source.significance),
    ("notes", &source.notes),
  ];
  for (label, value) in optional {
    if let Some(value) = value {
      writeln!(out, "  {label}: {value}")?;
    }
  }
  Ok(())
}

pub fn modules(dataset: &Dataset, out: &mut impl Write) -> Result<()> {
  for module in dataset.modules() {
    writeln!(
      out,
      "{:<24} {} ({} claims)",
      module.id,
      module.title,
      module.claim_ids.len()
    )?;
  }
  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn require_claim<'a>(dataset: &'a Dataset, claim_id: &str) -> Result<&'a Claim> {
  dataset
    .get_claim(claim_id)
    .ok_or_else(|| anyhow!("no claim {claim_id:?}"))
}

fn write_claims(claims: &[&Claim], out: &mut impl Write) -> Result<()> {
  for claim in claims {
    writeln!(out, "  {:<12} {}", claim.id, claim.short_label)?;
  }
  Ok(())
}

fn write_node_line(node: &Node, out: &mut impl Write) -> Result<()> {
  writeln!(out, "  {:<12} {} ({})", node.id, node.title, node.date_range)?;
  Ok(())
}
