//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use credo_core::{
  Dataset, Records,
  claim::{Claim, Module},
  edge::{Confidence, Edge, RelationType},
  interpretation::{Interpretation, Lens},
  node::{Node, NodeType},
  scripture::parse_reference,
  source::{Source, SourceClass},
};
use serde_json::Value;
use tower::ServiceExt as _;

use crate::{ApiState, api_router};

fn claim(id: &str, cluster: &str) -> Claim {
  Claim {
    id:                  id.into(),
    cluster:             cluster.into(),
    short_label:         format!("{id} label"),
    full_statement:      format!("{id} statement"),
    definition_variants: Vec::new(),
  }
}

fn node(id: &str, node_type: NodeType, title: &str, date_range: &str) -> Node {
  let parsed = (node_type == NodeType::Scripture)
    .then(|| parse_reference(title))
    .flatten();
  Node {
    id:          id.into(),
    node_type,
    title:       title.into(),
    date_range:  date_range.into(),
    region:      String::new(),
    summary:     String::new(),
    citations:   vec!["S1".into()],
    book:        parsed.as_ref().map(|r| r.book.clone()),
    chapter:     parsed.as_ref().map(|r| r.chapter),
    verse_start: parsed.as_ref().and_then(|r| r.verse_start),
    verse_end:   parsed.as_ref().and_then(|r| r.verse_end),
    reference:   (node_type == NodeType::Scripture).then(|| title.to_string()),
    verse_text:  None,
  }
}

fn edge(claim_id: &str, node_id: &str) -> Edge {
  Edge {
    id:            format!("{claim_id}-{node_id}"),
    claim_id:      claim_id.into(),
    node_id:       node_id.into(),
    relation_type: RelationType::Supports,
    note:          String::new(),
    confidence:    Confidence::High,
  }
}

fn dataset(extra_edges: Vec<Edge>) -> Dataset {
  let mut edges = vec![edge("C1", "N2"), edge("C1", "N1"), edge("C2", "N3")];
  edges.extend(extra_edges);
  Dataset::new(Records {
    claims: vec![claim("C1", "Baptism & New Birth"), claim("C2", "Eucharist")],
    nodes: vec![
      node("N1", NodeType::Scripture, "John 3:5", "c. 90"),
      node("N2", NodeType::Creed, "Nicene Creed", "325"),
      node("N3", NodeType::Scripture, "1 Corinthians 11:23-29", "c. 55"),
    ],
    edges,
    sources: vec![Source {
      id:             "S1".into(),
      classification: SourceClass::Primary,
      citation:       "Citation.".into(),
      url:            None,
      notes:          None,
      excerpt:        None,
      significance:   None,
      author:         None,
      year:           None,
      tradition:      None,
      source_type:    None,
    }],
    interpretations: vec![Interpretation {
      id:              "C1-reformed".into(),
      claim_id:        "C1".into(),
      lens:            Lens::Reformed,
      summary:         "Sign and seal.".into(),
      key_points:      Vec::new(),
      tradition_count: Some(2),
      dominant_stance: Some("Affirms".into()),
      positions:       Vec::new(),
    }],
    modules: vec![Module {
      id:        "eucharist".into(),
      title:     "Eucharist".into(),
      claim_ids: vec!["C2".into()],
    }],
  })
  .unwrap()
}

async fn get(dataset: Dataset, uri: &str) -> (StatusCode, Value) {
  let router = api_router(ApiState::new(Arc::new(dataset)));
  let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
  let resp = router.oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

// ── Claims ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_claims() {
  let (status, body) = get(dataset(vec![]), "/claims").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_claim_is_404() {
  let (status, body) = get(dataset(vec![]), "/claims/C404").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("C404"));
}

#[tokio::test]
async fn trace_is_chronological() {
  let (status, body) = get(dataset(vec![]), "/claims/C1/trace").await;
  assert_eq!(status, StatusCode::OK);
  let trace = body.as_array().unwrap();
  assert_eq!(trace[0]["id"], "N1");
  assert_eq!(trace[0]["parsed_year"], 90);
  assert_eq!(trace[1]["id"], "N2");
  assert_eq!(trace[1]["edge"]["id"], "C1-N2");
}

#[tokio::test]
async fn trace_with_dangling_node_is_500() {
  let (status, body) =
    get(dataset(vec![edge("C1", "N404")]), "/claims/C1/trace").await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body["error"].as_str().unwrap().contains("N404"));
}

#[tokio::test]
async fn interpretations_filter_by_lens() {
  let (_, all) = get(dataset(vec![]), "/claims/C1/interpretations").await;
  assert_eq!(all.as_array().unwrap().len(), 1);

  let (status, reformed) =
    get(dataset(vec![]), "/claims/C1/interpretations?lens=reformed").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(reformed[0]["lens"], "Reformed");

  let (_, lutheran) =
    get(dataset(vec![]), "/claims/C1/interpretations?lens=Lutheran").await;
  assert!(lutheran.as_array().unwrap().is_empty());

  let (status, _) = get(dataset(vec![]), "/claims/C1/interpretations?lens=nope").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Nodes and Scripture ──────────────────────────────────────────────────────

#[tokio::test]
async fn node_cross_references() {
  let (_, claims) = get(dataset(vec![edge("C2", "N1")]), "/nodes/N1/claims").await;
  let ids: Vec<_> = claims.as_array().unwrap().iter().map(|c| c["id"].clone()).collect();
  assert_eq!(ids, ["C1", "C2"]);

  let (_, edges) = get(dataset(vec![]), "/nodes/N2/edges").await;
  assert_eq!(edges[0]["relation_type"], "Supports");

  let (_, sources) = get(dataset(vec![]), "/nodes/N2/sources").await;
  assert_eq!(sources[0]["id"], "S1");

  let (status, _) = get(dataset(vec![]), "/nodes/N404/edges").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scripture_list_is_canonical() {
  let (_, body) = get(dataset(vec![]), "/scripture").await;
  let ids: Vec<_> = body.as_array().unwrap().iter().map(|n| n["id"].clone()).collect();
  // John precedes 1 Corinthians in the canon.
  assert_eq!(ids, ["N1", "N3"]);
}

#[tokio::test]
async fn scripture_by_slug() {
  let (status, body) =
    get(dataset(vec![]), "/scripture/1-corinthians-11-23-29").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["node"]["id"], "N3");
  assert_eq!(body["slug"], "1-corinthians-11-23-29");
  assert_eq!(body["claims"][0]["id"], "C2");
}

#[tokio::test]
async fn missing_scripture_is_404_with_display_reference() {
  let (status, body) = get(dataset(vec![]), "/scripture/romans-6-3-4").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("Romans 6:3-4"));
}

// ── Sources, modules, search ─────────────────────────────────────────────────

#[tokio::test]
async fn sources_and_modules() {
  let (status, _) = get(dataset(vec![]), "/sources/S1").await;
  assert_eq!(status, StatusCode::OK);
  let (status, _) = get(dataset(vec![]), "/sources/S9").await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (_, module) = get(dataset(vec![]), "/modules/eucharist").await;
  assert_eq!(module["claims"][0]["id"], "C2");
  let (status, _) = get(dataset(vec![]), "/modules/grace").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_cluster() {
  let (_, body) = get(dataset(vec![]), "/search?q=baptism").await;
  assert_eq!(body["claims"].as_array().unwrap().len(), 1);
  assert!(body["nodes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn short_queries_return_nothing() {
  for uri in ["/search", "/search?q=", "/search?q=b"] {
    let (status, body) = get(dataset(vec![]), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["claims"].as_array().unwrap().is_empty(), "{uri}");
    assert!(body["nodes"].as_array().unwrap().is_empty(), "{uri}");
  }
}
