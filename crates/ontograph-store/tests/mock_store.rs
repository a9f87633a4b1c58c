//! StoreClient tests against a mocked SPARQL HTTP endpoint.
//!
//! These cover the wire contract without a live AllegroGraph: result-set
//! flattening, the update verdict mapping, and the error taxonomy.

use ontograph_core::{vocab, Term, Triple, TriplePattern};
use ontograph_store::{OntologyVault, StoreClient, StoreConfig, StoreError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connect(server: &MockServer) -> StoreClient {
    Mock::given(method("GET"))
        .and(path("/repositories/test/size"))
        .respond_with(ResponseTemplate::new(200).set_body_string("0"))
        .mount(server)
        .await;

    let config = StoreConfig {
        base_url: server.uri(),
        repository: "test".to_string(),
        ..Default::default()
    };
    StoreClient::connect(&config).await.expect("connect")
}

fn results_json(rows: &[(&str, &str, &str)]) -> serde_json::Value {
    serde_json::json!({
        "head": { "vars": ["s", "r", "o"] },
        "results": {
            "bindings": rows
                .iter()
                .map(|(s, r, o)| serde_json::json!({
                    "s": { "type": "uri", "value": s },
                    "r": { "type": "uri", "value": r },
                    "o": { "type": "uri", "value": o },
                }))
                .collect::<Vec<_>>()
        }
    })
}

fn class_triple(name: &str) -> Triple {
    Triple::new(
        Term::iri(format!("http://example.org/onto#{name}")).unwrap(),
        vocab::rdf_type(),
        vocab::owl_class(),
    )
}

#[tokio::test]
async fn test_read_triples_flattens_rows_in_order() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test"))
        .and(header("content-type", "application/sparql-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_json(&[
            (
                "http://example.org/onto#Car",
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                "http://www.w3.org/2002/07/owl#Class",
            ),
            (
                "http://example.org/onto#Bus",
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                "http://www.w3.org/2002/07/owl#Class",
            ),
        ])))
        .mount(&server)
        .await;

    let bindings = client
        .read_triples(&TriplePattern::default())
        .await
        .unwrap();

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].subject, "http://example.org/onto#Car");
    assert_eq!(bindings[1].subject, "http://example.org/onto#Bus");
    assert_eq!(
        bindings[0].relation,
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
    );
}

#[tokio::test]
async fn test_bound_positions_resolve_from_pattern() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    // The store only returns the unbound position.
    Mock::given(method("POST"))
        .and(path("/repositories/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "head": { "vars": ["s", "r", "o"] },
            "results": { "bindings": [
                { "s": { "type": "uri", "value": "http://example.org/onto#Car" } }
            ] }
        })))
        .mount(&server)
        .await;

    let pattern = TriplePattern {
        relation: Some(vocab::rdf_type()),
        object: Some(vocab::owl_class()),
        ..Default::default()
    };
    let bindings = client.read_triples(&pattern).await.unwrap();

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].subject, "http://example.org/onto#Car");
    assert_eq!(bindings[0].relation, "rdf:type");
    assert_eq!(bindings[0].object, "owl:Class");
}

#[tokio::test]
async fn test_read_no_match_is_empty_not_error() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_json(&[])))
        .mount(&server)
        .await;

    let bindings = client
        .read_triples(&TriplePattern::default())
        .await
        .unwrap();
    assert!(bindings.is_empty());
}

#[tokio::test]
async fn test_rejected_query_is_query_error() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test"))
        .respond_with(ResponseTemplate::new(400).set_body_string("MALFORMED QUERY"))
        .mount(&server)
        .await;

    let err = client
        .read_triples(&TriplePattern::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Query { status: 400, .. }));
}

#[tokio::test]
async fn test_insert_applied_and_duplicate_both_succeed() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test/statements"))
        .and(header("content-type", "application/sparql-update"))
        .and(body_string_contains("INSERT DATA"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let triple = class_triple("Vehicle");
    assert!(client.insert_triple(&triple).await.unwrap());
    assert!(client.insert_triple(&triple).await.unwrap());
}

#[tokio::test]
async fn test_update_rejection_is_false_not_error() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test/statements"))
        .respond_with(ResponseTemplate::new(400).set_body_string("unknown predicate"))
        .mount(&server)
        .await;

    assert!(!client.insert_triple(&class_triple("Vehicle")).await.unwrap());
    assert!(!client.delete_triple(&class_triple("Vehicle")).await.unwrap());
}

#[tokio::test]
async fn test_store_fault_is_an_error_not_a_rejection() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test/statements"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .mount(&server)
        .await;

    let err = client.insert_triple(&class_triple("Vehicle")).await.unwrap_err();
    assert!(matches!(err, StoreError::Query { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_store_is_connection_error() {
    let config = StoreConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        repository: "test".to_string(),
        ..Default::default()
    };
    let err = StoreClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));
}

#[tokio::test]
async fn test_upload_and_register_saves_then_loads() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/repositories/test/statements"))
        .and(header("content-type", "text/turtle"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let vault = OntologyVault::new(tmp.path()).unwrap();

    let applied = client
        .upload_and_register(&vault, "demo.ttl", b"<a> <b> <c> .")
        .await
        .unwrap();
    assert!(applied);
    assert!(tmp.path().join("demo.ttl").exists());
}

#[tokio::test]
async fn test_upload_empty_content_is_false_without_side_effects() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let tmp = tempfile::tempdir().unwrap();
    let vault = OntologyVault::new(tmp.path()).unwrap();

    let applied = client
        .upload_and_register(&vault, "empty.owl", b"")
        .await
        .unwrap();
    assert!(!applied);
    assert!(!tmp.path().join("empty.owl").exists());
}
