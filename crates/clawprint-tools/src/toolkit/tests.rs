//! Unit tests for the tool adapters

use super::*;

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::search::trust_fraction_to_score;

fn toolkit(server: &MockServer, api_key: Option<&str>) -> ClawPrintToolkit {
    let mut builder = ClientConfig::builder().base_url(server.uri()).env(HashMap::new());
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    ClawPrintToolkit::new(builder.build().unwrap()).unwrap()
}

#[tokio::test]
async fn test_toolkit_exposes_six_tools() {
    let server = MockServer::start().await;
    let names: Vec<String> = toolkit(&server, None)
        .tools()
        .iter()
        .map(|tool| tool.name().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "clawprint_search",
            "clawprint_get_agent",
            "clawprint_trust",
            "clawprint_domains",
            "clawprint_hire",
            "clawprint_check_exchange",
        ]
    );
}

#[tokio::test]
async fn test_definitions_declare_schemas() {
    let server = MockServer::start().await;
    let definitions = toolkit(&server, None).definitions();

    let search = &definitions[0];
    assert_eq!(search.parameters["required"], json!(["query"]));
    assert_eq!(search.parameters["properties"]["min_trust"]["maximum"], json!(1.0));

    let hire = definitions.iter().find(|d| d.name == "clawprint_hire").unwrap();
    assert_eq!(hire.parameters["required"], json!(["domains", "task"]));
}

#[tokio::test]
async fn test_tools_share_one_client() {
    let server = MockServer::start().await;
    let kit = toolkit(&server, Some("cp_live_shared"));
    let _tools = kit.tools();

    // toolkit handle + one per tool
    assert_eq!(Arc::strong_count(kit.client()), 7);
    assert_eq!(kit.client().config().api_key(), Some("cp_live_shared"));
}

#[tokio::test]
async fn test_search_scales_min_trust() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/search"))
        .and(query_param("q", "code review"))
        .and(query_param("min_score", "80.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"handle": "codebot"}],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = toolkit(&server, None)
        .call("clawprint_search", json!({"query": "code review", "min_trust": 0.8}))
        .await
        .unwrap();

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["results"][0]["handle"], "codebot");
    assert!(!output.contains('\n'));
}

#[tokio::test]
async fn test_search_drops_blank_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    toolkit(&server, None)
        .call("clawprint_search", json!({"query": "x", "domain": ""}))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "domain"));
}

#[tokio::test]
async fn test_search_rejects_out_of_range_trust() {
    let server = MockServer::start().await;
    let err = toolkit(&server, None)
        .call("clawprint_search", json!({"query": "x", "min_trust": 1.5}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some("validation_error"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_trust_fraction_to_score() {
    assert_eq!(trust_fraction_to_score(0.8), 80.0);
    assert_eq!(trust_fraction_to_score(0.0), 0.0);
    assert_eq!(trust_fraction_to_score(1.0), 100.0);
    assert_eq!(trust_fraction_to_score(0.123), 12.3);
}

#[tokio::test]
async fn test_get_agent_and_trust() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/%40codebot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": "@codebot", "name": "CodeBot"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/trust/%40codebot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": "@codebot", "trust_score": 91})))
        .expect(1)
        .mount(&server)
        .await;

    let kit = toolkit(&server, None);
    let card = kit.call("clawprint_get_agent", json!({"handle": "@codebot"})).await.unwrap();
    assert_eq!(serde_json::from_str::<Value>(&card).unwrap()["name"], "CodeBot");

    let trust = kit.call("clawprint_trust", json!({"handle": "@codebot"})).await.unwrap();
    assert_eq!(serde_json::from_str::<Value>(&trust).unwrap()["trust_score"], 91);
}

#[tokio::test]
async fn test_domains_ignores_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"domains": [{"name": "translation"}]})))
        .mount(&server)
        .await;

    let output = toolkit(&server, None)
        .call("clawprint_domains", Value::Null)
        .await
        .unwrap();
    assert_eq!(output, r#"{"domains":[{"name":"translation"}]}"#);
}

#[tokio::test]
async fn test_domains_listed_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"domains": ["code-review", "translation"]})))
        .mount(&server)
        .await;

    let output = toolkit(&server, None)
        .call("clawprint_domains", json!({}))
        .await
        .unwrap();
    assert_eq!(output, r#"{"domains":["code-review","translation"]}"#);
}

#[tokio::test]
async fn test_hire_and_check_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/exchange/requests"))
        .and(header("Authorization", "Bearer cp_live_key"))
        .and(body_json(json!({
            "domains": ["code-review"],
            "task": "Review my FastAPI endpoint for security issues"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "req_abc123", "status": "pending"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/exchange/requests/req_abc123"))
        .and(header("Authorization", "Bearer cp_live_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "req_abc123", "status": "completed"})))
        .expect(1)
        .mount(&server)
        .await;

    let kit = toolkit(&server, Some("cp_live_key"));
    let created = kit
        .call(
            "clawprint_hire",
            json!({
                "domains": ["code-review"],
                "task": "Review my FastAPI endpoint for security issues"
            }),
        )
        .await
        .unwrap();
    assert_eq!(serde_json::from_str::<Value>(&created).unwrap()["status"], "pending");

    let status = kit
        .call("clawprint_check_exchange", json!({"request_id": "req_abc123"}))
        .await
        .unwrap();
    assert_eq!(serde_json::from_str::<Value>(&status).unwrap()["status"], "completed");
}

#[tokio::test]
async fn test_exchange_tools_require_key() {
    let server = MockServer::start().await;
    let kit = toolkit(&server, None);

    let err = kit
        .call("clawprint_hire", json!({"domains": ["x"], "task": "y"}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some("auth_required"));

    let err = kit
        .call("clawprint_check_exchange", json!({"request_id": "req_1"}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some("auth_required"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_arguments_and_unknown_tool() {
    let server = MockServer::start().await;
    let kit = toolkit(&server, None);

    let err = kit.call("clawprint_trust", json!({"name": "x"})).await.unwrap_err();
    assert_eq!(err.code(), Some("validation_error"));

    let err = kit.call("clawprint_delete", json!({})).await.unwrap_err();
    assert_eq!(err.message(), "Unknown ClawPrint tool 'clawprint_delete'.");
}

#[tokio::test]
async fn test_api_errors_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/trust/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Agent not found"})))
        .mount(&server)
        .await;

    let err = toolkit(&server, None)
        .call("clawprint_trust", json!({"handle": "ghost"}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Agent not found");
}
