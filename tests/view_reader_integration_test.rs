use evolv_client::domain::model::SideLaunchField;
use evolv_client::{ClientConfig, ClientError, NodeClient, SideLaunchInfo};
use httpmock::prelude::*;
use serde_json::json;

const MODULE_ADDRESS: &str = "0x4380432feb95b2ec174d136853a83dc395ecd4077f9e144fc75bb732c2c51c65";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.url("/v1"), MODULE_ADDRESS, "evolv_erc20")
}

fn view_body() -> serde_json::Value {
    json!({
        "function": format!("{}::evolv_erc20::get_side_launch_info", MODULE_ADDRESS),
        "type_arguments": [],
        "arguments": []
    })
}

#[tokio::test]
async fn test_fetch_side_launches_over_http() {
    let server = MockServer::start();
    let view_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/view").json_body(view_body());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([[
                {
                    "name": "A",
                    "description": "d",
                    "collection_address": "0x1",
                    "metadata_uri": "u",
                    "is_active": true
                }
            ]]));
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    let launches = reader.fetch_side_launches().await.unwrap();

    view_mock.assert();
    assert_eq!(
        launches,
        vec![SideLaunchInfo {
            name: "A".to_string(),
            description: "d".to_string(),
            collection_address: "0x1".to_string(),
            metadata_uri: "u".to_string(),
            is_active: true,
            missing_fields: vec![],
        }]
    );
}

#[tokio::test]
async fn test_empty_response_is_not_an_error() {
    let server = MockServer::start();
    let view_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(200).json_body(json!([]));
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    let launches = reader.fetch_side_launches().await.unwrap();

    view_mock.assert();
    assert!(launches.is_empty());
}

#[tokio::test]
async fn test_unexpected_wrapper_is_treated_as_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(200).json_body(json!({"unexpected": "object"}));
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    assert!(reader.fetch_side_launches().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_records_are_passed_through_structurally() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(200).json_body(json!([[
            {"name": "NoStatus", "description": "d", "collection_address": "0x2", "metadata_uri": "u"},
            {"name": "Extra", "description": "d", "collection_address": "0x3", "metadata_uri": "u", "is_active": false, "supply": "9"}
        ]]));
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    let launches = reader.fetch_side_launches().await.unwrap();

    assert_eq!(launches.len(), 2);
    assert_eq!(launches[0].missing_fields, vec![SideLaunchField::IsActive]);
    assert!(!launches[0].is_active);
    assert!(launches[1].is_complete());
}

#[tokio::test]
async fn test_node_error_propagates_as_read_failure() {
    let server = MockServer::start();
    let view_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(500).body("internal error");
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    let err = reader.fetch_side_launches().await.unwrap_err();

    view_mock.assert();
    assert!(matches!(err, ClientError::ReadFailure { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unreachable_node_is_read_failure() {
    // 埠 1 沒有服務監聽
    let url = "http://127.0.0.1:1/v1".to_string();

    let reader =
        NodeClient::reader(&ClientConfig::new(url, MODULE_ADDRESS, "evolv_erc20")).unwrap();
    let err = reader.fetch_side_launches().await.unwrap_err();
    assert!(matches!(err, ClientError::ReadFailure { .. }));
}

#[tokio::test]
async fn test_reads_after_submission_are_not_required_to_match() {
    let server = MockServer::start();

    let mut stale = server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(200).json_body(json!([[]]));
    });

    let reader = NodeClient::reader(&config_for(&server)).unwrap();
    let before = reader.fetch_side_launches().await.unwrap();
    stale.assert();
    stale.delete();

    // 節點追上新狀態
    server.mock(|when, then| {
        when.method(POST).path("/v1/view");
        then.status(200).json_body(json!([[
            {"name": "New", "description": "", "collection_address": "0x9", "metadata_uri": "", "is_active": true}
        ]]));
    });

    let after = reader.fetch_side_launches().await.unwrap();

    // Either outcome is acceptable; the reader must simply report what the node said.
    assert!(before.is_empty());
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].name, "New");
}
