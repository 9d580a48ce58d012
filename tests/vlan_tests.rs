use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{ok_envelope, setup_test_client, BASIC_AUTH};
use pfsense_client::{PfSenseError, VlanRequest};

#[tokio::test]
async fn test_list_vlans() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/interface/vlans"))
        .and(header("authorization", BASIC_AUTH))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "id": 0, "if": "igb1", "tag": 10, "vlanif": "igb1.10", "pcp": null, "descr": "servers" },
            { "id": 1, "if": "igb1", "tag": 20, "vlanif": "igb1.20", "pcp": 5, "descr": "voice" }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let vlans = client.vlans().list().send().await?;

    assert_eq!(vlans.len(), 2);
    assert_eq!(vlans[0].id, 0);
    assert_eq!(vlans[0].tag(), 10);
    assert_eq!(vlans[1].config.pcp, Some(5));
    assert_eq!(vlans[1].config.descr.as_deref(), Some("voice"));
    Ok(())
}

#[tokio::test]
async fn test_list_vlans_with_pagination() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/interface/vlans"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "id": 1, "if": "igb1", "tag": 20 }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let vlans = client.vlans().list().limit(1).offset(1).send().await?;

    assert_eq!(vlans.len(), 1);
    assert_eq!(vlans[0].id, 1);
    Ok(())
}

#[tokio::test]
async fn test_get_vlan() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/interface/vlan"))
        .and(query_param("id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(
            { "id": 3, "if": "igb2", "tag": 300, "vlanif": "igb2.300", "descr": "" }
        ))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let vlan = client.vlans().get(3).send().await?;

    assert_eq!(vlan.id, 3);
    assert_eq!(vlan.parent(), "igb2");
    assert_eq!(vlan.to_string(), "igb2.300");
    Ok(())
}

#[tokio::test]
async fn test_create_vlan() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/interface/vlan"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_json(json!({
            "if": "igb1",
            "tag": 30,
            "pcp": 3,
            "descr": "cameras"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "id": 4,
            "if": "igb1",
            "tag": 30,
            "vlanif": "igb1.30",
            "pcp": 3,
            "descr": "cameras"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let vlan = client
        .vlans()
        .create("igb1", 30)
        .pcp(3)
        .description("cameras")
        .send()
        .await?;

    assert_eq!(vlan.id, 4);
    assert_eq!(vlan.config.vlanif.as_deref(), Some("igb1.30"));
    Ok(())
}

#[tokio::test]
async fn test_update_vlan_sends_id_in_body() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/interface/vlan"))
        .and(body_json(json!({
            "id": 4,
            "if": "igb1",
            "tag": 31,
            "descr": "cameras-2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "id": 4,
            "if": "igb1",
            "tag": 31,
            "vlanif": "igb1.31",
            "descr": "cameras-2"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let request = VlanRequest {
        descr: Some("cameras-2".into()),
        ..VlanRequest::new("igb1", 31)
    };
    let vlan = client.vlans().update(4, request).send().await?;

    assert_eq!(vlan.tag(), 31);
    Ok(())
}

#[tokio::test]
async fn test_delete_vlan() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/interface/vlan"))
        .and(query_param("id", "4"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "id": 4,
            "if": "igb1",
            "tag": 31
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    client.vlans().delete(4).send().await?;
    Ok(())
}

#[tokio::test]
async fn test_create_vlan_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/interface/vlan"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 409,
            "status": "conflict",
            "response_id": "INTERFACE_VLAN_TAG_IN_USE",
            "message": "VLAN tag `30` is already in use on `igb1`.",
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let err = client.vlans().create("igb1", 30).send().await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "HTTP 409: Conflict: VLAN tag `30` is already in use on `igb1`."
    );
}
