use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_test_client, BASIC_AUTH};
use pfsense_client::PfSenseError;

const DHCP_LEASES_RESPONSE: &str = r#"{"status":"ok","code":200,"return":0,"message":"Success",
"data":[{"ip":"192.168.60.7","type":"static","mac":"b4:5f:56:22:d4:33","if":"opt10",
"starts":"","ends":"","hostname":"host1","descr":"host1",
"online":true,"staticmap_array_index":1,"state":"static"}]}"#;

#[tokio::test]
async fn test_list_leases() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/status/dhcp_server/leases"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(DHCP_LEASES_RESPONSE),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let leases = client.dhcp().list_leases().send().await?;

    assert_eq!(leases.len(), 1);
    let lease = &leases[0];
    assert_eq!(lease.ip, "192.168.60.7");
    assert_eq!(lease.mac, "b4:5f:56:22:d4:33");
    assert_eq!(lease.interface, "opt10");
    assert_eq!(lease.hostname, "host1");
    assert!(lease.is_static());
    assert!(lease.online);
    Ok(())
}

#[tokio::test]
async fn test_list_leases_with_limit() -> Result<(), PfSenseError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/status/dhcp_server/leases"))
        .and(query_param("limit", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"ok","code":200,"message":"","data":[]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let leases = client.dhcp().list_leases().limit(50).send().await?;

    assert!(leases.is_empty());
    Ok(())
}
