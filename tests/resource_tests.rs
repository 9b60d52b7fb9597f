//! Integration tests for the resource modules.
//!
//! Each test mounts the endpoint a method is expected to hit and checks the
//! method, path, query string and body that arrive at the mock server.

use chrono::{TimeZone, Utc};
use serde_json::{json, Map};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meraki_dashboard::resources::{
    AdminParams, BluetoothClientsQuery, BluetoothSettingsUpdate, ClientProvision, DevicePolicy,
    LossAndLatencyQuery, MajorMinorAssignmentMode, NetworkCreate, OrganizationClaim, VpnPeer,
    MAX_TIMESPAN,
};
use meraki_dashboard::{ApiKey, BaseUrl, Dashboard, DashboardConfig, ResourceError, TimeWindow};

async fn setup() -> (MockServer, Dashboard) {
    let server = MockServer::start().await;
    let config = DashboardConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    (server, Dashboard::with_config(&config).unwrap())
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({}))
}

/// Returns the raw query string of the only request the server received.
async fn only_query(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query().unwrap_or_default().to_string()
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_missing_identifiers_send_no_request() {
    let (server, dashboard) = setup().await;

    Mock::given(any())
        .respond_with(ok())
        .expect(0)
        .mount(&server)
        .await;

    let networks = dashboard.networks();
    let devices = dashboard.devices();
    let clients = dashboard.clients();

    assert!(matches!(networks.list("").await, Err(ResourceError::NetworkIdMissing)));
    assert!(matches!(
        devices.performance("N_1", "").await,
        Err(ResourceError::SerialMissing)
    ));
    assert!(matches!(
        devices
            .loss_and_latency("N_1", "Q2XX", &LossAndLatencyQuery::default())
            .await,
        Err(ResourceError::IpMissing)
    ));
    assert!(matches!(
        clients.usage_history("N_1", "").await,
        Err(ResourceError::ClientIdMissing)
    ));
    assert!(matches!(
        clients
            .provision("N_1", &ClientProvision::default())
            .await,
        Err(ResourceError::MacAddressMissing)
    ));
    assert!(matches!(
        clients
            .provision(
                "N_1",
                &ClientProvision {
                    mac: "00:11:22:33:44:55".to_string(),
                    ..Default::default()
                }
            )
            .await,
        Err(ResourceError::DevicePolicyMissing)
    ));
    assert!(matches!(
        dashboard.admins().delete("1", "").await,
        Err(ResourceError::AdminIdMissing)
    ));
    assert!(matches!(
        dashboard.organizations().snmp("").await,
        Err(ResourceError::OrganizationIdMissing)
    ));

    server.verify().await;
}

// ============================================================================
// Query strings
// ============================================================================

#[tokio::test]
async fn test_timespan_is_clamped_on_the_wire() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/traffic"))
        .and(query_param("timespan", MAX_TIMESPAN.to_string()))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard.networks().traffic("N_1", 5_000_000).await.unwrap();
}

#[tokio::test]
async fn test_air_marshal_sends_timespan() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/airMarshal"))
        .and(query_param("timespan", "7200"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard.networks().air_marshal("N_1", 7200).await.unwrap();
}

#[tokio::test]
async fn test_loss_and_latency_query_order() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/devices/Q2XX/lossAndLatencyHistory"))
        .respond_with(ok())
        .mount(&server)
        .await;

    dashboard
        .devices()
        .loss_and_latency("N_1", "Q2XX", &LossAndLatencyQuery::new("8.8.8.8"))
        .await
        .unwrap();

    assert_eq!(
        only_query(&server).await,
        "resolution=60&uplink=wan1&ip=8.8.8.8&timespan=3600"
    );
}

#[tokio::test]
async fn test_latency_history_with_range_sends_t0_t1() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/clients/k74272e/latencyHistory"))
        .respond_with(ok())
        .mount(&server)
        .await;

    let window = TimeWindow::Range {
        t0: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        t1: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    };
    dashboard
        .clients()
        .latency_history("N_1", "k74272e", window)
        .await
        .unwrap();

    assert_eq!(only_query(&server).await, "t0=1704067200&t1=1704110400");
}

#[tokio::test]
async fn test_bluetooth_clients_list_and_single_client_params() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/bluetoothClients"))
        .and(query_param("timespan", "3600"))
        .and(query_param("includeConnectivityHistory", "false"))
        .and(query_param("perPage", "30"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/bluetoothClients/bc_1"))
        .and(query_param("includeConnectivityHistory", "true"))
        .and(query_param("connectivityHistoryTimespan", "600"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let networks = dashboard.networks();
    networks
        .bluetooth_clients("N_1", &BluetoothClientsQuery::default())
        .await
        .unwrap();
    networks
        .bluetooth_clients(
            "N_1",
            &BluetoothClientsQuery {
                client: Some("bc_1".to_string()),
                timespan: 600,
                include_connectivity_history: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_splash_login_attempts_adds_ssid_only_when_given() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/splashLoginAttempts"))
        .respond_with(ok())
        .mount(&server)
        .await;

    dashboard
        .networks()
        .splash_login_attempts("N_1", Some(2), 3600)
        .await
        .unwrap();

    assert_eq!(only_query(&server).await, "timespan=3600&ssidNumber=2");
}

#[tokio::test]
async fn test_security_events_query() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/clients/k74272e/securityEvents"))
        .respond_with(ok())
        .mount(&server)
        .await;

    dashboard
        .clients()
        .security_events("N_1", "k74272e", 86_400, 10)
        .await
        .unwrap();

    assert_eq!(only_query(&server).await, "timespan=86400&perPage=10");
}

// ============================================================================
// Read/write pairs
// ============================================================================

#[tokio::test]
async fn test_bluetooth_settings_read_is_get_and_write_is_put() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/bluetoothSettings"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/networks/N_1/bluetoothSettings"))
        .and(body_json(json!({
            "scanningEnabled": true,
            "advertisingEnabled": false
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let networks = dashboard.networks();
    networks.bluetooth_settings("N_1").await.unwrap();
    networks
        .update_bluetooth_settings(
            "N_1",
            &BluetoothSettingsUpdate {
                scanning_enabled: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bluetooth_settings_non_unique_mode_sends_major_minor() {
    let (server, dashboard) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/networks/N_1/bluetoothSettings"))
        .and(body_json(json!({
            "scanningEnabled": true,
            "advertisingEnabled": true,
            "majorMinorAssignmentMode": "Non-unique",
            "major": 1,
            "minor": 2
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .networks()
        .update_bluetooth_settings(
            "N_1",
            &BluetoothSettingsUpdate {
                scanning_enabled: true,
                advertising_enabled: true,
                uuid: None,
                major_minor_assignment_mode: Some(MajorMinorAssignmentMode::NonUnique {
                    major: 1,
                    minor: 2,
                }),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_splash_auth_status_update_body() {
    let (server, dashboard) = setup().await;

    Mock::given(method("PUT"))
        .and(path(
            "/networks/N_1/clients/00%3A11%3A22%3A33%3A44%3A55/splashAuthorizationStatus",
        ))
        .and(body_json(json!({"ssids": {"3": {"isAuthorized": true}}})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .clients()
        .update_splash_auth_status("N_1", "00:11:22:33:44:55", 3, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_policy_update_is_put_with_group_policy() {
    let (server, dashboard) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/networks/N_1/clients/k74272e/policy"))
        .and(body_json(json!({
            "devicePolicy": "Group policy",
            "groupPolicyId": "101"
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .clients()
        .update_policy("N_1", "k74272e", DevicePolicy::GroupPolicy, Some("101"))
        .await
        .unwrap();
}

// ============================================================================
// Paths and bodies per module
// ============================================================================

#[tokio::test]
async fn test_organization_endpoints() {
    let (server, dashboard) = setup().await;

    for action in ["licenseState", "inventory", "deviceStatuses", "snmp", "thirdPartyVPNPeers", "networks"] {
        Mock::given(method("GET"))
            .and(path(format!("/organizations/549236/{action}")))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path("/organizations/549236/clone"))
        .and(body_json(json!({"name": "Copy"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/organizations/549236/claim"))
        .and(body_json(json!({"serial": "Q234-ABCD-5678"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/organizations/549236/thirdPartyVPNPeers"))
        .and(body_json(json!({"peers": [{
            "name": "HQ",
            "publicIp": "203.0.113.10",
            "privateSubnets": ["10.0.0.0/8"],
            "secret": "s3cr3t"
        }]})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let organizations = dashboard.organizations();
    organizations.license_state("549236").await.unwrap();
    organizations.inventory("549236").await.unwrap();
    organizations.device_statuses("549236").await.unwrap();
    organizations.snmp("549236").await.unwrap();
    organizations.third_party_vpn_peers("549236").await.unwrap();
    organizations.networks("549236").await.unwrap();
    organizations.clone_organization("549236", "Copy").await.unwrap();
    organizations
        .claim(
            "549236",
            &OrganizationClaim {
                serial: Some("Q234-ABCD-5678".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    organizations
        .update_third_party_vpn_peers(
            "549236",
            &[VpnPeer {
                name: "HQ".to_string(),
                public_ip: "203.0.113.10".to_string(),
                private_subnets: vec!["10.0.0.0/8".to_string()],
                secret: "s3cr3t".to_string(),
                ..Default::default()
            }],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_network_create_posts_to_organization() {
    let (server, dashboard) = setup().await;

    Mock::given(method("POST"))
        .and(path("/organizations/549236/networks"))
        .and(body_json(json!({
            "name": "Branch",
            "type": "wireless appliance",
            "tags": "",
            "timeZone": "America/Los_Angeles",
            "disableMyMerakiCom": false,
            "disableRemoteStatusPage": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "N_2"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = dashboard
        .networks()
        .create(
            "549236",
            &NetworkCreate {
                name: "Branch".to_string(),
                network_type: vec!["wireless".to_string(), "appliance".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(response.body().unwrap()["id"], "N_2");
}

#[tokio::test]
async fn test_template_binding() {
    let (server, dashboard) = setup().await;

    Mock::given(method("POST"))
        .and(path("/networks/N_1/bind"))
        .and(body_json(json!({"configTemplateId": "T_1", "autoBind": true})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/networks/N_1/unbind"))
        .and(body_json(json!({})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let networks = dashboard.networks();
    networks.bind_template("N_1", "T_1", true).await.unwrap();
    networks.unbind_template("N_1").await.unwrap();
}

#[tokio::test]
async fn test_device_endpoints() {
    let (server, dashboard) = setup().await;

    Mock::given(method("POST"))
        .and(path("/networks/N_1/devices/claim"))
        .and(body_json(json!({"serial": "Q2XX"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/networks/N_1/devices/Q2XX/remove"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/devices/Q2XX/lldp_cdp"))
        .and(query_param("timespan", "3600"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let devices = dashboard.devices();
    devices.claim("N_1", "Q2XX").await.unwrap();
    devices.remove("N_1", "Q2XX").await.unwrap();
    devices.lldp_cdp("N_1", "Q2XX", 3600).await.unwrap();
    devices.list("N_1", None).await.unwrap();
}

#[tokio::test]
async fn test_device_clients_are_rooted_at_devices() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/Q2XX/clients"))
        .and(query_param("timespan", "86400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .devices()
        .clients()
        .list("Q2XX", 86_400)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_client_provision_body() {
    let (server, dashboard) = setup().await;

    Mock::given(method("POST"))
        .and(path("/networks/N_1/clients/provision"))
        .and(body_json(json!({
            "mac": "00:11:22:33:44:55",
            "name": "Printer",
            "devicePolicy": "Whitelisted"
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .clients()
        .provision(
            "N_1",
            &ClientProvision {
                mac: "00:11:22:33:44:55".to_string(),
                name: "Printer".to_string(),
                device_policy: Some(DevicePolicy::Whitelisted),
                group_policy_id: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ssid_endpoints() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_1/ssids/3"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/networks/N_1/ssids/3/splashSettings"))
        .and(body_json(json!({"splashUrl": "https://portal.example.com"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = Map::new();
    settings.insert("splashUrl".into(), "https://portal.example.com".into());

    let ssids = dashboard.ssids();
    ssids.get("N_1", 3).await.unwrap();
    ssids.update_splash_settings("N_1", 3, &settings).await.unwrap();
}

#[tokio::test]
async fn test_admin_update_is_put() {
    let (server, dashboard) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/organizations/549236/admins/212406"))
        .and(body_json(json!({"name": "Miles"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard
        .admins()
        .update(
            "549236",
            "212406",
            &AdminParams {
                name: Some("Miles".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_path_segments_are_percent_encoded() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/N%2F1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    dashboard.networks().list("N/1").await.unwrap();
}
