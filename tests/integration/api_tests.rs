//! API integration tests
//!
//! Run against a live server with: cargo test -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";
const API_URL: &str = "http://localhost:8080/api";

/// Per-call unique discriminator so reruns don't collide on unique columns
fn unique() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos() as u64
}

/// Unique IPv4 string derived from the discriminator
fn unique_ip(n: u64) -> String {
    format!("10.{}.{}.{}", (n >> 16) & 255, (n >> 8) & 255, n & 255)
}

async fn create_type(client: &Client, tag: u64) -> i64 {
    let response = client
        .post(format!("{}/equipment-types", API_URL))
        .json(&json!({
            "typeName": format!("Switch-{}", tag),
            "manufacturer": "Acme",
            "model": "S-2400",
            "defaultPortCount": 24
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No type ID")
}

async fn create_equipment(client: &Client, type_id: i64, name: &str) -> i64 {
    let response = client
        .post(format!("{}/equipment", API_URL))
        .json(&json!({
            "typeId": type_id,
            "name": name
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No equipment ID")
}

async fn create_port(client: &Client, equipment_id: i64, port_number: i32) -> i64 {
    let response = client
        .post(format!("{}/device-ports", API_URL))
        .json(&json!({
            "equipmentId": equipment_id,
            "portNumber": port_number,
            "portType": "RJ45",
            "status": "Active",
            "speed": "1Gbps"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No port ID")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_equipment_create_defaults() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let equipment_id = create_equipment(&client, type_id, &format!("SW-{}", tag)).await;

    let response = client
        .get(format!("{}/equipment/{}", API_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");

    // Omitted fields default server-side; a fresh equipment owns nothing
    assert_eq!(body["status"], "Active");
    assert_eq!(body["dateAdded"], Utc::now().date_naive().to_string());
    assert_eq!(body["portsCount"], 0);
    assert_eq!(body["ipAddressesCount"], 0);
    assert_eq!(body["maintenanceCount"], 0);
    assert_eq!(body["typeName"], format!("Switch-{}", tag));
    assert_eq!(body["manufacturer"], "Acme");
}

#[tokio::test]
#[ignore]
async fn test_port_number_unique_per_equipment() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let first = create_equipment(&client, type_id, &format!("SW-{}-1", tag)).await;
    let second = create_equipment(&client, type_id, &format!("SW-{}-2", tag)).await;

    create_port(&client, first, 1).await;

    // Same number on the same equipment collides
    let response = client
        .post(format!("{}/device-ports", API_URL))
        .json(&json!({ "equipmentId": first, "portNumber": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Same number on a different equipment is fine
    let response = client
        .post(format!("{}/device-ports", API_URL))
        .json(&json!({ "equipmentId": second, "portNumber": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_connect_preconditions() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let first = create_equipment(&client, type_id, &format!("SW-{}-1", tag)).await;
    let second = create_equipment(&client, type_id, &format!("SW-{}-2", tag)).await;
    let third = create_equipment(&client, type_id, &format!("SW-{}-3", tag)).await;

    let port_a = create_port(&client, first, 1).await;
    let port_a2 = create_port(&client, first, 2).await;
    let port_b = create_port(&client, second, 1).await;
    let port_c = create_port(&client, third, 1).await;

    // Self-connection is refused
    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_a, port_a))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Ports of the same equipment cannot be linked
    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_a, port_a2))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Missing target port
    let response = client
        .patch(format!("{}/device-ports/{}/connect/999999999", API_URL, port_a))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Valid connect sets the source's target fields
    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_a, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["connectedToEquipmentId"].as_i64(), Some(second));
    assert_eq!(body["connectedToPortId"].as_i64(), Some(port_b));

    // The target is now occupied for everyone else
    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_c, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_connect_is_one_directional() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let first = create_equipment(&client, type_id, &format!("SW-{}-1", tag)).await;
    let second = create_equipment(&client, type_id, &format!("SW-{}-2", tag)).await;

    let port_a = create_port(&client, first, 1).await;
    let port_b = create_port(&client, second, 1).await;

    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_a, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // The source resolves its peer
    let response = client
        .get(format!("{}/device-ports/{}/connected", API_URL, port_a))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(port_b));

    // The target side stays unconnected: only the source holds the link
    let response = client
        .get(format!("{}/device-ports/{}/is-connected", API_URL, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, Value::Bool(false));

    let response = client
        .get(format!("{}/device-ports/{}/connected", API_URL, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_disconnect_is_idempotent() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let first = create_equipment(&client, type_id, &format!("SW-{}-1", tag)).await;
    let second = create_equipment(&client, type_id, &format!("SW-{}-2", tag)).await;

    let port_a = create_port(&client, first, 1).await;
    let port_b = create_port(&client, second, 1).await;

    let response = client
        .patch(format!("{}/device-ports/{}/connect/{}", API_URL, port_a, port_b))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .patch(format!("{}/device-ports/{}/disconnect", API_URL, port_a))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["connectedToEquipmentId"].is_null());
    assert!(body["connectedToPortId"].is_null());

    // Disconnecting an unconnected port succeeds again
    let response = client
        .patch(format!("{}/device-ports/{}/disconnect", API_URL, port_a))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // But a missing port is still a 404
    let response = client
        .patch(format!("{}/device-ports/999999999/disconnect", API_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_primary_ip_invariant() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let equipment_id = create_equipment(&client, type_id, &format!("SW-{}", tag)).await;

    let response = client
        .post(format!("{}/ip-addresses", API_URL))
        .json(&json!({
            "equipmentId": equipment_id,
            "ipAddress": unique_ip(tag),
            "isPrimary": true
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let first: Value = response.json().await.expect("Failed to parse response");
    let first_id = first["id"].as_i64().expect("No IP ID");
    assert_eq!(first["assignedDate"], Utc::now().date_naive().to_string());

    // Second primary for the same equipment conflicts
    let response = client
        .post(format!("{}/ip-addresses", API_URL))
        .json(&json!({
            "equipmentId": equipment_id,
            "ipAddress": unique_ip(tag + 1),
            "isPrimary": true
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Non-primary is fine
    let response = client
        .post(format!("{}/ip-addresses", API_URL))
        .json(&json!({
            "equipmentId": equipment_id,
            "ipAddress": unique_ip(tag + 2)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let second: Value = response.json().await.expect("Failed to parse response");
    let second_id = second["id"].as_i64().expect("No IP ID");

    // Promoting it while another primary exists conflicts
    let response = client
        .patch(format!("{}/ip-addresses/{}/set-primary", API_URL, second_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Re-marking the current primary is a no-op pass
    let response = client
        .patch(format!("{}/ip-addresses/{}/set-primary", API_URL, first_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Demote, then promote the other
    let response = client
        .patch(format!("{}/ip-addresses/{}/unset-primary", API_URL, first_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .patch(format!("{}/ip-addresses/{}/set-primary", API_URL, second_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isPrimary"], Value::Bool(true));

    let response = client
        .get(format!("{}/ip-addresses/equipment/{}/primary", API_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(second_id));
}

#[tokio::test]
#[ignore]
async fn test_ip_string_globally_unique() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let first = create_equipment(&client, type_id, &format!("SW-{}-1", tag)).await;
    let second = create_equipment(&client, type_id, &format!("SW-{}-2", tag)).await;
    let ip = unique_ip(tag);

    let response = client
        .post(format!("{}/ip-addresses", API_URL))
        .json(&json!({ "equipmentId": first, "ipAddress": ip }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // The same literal string under another equipment still collides
    let response = client
        .post(format!("{}/ip-addresses", API_URL))
        .json(&json!({ "equipmentId": second, "ipAddress": ip }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_id_returns_404() {
    let client = Client::new();

    for path in [
        "equipment-types",
        "employees",
        "equipment",
        "device-ports",
        "ip-addresses",
        "maintenance-history",
    ] {
        let response = client
            .delete(format!("{}/{}/999999999", API_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404, "delete of missing {} id", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_equipment_type_in_use_guard() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let equipment_id = create_equipment(&client, type_id, &format!("SW-{}", tag)).await;

    let response = client
        .delete(format!("{}/equipment-types/{}", API_URL, type_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let response = client
        .delete(format!("{}/equipment/{}", API_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/equipment-types/{}", API_URL, type_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_validation_errors_report_fields() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;

    let response = client
        .post(format!("{}/equipment", API_URL))
        .json(&json!({
            "typeId": type_id,
            "name": format!("SW-{}", tag),
            "macAddress": "not-a-mac"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 400);
    assert!(body["errors"]["macAddress"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_equipment_status_patch() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let equipment_id = create_equipment(&client, type_id, &format!("SW-{}", tag)).await;

    let response = client
        .patch(format!(
            "{}/equipment/{}/status?status=Maintenance",
            API_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Maintenance");
    assert_eq!(body["dateUpdated"], Utc::now().date_naive().to_string());

    let response = client
        .patch(format!(
            "{}/equipment/{}/status?status=Broken",
            API_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_schedule_next_requires_history() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let equipment_id = create_equipment(&client, type_id, &format!("SW-{}", tag)).await;

    // No history yet
    let response = client
        .patch(format!(
            "{}/maintenance-history/equipment/{}/schedule-next?nextDate=2030-01-01",
            API_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .post(format!("{}/maintenance-history", API_URL))
        .json(&json!({
            "equipmentId": equipment_id,
            "type": "Routine",
            "description": "Firmware check",
            "cost": "42.50"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .patch(format!(
            "{}/maintenance-history/equipment/{}/schedule-next?nextDate=2030-01-01",
            API_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["nextMaintenanceDate"], "2030-01-01");
}

#[tokio::test]
#[ignore]
async fn test_equipment_lookup_filters() {
    let client = Client::new();
    let tag = unique();
    let type_id = create_type(&client, tag).await;
    let name = format!("Backbone-{}", tag);
    let equipment_id = create_equipment(&client, type_id, &name).await;

    // Substring search is case-insensitive
    let response = client
        .get(format!("{}/equipment/search/name?name=backbone-{}", API_URL, tag))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let found = body
        .as_array()
        .expect("Expected array")
        .iter()
        .any(|e| e["id"].as_i64() == Some(equipment_id));
    assert!(found);

    // Filter by type sees it too
    let response = client
        .get(format!("{}/equipment/type/{}", API_URL, type_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Filter against a missing type is a 404, not an empty list
    let response = client
        .get(format!("{}/equipment/type/999999999", API_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Date filters answer with arrays
    let response = client
        .get(format!("{}/equipment/added-after?date=2000-01-01", API_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    assert!(response
        .json::<Value>()
        .await
        .expect("Failed to parse response")
        .is_array());

    let response = client
        .get(format!("{}/equipment/needs-maintenance?months=6", API_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}
