use helix_api::{DropsEntitlementQuery, Query, UpdateEntitlementsRequest};
use helix_api::types::FulfillmentStatus;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs().into_owned().collect()
}

#[test]
fn entitlement_query_defaults() {
    let url = DropsEntitlementQuery::default().add_to_url(&base_url());
    let pairs = query_pairs(&url);
    assert!(pairs.contains(&("first".into(), "20".into())));
    assert!(!pairs.iter().any(|(k, _)| k == "after"));
    assert!(!pairs.iter().any(|(k, _)| k == "id"));
    assert!(!pairs.iter().any(|(k, _)| k == "user_id"));
    assert!(!pairs.iter().any(|(k, _)| k == "game_id"));
}

#[test]
fn entitlement_query_explicit_first_overrides_default() {
    let url = DropsEntitlementQuery::default()
        .with_first(1000)
        .add_to_url(&base_url());
    let pairs = query_pairs(&url);
    assert!(pairs.contains(&("first".into(), "1000".into())));
    assert!(!pairs.contains(&("first".into(), "20".into())));
}

#[test]
fn entitlement_query_repeats_id_pairs_in_order() {
    let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let url = DropsEntitlementQuery::default()
        .with_ids(&ids)
        .add_to_url(&base_url());
    let got: Vec<String> = query_pairs(&url)
        .into_iter()
        .filter(|(k, _)| k == "id")
        .map(|(_, v)| v)
        .collect();
    assert_eq!(got, ids);
}

#[test]
fn entitlement_query_with_filters() {
    let url = DropsEntitlementQuery::default()
        .with_user_id("25009227")
        .with_game_id("33214")
        .add_to_url(&base_url());
    let pairs = query_pairs(&url);
    assert!(pairs.contains(&("user_id".into(), "25009227".into())));
    assert!(pairs.contains(&("game_id".into(), "33214".into())));
}

#[test]
fn entitlement_query_with_after_cursor() {
    let url = DropsEntitlementQuery::default()
        .with_after("eyJiIjpudWxs")
        .add_to_url(&base_url());
    let pairs = query_pairs(&url);
    assert!(pairs.contains(&("after".into(), "eyJiIjpudWxs".into())));
}

#[test]
fn update_request_serializes_ids_and_status() {
    let update = UpdateEntitlementsRequest::new(FulfillmentStatus::Claimed)
        .with_entitlement_ids(&["a".to_string(), "b".to_string()])
        .with_entitlement_id("c");
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["entitlement_ids"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(value["fulfillment_status"], "CLAIMED");
}

#[test]
fn update_request_fulfilled_uses_wire_spelling() {
    let update = UpdateEntitlementsRequest::new(FulfillmentStatus::Fulfilled);
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["fulfillment_status"], "FULLFILLED");
}
