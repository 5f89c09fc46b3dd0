use super::*;

#[test]
fn places_query_carries_trimmed_city() {
    assert_eq!(places_query(" manali "), vec![("city", "manali".to_owned())]);
}

#[test]
fn places_query_keeps_raw_value_for_the_encoder() {
    assert_eq!(places_query("new delhi&x=1"), vec![("city", "new delhi&x=1".to_owned())]);
}

#[test]
fn places_query_blank_city_lists_everything() {
    assert!(places_query("   ").is_empty());
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("at-1"), "Bearer at-1");
}

#[test]
fn failure_message_uses_server_error_field() {
    assert_eq!(failure_message(400, r#"{"error":"Invalid login credentials"}"#), "Invalid login credentials");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(failure_message(500, r#"{"error":""}"#), "request failed: 500");
}
