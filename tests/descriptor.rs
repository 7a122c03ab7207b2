use oxyshop::models::{google_shopping_url, ContextParam, RequestDescriptor, Source};
use serde_json::{json, Value};

#[test]
fn test_shopping_search_serializes_only_set_fields() {
    let descriptor = RequestDescriptor::shopping_search("adidas")
        .with_geo_location("New York,New York,United States")
        .with_pages(2)
        .with_context("sort_by", "pd")
        .with_context("min_price", 20)
        .with_parse(true);

    let value: Value = serde_json::from_str(&descriptor.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "source": "google_shopping_search",
            "query": "adidas",
            "geo_location": "New York,New York,United States",
            "pages": 2,
            "context": [
                {"key": "sort_by", "value": "pd"},
                {"key": "min_price", "value": 20}
            ],
            "parse": true
        })
    );
}

#[test]
fn test_context_order_is_preserved() {
    let descriptor = RequestDescriptor::shopping_search("adidas")
        .with_context("min_price", 20)
        .with_context("sort_by", "pd")
        .with_context("max_price", 100);

    let keys: Vec<String> = descriptor.context().into_iter().map(|c| c.key).collect();
    assert_eq!(keys, vec!["min_price", "sort_by", "max_price"]);
}

#[test]
fn test_round_trip_keeps_unknown_fields() {
    let descriptor =
        RequestDescriptor::shopping_url("https://www.google.com/search?tbm=shop&q=adidas&hl=en")
            .with_geo_location("New York,New York,United States")
            .with_field("render", "html")
            .with_field("locale", "en-us");

    let json = descriptor.to_json().unwrap();
    let parsed = RequestDescriptor::from_json(&json).unwrap();
    assert_eq!(parsed, descriptor);
    assert_eq!(parsed.get("render"), Some(&json!("html")));
}

#[test]
fn test_round_trip_from_raw_payload() {
    let raw = json!({
        "source": "google_shopping_pricing",
        "domain": "com",
        "query": "5007040952399054528",
        "user_agent_type": "desktop",
        "start_page": 1
    });

    let parsed: RequestDescriptor = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(parsed.source(), Some("google_shopping_pricing"));
    assert_eq!(parsed.get_str("domain"), Some("com"));
    assert_eq!(parsed.len(), 5);

    let back = serde_json::to_value(&parsed).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn test_with_field_replaces_known_key() {
    let descriptor = RequestDescriptor::shopping_search("adidas").with_field("source", "google");

    let json = descriptor.to_json().unwrap();
    assert_eq!(json.matches("\"source\"").count(), 1);
    assert_eq!(descriptor.source(), Some("google"));

    let parsed = RequestDescriptor::from_json(&json).unwrap();
    assert_eq!(parsed, descriptor);
}

#[test]
fn test_values_are_not_validated() {
    for raw in [
        r#"{"source":"google","pages":"2"}"#,
        r#"{"source":"google","parse":"true"}"#,
        r#"{"source":"google","pages":-1}"#,
        r#"{"source":"google","context":"sort_by=pd"}"#,
    ] {
        let parsed = RequestDescriptor::from_json(raw).unwrap();
        let expected: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), expected);
    }
}

#[test]
fn test_missing_source_stays_missing() {
    let parsed = RequestDescriptor::from_json(r#"{"query":"adidas"}"#).unwrap();
    assert_eq!(parsed.source(), None);
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({"query": "adidas"})
    );
    assert_eq!(RequestDescriptor::default().to_json().unwrap(), "{}");
}

#[test]
fn test_context_appends_after_payload_context() {
    let descriptor = RequestDescriptor::from_json(
        r#"{"source":"google_shopping_search","context":[{"key":"sort_by","value":"pd"}]}"#,
    )
    .unwrap()
    .with_context("min_price", 20);

    assert_eq!(
        descriptor.context(),
        vec![
            ContextParam::new("sort_by", "pd"),
            ContextParam::new("min_price", 20)
        ]
    );
}

#[test]
fn test_presets_use_expected_sources() {
    assert_eq!(
        RequestDescriptor::shopping_product("5007040952399054528").source(),
        Some(Source::GoogleShoppingProduct.as_str())
    );
    assert_eq!(
        RequestDescriptor::shopping_pricing("5007040952399054528").source(),
        Some("google_shopping_pricing")
    );
    let url = RequestDescriptor::shopping_url("https://example.com");
    assert_eq!(url.source(), Some("google"));
    assert_eq!(url.get_str("url"), Some("https://example.com"));
    assert!(!url.contains("query"));
}

#[test]
fn test_context_param_parse_scalars() {
    assert_eq!(ContextParam::parse("min_price=20").unwrap().value, json!(20));
    assert_eq!(ContextParam::parse("ratio=1.5").unwrap().value, json!(1.5));
    assert_eq!(ContextParam::parse("sort_by=pd").unwrap().value, json!("pd"));
    assert_eq!(ContextParam::parse("nfpr=true").unwrap().value, json!(true));
    assert_eq!(
        ContextParam::parse("filter=a=b").unwrap(),
        ContextParam::new("filter", "a=b")
    );
}

#[test]
fn test_context_param_parse_keeps_long_numbers_as_strings() {
    let param = ContextParam::parse("token=123456789012345678901234567890").unwrap();
    assert_eq!(param.value, json!("123456789012345678901234567890"));

    let param = ContextParam::parse("id=007").unwrap();
    assert_eq!(param.value, json!("007"));

    let param = ContextParam::parse("big=1e3").unwrap();
    assert_eq!(param.value, json!("1e3"));
}

#[test]
fn test_context_param_parse_keeps_structures_as_strings() {
    let param = ContextParam::parse("raw=[1,2]").unwrap();
    assert_eq!(param.value, json!("[1,2]"));
}

#[test]
fn test_context_param_parse_rejects_missing_separator() {
    assert!(ContextParam::parse("sort_by").is_err());
    assert!(ContextParam::parse("=pd").is_err());
}

#[test]
fn test_google_shopping_url_percent_encodes_query() {
    let url = google_shopping_url("adidas shoes").unwrap();
    assert_eq!(
        url,
        "https://www.google.com/search?tbm=shop&q=adidas%20shoes&hl=en"
    );

    let url = google_shopping_url("a+b & c").unwrap();
    assert_eq!(
        url,
        "https://www.google.com/search?tbm=shop&q=a%2Bb%20%26%20c&hl=en"
    );
}
