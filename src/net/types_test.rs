use super::*;

// =============================================================
// Query building
// =============================================================

#[test]
fn product_query_includes_exactly_the_set_parameters() {
    let filters = ProductFilters {
        search: Some("chair".to_owned()),
        page: Some(1),
        limit: None,
        sort_by: Some(ProductSortField::Price),
        sort_order: Some(SortOrder::Asc),
    };
    let query = filters.to_query();
    assert_eq!(
        query,
        vec![
            ("search", "chair".to_owned()),
            ("page", "1".to_owned()),
            ("sortBy", "price".to_owned()),
            ("sortOrder", "asc".to_owned()),
        ]
    );
}

#[test]
fn initial_product_query_defaults_to_newest_first() {
    let query = ProductFilters::initial().to_query();
    assert_eq!(
        query,
        vec![
            ("page", "1".to_owned()),
            ("limit", "10".to_owned()),
            ("sortBy", "createdAt".to_owned()),
            ("sortOrder", "desc".to_owned()),
        ]
    );
}

#[test]
fn empty_search_is_omitted_from_the_query() {
    let mut filters = ProductFilters::initial();
    filters.set_search("chair".to_owned());
    filters.set_search(String::new());
    assert!(filters.to_query().iter().all(|(k, _)| *k != "search"));
}

#[test]
fn set_search_resets_to_the_first_page() {
    let mut filters = ProductFilters {
        page: Some(4),
        ..ProductFilters::initial()
    };
    filters.set_search("desk".to_owned());
    assert_eq!(filters.page, Some(1));
    assert_eq!(filters.search.as_deref(), Some("desk"));
}

#[test]
fn attribute_query_carries_the_type_filter() {
    let mut filters = AttributeFilters::initial();
    filters.set_kind(Some(AttributeType::Select));
    let query = filters.to_query();
    assert!(query.contains(&("type", "select".to_owned())));
    assert_eq!(filters.page, Some(1));
}

// =============================================================
// Sort toggling
// =============================================================

#[test]
fn toggling_the_active_ascending_column_flips_to_descending() {
    let mut filters = ProductFilters {
        sort_by: Some(ProductSortField::Price),
        sort_order: Some(SortOrder::Asc),
        ..ProductFilters::default()
    };
    filters.toggle_sort(ProductSortField::Price);
    assert_eq!(filters.sort_order, Some(SortOrder::Desc));

    filters.toggle_sort(ProductSortField::Price);
    assert_eq!(filters.sort_order, Some(SortOrder::Asc));
}

#[test]
fn toggling_a_new_column_sorts_ascending() {
    let mut filters = ProductFilters::initial();
    filters.toggle_sort(ProductSortField::Name);
    assert_eq!(filters.sort_by, Some(ProductSortField::Name));
    assert_eq!(filters.sort_order, Some(SortOrder::Asc));
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn product_parses_camel_case_fields() {
    let json = r#"{
        "id": "p-1",
        "name": "Chair",
        "description": "Oak",
        "price": 49.5,
        "stock": 12,
        "attributes": [{"id": "a-1", "name": "Color", "value": "Brown"}],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    }"#;
    let product: Product = serde_json::from_str(json).expect("product");
    assert_eq!(product.name, "Chair");
    assert_eq!(product.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(product.attributes[0].value, "Brown");
}

#[test]
fn attribute_parses_wire_type_field() {
    let json = r#"{
        "id": "a-1",
        "name": "Color",
        "type": "select",
        "values": ["Red", "Blue"],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;
    let attribute: Attribute = serde_json::from_str(json).expect("attribute");
    assert_eq!(attribute.kind, AttributeType::Select);
    assert_eq!(attribute.values.len(), 2);
}

#[test]
fn update_payload_flattens_fields_next_to_the_id() {
    let payload = UpdateAttributePayload {
        id: "a-1".to_owned(),
        fields: CreateAttributePayload {
            name: "Color".to_owned(),
            kind: AttributeType::Boolean,
            values: Vec::new(),
        },
    };
    let value = serde_json::to_value(&payload).expect("json");
    assert_eq!(value["id"], "a-1");
    assert_eq!(value["name"], "Color");
    assert_eq!(value["type"], "boolean");
}

#[test]
fn auth_response_parses_token_and_user() {
    let json = r#"{
        "token": "abc123",
        "user": {
            "id": "u-1",
            "name": "Alice",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }
    }"#;
    let response: AuthResponse = serde_json::from_str(json).expect("auth response");
    assert_eq!(response.token, "abc123");
    assert_eq!(response.user.name, "Alice");
}

#[test]
fn attribute_type_parses_its_wire_names() {
    for kind in AttributeType::ALL {
        assert_eq!(AttributeType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(AttributeType::parse("date"), None);
}
