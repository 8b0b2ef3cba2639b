use super::*;

use crate::net::types::AttributeType;

// =============================================================
// Sign in
// =============================================================

#[test]
fn signin_requires_username_and_password() {
    let errors = SigninForm::default().validate().unwrap_err();
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn signin_rejects_short_passwords() {
    let form = SigninForm {
        username: "alice".to_owned(),
        password: "short".to_owned(),
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.username.is_none());
    assert_eq!(errors.password, Some("Password must be at least 8 characters"));
}

#[test]
fn signin_trims_the_username() {
    let form = SigninForm {
        username: "  alice  ".to_owned(),
        password: "secretpw".to_owned(),
    };
    let payload = form.validate().expect("valid form");
    assert_eq!(payload.username, "alice");
    assert_eq!(payload.password, "secretpw");
}

// =============================================================
// Sign up
// =============================================================

#[test]
fn signup_rejects_mismatched_passwords() {
    let form = SignupForm {
        name: "Alice".to_owned(),
        username: "alice".to_owned(),
        password: "secretpw".to_owned(),
        confirm_password: "secretpw2".to_owned(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
}

#[test]
fn signup_payload_omits_the_confirmation() {
    let form = SignupForm {
        name: "Alice".to_owned(),
        username: "alice".to_owned(),
        password: "secretpw".to_owned(),
        confirm_password: "secretpw".to_owned(),
    };
    let payload = form.validate().expect("valid form");
    let json = serde_json::to_value(&payload).expect("json");
    assert!(json.get("confirmPassword").is_none());
    assert_eq!(json["username"], "alice");
}

// =============================================================
// Product
// =============================================================

fn product_form() -> ProductForm {
    ProductForm {
        name: "Chair".to_owned(),
        description: "Oak".to_owned(),
        price: "49.5".to_owned(),
        stock: "12".to_owned(),
        attributes: vec![("Color".to_owned(), "Brown".to_owned())],
    }
}

#[test]
fn product_parses_price_and_stock() {
    let payload = product_form().validate().expect("valid form");
    assert!((payload.price - 49.5).abs() < f64::EPSILON);
    assert_eq!(payload.stock, 12);
    assert_eq!(payload.attributes.len(), 1);
}

#[test]
fn product_rejects_negative_price() {
    let form = ProductForm {
        price: "-1".to_owned(),
        ..product_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.price, Some("Price must be zero or more"));
}

#[test]
fn product_rejects_non_numeric_inputs() {
    let form = ProductForm {
        price: "abc".to_owned(),
        stock: "3.5".to_owned(),
        ..product_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.price, Some("Price must be a number"));
    assert_eq!(errors.stock, Some("Stock must be a non-negative whole number"));
}

#[test]
fn product_reports_all_missing_fields_at_once() {
    let errors = ProductForm::default().validate().unwrap_err();
    assert_eq!(errors.name, Some("Name is required"));
    assert_eq!(errors.price, Some("Price is required"));
    assert_eq!(errors.stock, Some("Stock is required"));
}

#[test]
fn product_drops_blank_attribute_rows() {
    let form = ProductForm {
        attributes: vec![
            ("Color".to_owned(), "Brown".to_owned()),
            ("   ".to_owned(), String::new()),
        ],
        ..product_form()
    };
    let payload = form.validate().expect("valid form");
    assert_eq!(payload.attributes.len(), 1);
}

// =============================================================
// Attribute
// =============================================================

#[test]
fn attribute_requires_a_name() {
    let errors = AttributeForm::default().validate().unwrap_err();
    assert_eq!(errors.name, Some("Name is required"));
}

#[test]
fn attribute_keeps_values_only_for_select_types() {
    let form = AttributeForm {
        name: "Color".to_owned(),
        kind: AttributeType::Select,
        values: vec!["Red".to_owned(), "  ".to_owned(), " Blue ".to_owned()],
    };
    let payload = form.validate().expect("valid form");
    assert_eq!(payload.values, vec!["Red".to_owned(), "Blue".to_owned()]);

    let form = AttributeForm {
        kind: AttributeType::Text,
        ..form
    };
    let payload = form.validate().expect("valid form");
    assert!(payload.values.is_empty());
}
