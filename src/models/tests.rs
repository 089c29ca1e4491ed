use super::*;

#[test]
fn deserializes_product_with_numeric_fields() {
    let json = r#"{
        "id": 1,
        "name": "Widget",
        "description": "A widget",
        "price": 19.5,
        "stock": 4,
        "image": "/media/product_images/widget.png"
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.price, 19.5);
    assert_eq!(product.stock, 4);
    assert_eq!(
        product.image.as_deref(),
        Some("/media/product_images/widget.png")
    );
}

#[test]
fn deserializes_product_with_string_encoded_numbers() {
    // DRF serializes DecimalField as a string
    let json = r#"{
        "id": 2,
        "name": "Gadget",
        "description": "A gadget",
        "price": "19.50",
        "stock": "12"
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.price, 19.5);
    assert_eq!(product.stock, 12);
    assert_eq!(product.image, None);
}

#[test]
fn null_image_is_accepted() {
    let json = r#"{"id":3,"name":"N","description":"D","price":"1.00","stock":0,"image":null}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.image, None);
}

#[test]
fn non_numeric_price_string_is_rejected() {
    let json = r#"{"id":4,"name":"N","description":"D","price":"free","stock":1}"#;
    assert!(serde_json::from_str::<Product>(json).is_err());
}

#[test]
fn price_always_formats_to_two_decimals() {
    assert_eq!(format_price(19.5), "$19.50");
    assert_eq!(format_price(100.0), "$100.00");
    assert_eq!(format_price(0.999), "$1.00");
    assert_eq!(format_price(7.0), "$7.00");
}

#[test]
fn display_price_matches_format_price_for_string_source() {
    let json = r#"{"id":5,"name":"N","description":"D","price":"19.5","stock":1}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.display_price(), "$19.50");
}

fn sample_product(id: u32) -> Product {
    Product {
        id,
        name: format!("Product {}", id),
        description: "D".to_string(),
        price: 1.0,
        stock: 1,
        image: None,
    }
}

#[test]
fn remove_product_drops_exactly_the_matching_entry() {
    let mut products = vec![sample_product(1), sample_product(2), sample_product(3)];
    remove_product(&mut products, 2);
    assert_eq!(
        products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn remove_product_with_unknown_id_leaves_the_list_unchanged() {
    let mut products = vec![sample_product(1), sample_product(2)];
    remove_product(&mut products, 9);
    assert_eq!(products.len(), 2);
}

#[test]
fn login_response_reads_is_staff() {
    let ok: LoginResponse = serde_json::from_str(r#"{"is_staff": true}"#).unwrap();
    assert!(ok.is_staff);
    let no: LoginResponse = serde_json::from_str(r#"{"is_staff": false}"#).unwrap();
    assert!(!no.is_staff);
}

#[test]
fn error_body_detail_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"detail": "Invalid credentials."}"#).unwrap();
    assert_eq!(with.detail.as_deref(), Some("Invalid credentials."));
    let without: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(without.detail, None);
}
