use super::*;
use shared::models::Product;

fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: String::new(),
        description: None,
        tag: None,
        category_id: String::new(),
        category_name: String::new(),
    }
}

// =============================================================
// format_price
// =============================================================

#[test]
fn format_price_uses_comma_decimals() {
    assert_eq!(format_price(29.9), "R$ 29,90");
    assert_eq!(format_price(7.5), "R$ 7,50");
    assert_eq!(format_price(0.0), "R$ 0,00");
}

#[test]
fn format_price_groups_thousands_with_dots() {
    assert_eq!(format_price(1234.56), "R$ 1.234,56");
    assert_eq!(format_price(1_000_000.0), "R$ 1.000.000,00");
}

#[test]
fn format_price_rounds_to_cents() {
    assert_eq!(format_price(19.999), "R$ 20,00");
    assert_eq!(format_price(0.005), "R$ 0,01");
}

// =============================================================
// order_message
// =============================================================

#[test]
fn order_message_lists_items_and_total() {
    let mut cart = CartState::default();
    cart.add_item(&product("caneca", "Caneca Clássica", 29.9), 2);
    cart.add_item(&product("chaveiro", "Chaveiro de Resina", 9.9), 1);

    let message = order_message(&cart);
    assert!(message.starts_with("🛒 Pedido:\n\n"));
    assert!(message.contains("• 2x Caneca Clássica - R$ 59,80\n"));
    assert!(message.contains("• 1x Chaveiro de Resina - R$ 9,90\n"));
    assert!(message.ends_with("\nTotal: R$ 69,70\n"));
}

#[test]
fn order_message_for_empty_cart_has_zero_total() {
    let message = order_message(&CartState::default());
    assert!(message.contains("Total: R$ 0,00"));
}

// =============================================================
// whatsapp_url
// =============================================================

#[test]
fn whatsapp_url_targets_the_configured_number() {
    let url = whatsapp_url("5511999990000", "Pedido");
    assert!(url.starts_with("https://wa.me/5511999990000?text="));
}

#[test]
fn whatsapp_url_percent_encodes_the_message() {
    let url = whatsapp_url("5511999990000", "2x Caneca - R$ 59,80\n");
    let query = url.split_once("?text=").unwrap().1;
    assert!(!query.contains(' '));
    assert!(!query.contains('\n'));
    assert!(query.contains("%20"));
    assert!(query.contains("%0A"));
}
