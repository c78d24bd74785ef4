use super::*;

fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Produto {id}"),
        price,
        image: format!("/img/{id}.jpg"),
        description: None,
        tag: None,
        category_id: "canecas".to_string(),
        category_name: "Canecas".to_string(),
    }
}

// =============================================================
// add_item
// =============================================================

#[test]
fn add_item_appends_new_rows_in_insertion_order() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 1);
    cart.add_item(&product("b", 5.0), 1);
    cart.add_item(&product("c", 2.5), 1);
    let ids: Vec<_> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn add_item_accumulates_quantity_on_the_existing_row() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 1);
    cart.add_item(&product("b", 5.0), 1);
    cart.add_item(&product("a", 10.0), 3);

    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].product_id, "a");
    assert_eq!(cart.items[0].quantity, 4);
    // Accumulating does not move the row.
    assert_eq!(cart.items[1].product_id, "b");
}

#[test]
fn add_item_quantity_sums_across_any_sequence() {
    let mut cart = CartState::default();
    for quantity in [1, 2, 5, 1] {
        cart.add_item(&product("a", 10.0), quantity);
    }
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 9);
}

#[test]
fn add_item_floors_zero_quantity_at_one() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 0);
    assert_eq!(cart.items[0].quantity, 1);
}

#[test]
fn repeated_add_scenario_doubles_quantity_and_total() {
    // cart = [{a, 10.0, qty 1}]; add one more "a" → qty 2, total 20.
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 1);
    cart.add_item(&product("a", 10.0), 1);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert!((cart.total() - 20.0).abs() < f64::EPSILON);
}

// =============================================================
// increase / decrease
// =============================================================

#[test]
fn increase_bumps_by_one() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 2);
    cart.increase("a");
    assert_eq!(cart.items[0].quantity, 3);
}

#[test]
fn increase_unknown_id_is_a_noop() {
    let mut cart = CartState::default();
    cart.increase("missing");
    assert!(cart.is_empty());
}

#[test]
fn decrease_floors_at_one_and_never_deletes() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 2);
    cart.decrease("a");
    assert_eq!(cart.items[0].quantity, 1);

    // Idempotent at the floor: the row stays.
    cart.decrease("a");
    cart.decrease("a");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

// =============================================================
// remove_item / clear
// =============================================================

#[test]
fn remove_item_deletes_regardless_of_quantity() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 5);
    cart.add_item(&product("b", 5.0), 1);
    cart.remove_item("a");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_id, "b");
}

#[test]
fn remove_then_add_yields_a_fresh_row() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 7);
    cart.remove_item("a");
    cart.add_item(&product("a", 10.0), 1);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

#[test]
fn clear_empties_the_cart() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 1);
    cart.add_item(&product("b", 5.0), 2);
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.unit_count(), 0);
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn total_sums_unit_price_times_quantity() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 2);
    cart.add_item(&product("b", 7.5), 3);
    assert!((cart.total() - 42.5).abs() < f64::EPSILON);
}

#[test]
fn unit_count_sums_quantities() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 2);
    cart.add_item(&product("b", 7.5), 3);
    assert_eq!(cart.unit_count(), 5);
}

// =============================================================
// Persistence format
// =============================================================

#[test]
fn snapshot_roundtrip_reconstructs_identical_items() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 2);
    cart.add_item(&product("b", 7.5), 1);
    cart.decrease("b");

    let snapshot = serde_json::to_string(&cart).unwrap();
    let restored: CartState = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, cart);
}

#[test]
fn snapshot_is_a_plain_item_array() {
    let mut cart = CartState::default();
    cart.add_item(&product("a", 10.0), 1);
    let snapshot = serde_json::to_string(&cart).unwrap();
    assert!(snapshot.contains("\"items\""));
    assert!(snapshot.contains("\"product_id\":\"a\""));
    assert!(snapshot.contains("\"quantity\":1"));
}
