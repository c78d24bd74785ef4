//! Checkout hand-off: the cart is turned into a WhatsApp order message;
//! no order ever goes through the API.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::stores::cart::CartState;

/// Format a price in the store currency: `R$ 1.234,56`.
#[must_use]
pub fn format_price(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Render the cart as the order message sent over WhatsApp: one bullet
/// per line item plus the grand total.
#[must_use]
pub fn order_message(cart: &CartState) -> String {
    let mut message = String::from("🛒 Pedido:\n\n");
    for item in &cart.items {
        message.push_str(&format!(
            "• {}x {} - {}\n",
            item.quantity,
            item.name,
            format_price(item.subtotal())
        ));
    }
    message.push_str(&format!("\nTotal: {}\n", format_price(cart.total())));
    message
}

/// Build the `wa.me` hand-off URL for an order message.
#[must_use]
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(message, NON_ALPHANUMERIC)
    )
}
