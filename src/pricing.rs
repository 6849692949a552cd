//Single source of truth for order pricing. Both the cart endpoints and the
//checkout-session service go through these functions, so the storefront
//estimate and the amount sent to the payment provider can never diverge.

/// Subtotal at or above which the flat shipping fee is waived, in euro.
pub const FREE_SHIPPING_THRESHOLD: f64 = 100.00;

/// Flat shipping fee charged below the threshold, in euro.
pub const FLAT_SHIPPING_FEE: f64 = 12.50;

pub fn unit_price(base_price: f64, size_modifier: f64, paper_modifier: f64, frame_modifier: f64) -> f64 {
    base_price + size_modifier + paper_modifier + frame_modifier
}

pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
    unit_price * quantity as f64
}

pub fn subtotal(line_totals: &[f64]) -> f64 {
    line_totals.iter().sum()
}

pub fn shipping_fee(subtotal: f64) -> f64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        FLAT_SHIPPING_FEE
    }
}

pub fn grand_total(subtotal: f64) -> f64 {
    subtotal + shipping_fee(subtotal)
}

//What the payment provider expects: integer cents.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
