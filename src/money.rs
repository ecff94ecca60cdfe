//! Currency display
//!
//! Amounts are plain `f64` in the store's base unit. Display follows the
//! storefront: currency symbol prefix, comma thousands separators, no
//! fractional digits for whole amounts and at most two otherwise.

/// Default currency symbol (Naira)
pub const NAIRA: &str = "₦";

/// Format an amount in Naira
///
/// # Examples
/// ```
/// use shipzone::money::format_price;
/// assert_eq!(format_price(1500.0), "₦1,500");
/// assert_eq!(format_price(1250.5), "₦1,250.5");
/// ```
pub fn format_price(amount: f64) -> String {
    format_amount(amount, NAIRA)
}

/// Format an amount with an arbitrary currency symbol
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&group_thousands(whole));
    if frac > 0 {
        let digits = format!("{:02}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Delivery fee display: zero is shown as `FREE`
pub fn format_fee(fee: f64, symbol: &str) -> String {
    if fee == 0.0 {
        "FREE".to_string()
    } else {
        format_amount(fee, symbol)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
