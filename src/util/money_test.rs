use super::*;

// =============================================================
// format_money
// =============================================================

#[test]
fn format_money_renders_cents_and_thousands() {
    assert_eq!(format_money(0.0), "$0.00");
    assert_eq!(format_money(5.0), "$5.00");
    assert_eq!(format_money(599.99), "$599.99");
    assert_eq!(format_money(1299.99), "$1,299.99");
    assert_eq!(format_money(3499.99), "$3,499.99");
    assert_eq!(format_money(1_234_567.8), "$1,234,567.80");
}

#[test]
fn format_money_rounds_to_cents() {
    assert_eq!(format_money(41.199_999_999_999_99), "$41.20");
    assert_eq!(format_money(208.800_000_000_000_01), "$208.80");
}

#[test]
fn format_money_signs_negative_amounts() {
    assert_eq!(format_money(-20.0), "-$20.00");
    assert_eq!(format_money(-5200.0), "-$5,200.00");
}

#[test]
fn format_money_never_renders_negative_zero() {
    assert_eq!(format_money(-0.001), "$0.00");
}

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_accepts_plain_and_decorated_values() {
    assert_eq!(parse_amount("500"), Ok(500.0));
    assert_eq!(parse_amount("  500.50 "), Ok(500.5));
    assert_eq!(parse_amount("$1,299.99"), Ok(1299.99));
}

#[test]
fn parse_amount_rejects_empty_input() {
    assert_eq!(parse_amount(""), Err(AmountError::Empty));
    assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    assert_eq!(parse_amount("$"), Err(AmountError::Empty));
}

#[test]
fn parse_amount_rejects_garbage() {
    assert_eq!(
        parse_amount("abc"),
        Err(AmountError::NotANumber("abc".to_owned()))
    );
    assert_eq!(
        parse_amount("12.3.4"),
        Err(AmountError::NotANumber("12.3.4".to_owned()))
    );
}

#[test]
fn parse_amount_rejects_negative_values() {
    assert_eq!(parse_amount("-50"), Err(AmountError::Negative));
}

#[test]
fn parse_amount_degrades_to_zero_like_a_calculator() {
    assert_eq!(parse_amount("nope").unwrap_or(0.0), 0.0);
    assert_eq!(parse_amount("").unwrap_or(0.0), 0.0);
}
