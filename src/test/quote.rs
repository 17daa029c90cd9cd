#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::models::quote::{fallback_name, format_market_cap, fraction_to_percent};

    #[test]
    fn trillions_use_two_decimals() {
        assert_eq!(format_market_cap(Some(dec!(2150000000000))), "$2.15T");
        assert_eq!(format_market_cap(Some(dec!(1000000000000))), "$1.00T");
        assert_eq!(format_market_cap(Some(dec!(1236000000000))), "$1.24T");
    }

    #[test]
    fn billions_use_one_decimal() {
        assert_eq!(format_market_cap(Some(dec!(812345678901))), "$812.3B");
        assert_eq!(format_market_cap(Some(dec!(1000000000))), "$1.0B");
        assert_eq!(format_market_cap(Some(dec!(999999999999))), "$1000.0B");
    }

    #[test]
    fn smaller_caps_are_grouped() {
        assert_eq!(format_market_cap(Some(dec!(999999999))), "$999,999,999");
        assert_eq!(format_market_cap(Some(dec!(123456789))), "$123,456,789");
        assert_eq!(format_market_cap(Some(dec!(1000))), "$1,000");
        assert_eq!(format_market_cap(Some(dec!(999))), "$999");
        assert_eq!(format_market_cap(Some(dec!(1234.56789))), "$1,234.568");
    }

    #[test]
    fn missing_cap_is_not_available() {
        assert_eq!(format_market_cap(None), "N/A");
        assert_eq!(format_market_cap(Some(dec!(0))), "N/A");
    }

    #[test]
    fn change_fraction_becomes_percent() {
        assert_eq!(fraction_to_percent(dec!(0.0245)), dec!(2.45));
        assert_eq!(fraction_to_percent(dec!(-0.013)), dec!(-1.3));
    }

    #[test]
    fn fallback_name_keeps_base_symbol() {
        assert_eq!(fallback_name("BTC-USD"), "BTC");
        assert_eq!(fallback_name("AAPL"), "AAPL");
    }
}
