use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    name: String,
    symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    change: Decimal,
    market_cap: String,
}

/// Name shown when the provider has none: the part of the symbol before the
/// first dash, so `BTC-USD` becomes `BTC`.
pub fn fallback_name(symbol: &str) -> String {
    symbol.split('-').next().unwrap_or(symbol).to_string()
}

pub fn fraction_to_percent(fraction: Decimal) -> Decimal {
    fraction * dec!(100)
}

pub fn format_market_cap(market_cap: Option<Decimal>) -> String {
    let market_cap = match market_cap {
        Some(cap) if !cap.is_zero() => cap,
        _ => return String::from("N/A"),
    };

    let trillion = dec!(1000000000000);
    let billion = dec!(1000000000);

    if market_cap >= trillion {
        let scaled = (market_cap / trillion)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${:.2}T", scaled)
    } else if market_cap >= billion {
        let scaled = (market_cap / billion)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("${:.1}B", scaled)
    } else {
        format!("${}", group_thousands(market_cap))
    }
}

/// en-US grouping with at most three fraction digits.
fn group_thousands(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
