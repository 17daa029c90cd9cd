#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::config::Config;

    #[test]
    fn market_symbols_are_trimmed() {
        let config = Config::try_parse_from([
            "finance-tracker",
            "--market-symbols",
            " BTC-USD, ETH-USD ,,SOL-USD",
        ])
        .unwrap();

        assert_eq!(config.market_symbols(), ["BTC-USD", "ETH-USD", "SOL-USD"]);
    }
}
