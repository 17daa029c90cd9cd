use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApiProvider {
    #[default]
    Yahoo,
    AlphaVantage,
}
