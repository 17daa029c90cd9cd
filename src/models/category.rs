use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Keyword table checked in order, first hit wins.
const KEYWORDS: [(&str, Category); 3] = [
    ("coffee", Category::Food),
    ("rent", Category::Housing),
    ("salary", Category::Income),
];

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum Category {
    Food,
    Housing,
    Income,
    Miscellaneous,
}

impl Category {
    pub fn from_description(description: &str) -> Category {
        let description = description.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Miscellaneous)
    }
}
