pub mod category;
pub mod provider;
pub mod quote;
pub mod transaction;

pub use category::Category;
pub use provider::ApiProvider;
pub use quote::Quote;
pub use transaction::{NewTransaction, Transaction};
