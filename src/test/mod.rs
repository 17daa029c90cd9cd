mod config;
mod quote;
mod support;
mod transaction;
