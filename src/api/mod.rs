pub mod av;
pub mod av_dto;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use av::AlphaVantageApi;
pub use yahoo::YahooApi;
