pub mod error;
pub mod fetcher;
pub mod http_fetcher;
