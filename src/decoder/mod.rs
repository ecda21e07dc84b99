pub mod error;
pub mod line_filter;
pub mod record_decoder;
