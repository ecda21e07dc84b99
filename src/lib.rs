//! Historical daily climate observations from the Deutscher Wetterdienst.
//!
//! The crate lists the stations of the DWD "Klimadaten Deutschland" service,
//! downloads each station's daily values as fixed-width text and decodes every
//! line into a [`DailyRecord`]. See [`Dwd`] for the entry point and [`decode`]
//! for the line format.

mod config;
mod decoder;
mod dwd;
mod error;
mod stations;
mod transport;
mod types;
mod utils;

pub use config::*;
pub use dwd::Dwd;
pub use error::DwdError;

pub use decoder::error::DecodeError;
pub use decoder::line_filter::is_data_line;
pub use decoder::record_decoder::decode;

pub use stations::directory::{parse_station_directory, STATION_KEY};
pub use stations::error::StationDirectoryError;

pub use transport::error::TransportError;
pub use transport::fetcher::{Fetcher, Lines};
pub use transport::http_fetcher::HttpFetcher;

pub use types::field::{Field, RECORD_WIDTH};
pub use types::observation_frame::ObservationFrame;
pub use types::record::DailyRecord;
pub use types::station::Station;
