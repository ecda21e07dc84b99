//! This module provides the main entry point for downloading DWD daily climate
//! data. It discovers the stations listed in the DWD station directory, fetches
//! each station's fixed-width text export and decodes it into [`DailyRecord`]s.

use crate::config::DwdConfig;
use crate::decoder::line_filter::is_data_line;
use crate::decoder::record_decoder::decode;
use crate::error::DwdError;
use crate::stations::directory::parse_station_directory;
use crate::transport::fetcher::Fetcher;
use crate::transport::http_fetcher::HttpFetcher;
use crate::types::observation_frame::ObservationFrame;
use crate::types::record::DailyRecord;
use crate::types::station::Station;
use crate::utils::{parse_url, station_data_url};
use log::{debug, info, warn};
use reqwest::Url;

/// The main client for DWD daily climate observations.
///
/// All requests are made sequentially on the calling thread. Each request is
/// bounded by [`DwdConfig::timeout`].
///
/// Create an instance with [`Dwd::new()`] for the public DWD endpoints,
/// [`Dwd::with_config()`] for custom settings, or [`Dwd::with_fetcher()`] to
/// supply your own [`Fetcher`].
///
/// # Examples
///
/// ```no_run
/// # use dwd_klima::{Dwd, DwdError};
/// # fn main() -> Result<(), DwdError> {
/// let client = Dwd::new()?;
/// let records = client.collect_all_stations()?;
/// for record in &records {
///     println!("{}", record);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dwd<F: Fetcher = HttpFetcher> {
    fetcher: F,
    directory_url: Url,
    data_url: Url,
}

impl Dwd<HttpFetcher> {
    /// Creates a client for the public DWD service with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DwdError::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, DwdError> {
        Self::with_config(DwdConfig::default())
    }

    /// Creates a client using the endpoints, timeout and user agent of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DwdError::InvalidUrl`] if one of the configured URLs cannot be
    /// parsed, or [`DwdError::Transport`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dwd_klima::{Dwd, DwdConfig, DwdError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), DwdError> {
    /// let config = DwdConfig::builder()
    ///     .timeout(Duration::from_secs(120))
    ///     .build();
    /// let client = Dwd::with_config(config)?;
    /// let stations = client.stations()?;
    /// println!("{} stations available", stations.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: DwdConfig) -> Result<Self, DwdError> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(fetcher, &config)
    }
}

impl<F: Fetcher> Dwd<F> {
    /// Creates a client that retrieves documents through `fetcher`.
    ///
    /// Only the endpoint URLs of `config` are used; timeout and user agent are
    /// up to the fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`DwdError::InvalidUrl`] if one of the configured URLs cannot be
    /// parsed.
    pub fn with_fetcher(fetcher: F, config: &DwdConfig) -> Result<Self, DwdError> {
        Ok(Self {
            fetcher,
            directory_url: parse_url(&config.directory_url)?,
            data_url: parse_url(&config.data_url)?,
        })
    }

    /// Fetches the station directory and lists its stations in key order.
    ///
    /// # Errors
    ///
    /// * [`DwdError::Transport`] if the directory cannot be downloaded or is not JSON.
    /// * [`DwdError::DirectoryFormat`] if the document lacks `cl2Categories_Station`
    ///   or one of its entries has no string `val`.
    pub fn stations(&self) -> Result<Vec<Station>, DwdError> {
        let document = self.fetcher.fetch_json(&self.directory_url)?;
        let stations = parse_station_directory(&document)?;
        info!("Found {} stations in directory", stations.len());
        Ok(stations)
    }

    /// Downloads and decodes all daily records of one station.
    ///
    /// Lines not starting with a digit (headers, blank lines, footers) are
    /// skipped. The remaining lines are decoded in source order.
    ///
    /// # Errors
    ///
    /// * [`DwdError::Transport`] if the request or reading the response fails.
    /// * [`DwdError::Decode`] for the first data line that cannot be decoded. The
    ///   error carries the station id and the 1-based line number.
    pub fn station_records(&self, station: &Station) -> Result<Vec<DailyRecord>, DwdError> {
        let url = station_data_url(&self.data_url, &station.id);
        let lines = self.fetcher.fetch_lines(&url)?;

        let mut records = Vec::new();
        let mut skipped = 0;
        for (i, line) in lines.enumerate() {
            let line = line?;
            if !is_data_line(&line) {
                skipped += 1;
                continue;
            }
            let record = decode(&line).map_err(|source| {
                warn!(
                    "Failed to decode line {} of station {}: {}",
                    i + 1,
                    station,
                    source
                );
                DwdError::Decode {
                    station: station.id.clone(),
                    line_number: i + 1,
                    source,
                }
            })?;
            records.push(record);
        }

        debug!("Skipped {} non-data lines for station {}", skipped, station);
        info!("Decoded {} records for station {}", records.len(), station);
        Ok(records)
    }

    /// Downloads and decodes the records of every station in the directory.
    ///
    /// The result holds the stations in directory order and, within a station,
    /// the records in the order the lines were received.
    ///
    /// The aggregation is all-or-nothing: the first failure of any station
    /// aborts the run and none of the records collected so far are returned.
    /// Use [`Dwd::station_results`] to keep the stations that did succeed.
    ///
    /// # Errors
    ///
    /// Any error of [`Dwd::stations`] or [`Dwd::station_records`].
    pub fn collect_all_stations(&self) -> Result<Vec<DailyRecord>, DwdError> {
        let stations = self.stations()?;
        let mut records = Vec::new();
        for station in &stations {
            records.extend(self.station_records(station)?);
        }
        info!(
            "Collected {} records from {} stations",
            records.len(),
            stations.len()
        );
        Ok(records)
    }

    /// Lists the stations, then lazily yields the outcome of each station.
    ///
    /// Unlike [`Dwd::collect_all_stations`], a failing station does not stop the
    /// iteration: its error is yielded next to the station and the next station
    /// is fetched when the iterator is advanced.
    ///
    /// # Errors
    ///
    /// Fails up front if the station directory cannot be fetched or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dwd_klima::{Dwd, DwdError};
    /// # fn main() -> Result<(), DwdError> {
    /// let client = Dwd::new()?;
    /// for (station, outcome) in client.station_results()? {
    ///     match outcome {
    ///         Ok(records) => println!("{}: {} records", station, records.len()),
    ///         Err(e) => eprintln!("{}: {}", station, e),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn station_results(
        &self,
    ) -> Result<impl Iterator<Item = (Station, Result<Vec<DailyRecord>, DwdError>)> + '_, DwdError>
    {
        let stations = self.stations()?;
        Ok(stations.into_iter().map(move |station| {
            let outcome = self.station_records(&station);
            (station, outcome)
        }))
    }

    /// Collects all stations (see [`Dwd::collect_all_stations`]) into an
    /// [`ObservationFrame`] for filtering with Polars.
    ///
    /// # Errors
    ///
    /// Any error of [`Dwd::collect_all_stations`], or [`DwdError::Frame`] if the
    /// frame cannot be built.
    pub fn observation_frame(&self) -> Result<ObservationFrame, DwdError> {
        let records = self.collect_all_stations()?;
        Ok(ObservationFrame::from_records(&records)?)
    }
}
