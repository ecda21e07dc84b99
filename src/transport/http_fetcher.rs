use crate::config::DwdConfig;
use crate::transport::error::TransportError;
use crate::transport::fetcher::{Fetcher, Lines};
use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use std::io::{BufRead, BufReader};

/// Blocking HTTP implementation of [`Fetcher`] built on `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client honouring the timeout and user agent of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the TLS backend or the
    /// system configuration cannot be initialised.
    pub fn new(config: &DwdConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }

    fn get(&self, url: &Url) -> Result<Response, TransportError> {
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::NetworkRequest(url.to_string(), e))?;

        match response.error_for_status() {
            Ok(resp) => Ok(resp),
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                Err(if let Some(status) = e.status() {
                    TransportError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    TransportError::NetworkRequest(url.to_string(), e)
                })
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_json(&self, url: &Url) -> Result<serde_json::Value, TransportError> {
        let response = self.get(url)?;
        let reader = BufReader::new(response);
        let value = serde_json::from_reader(reader)
            .map_err(|e| TransportError::JsonParse(url.to_string(), e))?;
        debug!("Parsed JSON document from {}", url);
        Ok(value)
    }

    fn fetch_lines(&self, url: &Url) -> Result<Lines<'_>, TransportError> {
        let response = self.get(url)?;
        let url = url.to_string();
        let lines = BufReader::new(response)
            .split(b'\n')
            .enumerate()
            .map(move |(i, line)| {
                line.map(decode_line)
                    .map_err(|source| TransportError::ReadLine {
                        url: url.clone(),
                        line_number: i + 1,
                        source,
                    })
            });
        Ok(Box::new(lines))
    }
}

/// Turns raw line bytes into text. The DWD exports are served either as UTF-8
/// or as ISO-8859-1; the latter maps each byte to the same code point.
fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}
