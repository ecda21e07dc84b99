//! The seam between the aggregation pipeline and the network.

use crate::transport::error::TransportError;
use reqwest::Url;

/// Lines of a text response, read in order until the end of the stream.
///
/// The underlying connection is released as soon as the iterator is dropped,
/// whether or not it was read to the end.
pub type Lines<'a> = Box<dyn Iterator<Item = Result<String, TransportError>> + 'a>;

/// Retrieves documents for the pipeline.
///
/// [`HttpFetcher`](crate::HttpFetcher) is the implementation used against the
/// DWD servers. Any other implementation (a local mirror, recorded responses)
/// can be plugged into [`Dwd::with_fetcher`](crate::Dwd::with_fetcher).
pub trait Fetcher {
    /// Fetches the document at `url` and parses it as JSON.
    fn fetch_json(&self, url: &Url) -> Result<serde_json::Value, TransportError>;

    /// Fetches the text document at `url` as a sequence of lines.
    fn fetch_lines(&self, url: &Url) -> Result<Lines<'_>, TransportError>;
}
