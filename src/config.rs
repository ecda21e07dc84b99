//! Endpoint and transport settings for the [`Dwd`](crate::Dwd) client.

use bon::Builder;
use std::time::Duration;

/// Station directory of the DWD "Klimadaten Deutschland" service.
pub const DEFAULT_DIRECTORY_URL: &str = "https://www.dwd.de/DE/leistungen/klimadatendeutschland/klimadatendeutschland.json?view=renderJson&undefined=Absenden&cl2Categories_LeistungsId=klimadatendeutschland&cl2Categories_Station=klimadatendeutschland_berlintempelhof&cl2Categories_ZeitlicheAufloesung=klimadatendeutschland_tageswerte&cl2Categories_Format=text";

/// Daily values ("Tageswerte") as plain text. The station is appended as the
/// `cl2Categories_Station` query parameter.
pub const DEFAULT_DATA_URL: &str = "https://www.dwd.de/DE/leistungen/klimadatendeutschland/klimadatendeutschland.html?view=renderJsonResults&undefined=Absenden&cl2Categories_LeistungsId=klimadatendeutschland&cl2Categories_ZeitlicheAufloesung=klimadatendeutschland_tageswerte&cl2Categories_Format=text";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const DEFAULT_USER_AGENT: &str = concat!("dwd_klima/", env!("CARGO_PKG_VERSION"));

/// Settings used by [`Dwd`](crate::Dwd) and [`HttpFetcher`](crate::HttpFetcher).
///
/// Every field has a default pointing at the public DWD service, so
/// `DwdConfig::default()` is enough for most uses. The builder allows
/// overriding single settings.
///
/// # Examples
///
/// ```
/// use dwd_klima::DwdConfig;
/// use std::time::Duration;
///
/// let config = DwdConfig::builder()
///     .timeout(Duration::from_secs(10))
///     .user_agent("my-climate-report/1.0")
///     .build();
///
/// assert_eq!(config.timeout, Duration::from_secs(10));
/// assert!(config.directory_url.starts_with("https://www.dwd.de/"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DwdConfig {
    /// URL of the JSON station directory.
    #[builder(into, default = DEFAULT_DIRECTORY_URL.to_owned())]
    pub directory_url: String,

    /// Base URL of the per-station text export, without the station parameter.
    #[builder(into, default = DEFAULT_DATA_URL.to_owned())]
    pub data_url: String,

    /// Total time allowed for a single request, including reading the body.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// Value of the `User-Agent` header sent with every request.
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    pub user_agent: String,
}

impl Default for DwdConfig {
    fn default() -> Self {
        DwdConfig::builder().build()
    }
}
