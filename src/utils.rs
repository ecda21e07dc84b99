use crate::error::DwdError;
use reqwest::Url;

pub(crate) fn parse_url(url: &str) -> Result<Url, DwdError> {
    Url::parse(url).map_err(|e| DwdError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Appends the station selector to the data endpoint. The query value is
/// percent-encoded by `Url`.
pub(crate) fn station_data_url(base: &Url, station_id: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(crate::stations::directory::STATION_KEY, station_id);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATA_URL;

    #[test]
    fn test_station_data_url_appends_station() {
        let base = parse_url(DEFAULT_DATA_URL).unwrap();
        let url = station_data_url(&base, "klimadatendeutschland_berlintempelhof");
        assert!(url
            .as_str()
            .ends_with("&cl2Categories_Station=klimadatendeutschland_berlintempelhof"));
        assert!(url.as_str().starts_with(DEFAULT_DATA_URL));
    }

    #[test]
    fn test_station_data_url_encodes_station() {
        let base = parse_url("https://example.org/data?format=text").unwrap();
        let url = station_data_url(&base, "Köln/Bonn & Co");
        assert_eq!(
            url.as_str(),
            "https://example.org/data?format=text&cl2Categories_Station=K%C3%B6ln%2FBonn+%26+Co"
        );
        let station = url
            .query_pairs()
            .find(|(k, _)| k == "cl2Categories_Station")
            .map(|(_, v)| v.into_owned());
        assert_eq!(station.as_deref(), Some("Köln/Bonn & Co"));
    }

    #[test]
    fn test_station_data_url_without_query() {
        let base = parse_url("https://example.org/data").unwrap();
        let url = station_data_url(&base, "aachen");
        assert_eq!(url.as_str(), "https://example.org/data?cl2Categories_Station=aachen");
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        assert!(matches!(
            parse_url("not a url"),
            Err(DwdError::InvalidUrl { .. })
        ));
    }
}
