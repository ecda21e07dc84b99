//! Reads the list of stations out of the DWD station directory document.

use crate::stations::error::StationDirectoryError;
use crate::types::station::Station;
use serde::Deserialize;
use serde_json::Value;

/// Key of the nested object listing the stations. The same name is used as
/// the query parameter selecting a station in data requests.
pub const STATION_KEY: &str = "cl2Categories_Station";

#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    val: String,
}

/// Extracts every station listed under `cl2Categories_Station`.
///
/// The directory has the shape
/// `{"cl2Categories_Station": {"<key>": {"val": "<station id>", ...}, ...}, ...}`.
/// Other top-level entries and additional members of a station entry are
/// ignored. Stations are returned in key order.
pub fn parse_station_directory(document: &Value) -> Result<Vec<Station>, StationDirectoryError> {
    let object = document
        .as_object()
        .ok_or(StationDirectoryError::DocumentNotAnObject)?;
    let entries = object
        .get(STATION_KEY)
        .ok_or(StationDirectoryError::MissingStationKey(STATION_KEY))?
        .as_object()
        .ok_or(StationDirectoryError::StationsNotAnObject(STATION_KEY))?;

    entries
        .iter()
        .map(|(key, entry)| {
            let entry = DirectoryEntry::deserialize(entry).map_err(|source| {
                StationDirectoryError::InvalidEntry {
                    key: key.clone(),
                    source,
                }
            })?;
            Ok(Station {
                key: key.clone(),
                id: entry.val,
            })
        })
        .collect()
}
