use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationDirectoryError {
    #[error("Station directory is not a JSON object")]
    DocumentNotAnObject,

    #[error("Station directory has no '{0}' entry")]
    MissingStationKey(&'static str),

    #[error("Station directory entry '{0}' is not a JSON object")]
    StationsNotAnObject(&'static str),

    #[error("Invalid station entry '{key}'")]
    InvalidEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
