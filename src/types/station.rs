//! A station as listed in the DWD station directory.

use serde::Serialize;
use std::fmt;

/// One weather station of the DWD "Klimadaten Deutschland" service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Station {
    /// The key of the station's entry in the directory document.
    pub key: String,
    /// The external identifier (the entry's `val`), used to request the
    /// station's data.
    pub id: String,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
