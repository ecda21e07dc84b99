//! Defines the column layout of the DWD daily climate text format.
//!
//! Every line of a station's "Tageswerte" text export is a fixed-width record.
//! The [`Field`] enum names each column group and binds it to a half-open
//! column range. Together the ranges cover `[0, 95)` without gaps or overlap.

use std::fmt;
use std::ops::Range;

/// Number of columns covered by the record layout.
pub const RECORD_WIDTH: usize = 95;

/// Identifies one column group of a fixed-width daily record.
///
/// Variants are declared in column order, which is also the order used when a
/// record is rendered back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Station identifier (`STAT`), integer.
    Station,
    /// Observation date (`DATE`), formatted `YYYYMMDD`.
    Date,
    /// Quality level of the day's values (`QN`).
    QualityLevel,
    /// Ground-level minimum temperature in °C (`TG`).
    TempGroundMin,
    /// Minimum air temperature in °C at 2 m (`TN`).
    TempMin,
    /// Daily mean air temperature in °C (`TM`).
    TempMean,
    /// Maximum air temperature in °C at 2 m (`TX`).
    TempMax,
    /// Daily mean relative humidity in % (`RFM`).
    RelativeHumidity,
    /// Daily mean wind force in Beaufort (`FM`).
    WindForceMean,
    /// Daily maximum wind gust in m/s (`FX`).
    WindGustMax,
    /// Daily sunshine duration in hours (`SO`).
    SunshineHours,
    /// Daily mean cloud cover in eighths (`NM`).
    CloudCover,
    /// Daily precipitation height in mm (`RR`).
    Precipitation,
    /// Daily mean air pressure at station height in hPa (`PM`).
    Pressure,
}

/// Static column table, ordered by start column.
static FIELD_TABLE: [(Field, Range<usize>); 14] = [
    (Field::Station, 0..5),
    (Field::Date, 5..14),
    (Field::QualityLevel, 14..17),
    (Field::TempGroundMin, 17..24),
    (Field::TempMin, 24..31),
    (Field::TempMean, 31..39),
    (Field::TempMax, 39..45),
    (Field::RelativeHumidity, 45..53),
    (Field::WindForceMean, 53..59),
    (Field::WindGustMax, 59..66),
    (Field::SunshineHours, 66..73),
    (Field::CloudCover, 73..81),
    (Field::Precipitation, 81..87),
    (Field::Pressure, 87..95),
];

impl Field {
    /// All fields in declaration (and column) order.
    pub const ALL: [Field; 14] = [
        Field::Station,
        Field::Date,
        Field::QualityLevel,
        Field::TempGroundMin,
        Field::TempMin,
        Field::TempMean,
        Field::TempMax,
        Field::RelativeHumidity,
        Field::WindForceMean,
        Field::WindGustMax,
        Field::SunshineHours,
        Field::CloudCover,
        Field::Precipitation,
        Field::Pressure,
    ];

    /// Returns the field owning the given 0-indexed column, or `None` when the
    /// column lies past the end of the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use dwd_klima::Field;
    ///
    /// assert_eq!(Field::at(0), Some(Field::Station));
    /// assert_eq!(Field::at(13), Some(Field::Date));
    /// assert_eq!(Field::at(94), Some(Field::Pressure));
    /// assert_eq!(Field::at(95), None);
    /// ```
    pub fn at(column: usize) -> Option<Field> {
        FIELD_TABLE
            .iter()
            .find(|(_, range)| range.contains(&column))
            .map(|(field, _)| *field)
    }

    /// The half-open column range `[start, end)` occupied by this field.
    pub fn range(&self) -> Range<usize> {
        FIELD_TABLE[self.index()].1.clone()
    }

    /// Position of the field in [`Field::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Snake-case name, matching the member of [`DailyRecord`](crate::DailyRecord)
    /// and the column of an [`ObservationFrame`](crate::ObservationFrame).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Station => "station_id",
            Field::Date => "date",
            Field::QualityLevel => "quality_level",
            Field::TempGroundMin => "temp_ground_min",
            Field::TempMin => "temp_min",
            Field::TempMean => "temp_mean",
            Field::TempMax => "temp_max",
            Field::RelativeHumidity => "relative_humidity",
            Field::WindForceMean => "wind_force_mean",
            Field::WindGustMax => "wind_gust_max",
            Field::SunshineHours => "sunshine_hours",
            Field::CloudCover => "cloud_cover",
            Field::Precipitation => "precipitation",
            Field::Pressure => "pressure",
        }
    }

    /// The column header used by the DWD text export.
    pub fn code(&self) -> &'static str {
        match self {
            Field::Station => "STAT",
            Field::Date => "DATE",
            Field::QualityLevel => "QN",
            Field::TempGroundMin => "TG",
            Field::TempMin => "TN",
            Field::TempMean => "TM",
            Field::TempMax => "TX",
            Field::RelativeHumidity => "RFM",
            Field::WindForceMean => "FM",
            Field::WindGustMax => "FX",
            Field::SunshineHours => "SO",
            Field::CloudCover => "NM",
            Field::Precipitation => "RR",
            Field::Pressure => "PM",
        }
    }
}

/// Formats a `Field` using its DWD column header.
///
/// # Examples
///
/// ```
/// use dwd_klima::Field;
///
/// assert_eq!(Field::TempMax.to_string(), "TX");
/// ```
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
