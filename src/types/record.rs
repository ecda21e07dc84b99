//! The decoded form of one line of DWD daily climate data.

use crate::types::field::Field;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Output format used when rendering the observation date.
const OUTPUT_DATE_FORMAT: &str = "%d.%m.%Y";

/// One station-day of DWD climate observations.
///
/// The station id and date are always present. Every measurement is `None`
/// when its columns were blank in the source line.
///
/// The `Display` implementation renders the record as a semicolon separated
/// line in column order, with the date as `DD.MM.YYYY` and absent values as
/// empty strings:
///
/// ```
/// use dwd_klima::decode;
///
/// let line = format!("{:<95}", "04200 20200101     12.3");
/// let record = decode(&line).unwrap();
/// assert_eq!(record.to_string(), "4200;01.01.2020;;12.3;;;;;;;;;;");
/// ```
///
/// The rendered line is meant for people and spreadsheets. It is not a
/// fixed-width line and cannot be decoded again.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DailyRecord {
    pub station_id: i64,                  // STAT
    pub date: NaiveDate,                  // DATE
    pub quality_level: Option<f64>,       // QN
    pub temp_ground_min: Option<f64>,     // TG (°C)
    pub temp_min: Option<f64>,            // TN (°C)
    pub temp_mean: Option<f64>,           // TM (°C)
    pub temp_max: Option<f64>,            // TX (°C)
    pub relative_humidity: Option<f64>,   // RFM (%)
    pub wind_force_mean: Option<f64>,     // FM (Bft)
    pub wind_gust_max: Option<f64>,       // FX (m/s)
    pub sunshine_hours: Option<f64>,      // SO (h)
    pub cloud_cover: Option<f64>,         // NM (1/8)
    pub precipitation: Option<f64>,       // RR (mm)
    pub pressure: Option<f64>,            // PM (hPa)
}

impl DailyRecord {
    /// Returns the value of a measurement field.
    ///
    /// `Field::Station` and `Field::Date` are not measurements and yield `None`;
    /// use the `station_id` and `date` members for those.
    pub fn measurement(&self, field: Field) -> Option<f64> {
        match field {
            Field::Station | Field::Date => None,
            Field::QualityLevel => self.quality_level,
            Field::TempGroundMin => self.temp_ground_min,
            Field::TempMin => self.temp_min,
            Field::TempMean => self.temp_mean,
            Field::TempMax => self.temp_max,
            Field::RelativeHumidity => self.relative_humidity,
            Field::WindForceMean => self.wind_force_mean,
            Field::WindGustMax => self.wind_gust_max,
            Field::SunshineHours => self.sunshine_hours,
            Field::CloudCover => self.cloud_cover,
            Field::Precipitation => self.precipitation,
            Field::Pressure => self.pressure,
        }
    }

    pub(crate) fn measurement_mut(&mut self, field: Field) -> Option<&mut Option<f64>> {
        match field {
            Field::Station | Field::Date => None,
            Field::QualityLevel => Some(&mut self.quality_level),
            Field::TempGroundMin => Some(&mut self.temp_ground_min),
            Field::TempMin => Some(&mut self.temp_min),
            Field::TempMean => Some(&mut self.temp_mean),
            Field::TempMax => Some(&mut self.temp_max),
            Field::RelativeHumidity => Some(&mut self.relative_humidity),
            Field::WindForceMean => Some(&mut self.wind_force_mean),
            Field::WindGustMax => Some(&mut self.wind_gust_max),
            Field::SunshineHours => Some(&mut self.sunshine_hours),
            Field::CloudCover => Some(&mut self.cloud_cover),
            Field::Precipitation => Some(&mut self.precipitation),
            Field::Pressure => Some(&mut self.pressure),
        }
    }

    /// A record with every measurement absent.
    pub(crate) fn empty(station_id: i64, date: NaiveDate) -> Self {
        DailyRecord {
            station_id,
            date,
            quality_level: None,
            temp_ground_min: None,
            temp_min: None,
            temp_mean: None,
            temp_max: None,
            relative_humidity: None,
            wind_force_mean: None,
            wind_gust_max: None,
            sunshine_hours: None,
            cloud_cover: None,
            precipitation: None,
            pressure: None,
        }
    }
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{}",
            self.station_id,
            self.date.format(OUTPUT_DATE_FORMAT)
        )?;
        for field in &Field::ALL[2..] {
            match self.measurement(*field) {
                Some(value) => write!(f, ";{}", value)?,
                None => f.write_str(";")?,
            }
        }
        Ok(())
    }
}
