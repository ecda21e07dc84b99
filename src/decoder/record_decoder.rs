//! Decodes fixed-width DWD daily climate lines into [`DailyRecord`]s.

use crate::decoder::error::DecodeError;
use crate::types::field::Field;
use crate::types::record::DailyRecord;
use chrono::NaiveDate;

/// Decodes one fixed-width line into a [`DailyRecord`].
///
/// Every character is assigned to the field owning its column. Once the line
/// is consumed, each field's text is trimmed and converted: the station id to
/// an integer, the date from `YYYYMMDD`, and the measurements to optional
/// floats (blank means absent).
///
/// Lines shorter than the full 95-column layout are accepted as long as they
/// reach the end of the date field. Measurement fields that are not fully
/// covered by such a line are left absent.
///
/// # Errors
///
/// * [`DecodeError::ColumnOutOfRange`] if the line is longer than 95 columns.
/// * [`DecodeError::LineTooShort`] if the line ends before column 14.
/// * [`DecodeError::InvalidStationId`] if the station column is not an integer.
/// * [`DecodeError::InvalidDate`] if the date is not an 8 digit calendar date.
/// * [`DecodeError::InvalidNumber`] if a non-blank measurement is not a number.
/// * [`DecodeError::NonFiniteSpelling`] if a measurement spells infinity or NaN
///   other than as `Infinity` or `NaN`.
///
/// # Examples
///
/// ```
/// use dwd_klima::{decode, DecodeError};
/// use chrono::NaiveDate;
///
/// let line = format!("{:<95}", "04200 20200101     12.3");
/// let record = decode(&line)?;
///
/// assert_eq!(record.station_id, 4200);
/// assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
/// assert_eq!(record.quality_level, None);
/// assert_eq!(record.temp_ground_min, Some(12.3));
/// # Ok::<(), DecodeError>(())
/// ```
pub fn decode(line: &str) -> Result<DailyRecord, DecodeError> {
    let mut buffers: [String; 14] = Default::default();
    let mut line_length = 0;

    for (column, c) in line.chars().enumerate() {
        let field = Field::at(column).ok_or_else(|| DecodeError::ColumnOutOfRange {
            column,
            line_length: line.chars().count(),
        })?;
        buffers[field.index()].push(c);
        line_length = column + 1;
    }

    let required = Field::Date.range().end;
    if line_length < required {
        return Err(DecodeError::LineTooShort {
            line_length,
            required,
        });
    }

    let station_id = parse_station_id(&buffers[Field::Station.index()])?;
    let date = parse_date(&buffers[Field::Date.index()])?;
    let mut record = DailyRecord::empty(station_id, date);

    for field in &Field::ALL[2..] {
        if field.range().end > line_length {
            continue;
        }
        let value = parse_optional_f64(*field, &buffers[field.index()])?;
        if let Some(slot) = record.measurement_mut(*field) {
            *slot = value;
        }
    }

    Ok(record)
}

fn parse_station_id(raw: &str) -> Result<i64, DecodeError> {
    let value = raw.trim();
    value
        .parse::<i64>()
        .map_err(|source| DecodeError::InvalidStationId {
            value: value.to_string(),
            source,
        })
}

fn parse_date(raw: &str) -> Result<NaiveDate, DecodeError> {
    let value = raw.trim();
    let invalid = || DecodeError::InvalidDate {
        value: value.to_string(),
    };

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // All ASCII digits, so these slices and parses cannot fail.
    let year = value[0..4].parse::<i32>().map_err(|_| invalid())?;
    let month = value[4..6].parse::<u32>().map_err(|_| invalid())?;
    let day = value[6..8].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_optional_f64(field: Field, raw: &str) -> Result<Option<f64>, DecodeError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let number = value
        .parse::<f64>()
        .map_err(|source| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })?;

    // Only `NaN` and `Infinity` (optionally signed) are accepted, not `inf` or `nan`.
    let unsigned = value.trim_start_matches(['+', '-']);
    if !number.is_finite() && !matches!(unsigned, "NaN" | "Infinity") {
        return Err(DecodeError::NonFiniteSpelling {
            field,
            value: value.to_string(),
        });
    }
    Ok(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field::RECORD_WIDTH;

    /// Places each value right-aligned in its field's columns.
    fn build_line(values: &[(Field, &str)]) -> String {
        let mut columns = vec![' '; RECORD_WIDTH];
        for (field, value) in values {
            let range = field.range();
            let start = range.end - value.chars().count();
            assert!(start >= range.start, "{} does not fit into {}", value, field);
            for (i, c) in value.chars().enumerate() {
                columns[start + i] = c;
            }
        }
        columns.into_iter().collect()
    }

    #[test]
    fn test_decode_example_line() {
        let line = format!("{:<95}", format!("04200{}{}{}", "20200101", " ".repeat(3), "   12.3"));
        assert_eq!(line.len(), RECORD_WIDTH);

        let record = decode(&line).unwrap();
        assert_eq!(record.station_id, 4200);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(record.date.format("%d.%m.%Y").to_string(), "01.01.2020");
        assert_eq!(record.quality_level, None);
        assert_eq!(record.temp_ground_min, Some(12.3));
        for field in &Field::ALL[4..] {
            assert_eq!(record.measurement(*field), None, "{} should be absent", field);
        }
    }

    #[test]
    fn test_decode_full_line() {
        let line = build_line(&[
            (Field::Station, "433"),
            (Field::Date, "19510309"),
            (Field::QualityLevel, "5"),
            (Field::TempGroundMin, "-4.2"),
            (Field::TempMin, "-1.5"),
            (Field::TempMean, "2.3"),
            (Field::TempMax, "6.8"),
            (Field::RelativeHumidity, "81.0"),
            (Field::WindForceMean, "3.0"),
            (Field::WindGustMax, "14.4"),
            (Field::SunshineHours, "3.7"),
            (Field::CloudCover, "6.3"),
            (Field::Precipitation, "0.4"),
            (Field::Pressure, "1003.5"),
        ]);

        let record = decode(&line).unwrap();
        assert_eq!(record.station_id, 433);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(1951, 3, 9).unwrap());
        assert_eq!(record.quality_level, Some(5.0));
        assert_eq!(record.temp_ground_min, Some(-4.2));
        assert_eq!(record.temp_min, Some(-1.5));
        assert_eq!(record.temp_mean, Some(2.3));
        assert_eq!(record.temp_max, Some(6.8));
        assert_eq!(record.relative_humidity, Some(81.0));
        assert_eq!(record.wind_force_mean, Some(3.0));
        assert_eq!(record.wind_gust_max, Some(14.4));
        assert_eq!(record.sunshine_hours, Some(3.7));
        assert_eq!(record.cloud_cover, Some(6.3));
        assert_eq!(record.precipitation, Some(0.4));
        assert_eq!(record.pressure, Some(1003.5));
    }

    #[test]
    fn test_invalid_date_fails() {
        let line = build_line(&[(Field::Station, "04200"), (Field::Date, "2020010X")]);
        assert_eq!(
            decode(&line),
            Err(DecodeError::InvalidDate {
                value: "2020010X".to_string()
            })
        );
    }

    #[test]
    fn test_impossible_calendar_date_fails() {
        let line = build_line(&[(Field::Station, "04200"), (Field::Date, "20200230")]);
        assert!(matches!(decode(&line), Err(DecodeError::InvalidDate { .. })));
    }

    #[test]
    fn test_short_date_fails() {
        let line = build_line(&[(Field::Station, "04200"), (Field::Date, "2020011")]);
        assert!(matches!(decode(&line), Err(DecodeError::InvalidDate { .. })));
    }

    #[test]
    fn test_line_shorter_than_date_fails() {
        assert_eq!(
            decode("04200 2020010"),
            Err(DecodeError::LineTooShort {
                line_length: 13,
                required: 14
            })
        );
        assert!(matches!(decode(""), Err(DecodeError::LineTooShort { .. })));
    }

    #[test]
    fn test_line_ending_after_date_decodes_without_measurements() {
        let record = decode("04200 20200101").unwrap();
        assert_eq!(record.station_id, 4200);
        for field in &Field::ALL[2..] {
            assert_eq!(record.measurement(*field), None);
        }
    }

    #[test]
    fn test_partially_covered_field_is_absent() {
        // TG ends at column 24, the line stops at 21.
        let line = "04200 20200101  5   1";
        let record = decode(line).unwrap();
        assert_eq!(record.quality_level, Some(5.0));
        assert_eq!(record.temp_ground_min, None);
    }

    #[test]
    fn test_overlong_line_fails() {
        let line = format!("{:<95}X", "04200 20200101");
        assert_eq!(
            decode(&line),
            Err(DecodeError::ColumnOutOfRange {
                column: 95,
                line_length: 96
            })
        );
    }

    #[test]
    fn test_non_numeric_station_fails() {
        let line = build_line(&[(Field::Station, "4a00"), (Field::Date, "20200101")]);
        assert!(matches!(
            decode(&line),
            Err(DecodeError::InvalidStationId { ref value, .. }) if value == "4a00"
        ));
    }

    #[test]
    fn test_non_numeric_measurement_fails() {
        let line = build_line(&[
            (Field::Station, "04200"),
            (Field::Date, "20200101"),
            (Field::Precipitation, "n/a"),
        ]);
        assert!(matches!(
            decode(&line),
            Err(DecodeError::InvalidNumber { field: Field::Precipitation, ref value, .. }) if value == "n/a"
        ));
    }

    #[test]
    fn test_short_infinity_spellings_fail() {
        for spelling in ["inf", "-inf", "nan", "infinity"] {
            let line = build_line(&[
                (Field::Station, "04200"),
                (Field::Date, "20200101"),
                (Field::TempGroundMin, spelling),
            ]);
            assert_eq!(
                decode(&line),
                Err(DecodeError::NonFiniteSpelling {
                    field: Field::TempGroundMin,
                    value: spelling.to_string()
                }),
                "{} should be rejected",
                spelling
            );
        }
    }

    #[test]
    fn test_spelled_out_non_finite_values_decode() {
        let line = build_line(&[
            (Field::Station, "04200"),
            (Field::Date, "20200101"),
            (Field::TempGroundMin, "NaN"),
            (Field::TempMin, "-Infinity"),
            (Field::TempMean, "Infinity"),
        ]);
        let record = decode(&line).unwrap();
        assert!(record.temp_ground_min.unwrap().is_nan());
        assert_eq!(record.temp_min, Some(f64::NEG_INFINITY));
        assert_eq!(record.temp_mean, Some(f64::INFINITY));
    }

    #[test]
    fn test_station_id_is_trimmed() {
        let line = build_line(&[(Field::Station, "4200"), (Field::Date, "20200101")]);
        assert!(line.starts_with(" 4200 "));
        assert_eq!(decode(&line).unwrap().station_id, 4200);

        let padded_right = format!("{:<95}", "4200  20200101");
        assert_eq!(decode(&padded_right).unwrap().station_id, 4200);
    }

    #[test]
    fn test_whitespace_only_measurements_are_absent() {
        let line = format!("04200 20200101{}", "\t".repeat(3) + &" ".repeat(78));
        let record = decode(&line).unwrap();
        assert_eq!(record.quality_level, None);
        assert_eq!(record.pressure, None);
    }

    #[test]
    fn test_rendered_record_does_not_decode_again() {
        let line = build_line(&[
            (Field::Station, "04200"),
            (Field::Date, "20200101"),
            (Field::TempGroundMin, "12.3"),
        ]);
        let record = decode(&line).unwrap();
        let rendered = record.to_string();
        assert_eq!(rendered, "4200;01.01.2020;;12.3;;;;;;;;;;");

        // The semicolon form is presentation only: blanks become empty strings
        // and the columns shift, so decoding it again is rejected.
        assert!(decode(&rendered).is_err());
    }
}
