//! Contains the `ObservationFrame` structure for lazy operations on aggregated
//! DWD daily records.

use crate::types::field::Field;
use crate::types::record::DailyRecord;
use chrono::NaiveDate;
use polars::prelude::*;

/// A wrapper around a Polars `LazyFrame` holding DWD daily records.
///
/// Columns are named after [`Field::name`]: `station_id` (i64), `date` (Date)
/// and one nullable f64 column per measurement. Absent measurements are nulls.
///
/// Instances are typically obtained via [`crate::Dwd::observation_frame`] or
/// built from already collected records with [`ObservationFrame::from_records`].
#[derive(Clone)]
pub struct ObservationFrame {
    /// The underlying Polars LazyFrame containing the daily records.
    pub frame: LazyFrame,
}

impl ObservationFrame {
    /// Creates a new `ObservationFrame` wrapping the given Polars `LazyFrame`.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from decoded records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the columns cannot be assembled into a
    /// `DataFrame`.
    ///
    /// # Example
    ///
    /// ```
    /// use dwd_klima::{decode, ObservationFrame};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let records = vec![
    ///     decode(&format!("{:<95}", "04200 20200101     12.3"))?,
    ///     decode(&format!("{:<95}", "04200 20200102      9.1"))?,
    /// ];
    /// let df = ObservationFrame::from_records(&records)?.frame.collect()?;
    /// assert_eq!(df.height(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_records(records: &[DailyRecord]) -> Result<Self, PolarsError> {
        let mut columns = Vec::with_capacity(Field::ALL.len());
        columns.push(Column::new(
            Field::Station.name().into(),
            records.iter().map(|r| r.station_id).collect::<Vec<i64>>(),
        ));
        columns.push(Column::new(
            Field::Date.name().into(),
            records.iter().map(|r| r.date).collect::<Vec<NaiveDate>>(),
        ));
        for field in &Field::ALL[2..] {
            columns.push(Column::new(
                field.name().into(),
                records
                    .iter()
                    .map(|r| r.measurement(*field))
                    .collect::<Vec<Option<f64>>>(),
            ));
        }

        let df = DataFrame::new(columns)?;
        Ok(Self::new(df.lazy()))
    }

    /// Filters the records based on a Polars predicate expression.
    ///
    /// Returns a *new* `ObservationFrame` with the filter applied lazily.
    pub fn filter(&self, predicate: Expr) -> ObservationFrame {
        ObservationFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps only the records of one station.
    pub fn station(&self, station_id: i64) -> ObservationFrame {
        self.filter(col(Field::Station.name()).eq(lit(station_id)))
    }

    /// Keeps only dates within `start..=end`.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> ObservationFrame {
        self.filter(
            col(Field::Date.name())
                .gt_eq(lit(start))
                .and(col(Field::Date.name()).lt_eq(lit(end))),
        )
    }

    /// Keeps only the records of a single date, one per station at most.
    pub fn get_at(&self, date: NaiveDate) -> ObservationFrame {
        self.filter(col(Field::Date.name()).eq(lit(date)))
    }
}
