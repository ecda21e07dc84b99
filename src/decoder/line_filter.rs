//! Separates data rows from the headers, blank lines and footers that surround
//! them in a DWD text export.

/// Returns `true` when the line is a data row, i.e. it starts with a digit.
///
/// Header remnants that happen to begin with a digit pass this check as well
/// and will then be rejected by the decoder.
///
/// # Examples
///
/// ```
/// use dwd_klima::is_data_line;
///
/// assert!(is_data_line("00433 19510101  5"));
/// assert!(!is_data_line("STAT JJJJMMDD QN"));
/// assert!(!is_data_line(""));
/// assert!(!is_data_line(" 00433 19510101"));
/// ```
pub fn is_data_line(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}
