//! Best-effort year extraction from free-text date ranges.

/// Extract a sortable year from a free-text date range.
///
/// Returns the first run of three or four digits (a longer run contributes
/// its first four). If the text has no such run, the first one- or two-digit
/// run is used instead, so `"c. 96"` yields `96`. Returns `0` ("unknown era")
/// when the text contains no digits at all.
///
/// This is not a calendar parser: BC/AD is ignored and a range yields only
/// its first year (`"451–600"` → `451`).
pub fn parse_year(date_range: &str) -> u32 {
  let mut short_run = None;
  for run in date_range
    .split(|c: char| !c.is_ascii_digit())
    .filter(|run| !run.is_empty())
  {
    if run.len() >= 3 {
      return leading_value(run, 4);
    }
    short_run.get_or_insert(run);
  }
  short_run.map_or(0, |run| leading_value(run, 2))
}

fn leading_value(run: &str, max_digits: usize) -> u32 {
  run
    .bytes()
    .take(max_digits)
    .fold(0, |year, digit| year * 10 + u32::from(digit - b'0'))
}
