use chrono::NaiveDate;

/// Iterates over every date in the half-open range `[check_in, check_out)`.
///
/// The check-out day is excluded: a guest leaving on a date does not occupy
/// the room that night, so back-to-back bookings may share a boundary date.
/// Yields nothing when `check_in >= check_out`.
pub fn days_in_range(
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(
        Some(check_in),
        |d| d.succ_opt(),
    )
    .take_while(move |d| *d < check_out)
}
