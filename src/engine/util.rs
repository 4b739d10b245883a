use chrono::NaiveTime;

/// Minute depuis minuit (les créneaux sont alignés à la minute).
pub(super) fn minute_of_day(t: NaiveTime) -> i64 {
    use chrono::Timelike;
    i64::from(t.num_seconds_from_midnight() / 60)
}

/// Chevauchement strict d'intervalles [start, end).
pub(super) fn overlaps(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < b_end && b_start < a_end
}

/// Chevauchement après élargissement de l'intervalle existant par `buffer`
/// minutes de part et d'autre.
pub(super) fn overlaps_padded(
    start: i64,
    end: i64,
    other_start: i64,
    other_end: i64,
    buffer: i64,
) -> bool {
    start < other_end + buffer && end > other_start - buffer
}
