//! Week math - Sunday-at-local-midnight week boundaries
//!
//! Weeks start on the most recent Sunday at midnight in the journal's
//! timezone. A fixed offset is used rather than a DST-aware zone, so a
//! local midnight always exists and is unambiguous.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime, TimeZone, Utc};

/// Length of a summarized week
pub fn week_length() -> Duration {
    Duration::days(7)
}

/// Most recent Sunday at local midnight, at or before `now`
pub fn week_start(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let days_back = now.weekday().num_days_from_sunday() as i64;
    let sunday = now.date_naive() - Duration::days(days_back);
    now.timezone()
        .from_local_datetime(&sunday.and_time(NaiveTime::MIN))
        .single()
        .expect("fixed offsets map local times unambiguously")
}

/// Start of the current week for a UTC instant observed in `tz`
pub fn current_week_start(now: DateTime<Utc>, tz: FixedOffset) -> DateTime<Utc> {
    week_start(now.with_timezone(&tz)).with_timezone(&Utc)
}

/// Start of the week immediately preceding the current one; weekly
/// summaries are generated for this window once the week has closed
pub fn target_week_start(now: DateTime<Utc>, tz: FixedOffset) -> DateTime<Utc> {
    current_week_start(now, tz) - week_length()
}
