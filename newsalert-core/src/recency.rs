use chrono::{DateTime, Duration, Utc};

/// Trailing window within which an article is still worth announcing.
pub const RECENCY_WINDOW_DAYS: i64 = 7;

/// True iff the article was published at most seven days before `now`.
///
/// A missing publish date (the loader could not parse one) is never
/// recent. Future-dated articles satisfy the bound.
pub fn is_recent(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match published_at {
        Some(published) => {
            now.signed_duration_since(published) <= Duration::days(RECENCY_WINDOW_DAYS)
        }
        None => false,
    }
}
