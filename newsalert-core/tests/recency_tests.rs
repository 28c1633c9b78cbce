use chrono::{Duration, Utc};
use newsalert_core::is_recent;

#[test]
fn article_exactly_seven_days_old_is_recent() {
    let now = Utc::now();
    assert!(is_recent(Some(now - Duration::days(7)), now));
}

#[test]
fn article_older_than_seven_days_is_excluded() {
    let now = Utc::now();
    let published = now - Duration::days(7) - Duration::hours(3);
    assert!(!is_recent(Some(published), now));
}

#[test]
fn fresh_article_is_recent() {
    let now = Utc::now();
    assert!(is_recent(Some(now - Duration::days(2)), now));
}

#[test]
fn missing_publish_date_is_never_recent() {
    assert!(!is_recent(None, Utc::now()));
}

#[test]
fn future_dated_article_counts_as_recent() {
    let now = Utc::now();
    assert!(is_recent(Some(now + Duration::days(1)), now));
}
