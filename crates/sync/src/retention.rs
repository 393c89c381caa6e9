//! Retention policy evaluation.
//!
//! Pure selection logic: given the stored items, compute the ids to delete.
//! Issuing the actual delete requests is the reconciler's job.

use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::config::FeedSpec;
use crate::store::StoredItem;
use crate::tag;

/// Select the ids exceeding each feed's retention limit.
///
/// Items are grouped by every tag they carry; for each configured feed the
/// newest `limit` items survive and the rest are marked. Ties on the
/// timestamp are broken by id so repeated runs agree. Tags matching no
/// configured feed are left untouched.
pub fn select_over_limit(specs: &[FeedSpec], items: &HashMap<String, StoredItem>) -> Vec<String> {
    let mut groups: BTreeMap<&str, Vec<(&str, DateTime<Utc>)>> = BTreeMap::new();
    for (id, item) in items {
        for t in &item.tags {
            groups
                .entry(t.as_str())
                .or_default()
                .push((id.as_str(), item.added_at));
        }
    }

    let mut stale = Vec::new();
    for spec in specs {
        let feed_tag = tag::derive(&spec.url);
        let Some(group) = groups.get_mut(feed_tag.as_str()) else {
            continue;
        };
        group.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stale.extend(group.iter().skip(spec.limit).map(|(id, _)| (*id).to_string()));
    }
    stale
}

/// Select every id older than `max_age`, regardless of tag.
pub fn select_expired(
    items: &HashMap<String, StoredItem>,
    max_age: Duration,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut expired: Vec<String> = items
        .iter()
        .filter(|(_, item)| now - item.added_at > max_age)
        .map(|(id, _)| id.clone())
        .collect();
    expired.sort();
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const FEED_URL: &str = "https://example.org/feed";

    fn item(tags: &[&str], added_at: DateTime<Utc>) -> StoredItem {
        StoredItem {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            added_at,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_limit_selects_oldest_beyond_limit() {
        let specs = vec![FeedSpec::new(FEED_URL, 2)];
        let feed_tag = tag::derive(FEED_URL);

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&[&feed_tag], at(100)));
        items.insert("b".to_string(), item(&[&feed_tag], at(200)));
        items.insert("c".to_string(), item(&[&feed_tag], at(300)));
        items.insert("d".to_string(), item(&[&feed_tag], at(400)));

        let stale: HashSet<String> = select_over_limit(&specs, &items).into_iter().collect();
        assert_eq!(stale, HashSet::from(["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_limit_under_count_selects_nothing() {
        let specs = vec![FeedSpec::new(FEED_URL, 5)];
        let feed_tag = tag::derive(FEED_URL);

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&[&feed_tag], at(100)));
        items.insert("b".to_string(), item(&[&feed_tag], at(200)));

        assert!(select_over_limit(&specs, &items).is_empty());
    }

    #[test]
    fn test_unconfigured_tags_are_untouched() {
        let specs = vec![FeedSpec::new(FEED_URL, 1)];

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&["somebody-elses-tag"], at(100)));
        items.insert("b".to_string(), item(&["somebody-elses-tag"], at(200)));

        assert!(select_over_limit(&specs, &items).is_empty());
    }

    #[test]
    fn test_untagged_items_are_untouched() {
        let specs = vec![FeedSpec::new(FEED_URL, 1)];

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&[], at(100)));

        assert!(select_over_limit(&specs, &items).is_empty());
    }

    #[test]
    fn test_timestamp_ties_broken_by_id() {
        let specs = vec![FeedSpec::new(FEED_URL, 1)];
        let feed_tag = tag::derive(FEED_URL);

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&[&feed_tag], at(100)));
        items.insert("b".to_string(), item(&[&feed_tag], at(100)));
        items.insert("c".to_string(), item(&[&feed_tag], at(100)));

        // With equal timestamps the smallest id survives, deterministically.
        let stale: HashSet<String> = select_over_limit(&specs, &items).into_iter().collect();
        assert_eq!(stale, HashSet::from(["b".to_string(), "c".to_string()]));
    }

    #[test]
    fn test_age_boundary() {
        let max_age = Duration::days(30);
        let now = at(10_000_000);

        let mut items = HashMap::new();
        items.insert("fresh".to_string(), item(&[], now));
        items.insert(
            "inside".to_string(),
            item(&[], now - max_age + Duration::seconds(1)),
        );
        items.insert(
            "expired".to_string(),
            item(&[], now - max_age - Duration::seconds(1)),
        );

        let expired = select_expired(&items, max_age, now);
        assert_eq!(expired, vec!["expired".to_string()]);
    }

    #[test]
    fn test_age_sweep_ignores_tags() {
        let max_age = Duration::days(1);
        let now = at(10_000_000);

        let mut items = HashMap::new();
        items.insert("a".to_string(), item(&["some-tag"], now - Duration::days(2)));
        items.insert("b".to_string(), item(&[], now - Duration::days(3)));

        let expired = select_expired(&items, max_age, now);
        assert_eq!(expired, vec!["a".to_string(), "b".to_string()]);
    }
}
