use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// settle policy
//
// new uploads only show up in the photo listing once the upstream pipeline has
// produced their thumbnails, so after an upload batch the client polls the
// first page of photos until the new ones appear or the attempts run out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlePolicy {
    pub attempts: u32,
    pub interval_ms: u32,
}

impl Default for SettlePolicy {
    fn default() -> Self {
        SettlePolicy {
            attempts: 12,
            interval_ms: 500,
        }
    }
}

impl SettlePolicy {
    // baseline holds the thumbnail keys on the first page before the batch,
    // observed the keys there now.  the batch is visible once at least
    // uploaded keys are new, which also holds for a full page where new photos
    // push older ones onto later pages
    pub fn is_settled<'a>(
        &self,
        baseline: &HashSet<String>,
        uploaded: usize,
        observed: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        let fresh = observed
            .into_iter()
            .filter(|key| !baseline.contains(*key))
            .collect::<HashSet<_>>();

        fresh.len() >= uploaded
    }

    pub fn max_wait_ms(&self) -> u64 {
        u64::from(self.attempts) * u64::from(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(range: std::ops::Range<u32>) -> Vec<String> {
        range.map(|n| format!("public/resized/{n}.jpg")).collect()
    }

    #[test]
    fn settled_once_all_uploads_are_listed() {
        let policy = SettlePolicy::default();
        let baseline = keys(0..4).into_iter().collect::<HashSet<_>>();

        let now = keys(0..5);
        assert!(!policy.is_settled(&baseline, 2, now.iter().map(String::as_str)));

        let now = keys(0..6);
        assert!(policy.is_settled(&baseline, 2, now.iter().map(String::as_str)));
    }

    #[test]
    fn full_page_waits_for_new_keys() {
        let policy = SettlePolicy::default();
        let baseline = keys(0..999).into_iter().collect::<HashSet<_>>();

        // same full page as before the batch
        let now = keys(0..999);
        assert!(!policy.is_settled(&baseline, 3, now.iter().map(String::as_str)));

        // newest first: three new photos, the three oldest pushed to page two
        let now = keys(999..1002).into_iter().chain(keys(0..996)).collect::<Vec<_>>();
        assert!(policy.is_settled(&baseline, 3, now.iter().map(String::as_str)));
    }

    #[test]
    fn repeated_keys_count_once() {
        let policy = SettlePolicy::default();
        let baseline = HashSet::new();

        assert!(!policy.is_settled(&baseline, 2, ["a", "a"]));
        assert!(policy.is_settled(&baseline, 2, ["a", "b"]));
    }

    #[test]
    fn nothing_uploaded_is_settled_immediately() {
        let baseline = keys(0..10).into_iter().collect::<HashSet<_>>();
        let now = keys(0..10);

        assert!(SettlePolicy::default().is_settled(&baseline, 0, now.iter().map(String::as_str)));
    }

    #[test]
    fn max_wait_is_bounded() {
        let policy = SettlePolicy {
            attempts: 3,
            interval_ms: 250,
        };

        assert_eq!(policy.max_wait_ms(), 750);
    }
}
