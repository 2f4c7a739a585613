//! Insertion-ordered frequency counting.

use indexmap::IndexMap;

/// Counts occurrences of keys, remembering the order in which each key was
/// first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    counts: IndexMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
        }
    }

    /// Count for `key`, zero if never seen.
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The `n` most frequent keys, highest count first.
    ///
    /// Keys with equal counts keep their first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}

impl<'a> Extend<&'a str> for FrequencyCounter {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for key in iter {
            self.add(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["a", "b", "a", "c", "a"]);
        assert_eq!(counter.get("a"), 3);
        assert_eq!(counter.get("z"), 0);
        assert_eq!(counter.total(), 5);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["x", "y", "z", "y", "x", "w"]);
        assert_eq!(
            counter.most_common(3),
            vec![
                ("x".to_string(), 2),
                ("y".to_string(), 2),
                ("z".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_most_common_more_than_len() {
        let mut counter = FrequencyCounter::new();
        counter.add("only");
        assert_eq!(counter.most_common(10).len(), 1);
        assert!(FrequencyCounter::new().most_common(5).is_empty());
    }
}
