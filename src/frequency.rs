use std::collections::HashMap;

/// Occurrence counts keyed by token or phrase.
///
/// Entries keep the order in which their key was first seen, so
/// [`most_common`](Self::most_common) breaks ties by first occurrence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(key.to_owned(), self.entries.len());
            self.entries.push((key.to_owned(), 1));
        }
    }

    /// Count for `key`, 0 when absent.
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// The `k` highest counts, descending. Equal counts stay in
    /// first-occurrence order.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // Stable sort: ties keep insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Equality ignores insertion order.
impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, n)| other.get(k) == n)
    }
}

impl Eq for FrequencyTable {}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key.as_ref());
        }
        table
    }
}

/// Count occurrences of each distinct token.
pub fn count_tokens<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
    tokens.iter().collect()
}

/// Count every window of `n` consecutive tokens, joined by a single space.
///
/// A sequence of length `L` yields `L - n + 1` windows, none when `L < n`.
/// `n == 0` yields an empty table.
pub fn count_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> FrequencyTable {
    if n == 0 {
        return FrequencyTable::new();
    }
    if n == 1 {
        return count_tokens(tokens);
    }
    let mut table = FrequencyTable::new();
    let mut phrase = String::new();
    for window in tokens.windows(n) {
        phrase.clear();
        for (i, token) in window.iter().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(token.as_ref());
        }
        table.add(&phrase);
    }
    table
}
