//! Frequency tables and top-N keyword ranking.

use indexmap::IndexMap;

/// Counts occurrences per lemma. The table preserves first-insertion order,
/// which is what makes the ranking tie-break deterministic.
pub fn frequencies(lemmas: &[String]) -> IndexMap<String, u32> {
    let mut table = IndexMap::new();
    for lemma in lemmas {
        *table.entry(lemma.clone()).or_insert(0) += 1;
    }
    table
}

/// Top `n` lemmas by descending count. The sort is stable, so lemmas with
/// equal counts keep their first-occurrence order from the source sequence.
pub fn top_n(table: &IndexMap<String, u32>, n: usize) -> Vec<String> {
    let mut entries: Vec<(&String, &u32)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .take(n)
        .map(|(lemma, _)| lemma.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_frequencies_count_occurrences() {
        let table = frequencies(&seq(&["rust", "kafka", "rust", "rust", "kafka"]));
        assert_eq!(table["rust"], 3);
        assert_eq!(table["kafka"], 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_top_n_orders_by_descending_count() {
        let table = frequencies(&seq(&["a1", "b1", "b1", "c1", "c1", "c1"]));
        assert_eq!(top_n(&table, 3), seq(&["c1", "b1", "a1"]));
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let table = frequencies(&seq(&["beta", "alpha", "alpha", "beta", "gamma"]));
        // beta and alpha both count 2; beta was inserted first
        assert_eq!(top_n(&table, 10), seq(&["beta", "alpha", "gamma"]));
    }

    #[test]
    fn test_top_n_caps_at_n() {
        let table = frequencies(&seq(&["x1", "y1", "z1"]));
        assert_eq!(top_n(&table, 2).len(), 2);
    }

    #[test]
    fn test_empty_sequence_yields_empty_ranking() {
        let table = frequencies(&[]);
        assert!(top_n(&table, 150).is_empty());
    }
}
