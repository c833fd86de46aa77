use std::collections::HashMap;

use crate::lexicon::Lexicon;

/// Corpus-level statistics computed from a finished lexicon:
/// how many word types it holds, how many of them are ambiguous, and what a
/// most-frequent-tag classifier would score on the training data itself.
#[derive(Debug, Clone, Default)]
pub struct LexiconStats {
    /// Distinct words.
    pub all_words: u64,
    /// Words carrying more than one tag.
    pub ambiguous_words: u64,
    /// Sum over words of the maximum per-tag count.
    pub correct_tokens: u64,
    /// Sum of all counts.
    pub all_tokens: u64,
    /// Per-tag totals across all words.
    pub tag_totals: HashMap<String, u64>,
}

impl LexiconStats {
    /// Computes statistics in one pass over the lexicon. The lexicon is not
    /// mutated; the result is a fresh value with no tie to it.
    pub fn collect(lexicon: &Lexicon) -> Self {
        let mut stats = Self {
            all_words: lexicon.len() as u64,
            ..Self::default()
        };

        for (_, counts) in lexicon.iter() {
            if counts.len() > 1 {
                stats.ambiguous_words += 1;
            }
            stats.correct_tokens += counts.values().copied().max().unwrap_or(0);
            stats.all_tokens += counts.values().sum::<u64>();
            for (tag, &count) in counts {
                *stats.tag_totals.entry(tag.clone()).or_insert(0) += count;
            }
        }

        stats
    }

    /// Share of word types with more than one tag. 0.0 for an empty lexicon.
    pub fn ambiguity_pct(&self) -> f64 {
        percent(self.ambiguous_words, self.all_words)
    }

    /// Accuracy a most-frequent-tag classifier would reach on the training
    /// data itself. 0.0 for an empty lexicon.
    pub fn training_accuracy_pct(&self) -> f64 {
        percent(self.correct_tokens, self.all_tokens)
    }

    /// Tags ranked by total count, descending; ties by ascending tag.
    pub fn top_tags(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut tags: Vec<(&str, u64)> = self
            .tag_totals
            .iter()
            .map(|(t, &c)| (t.as_str(), c))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tags.truncate(limit);
        tags
    }

    /// Prints the statistics report to stderr.
    pub fn report(&self) {
        eprintln!(
            "Proportion of word types that are ambiguous: {:5.1}% ({} / {})",
            self.ambiguity_pct(),
            self.ambiguous_words,
            self.all_words
        );
        eprintln!(
            "Accuracy of naive tagger on training data: {:5.1}% ({} / {})",
            self.training_accuracy_pct(),
            self.correct_tokens,
            self.all_tokens
        );
        eprintln!("Top ten tags by count:");
        for (tag, count) in self.top_tags(10) {
            eprintln!(
                "   {:>9} {:6.2}% ({:>5} / {})",
                tag,
                percent(count, self.all_tokens),
                count,
                self.all_tokens
            );
        }
    }
}

fn percent(num: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        100.0 * num as f64 / denom as f64
    }
}
