use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::guess::guess_tag;
use crate::lexicon::Lexicon;
use crate::parse::parse_tagged_line;

/// Outcome of scoring the most-frequent-tag baseline on test data.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub correct: u64,
    pub all_test: u64,
}

impl Score {
    pub fn accuracy_pct(&self) -> f64 {
        100.0 * self.correct as f64 / self.all_test as f64
    }
}

/// Most-frequent-tag-per-word map derived from the lexicon. Count ties
/// resolve to the lexicographically smallest tag, matching the order the
/// lexicon file is written in.
pub fn best_tag_map(lexicon: &Lexicon) -> HashMap<&str, &str> {
    let mut map = HashMap::with_capacity(lexicon.len());
    for (word, counts) in lexicon.iter() {
        let best = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)));
        if let Some((tag, _)) = best {
            map.insert(word.as_str(), tag.as_str());
        }
    }
    map
}

/// Tags each (word, true_tag) pair of the test data with the baseline and
/// counts exact matches. Unknown words go through the guesser; a word the
/// guesser declines counts as a miss.
pub fn score_reader<R: BufRead>(lexicon: &Lexicon, rdr: R) -> Result<Score> {
    let best = best_tag_map(lexicon);

    let mut correct = 0u64;
    let mut all_test = 0u64;
    let mut line_count = 0u64;
    for line in rdr.lines() {
        let line = line?;
        line_count += 1;
        for (word, true_tag) in parse_tagged_line(&line)
            .with_context(|| format!("bad test data on line {line_count}"))?
        {
            let predicted = best
                .get(word.as_str())
                .copied()
                .or_else(|| guess_tag(&word));
            all_test += 1;
            if predicted == Some(true_tag.as_str()) {
                correct += 1;
            }
        }
    }

    if all_test == 0 {
        bail!("test data contains no word/tag pairs");
    }

    Ok(Score { correct, all_test })
}

pub fn score_path(lexicon: &Lexicon, path: &Path) -> Result<Score> {
    let file =
        File::open(path).with_context(|| format!("failed to open test data {:?}", path))?;
    score_reader(lexicon, BufReader::new(file))
}
