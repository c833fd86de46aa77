use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::parse::parse_tagged_line;

/// Two-level frequency table mapping each word to its per-tag occurrence
/// counts. Words and tags are case-sensitive; every stored count is >= 1.
///
/// A lexicon is built once per run, either by counting tagged training data
/// or by loading a previously written lexicon file, and is read-only after
/// that.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, HashMap<String, u64>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one (word, tag) observation.
    pub fn add(&mut self, word: &str, tag: &str) {
        *self
            .entries
            .entry(word.to_string())
            .or_default()
            .entry(tag.to_string())
            .or_insert(0) += 1;
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tag_counts(&self, word: &str) -> Option<&HashMap<String, u64>> {
        self.entries.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<String, u64>)> {
        self.entries.iter()
    }

    /// Builds a lexicon by counting the (word, tag) pairs of tagged training
    /// data. Pure accumulation: no case folding, no entry ever removed.
    pub fn from_tagged_reader<R: BufRead>(rdr: R) -> Result<Self> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] Lines: {pos} | Words: {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );

        let mut lexicon = Self::new();
        let mut line_count = 0u64;
        for line in rdr.lines() {
            let line = line?;
            line_count += 1;
            for (word, tag) in parse_tagged_line(&line)
                .with_context(|| format!("bad training data on line {line_count}"))?
            {
                lexicon.add(&word, &tag);
            }

            if line_count % 10_000 == 0 {
                pb.set_position(line_count);
                pb.set_message(format!("{}", lexicon.len()));
            }
        }
        pb.finish_with_message(format!(
            "{} lines, {} distinct words",
            line_count,
            lexicon.len()
        ));

        Ok(lexicon)
    }

    pub fn from_tagged_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open training data {:?}", path))?;
        Self::from_tagged_reader(BufReader::new(file))
    }

    /// Writes the lexicon as one line per word: the word followed by its
    /// `tag:count` pairs ordered by descending count. Words are written in
    /// ascending order and count ties fall back to ascending tag order, so
    /// identical lexicons serialize identically.
    pub fn write_to<W: Write>(&self, wtr: W) -> Result<()> {
        let mut wtr = BufWriter::new(wtr);

        let mut words: Vec<&String> = self.entries.keys().collect();
        words.sort();

        for word in words {
            write!(wtr, "{word}")?;
            for (tag, count) in ordered_tags(&self.entries[word]) {
                write!(wtr, " {tag}:{count}")?;
            }
            writeln!(wtr)?;
        }
        wtr.flush()?;

        Ok(())
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create lexicon file {:?}", path))?;
        self.write_to(file)
    }

    /// Reads a lexicon file produced by [`Lexicon::write_to`]. Each line must
    /// hold a word and at least one `tag:count` pair, the count splitting off
    /// at the token's last `:`.
    pub fn from_lexicon_reader<R: BufRead>(rdr: R) -> Result<Self> {
        let mut lexicon = Self::new();

        for (idx, line) in rdr.lines().enumerate() {
            let line = line?;
            let lineno = idx + 1;

            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(word) => word,
                None => bail!("lexicon line {lineno} has no word"),
            };

            let tags = lexicon.entries.entry(word.to_string()).or_default();
            let mut num_tags = 0;
            for field in fields {
                let (tag, count) = match field.rsplit_once(':') {
                    Some(split) => split,
                    None => bail!("lexicon line {lineno}: token '{field}' has no ':'"),
                };
                let count: u64 = count
                    .parse()
                    .with_context(|| format!("lexicon line {lineno}: bad count in '{field}'"))?;
                if count == 0 {
                    bail!("lexicon line {lineno}: zero count in '{field}'");
                }
                tags.insert(tag.to_string(), count);
                num_tags += 1;
            }
            if num_tags == 0 {
                bail!("lexicon line {lineno}: word '{word}' has no tags");
            }
        }

        Ok(lexicon)
    }

    pub fn from_lexicon_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open lexicon file {:?}", path))?;
        Self::from_lexicon_reader(BufReader::new(file))
    }
}

/// Tags of one word ordered by descending count, ties by ascending tag.
fn ordered_tags(counts: &HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut tags: Vec<(&str, u64)> = counts.iter().map(|(t, &c)| (t.as_str(), c)).collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    tags
}
