use anyhow::{bail, Result};

/// Splits one line of tagged text (`word1/TAG1 word2/TAG2 ...`) into
/// (word, tag) pairs, preserving left-to-right order.
///
/// Word and tag are separated by the *last* `/` of each token, so words may
/// themselves contain slashes (`1/2/CD` is the word `1/2` tagged `CD`).
/// No normalization is applied to either part.
pub fn parse_tagged_line(line: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for token in line.split_whitespace() {
        match token.rsplit_once('/') {
            Some((word, tag)) => pairs.push((word.to_string(), tag.to_string())),
            None => bail!("token '{token}' has no '/' separating word and tag"),
        }
    }
    Ok(pairs)
}
