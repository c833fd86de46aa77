use anyhow::Result;
use std::env;
use std::path::Path;

use pos_lexicon::guess::guess_tag;
use pos_lexicon::lexicon::Lexicon;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: cargo run -p test-resources --example query_lexicon -- <lexicon> <word>...");
        return Ok(());
    }

    let lexicon_path = Path::new(&args[1]);
    if !lexicon_path.exists() {
        eprintln!("Error: {:?} not found. Build a lexicon with pos-lexicon -d first.", lexicon_path);
        return Ok(());
    }

    let lexicon = Lexicon::from_lexicon_path(lexicon_path)?;
    println!("Loaded {} words from {:?}", lexicon.len(), lexicon_path);

    for word in &args[2..] {
        match lexicon.tag_counts(word) {
            Some(counts) => {
                let mut tags: Vec<(&str, u64)> =
                    counts.iter().map(|(t, &c)| (t.as_str(), c)).collect();
                tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

                println!("{:<20} | {:<6} | {}", "Word", "Tag", "Count");
                println!("{:-<20}-+-{:-<6}-+-{:-<10}", "", "", "");
                for (tag, count) in tags {
                    println!("{:<20} | {:<6} | {}", word, tag, count);
                }
            }
            None => match guess_tag(word) {
                Some(tag) => println!("'{}' is unknown; guesser says {}", word, tag),
                None => println!("'{}' is unknown and the guesser has no rule for it", word),
            },
        }
    }

    Ok(())
}
