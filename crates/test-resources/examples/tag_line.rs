use anyhow::Result;
use std::env;
use std::path::Path;

use pos_lexicon::guess::guess_tag;
use pos_lexicon::lexicon::Lexicon;
use pos_lexicon::score::best_tag_map;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: cargo run -p test-resources --example tag_line -- <lexicon> <word>...");
        return Ok(());
    }

    let lexicon_path = Path::new(&args[1]);
    if !lexicon_path.exists() {
        eprintln!("Error: {:?} not found. Build a lexicon with pos-lexicon -d first.", lexicon_path);
        return Ok(());
    }

    let lexicon = Lexicon::from_lexicon_path(lexicon_path)?;
    let best = best_tag_map(&lexicon);

    let tagged: Vec<String> = args[2..]
        .iter()
        .map(|word| {
            let tag = best
                .get(word.as_str())
                .copied()
                .or_else(|| guess_tag(word))
                .unwrap_or("??");
            format!("{}/{}", word, tag)
        })
        .collect();

    println!("{}", tagged.join(" "));

    Ok(())
}
