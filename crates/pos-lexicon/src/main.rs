use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pos_lexicon::analyze::LexiconStats;
use pos_lexicon::lexicon::Lexicon;
use pos_lexicon::score;

/// Build a word->tag frequency lexicon from tagged text and score the
/// most-frequent-tag baseline against held-out data.
#[derive(Parser, Debug)]
#[command(name = "pos-lexicon")]
#[command(about = "Build a POS lexicon from word/TAG data and score a naive tagger")]
struct Args {
    /// Tagged training data (word/TAG tokens) to build a new lexicon from.
    #[arg(short = 'd', long)]
    data: Option<PathBuf>,

    /// Lexicon file: written when --data is given, read otherwise.
    #[arg(short = 'l', long)]
    lexicon: PathBuf,

    /// Tagged test data to score the baseline tagger against.
    #[arg(short = 't', long)]
    test: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let lexicon = if let Some(data) = &args.data {
        log::info!("Building lexicon from {:?}", data);
        let lexicon = Lexicon::from_tagged_path(data)?;
        log::info!("Writing lexicon to {:?}", args.lexicon);
        lexicon.write_to_path(&args.lexicon)?;
        lexicon
    } else {
        log::info!("Reading lexicon from {:?}", args.lexicon);
        Lexicon::from_lexicon_path(&args.lexicon)?
    };

    LexiconStats::collect(&lexicon).report();

    if let Some(test) = &args.test {
        log::info!("Tagging test data in {:?}", test);
        let score = score::score_path(&lexicon, test)?;
        eprintln!(
            "Score on test data: {:5.1}% ({:5} / {:5})",
            score.accuracy_pct(),
            score.correct,
            score.all_test
        );
    }

    Ok(())
}
