use std::io::Cursor;

use pos_lexicon::analyze::LexiconStats;
use pos_lexicon::lexicon::Lexicon;

const TRAINING: &str = "the/DT dog/NN runs/VBZ\nthe/DT cat/NN sleeps/VBZ\n";

#[test]
fn test_build_counts_word_tag_pairs() {
    let lexicon =
        Lexicon::from_tagged_reader(Cursor::new(TRAINING)).expect("training data should parse");

    assert_eq!(lexicon.len(), 5, "five distinct words expected");
    assert_eq!(lexicon.tag_counts("the").and_then(|t| t.get("DT")), Some(&2));
    assert_eq!(lexicon.tag_counts("dog").and_then(|t| t.get("NN")), Some(&1));
    assert_eq!(lexicon.tag_counts("runs").and_then(|t| t.get("VBZ")), Some(&1));
    assert_eq!(lexicon.tag_counts("cat").and_then(|t| t.get("NN")), Some(&1));
    assert_eq!(
        lexicon.tag_counts("sleeps").and_then(|t| t.get("VBZ")),
        Some(&1)
    );
}

#[test]
fn test_build_is_case_sensitive() {
    let lexicon = Lexicon::from_tagged_reader(Cursor::new("The/DT the/DT\n"))
        .expect("training data should parse");

    assert_eq!(lexicon.len(), 2, "'The' and 'the' are distinct words");
}

#[test]
fn test_build_is_deterministic() {
    let a = Lexicon::from_tagged_reader(Cursor::new(TRAINING)).expect("first build should parse");
    let b = Lexicon::from_tagged_reader(Cursor::new(TRAINING)).expect("second build should parse");

    assert_eq!(a, b, "identical training data must yield identical lexicons");
}

#[test]
fn test_build_rejects_token_without_slash() {
    let err = Lexicon::from_tagged_reader(Cursor::new("the/DT dog\n"))
        .expect_err("a token without '/' should be a format error");

    assert!(
        format!("{err:#}").contains("dog"),
        "error should name the offending token: {err:#}"
    );
}

#[test]
fn test_stats_on_training_scenario() {
    let lexicon =
        Lexicon::from_tagged_reader(Cursor::new(TRAINING)).expect("training data should parse");
    let stats = LexiconStats::collect(&lexicon);

    assert_eq!(stats.all_words, 5);
    assert_eq!(stats.all_tokens, 6);
    assert_eq!(stats.correct_tokens, 6, "no word is ambiguous");
    assert_eq!(stats.ambiguous_words, 0);
    assert_eq!(stats.training_accuracy_pct(), 100.0);
    assert_eq!(stats.ambiguity_pct(), 0.0);
}

#[test]
fn test_stats_counts_ambiguous_words() {
    // "run" occurs as NN once and VB twice.
    let data = "run/NN run/VB run/VB walk/VB\n";
    let lexicon = Lexicon::from_tagged_reader(Cursor::new(data)).expect("data should parse");
    let stats = LexiconStats::collect(&lexicon);

    assert_eq!(stats.all_words, 2);
    assert_eq!(stats.ambiguous_words, 1);
    assert_eq!(stats.all_tokens, 4);
    assert_eq!(stats.correct_tokens, 3, "max tag of 'run' is VB with 2");
    assert!(stats.ambiguous_words <= stats.all_words);
    assert!(stats.correct_tokens <= stats.all_tokens);
}

#[test]
fn test_stats_tag_totals_and_ranking() {
    let data = "a/DT b/NN c/NN d/VB e/NN f/DT\n";
    let lexicon = Lexicon::from_tagged_reader(Cursor::new(data)).expect("data should parse");
    let stats = LexiconStats::collect(&lexicon);

    assert_eq!(stats.tag_totals.get("NN"), Some(&3));
    assert_eq!(stats.tag_totals.get("DT"), Some(&2));
    assert_eq!(stats.tag_totals.get("VB"), Some(&1));

    let top = stats.top_tags(10);
    assert_eq!(top, vec![("NN", 3), ("DT", 2), ("VB", 1)]);

    let top_two = stats.top_tags(2);
    assert_eq!(top_two.len(), 2, "ranking should respect the limit");
}

#[test]
fn test_empty_training_data_reports_zeros() {
    let lexicon = Lexicon::from_tagged_reader(Cursor::new("")).expect("empty input is not an error");
    assert!(lexicon.is_empty());

    let stats = LexiconStats::collect(&lexicon);
    assert_eq!(stats.all_words, 0);
    assert_eq!(stats.all_tokens, 0);
    assert_eq!(stats.ambiguity_pct(), 0.0, "must not divide by zero");
    assert_eq!(stats.training_accuracy_pct(), 0.0, "must not divide by zero");
    assert!(stats.top_tags(10).is_empty());

    // The report itself must not panic on an empty lexicon.
    stats.report();
}
