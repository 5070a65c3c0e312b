// tests/integration_tests/word_counting_test.rs
use super::common::{CaptureLog, count, pairs, setup_test_directory};
use anyhow::Result;
use wordfreq::{CountOptions, WordCounter};

#[test]
fn test_word_counting() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let entries = count(&temp_dir.path().join("prose.txt"))?;

    let expected: Vec<(String, u64)> = [
        ("the", 4),
        ("fox", 2),
        ("dog", 2),
        ("quick", 1),
        ("brown", 1),
        ("jumps", 1),
        ("over", 1),
        ("lazy", 1),
        ("sleeps", 1),
        ("runs", 1),
    ]
    .into_iter()
    .map(|(w, c)| (w.to_owned(), c))
    .collect();

    assert_eq!(pairs(&entries), expected);
    assert_eq!(entries.iter().map(|e| e.count).sum::<u64>(), 14);

    Ok(())
}

#[test]
fn test_case_insensitive() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let entries = count(&temp_dir.path().join("mixed_case.txt"))?;

    assert_eq!(pairs(&entries), vec![(String::from("test"), 3)]);
    Ok(())
}

#[test]
fn test_hyphenated_words_merge() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let entries = count(&temp_dir.path().join("punctuation.txt"))?;

    assert_eq!(
        pairs(&entries),
        vec![
            (String::from("hello"), 1),
            (String::from("world"), 1),
            (String::from("helloworld"), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_counts_are_non_increasing() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    for name in ["prose.txt", "mixed_case.txt", "punctuation.txt", "nested/inner.txt"] {
        let entries = count(&temp_dir.path().join(name))?;
        assert!(
            entries.iter().all(|e| e.count >= 1),
            "{name}: every count should be at least 1"
        );
        assert!(
            entries.windows(2).all(|w| w[0].count >= w[1].count),
            "{name}: counts should be non-increasing"
        );
    }
    Ok(())
}

#[test]
fn test_report_is_logged() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let log = CaptureLog::default();
    let counter = WordCounter::new(&log).with_options(CountOptions::default());

    let entries = counter.count_file(&temp_dir.path().join("nested/inner.txt"))?;

    let printed: Vec<String> = entries.iter().map(ToString::to_string).collect();
    assert_eq!(printed, vec!["inner: 2", "words: 1"]);
    let logged: Vec<String> = printed.iter().map(|line| format!("word_count|{line}")).collect();
    assert_eq!(log.lines(), logged);
    Ok(())
}
