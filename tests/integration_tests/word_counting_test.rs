// tests/integration_tests/word_counting_test.rs
use super::common::{BOOKS, create_test_file, engine_for, reference_word_count, setup_books};
use anyhow::Result;
use tempfile::TempDir;
use wordstat::words;

#[test]
fn test_total_matches_reference_tokenizer() -> Result<()> {
    let temp_dir = setup_books()?;
    let stats = engine_for(temp_dir.path())?.run()?;

    let expected: u64 = BOOKS
        .iter()
        .map(|(_, content)| reference_word_count(content))
        .sum();
    assert_eq!(stats.total_words, expected);
    assert_eq!(stats.files_processed, 4);
    Ok(())
}

#[test]
fn test_tokenizer_agrees_with_reference() {
    for (_, content) in BOOKS {
        let counted: usize = content.lines().map(|line| words(line).count()).sum();
        assert_eq!(u64::try_from(counted).ok(), Some(reference_word_count(content)));
    }
}

#[test]
fn test_average_is_length_sum_over_total() -> Result<()> {
    let temp_dir = setup_books()?;
    let stats = engine_for(temp_dir.path())?.run()?;

    let lengths: usize = BOOKS
        .iter()
        .flat_map(|(_, content)| content.lines())
        .flat_map(words)
        .map(str::len)
        .sum();
    let expected = lengths as f64 / stats.total_words as f64;
    assert!((stats.average_word_length - expected).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_duplicate_word_does_not_change_unique_count() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.txt", "alpha beta gamma")?;
    let before = engine_for(temp_dir.path())?.run()?;
    assert_eq!(before.num_unique_words, 3);

    create_test_file(temp_dir.path(), "b.txt", "beta")?;
    let after = engine_for(temp_dir.path())?.run()?;
    assert_eq!(after.num_unique_words, 3);
    assert_eq!(after.total_words, 4);
    assert_eq!(after.most_common_word, "beta");
    Ok(())
}

#[test]
fn test_longest_word_tie_prefers_first_seen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "pair.txt", "ab cd")?;
    let stats = engine_for(temp_dir.path())?.run()?;
    assert_eq!(stats.longest_word, "ab");
    Ok(())
}
