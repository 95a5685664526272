// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, engine_for};
use anyhow::Result;
use tempfile::TempDir;
use wordstat::{Algorithm, NOT_AVAILABLE};

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut engine = engine_for(temp_dir.path())?;

    for name in Algorithm::NAMES {
        engine.set_algorithm(name)?;
        let stats = engine.run()?;
        assert_eq!(stats.total_words, 0, "{name}");
        assert_eq!(stats.num_unique_words, 0, "{name}");
        assert_eq!(stats.most_common_word, NOT_AVAILABLE, "{name}");
        assert_eq!(stats.most_common_word_occurrences, 0, "{name}");
        assert_eq!(stats.average_word_length, 0.0, "{name}");
        assert_eq!(stats.longest_word, "", "{name}");
    }
    Ok(())
}

#[test]
fn test_files_without_words() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "numbers.txt", "1 2 3\n4.5 -- 6\n")?;
    create_test_file(temp_dir.path(), "blank.txt", "\n\n\n")?;

    let stats = engine_for(temp_dir.path())?.run()?;
    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.most_common_word, NOT_AVAILABLE);
    assert_eq!(stats.average_word_length, 0.0);
    Ok(())
}

#[test]
fn test_most_common_tie_break_is_first_encountered() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "pets.txt", "cat dog\ndog cat")?;
    let mut engine = engine_for(temp_dir.path())?;

    for name in Algorithm::NAMES {
        engine.set_algorithm(name)?;
        let stats = engine.run()?;
        assert_eq!(stats.most_common_word, "cat", "{name}");
        assert_eq!(stats.most_common_word_occurrences, 2, "{name}");
    }
    Ok(())
}

#[test]
fn test_subdirectories_are_not_read_by_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "top.txt", "one two")?;
    create_test_file(temp_dir.path(), "inner/deep.txt", "three four five")?;

    let stats = engine_for(temp_dir.path())?.run()?;
    assert_eq!(stats.total_words, 2);
    assert_eq!(stats.files_processed, 1);
    Ok(())
}

#[test]
fn test_missing_directory_is_empty_corpus() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stats = engine_for(&temp_dir.path().join("Books"))?.run()?;
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.files_processed, 0);
    Ok(())
}
