// tests/integration_tests/strategy_test.rs
use super::common::{create_test_file, engine_for, setup_books};
use anyhow::Result;
use tempfile::TempDir;
use wordstat::{Algorithm, Engine};

fn run_all(engine: &mut Engine) -> Result<Vec<wordstat::FinalStats>> {
    let mut results = Vec::new();
    for name in Algorithm::NAMES {
        engine.set_algorithm(name)?;
        results.push(engine.run()?);
    }
    Ok(results)
}

#[test]
fn test_strategies_agree_on_statistics() -> Result<()> {
    let temp_dir = setup_books()?;
    let mut engine = engine_for(temp_dir.path())?;
    // Clamping to the machine's limit is fine here.
    let _ = engine.set_thread_count(4);

    let results = run_all(&mut engine)?;
    let baseline = &results[0];
    assert!(baseline.total_words > 0);

    for stats in &results[1..] {
        assert_eq!(stats.total_words, baseline.total_words, "{}", stats.algorithm);
        assert_eq!(stats.num_unique_words, baseline.num_unique_words, "{}", stats.algorithm);
        assert_eq!(stats.average_word_length, baseline.average_word_length, "{}", stats.algorithm);
        assert_eq!(
            stats.most_common_word_occurrences, baseline.most_common_word_occurrences,
            "{}",
            stats.algorithm
        );
        assert_eq!(stats.most_common_word, baseline.most_common_word, "{}", stats.algorithm);
        assert_eq!(stats.longest_word, baseline.longest_word, "{}", stats.algorithm);
        assert_eq!(stats.files_processed, baseline.files_processed, "{}", stats.algorithm);
    }
    Ok(())
}

#[test]
fn test_chunks_do_not_split_words() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut content = String::new();
    for i in 0..500 {
        content.push_str("supercalifragilistic expialidocious antidisestablishment ");
        if i % 3 == 0 {
            content.push('\n');
        }
    }
    create_test_file(temp_dir.path(), "long.txt", &content)?;

    let mut engine = engine_for(temp_dir.path())?;
    let single = engine.run()?;

    engine.set_algorithm("multi_thread_3")?;
    let _ = engine.set_thread_count(Engine::max_threads());
    let stats = engine.run()?;

    assert_eq!(stats.total_words, 1500);
    assert_eq!(stats.num_unique_words, 3);
    assert_eq!(stats.longest_word, "supercalifragilistic", "First of the 20-letter words");
    assert_eq!(stats.total_words, single.total_words);
    assert_eq!(stats.num_unique_words, single.num_unique_words);
    assert_eq!(stats.longest_word, single.longest_word);
    assert_eq!(stats.most_common_word, single.most_common_word);
    assert_eq!(stats.average_word_length, single.average_word_length);
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_chunks_read_files_that_report_zero_size() -> Result<()> {
    let source = std::path::Path::new("/proc/version");
    if !source.is_file() {
        return Ok(());
    }
    let temp_dir = TempDir::new()?;
    std::os::unix::fs::symlink(source, temp_dir.path().join("version.txt"))?;
    create_test_file(temp_dir.path(), "plain.txt", "some ordinary words\n")?;

    let mut engine = engine_for(temp_dir.path())?;
    let _ = engine.set_thread_count(4);
    let results = run_all(&mut engine)?;
    let baseline = &results[0];
    assert!(baseline.total_words > 3, "Symlinked file should contribute words");

    for stats in &results[1..] {
        assert_eq!(stats.total_words, baseline.total_words, "{}", stats.algorithm);
        assert_eq!(stats.num_unique_words, baseline.num_unique_words, "{}", stats.algorithm);
        assert_eq!(stats.files_processed, 2, "{}", stats.algorithm);
    }
    Ok(())
}

#[test]
fn test_worker_counts() -> Result<()> {
    let temp_dir = setup_books()?;
    let mut engine = engine_for(temp_dir.path())?;
    engine.set_thread_count(2)?;

    engine.set_algorithm("single_thread")?;
    assert_eq!(engine.run()?.workers, 1);

    engine.set_algorithm("multi_thread_1")?;
    assert_eq!(engine.run()?.workers, 2, "One helper plus the calling thread");

    engine.set_algorithm("multi_thread_2")?;
    assert_eq!(engine.run()?.workers, 2);
    Ok(())
}
