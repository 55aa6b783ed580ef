// tests/integration_tests/analysis_test.rs
use super::common::{LOREM, setup_test_directory};
use anyhow::Result;
use txtstat::{StatisticKind, TextAnalyzer, render};

#[test]
fn test_scenario_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("scenario.txt"));

    let failures = analyzer.analyze(&StatisticKind::all());
    assert!(failures.is_empty());

    let lines = render(analyzer.target(), &StatisticKind::all());
    assert_eq!(
        lines,
        vec![
            "Line count: 3",
            "Character count: 6",
            "Empty line count: 1",
            "Character frequency:",
            "  '\\n': 3",
            "  'b': 2",
            "  'a': 1",
        ]
    );
    Ok(())
}

#[test]
fn test_lorem_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("lorem.txt"));

    assert_eq!(analyzer.count_lines()?, 5);
    assert_eq!(analyzer.count_empty_lines()?, 1);
    assert_eq!(analyzer.count_characters()?, LOREM.chars().count());
    assert!(!analyzer.build_frequency_table()?.is_empty());
    Ok(())
}

#[test]
fn test_frequency_total_matches_character_count() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();

    for name in ["scenario.txt", "lorem.txt", "empty.txt", "crlf.txt", "unicode.txt"] {
        analyzer.set_target(temp_dir.path().join(name));
        let table = analyzer.build_frequency_table()?;
        assert_eq!(
            table.total(),
            analyzer.count_characters()?,
            "frequency total differs for {name}"
        );
    }
    Ok(())
}

#[test]
fn test_single_byte_file_character_count_matches_length() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("lorem.txt"));

    assert_eq!(analyzer.count_characters()?, LOREM.len());
    Ok(())
}

#[test]
fn test_analyze_is_idempotent() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("lorem.txt"));

    analyzer.analyze(&StatisticKind::all());
    let first = render(analyzer.target(), &StatisticKind::all());
    analyzer.analyze(&StatisticKind::all());
    let second = render(analyzer.target(), &StatisticKind::all());

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_new_target_renders_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("scenario.txt"));
    analyzer.analyze(&StatisticKind::all());

    analyzer.set_target(temp_dir.path().join("lorem.txt"));

    assert!(render(analyzer.target(), &StatisticKind::all()).is_empty());
    Ok(())
}

#[test]
fn test_unrequested_kinds_keep_previous_values() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("scenario.txt"));

    analyzer.analyze(&[StatisticKind::LineCount].into_iter().collect());
    analyzer.analyze(&[StatisticKind::CharCount].into_iter().collect());

    assert_eq!(analyzer.target().line_count, Some(3));
    assert_eq!(analyzer.target().char_count, Some(6));
    Ok(())
}
