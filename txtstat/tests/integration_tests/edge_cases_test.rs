// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use txtstat::{StatError, StatisticKind, TextAnalyzer, render};

#[test]
fn test_empty_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("empty.txt"));

    let failures = analyzer.analyze(&StatisticKind::all());
    assert!(failures.is_empty());

    // Zero is a computed value and still renders.
    assert_eq!(
        render(analyzer.target(), &StatisticKind::all()),
        vec![
            "Line count: 0",
            "Character count: 0",
            "Empty line count: 0",
            "Character frequency:",
        ]
    );
    Ok(())
}

#[test]
fn test_carriage_returns_are_counted() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("crlf.txt"));

    assert_eq!(analyzer.count_lines()?, 3);
    assert_eq!(analyzer.count_characters()?, 12);
    assert_eq!(analyzer.count_empty_lines()?, 1);
    assert_eq!(analyzer.build_frequency_table()?.get('\r'), Some(3));
    Ok(())
}

#[test]
fn test_multibyte_characters() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("unicode.txt"));

    assert_eq!(analyzer.count_lines()?, 2);
    assert_eq!(analyzer.count_characters()?, 13);
    assert_eq!(analyzer.build_frequency_table()?.get('и'), Some(2));
    Ok(())
}

#[test]
fn test_undecodable_file_reports_and_continues() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(temp_dir.path().join("binary.dat"));

    let failures = analyzer.analyze(&StatisticKind::all());

    assert_eq!(failures.len(), 4);
    assert!(
        failures
            .iter()
            .all(|err| matches!(err, StatError::UnreadableOrUndecodable { .. }))
    );
    assert_eq!(analyzer.target().line_count, Some(0));
    Ok(())
}

#[test]
fn test_file_removed_after_selection() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_test_file(temp_dir.path(), "short_lived.txt", b"here\n")?;
    let mut analyzer = TextAnalyzer::new();
    analyzer.set_target(&path);
    std::fs::remove_file(&path)?;

    let failures = analyzer.analyze(&[StatisticKind::LineCount].into_iter().collect());

    assert!(matches!(failures.as_slice(), [StatError::FileNotFound(_)]));
    assert_eq!(
        render(analyzer.target(), &StatisticKind::all()),
        vec!["Line count: 0"]
    );
    Ok(())
}
