use std::path::{Path, PathBuf};

use wfpop_core::{AppConfig, Environment};

use super::*;

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        input_path: dir.join("raw.json"),
        output_path: dir.join("scored.json"),
        keywords_path: None,
        mock_videos_per_keyword: 1,
        mock_topics_per_keyword: 1,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["wfpop"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_score_without_paths() {
    let cli = Cli::try_parse_from(["wfpop", "score"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            input: None,
            output: None
        })
    ));
}

#[test]
fn parses_score_with_paths() {
    let cli = Cli::try_parse_from([
        "wfpop", "score", "--input", "in.json", "--output", "out.json",
    ])
    .unwrap();
    let Some(Commands::Score { input, output }) = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(input, Some(PathBuf::from("in.json")));
    assert_eq!(output, Some(PathBuf::from("out.json")));
}

#[test]
fn list_defaults_limit() {
    let cli = Cli::try_parse_from(["wfpop", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            platform: None,
            country: None,
            limit: DEFAULT_QUERY_LIMIT,
            raw: false,
            dataset: None,
        })
    ));
}

#[test]
fn list_rejects_raw_with_dataset() {
    let result = Cli::try_parse_from(["wfpop", "list", "--raw", "--dataset", "x.json"]);
    assert!(result.is_err());
}

#[test]
fn list_rejects_non_numeric_limit() {
    let result = Cli::try_parse_from(["wfpop", "list", "--limit", "lots"]);
    assert!(result.is_err());
}

#[test]
fn parses_mock_overrides() {
    let cli = Cli::try_parse_from([
        "wfpop",
        "mock",
        "--keywords",
        "config/keywords.yaml",
        "--videos-per-keyword",
        "4",
    ])
    .unwrap();
    let Some(Commands::Mock {
        keywords,
        videos_per_keyword,
        topics_per_keyword,
        output,
    }) = cli.command
    else {
        panic!("expected mock command");
    };
    assert_eq!(keywords, Some(PathBuf::from("config/keywords.yaml")));
    assert_eq!(videos_per_keyword, Some(4));
    assert!(topics_per_keyword.is_none());
    assert!(output.is_none());
}

#[test]
fn mock_then_score_uses_configured_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    mock::run_mock(
        &config,
        &mock::MockArgs {
            output: None,
            keywords: None,
            videos_per_keyword: None,
            topics_per_keyword: None,
        },
    )
    .unwrap();
    assert!(config.input_path.exists());

    score::run_score(&config, None, None).unwrap();
    let scored = wfpop_scoring::load_records(&config.output_path).unwrap();
    // 10 default keywords; the US and IN video titles collapse into one group.
    assert_eq!(scored.len(), 20);
    assert!(scored.iter().all(|r| r.score.is_some()));
}

#[test]
fn score_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let err = score::run_score(&config, None, None).unwrap_err();
    assert!(err.to_string().contains("failed to read input"), "got {err}");
    assert!(!config.output_path.exists());
}

#[test]
fn list_rejects_zero_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.input_path, "[]").unwrap();
    let err = list::run_list(
        &config,
        &list::ListArgs {
            platform: None,
            country: None,
            limit: 0,
            raw: true,
            dataset: None,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid query"), "got {err}");
}
