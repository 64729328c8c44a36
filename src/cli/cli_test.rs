// Tests for argument parsing and the corrections command

use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_convert_with_text() {
    let cli = Cli::try_parse_from(["kiwispell", "convert", "the color"]).unwrap();
    assert!(cli.config.is_none());
    assert!(matches!(cli.cmd, Cmd::Convert { text: Some(ref t) } if t == "the color"));
}

#[test]
fn test_parse_convert_reads_stdin_when_text_missing() {
    let cli = Cli::try_parse_from(["kiwispell", "convert"]).unwrap();
    assert!(matches!(cli.cmd, Cmd::Convert { text: None }));
}

#[test]
fn test_config_flag_is_global() {
    let cli = Cli::try_parse_from([
        "kiwispell",
        "serve",
        "--bind",
        "0.0.0.0:8080",
        "--config",
        "/tmp/kiwispell.json",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/kiwispell.json")));
    assert!(matches!(cli.cmd, Cmd::Serve { bind: Some(ref b) } if b == "0.0.0.0:8080"));
}

#[test]
fn test_parse_corrections_add() {
    let cli =
        Cli::try_parse_from(["kiwispell", "corrections", "add", "sidewalk", "footpath"]).unwrap();
    match cli.cmd {
        Cmd::Corrections {
            action:
                CorrectionsCmd::Add {
                    phrase,
                    replacement,
                },
        } => {
            assert_eq!(phrase, "sidewalk");
            assert_eq!(replacement, "footpath");
        }
        _ => panic!("expected corrections add"),
    }
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["kiwispell", "translate"]).is_err());
    assert!(Cli::try_parse_from(["kiwispell"]).is_err());
}

#[test]
fn test_corrections_commands_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("corrections.json");
    let config = Config {
        corrections_path: Some(path.clone()),
        ..Config::default()
    };

    corrections(
        config.clone(),
        CorrectionsCmd::Add {
            phrase: "sidewalk".to_string(),
            replacement: "footpath".to_string(),
        },
    )
    .unwrap();
    let store = CorrectionStore::open(path.clone()).unwrap();
    assert_eq!(store.list().len(), 1);

    corrections(
        config.clone(),
        CorrectionsCmd::Remove {
            phrase: "sidewalk".to_string(),
        },
    )
    .unwrap();
    let store = CorrectionStore::open(path.clone()).unwrap();
    assert!(store.list().is_empty());

    let missing = corrections(
        config,
        CorrectionsCmd::Remove {
            phrase: "sidewalk".to_string(),
        },
    );
    assert!(matches!(missing, Err(CliError::Store(StoreError::NotFound(_)))));
}
