//! Integration tests for arena configuration loading.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_arena::{AgentKind, ArenaConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
games = 5
seed = 42
show_board = false

[player_a]
name = "Deep Blue"
kind = "alpha-beta"

[player_b]
name = "Dice"
kind = "random"
"#,
    );

    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.games(), 5);
    assert_eq!(*config.seed(), Some(42));
    assert!(!config.should_show_board());
    assert_eq!(config.player_a().name(), "Deep Blue");
    assert_eq!(*config.player_a().kind(), AgentKind::AlphaBeta);
    assert_eq!(*config.player_b().kind(), AgentKind::Random);
    assert_eq!(config.seat_seeds(), (Some(42), Some(43)));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("games = 2\n");
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.games(), 2);
    assert_eq!(*config.player_a().kind(), AgentKind::Human);
    assert_eq!(config.player_a().name(), "Player 1");
    assert_eq!(*config.player_b().kind(), AgentKind::Random);
    assert!(config.should_show_board());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArenaConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ArenaConfig::default());
    assert_eq!(*config.games(), 1);
}

#[test]
fn test_invalid_toml_is_rejected() {
    let file = write_config("games = \"many\"\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_games_rejected() {
    let file = write_config("games = 0\n");
    assert!(ArenaConfig::from_file(file.path()).is_err());
    assert!(ArenaConfig::default().with_games(0).is_err());
}

#[test]
fn test_overrides_apply() {
    let config = ArenaConfig::default()
        .with_player_a_kind(AgentKind::Minimax)
        .with_player_b_kind(AgentKind::AlphaBeta)
        .with_seed(7)
        .with_games(3)
        .unwrap();
    assert_eq!(*config.player_a().kind(), AgentKind::Minimax);
    assert_eq!(*config.player_b().kind(), AgentKind::AlphaBeta);
    assert!(!config.should_show_board());
    assert_eq!(*config.games(), 3);
    assert_eq!(config.seat_seeds(), (Some(7), Some(8)));
}
