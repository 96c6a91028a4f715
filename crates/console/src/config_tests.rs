use super::*;

#[test]
fn test_default_depth() {
    let config = GameConfig::default();
    assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);
    assert_eq!(config.effective_depth(), 5);
}

#[test]
fn test_parse_depth_from_toml() {
    let config = GameConfig::from_toml_str("search_depth = 3\n").unwrap();
    assert_eq!(config.search_depth, 3);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(GameConfig::from_toml_str("board_size = 4\n").is_err());
    assert!(GameConfig::from_toml_str("search_depth = \"deep\"\n").is_err());
}

#[test]
fn test_cli_override_wins() {
    let config = GameConfig::from_toml_str("search_depth = 3\n")
        .unwrap()
        .with_depth_override(Some(7));
    assert_eq!(config.search_depth, 7);

    let config = GameConfig::default().with_depth_override(None);
    assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);
}

#[test]
fn test_depth_is_clamped() {
    let shallow = GameConfig { search_depth: 0 };
    assert_eq!(shallow.effective_depth(), 1);

    let deep = GameConfig { search_depth: 40 };
    assert_eq!(deep.effective_depth(), GameConfig::MAX_DEPTH);
}

#[test]
fn test_load_missing_file_names_path() {
    let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.toml"));
}
