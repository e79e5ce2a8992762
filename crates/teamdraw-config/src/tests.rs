//! Tests for draw configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        room_size = 5
        max_rebalance_steps = 10

        [[rules]]
        type = "exclude"
        names = ["A", "B"]

        [[rules]]
        type = "include"
        names = ["C", "D"]
        seed_divisible_by = 3
    "#;

    let config = DrawConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.room_size, 5);
    assert_eq!(config.max_rebalance_steps, 10);
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[1].seed_divisible_by, Some(3));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        rules:
          - type: exclude
            names: [A, B]
          - type: include
            names: [C, D]
            seed_divisible_by: 3
    "#;

    let config = DrawConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.room_size, DEFAULT_ROOM_SIZE);
    assert_eq!(config.max_rebalance_steps, DEFAULT_MAX_REBALANCE_STEPS);
}

#[test]
fn test_toml_and_yaml_agree() {
    let toml = DrawConfig::from_toml_str(
        r#"
        [[rules]]
        type = "exclude"
        names = ["A", "B"]
        [[rules]]
        type = "include"
        names = ["C", "D"]
        seed_divisible_by = 3
    "#,
    )
    .unwrap();
    let yaml = DrawConfig::from_yaml_str(
        r#"
        rules:
          - { type: exclude, names: [A, B] }
          - { type: include, names: [C, D], seed_divisible_by: 3 }
    "#,
    )
    .unwrap();

    assert_eq!(toml.rule_book(), yaml.rule_book());
}

#[test]
fn test_rule_book_conversion() {
    let config = DrawConfig::new()
        .with_rule(RuleConfig::exclude(" A ", "B"))
        .with_rule(RuleConfig::include("C", "D").when_seed_divisible_by(3));

    let book = config.rule_book();
    let rules: Vec<_> = book.iter().cloned().collect();
    assert_eq!(rules[0], Rule::exclude("A", "B"));
    assert_eq!(rules[1], Rule::include("C", "D").when_seed_divisible_by(3));
}

#[test]
fn test_builder() {
    let config = DrawConfig::new()
        .with_random_seed(123)
        .with_room_size(3)
        .with_max_rebalance_steps(8);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.room_size, 3);
    assert_eq!(config.max_rebalance_steps, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_room_size() {
    let err = DrawConfig::from_toml_str("room_size = 7").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(DrawConfig::new().with_room_size(1).validate().is_err());
}

#[test]
fn test_invalid_rules() {
    let self_pair = r#"
        [[rules]]
        type = "exclude"
        names = ["A", "A"]
    "#;
    assert!(matches!(
        DrawConfig::from_toml_str(self_pair),
        Err(ConfigError::Invalid(_))
    ));

    let zero_divisor = r#"
        [[rules]]
        type = "include"
        names = ["A", "B"]
        seed_divisible_by = 0
    "#;
    assert!(matches!(
        DrawConfig::from_toml_str(zero_divisor),
        Err(ConfigError::Invalid(_))
    ));

    let unknown_type = r#"
        [[rules]]
        type = "prefer"
        names = ["A", "B"]
    "#;
    assert!(matches!(
        DrawConfig::from_toml_str(unknown_type),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file_falls_back() {
    let config = DrawConfig::load("definitely/not/here.toml").unwrap_or_default();
    assert_eq!(config.random_seed, None);
    assert!(config.rules.is_empty());
}
