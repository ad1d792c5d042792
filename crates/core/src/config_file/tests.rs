use std::fs;

use tempfile::tempdir;

use super::*;
use crate::content::keys;
use crate::error::SampleError;

const MINIMAL: &str = r#"
[[items]]
id = "cash"
display_name = "Cash"
category = "currency"
rarity = "common"

[[items]]
id = "bomb"
display_name = "Bomb"
category = "bomb"
rarity = "common"

[tiers.bronze]
name = "Bronze"
has_bomb = true
bomb_item = "bomb"
rewards = [{ item = "cash", base_amount = 100, weight = 50.0 }]

[tiers.silver]
name = "Silver"
rewards = [{ item = "cash", base_amount = 200, weight = 50.0 }]

[tiers.gold]
name = "Gold"
rewards = [{ item = "cash", base_amount = 500, weight = 50.0 }]
"#;

#[test]
fn bundled_file_matches_built_in_content() {
    let loaded = bundled_config().unwrap();
    let built = GameConfig::build_default();
    assert_eq!(loaded.content_hash(), built.content_hash());
    assert_eq!(loaded.catalog.len(), built.catalog.len());
    assert_eq!(
        loaded.catalog.get(loaded.catalog.key_of(keys::WEAPON_RIFLE_T3).unwrap()),
        built.catalog.get(built.catalog.key_of(keys::WEAPON_RIFLE_T3).unwrap())
    );
}

#[test]
fn omitted_intervals_fall_back_to_defaults() {
    let config = parse_config(MINIMAL).unwrap();
    assert_eq!(config.safe_zone_interval, 5);
    assert_eq!(config.super_zone_interval, 30);
    assert_eq!(config.amount_multiplier_per_zone, 0.1);
    assert!(config.bronze.has_bomb);
    assert_eq!(config.bronze.bomb_item, config.catalog.key_of("bomb"));
}

#[test]
fn unknown_item_reference_names_tier_and_id() {
    let text = MINIMAL.replace(
        r#"{ item = "cash", base_amount = 200"#,
        r#"{ item = "ruby", base_amount = 200"#,
    );
    match parse_config(&text) {
        Err(ConfigFileError::UnknownItem { tier, id }) => {
            assert_eq!(tier, "Silver");
            assert_eq!(id, "ruby");
        }
        other => panic!("expected UnknownItem, got {other:?}"),
    }
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let duplicate = r#"
[[items]]
id = "cash"
display_name = "More Cash"
category = "currency"
rarity = "rare"
"#;
    let text = format!("{duplicate}{MINIMAL}");
    assert!(matches!(
        parse_config(&text),
        Err(ConfigFileError::Invalid(ConfigError::DuplicateItem { id })) if id == "cash"
    ));
}

#[test]
fn bomb_flag_without_item_fails_validation() {
    let text = MINIMAL.replace("bomb_item = \"bomb\"\n", "");
    assert!(matches!(
        parse_config(&text),
        Err(ConfigFileError::Invalid(ConfigError::MissingBombItem { tier })) if tier == "Bronze"
    ));
}

#[test]
fn zero_weight_pool_fails_validation() {
    let text =
        MINIMAL.replace("base_amount = 500, weight = 50.0", "base_amount = 500, weight = 0.0");
    assert!(matches!(
        parse_config(&text),
        Err(ConfigFileError::Invalid(ConfigError::Pool {
            tier,
            source: SampleError::NonPositiveTotalWeight { .. },
        })) if tier == "Gold"
    ));
}

#[test]
fn zero_interval_fails_validation() {
    let text = format!("safe_zone_interval = 0\n{MINIMAL}");
    assert!(matches!(
        parse_config(&text),
        Err(ConfigFileError::Invalid(ConfigError::ZeroInterval {
            interval: "safe_zone_interval"
        }))
    ));
}

#[test]
fn future_format_version_is_rejected() {
    let text = format!("format_version = 2\n{MINIMAL}");
    assert!(matches!(parse_config(&text), Err(ConfigFileError::UnsupportedVersion(2))));
}

#[test]
fn unknown_fields_and_bad_enums_are_parse_errors() {
    let typo = format!("safe_zone_intervall = 5\n{MINIMAL}");
    assert!(matches!(parse_config(&typo), Err(ConfigFileError::Parse(_))));

    let bad_category = MINIMAL.replace("category = \"currency\"", "category = \"coins\"");
    assert!(matches!(parse_config(&bad_category), Err(ConfigFileError::Parse(_))));
}

#[test]
fn exported_config_resolves_to_the_same_content() {
    let original = GameConfig::build_default();
    let text = ConfigFile::from_config(&original).to_toml().unwrap();
    let reloaded = parse_config(&text).unwrap();
    assert_eq!(reloaded.content_hash(), original.content_hash());
}

#[test]
fn load_from_file_reads_and_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wheel.toml");
    fs::write(&path, MINIMAL).unwrap();

    let config = load_config_from_file(&path).unwrap();
    assert_eq!(config.catalog.len(), 2);
    assert_eq!(config.gold.potential_rewards[0].base_amount, 500);

    let missing = dir.path().join("absent.toml");
    assert!(matches!(load_config_from_file(&missing), Err(ConfigFileError::Io(_))));
}
