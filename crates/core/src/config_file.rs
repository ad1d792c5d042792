//! TOML wheel configuration.
//!
//! The file names items by string id; loading resolves those ids into catalog
//! keys and validates the result, so a [`GameConfig`] coming out of this module
//! is ready for generation:
//! - `format_version`, the zone intervals and the per-zone multiplier at the top level.
//! - `[[items]]` tables: `id`, `display_name`, `category`, `rarity`.
//! - `[tiers.bronze]`, `[tiers.silver]`, `[tiers.gold]`: `name`, `has_bomb`,
//!   `bomb_item`, and `rewards = [{ item, base_amount, weight }]`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{RewardCatalog, WheelTier};
use crate::config::{
    DEFAULT_AMOUNT_MULTIPLIER_PER_ZONE, DEFAULT_SAFE_ZONE_INTERVAL, DEFAULT_SUPER_ZONE_INTERVAL,
    GameConfig,
};
use crate::error::ConfigError;
use crate::types::{ItemKey, Rarity, RewardCategory, RewardItem};

pub const FORMAT_VERSION: u32 = 1;

/// The shipped configuration, equivalent to [`GameConfig::build_default`].
pub const BUNDLED_CONFIG: &str = include_str!("../data/default_wheel.toml");

// ---------------------------------------------------------------------------
// File format structs
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default = "default_safe_zone_interval")]
    pub safe_zone_interval: u32,
    #[serde(default = "default_super_zone_interval")]
    pub super_zone_interval: u32,
    #[serde(default = "default_amount_multiplier")]
    pub amount_multiplier_per_zone: f64,
    pub items: Vec<ItemDef>,
    pub tiers: TierSet,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ItemDef {
    pub id: String,
    pub display_name: String,
    pub category: RewardCategory,
    pub rarity: Rarity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierSet {
    pub bronze: TierDef,
    pub silver: TierDef,
    pub gold: TierDef,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierDef {
    pub name: String,
    #[serde(default)]
    pub has_bomb: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bomb_item: Option<String>,
    #[serde(default)]
    pub rewards: Vec<RewardDef>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RewardDef {
    pub item: String,
    pub base_amount: u32,
    pub weight: f64,
}

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

fn default_safe_zone_interval() -> u32 {
    DEFAULT_SAFE_ZONE_INTERVAL
}

fn default_super_zone_interval() -> u32 {
    DEFAULT_SUPER_ZONE_INTERVAL
}

fn default_amount_multiplier() -> f64 {
    DEFAULT_AMOUNT_MULTIPLIER_PER_ZONE
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unsupported config format version {0}")]
    UnsupportedVersion(u32),
    #[error("tier `{tier}` references unknown item `{id}`")]
    UnknownItem { tier: String, id: String },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigFileError> {
        let file: Self = toml::from_str(text)?;
        if file.format_version != FORMAT_VERSION {
            return Err(ConfigFileError::UnsupportedVersion(file.format_version));
        }
        Ok(file)
    }

    /// Build and validate the in-memory configuration.
    pub fn resolve(&self) -> Result<GameConfig, ConfigFileError> {
        let mut catalog = RewardCatalog::new();
        for def in &self.items {
            let item = RewardItem::new(&def.id, &def.display_name, def.category, def.rarity);
            catalog.insert(item)?;
        }

        let bronze = resolve_tier(&catalog, &self.tiers.bronze)?;
        let silver = resolve_tier(&catalog, &self.tiers.silver)?;
        let gold = resolve_tier(&catalog, &self.tiers.gold)?;

        let mut config = GameConfig::new(catalog, bronze, silver, gold);
        config.safe_zone_interval = self.safe_zone_interval;
        config.super_zone_interval = self.super_zone_interval;
        config.amount_multiplier_per_zone = self.amount_multiplier_per_zone;
        config.validate()?;
        Ok(config)
    }

    /// Inverse of [`ConfigFile::resolve`] for a config whose items all live in
    /// its own catalog.
    pub fn from_config(config: &GameConfig) -> Self {
        let id_of = |key: ItemKey| config.catalog.get(key).map(|item| item.id.clone());
        let tier_def = |tier: &WheelTier| TierDef {
            name: tier.name.clone(),
            has_bomb: tier.has_bomb,
            bomb_item: tier.bomb_item.and_then(id_of),
            rewards: tier
                .potential_rewards
                .iter()
                .filter_map(|entry| {
                    Some(RewardDef {
                        item: id_of(entry.item)?,
                        base_amount: entry.base_amount,
                        weight: entry.weight,
                    })
                })
                .collect(),
        };

        Self {
            format_version: FORMAT_VERSION,
            safe_zone_interval: config.safe_zone_interval,
            super_zone_interval: config.super_zone_interval,
            amount_multiplier_per_zone: config.amount_multiplier_per_zone,
            items: config
                .catalog
                .iter()
                .map(|(_, item)| ItemDef {
                    id: item.id.clone(),
                    display_name: item.display_name.clone(),
                    category: item.category,
                    rarity: item.rarity,
                })
                .collect(),
            tiers: TierSet {
                bronze: tier_def(&config.bronze),
                silver: tier_def(&config.silver),
                gold: tier_def(&config.gold),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigFileError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn resolve_tier(catalog: &RewardCatalog, def: &TierDef) -> Result<WheelTier, ConfigFileError> {
    let lookup = |id: &str| {
        catalog.key_of(id).ok_or_else(|| ConfigFileError::UnknownItem {
            tier: def.name.clone(),
            id: id.to_string(),
        })
    };

    let mut tier = WheelTier::new(&def.name);
    tier.has_bomb = def.has_bomb;
    tier.bomb_item = def.bomb_item.as_deref().map(lookup).transpose()?;
    for reward in &def.rewards {
        tier = tier.with_reward(lookup(&reward.item)?, reward.base_amount, reward.weight);
    }
    Ok(tier)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

pub fn parse_config(text: &str) -> Result<GameConfig, ConfigFileError> {
    ConfigFile::parse(text)?.resolve()
}

pub fn load_config_from_file(path: &Path) -> Result<GameConfig, ConfigFileError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn bundled_config() -> Result<GameConfig, ConfigFileError> {
    parse_config(BUNDLED_CONFIG)
}

#[cfg(test)]
mod tests;
