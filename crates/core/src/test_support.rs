//! Shared fixtures for unit tests across the crate.

use crate::catalog::{RewardCatalog, WheelTier};
use crate::config::GameConfig;
use crate::types::{ItemKey, Rarity, RewardCategory, RewardItem};

pub(crate) struct Fixture {
    pub config: GameConfig,
    pub cash: ItemKey,
    pub gem: ItemKey,
    pub crate_item: ItemKey,
    pub bomb: ItemKey,
}

/// Three rewards weighted 10/30/60 in every tier; only bronze carries a bomb.
pub(crate) fn weighted_fixture() -> Fixture {
    let mut catalog = RewardCatalog::new();
    let mut add = |id: &str, category: RewardCategory| {
        catalog.register(RewardItem::new(id, id, category, Rarity::Common))
    };
    let cash = add("cash", RewardCategory::Currency);
    let gem = add("gem", RewardCategory::Currency);
    let crate_item = add("crate", RewardCategory::Chest);
    let bomb = add("bomb", RewardCategory::Bomb);

    let pool = |name: &str| {
        WheelTier::new(name)
            .with_reward(cash, 100, 10.0)
            .with_reward(gem, 5, 30.0)
            .with_reward(crate_item, 1, 60.0)
    };
    let config =
        GameConfig::new(catalog, pool("Bronze").with_bomb(bomb), pool("Silver"), pool("Gold"));

    Fixture { config, cash, gem, crate_item, bomb }
}
