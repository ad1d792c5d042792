use crate::catalog::{RewardCatalog, WheelTier};
use crate::config::GameConfig;
use crate::types::{Rarity, RewardCategory, RewardItem};

pub mod keys {
    pub const CASH: &str = "cash";
    pub const GOLD: &str = "gold";

    pub const POINT_RIFLE: &str = "point_rifle";
    pub const POINT_ARMOR: &str = "point_armor";

    pub const WEAPON_SHOTGUN_T1: &str = "weapon_shotgun_t1";
    pub const WEAPON_SMG_T2: &str = "weapon_smg_t2";
    pub const WEAPON_RIFLE_T3: &str = "weapon_rifle_t3";

    pub const COSMETIC_GLASSES: &str = "cosmetic_glasses";
    pub const COSMETIC_HAT: &str = "cosmetic_hat";

    pub const CONSUMABLE_HEALTHSHOT: &str = "consumable_healthshot";
    pub const CONSUMABLE_GRENADE: &str = "consumable_grenade";

    pub const CHEST_SMALL: &str = "chest_small";
    pub const CHEST_SILVER: &str = "chest_silver";
    pub const CHEST_BIG: &str = "chest_big";

    pub const BOMB: &str = "bomb";
}

const ITEMS: &[(&str, &str, RewardCategory, Rarity)] = &[
    (keys::CASH, "Cash", RewardCategory::Currency, Rarity::Common),
    (keys::GOLD, "Gold", RewardCategory::Currency, Rarity::Rare),
    (keys::POINT_RIFLE, "Rifle Point", RewardCategory::UpgradePoint, Rarity::Common),
    (keys::POINT_ARMOR, "Armor Point", RewardCategory::UpgradePoint, Rarity::Common),
    (keys::WEAPON_SHOTGUN_T1, "M3 Super Shotgun", RewardCategory::Weapon, Rarity::Rare),
    (keys::WEAPON_SMG_T2, "MP5 SMG", RewardCategory::Weapon, Rarity::Epic),
    (keys::WEAPON_RIFLE_T3, "AK-47 Rifle", RewardCategory::Weapon, Rarity::Legendary),
    (keys::COSMETIC_GLASSES, "Tactical Glasses", RewardCategory::Cosmetic, Rarity::Rare),
    (keys::COSMETIC_HAT, "Operator Cap", RewardCategory::Cosmetic, Rarity::Epic),
    (keys::CONSUMABLE_HEALTHSHOT, "Healthshot", RewardCategory::Consumable, Rarity::Common),
    (keys::CONSUMABLE_GRENADE, "Grenade", RewardCategory::Consumable, Rarity::Common),
    (keys::CHEST_SMALL, "Small Chest", RewardCategory::Chest, Rarity::Rare),
    (keys::CHEST_SILVER, "Silver Chest", RewardCategory::Chest, Rarity::Epic),
    (keys::CHEST_BIG, "Big Chest", RewardCategory::Chest, Rarity::Legendary),
    (keys::BOMB, "Bomb", RewardCategory::Bomb, Rarity::Common),
];

/// (item id, base amount, weight) per tier.
const BRONZE_POOL: &[(&str, u32, f64)] = &[
    (keys::CASH, 100, 40.0),
    (keys::POINT_RIFLE, 5, 25.0),
    (keys::POINT_ARMOR, 5, 20.0),
    (keys::CONSUMABLE_HEALTHSHOT, 1, 10.0),
    (keys::WEAPON_SHOTGUN_T1, 1, 5.0),
];

const SILVER_POOL: &[(&str, u32, f64)] = &[
    (keys::CASH, 250, 30.0),
    (keys::GOLD, 10, 20.0),
    (keys::CHEST_SMALL, 1, 20.0),
    (keys::COSMETIC_GLASSES, 1, 15.0),
    (keys::WEAPON_SMG_T2, 1, 10.0),
    (keys::CONSUMABLE_GRENADE, 2, 5.0),
];

const GOLD_POOL: &[(&str, u32, f64)] = &[
    (keys::CASH, 1000, 25.0),
    (keys::GOLD, 50, 25.0),
    (keys::CHEST_BIG, 1, 20.0),
    (keys::CHEST_SILVER, 1, 15.0),
    (keys::COSMETIC_HAT, 1, 10.0),
    (keys::WEAPON_RIFLE_T3, 1, 5.0),
];

impl GameConfig {
    /// Bundled content: Bronze wheels carry the bomb, safe and super zones don't.
    pub fn build_default() -> Self {
        let mut catalog = RewardCatalog::new();
        for &(id, name, category, rarity) in ITEMS {
            catalog.register(RewardItem::new(id, name, category, rarity));
        }

        let tier = |name: &str, pool: &[(&str, u32, f64)]| {
            pool.iter().fold(WheelTier::new(name), |tier, &(id, base_amount, weight)| {
                match catalog.key_of(id) {
                    Some(item) => tier.with_reward(item, base_amount, weight),
                    None => tier,
                }
            })
        };
        let mut bronze = tier("Bronze", BRONZE_POOL);
        if let Some(bomb) = catalog.key_of(keys::BOMB) {
            bronze = bronze.with_bomb(bomb);
        }
        let silver = tier("Silver", SILVER_POOL);
        let gold = tier("Gold", GOLD_POOL);

        GameConfig::new(catalog, bronze, silver, gold)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::build_default()
    }
}
