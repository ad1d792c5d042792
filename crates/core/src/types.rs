use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identity of a catalog item. Two slices reward the same thing exactly
    /// when their keys are equal.
    pub struct ItemKey;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardCategory {
    Currency,
    UpgradePoint,
    Weapon,
    Cosmetic,
    Consumable,
    Chest,
    Bomb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub display_name: String,
    pub category: RewardCategory,
    pub rarity: Rarity,
}

impl RewardItem {
    pub fn new(id: &str, display_name: &str, category: RewardCategory, rarity: Rarity) -> Self {
        Self { id: id.to_string(), display_name: display_name.to_string(), category, rarity }
    }
}

/// One wheel position: what it awards and how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeSlice {
    pub item: ItemKey,
    pub amount: u32,
    pub is_bomb: bool,
}

impl RuntimeSlice {
    pub fn reward(item: ItemKey, amount: u32) -> Self {
        Self { item, amount, is_bomb: false }
    }

    pub fn bomb(item: ItemKey) -> Self {
        Self { item, amount: 1, is_bomb: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Normal,
    Safe,
    Super,
}

impl ZoneKind {
    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::Normal => "ZONE",
            ZoneKind::Safe => "SAFE ZONE",
            ZoneKind::Super => "SUPER ZONE",
        }
    }
}
