//! Immutable reward reference data: the item arena and the weighted tier pools
//! that point into it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::ConfigError;
use crate::types::{ItemKey, Rarity, RewardCategory, RewardItem, RuntimeSlice};

#[derive(Clone, Debug, Default)]
pub struct RewardCatalog {
    items: SlotMap<ItemKey, RewardItem>,
    by_id: BTreeMap<String, ItemKey>,
}

impl RewardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: RewardItem) -> Result<ItemKey, ConfigError> {
        if self.by_id.contains_key(&item.id) {
            return Err(ConfigError::DuplicateItem { id: item.id });
        }
        Ok(self.register(item))
    }

    /// Insert or replace by id. Only for content whose ids are known unique.
    pub(crate) fn register(&mut self, item: RewardItem) -> ItemKey {
        if let Some(&key) = self.by_id.get(&item.id) {
            self.items[key] = item;
            return key;
        }
        let id = item.id.clone();
        let key = self.items.insert(item);
        self.by_id.insert(id, key);
        key
    }

    pub fn get(&self, key: ItemKey) -> Option<&RewardItem> {
        self.items.get(key)
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.items.contains_key(key)
    }

    pub fn key_of(&self, id: &str) -> Option<ItemKey> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &RewardItem)> {
        self.by_id.values().filter_map(|&key| self.items.get(key).map(|item| (key, item)))
    }

    /// Display-ready rows for a wheel or a claim summary. Slices whose item is
    /// not in this catalog are skipped.
    pub fn describe(&self, slices: &[RuntimeSlice]) -> Vec<SliceView> {
        slices
            .iter()
            .filter_map(|slice| {
                let item = self.items.get(slice.item)?;
                Some(SliceView {
                    id: item.id.clone(),
                    display_name: item.display_name.clone(),
                    category: item.category,
                    rarity: item.rarity,
                    amount: slice.amount,
                    is_bomb: slice.is_bomb,
                })
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceView {
    pub id: String,
    pub display_name: String,
    pub category: RewardCategory,
    pub rarity: Rarity,
    pub amount: u32,
    pub is_bomb: bool,
}

/// A pool candidate: the item, its quantity at zone 0 and its draw weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardWeightEntry {
    pub item: ItemKey,
    pub base_amount: u32,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelTier {
    pub name: String,
    pub has_bomb: bool,
    pub bomb_item: Option<ItemKey>,
    pub potential_rewards: Vec<RewardWeightEntry>,
}

impl WheelTier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            has_bomb: false,
            bomb_item: None,
            potential_rewards: Vec::new(),
        }
    }

    pub fn with_bomb(mut self, bomb_item: ItemKey) -> Self {
        self.has_bomb = true;
        self.bomb_item = Some(bomb_item);
        self
    }

    pub fn with_reward(mut self, item: ItemKey, base_amount: u32, weight: f64) -> Self {
        self.potential_rewards.push(RewardWeightEntry { item, base_amount, weight });
        self
    }
}
