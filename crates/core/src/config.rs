//! Top-level wheel configuration. Built once, read-only afterwards, and passed
//! explicitly to every operation that needs it.

use std::hash::Hasher;

use tracing::warn;
use xxhash_rust::xxh3::Xxh3;

use crate::catalog::{RewardCatalog, WheelTier};
use crate::error::ConfigError;
use crate::sampler;
use crate::types::{ItemKey, ZoneKind};

pub const DEFAULT_SAFE_ZONE_INTERVAL: u32 = 5;
pub const DEFAULT_SUPER_ZONE_INTERVAL: u32 = 30;
pub const DEFAULT_AMOUNT_MULTIPLIER_PER_ZONE: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub catalog: RewardCatalog,
    pub bronze: WheelTier,
    pub silver: WheelTier,
    pub gold: WheelTier,
    pub safe_zone_interval: u32,
    pub super_zone_interval: u32,
    /// Fractional quantity growth per zone; 0.1 means +10% of the base per zone.
    pub amount_multiplier_per_zone: f64,
}

impl GameConfig {
    pub fn new(
        catalog: RewardCatalog,
        bronze: WheelTier,
        silver: WheelTier,
        gold: WheelTier,
    ) -> Self {
        Self {
            catalog,
            bronze,
            silver,
            gold,
            safe_zone_interval: DEFAULT_SAFE_ZONE_INTERVAL,
            super_zone_interval: DEFAULT_SUPER_ZONE_INTERVAL,
            amount_multiplier_per_zone: DEFAULT_AMOUNT_MULTIPLIER_PER_ZONE,
        }
    }

    pub fn tier(&self, kind: ZoneKind) -> &WheelTier {
        match kind {
            ZoneKind::Normal => &self.bronze,
            ZoneKind::Safe => &self.silver,
            ZoneKind::Super => &self.gold,
        }
    }

    pub fn tiers(&self) -> [&WheelTier; 3] {
        [&self.bronze, &self.silver, &self.gold]
    }

    /// Checks everything the generator would otherwise trip over at use time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.safe_zone_interval == 0 {
            return Err(ConfigError::ZeroInterval { interval: "safe_zone_interval" });
        }
        if self.super_zone_interval == 0 {
            return Err(ConfigError::ZeroInterval { interval: "super_zone_interval" });
        }
        self.check_multiplier()?;
        if self.super_zone_interval % self.safe_zone_interval != 0 {
            warn!(
                safe_interval = self.safe_zone_interval,
                super_interval = self.super_zone_interval,
                "super zone interval is not a multiple of the safe zone interval"
            );
        }

        for tier in self.tiers() {
            self.validate_tier(tier)?;
        }
        Ok(())
    }

    /// Finite and non-negative; anything else would silently zero every amount.
    pub fn check_multiplier(&self) -> Result<(), ConfigError> {
        let multiplier = self.amount_multiplier_per_zone;
        if multiplier.is_finite() && multiplier >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidMultiplier(multiplier))
        }
    }

    fn validate_tier(&self, tier: &WheelTier) -> Result<(), ConfigError> {
        sampler::total_weight(&tier.potential_rewards)
            .map_err(|source| ConfigError::Pool { tier: tier.name.clone(), source })?;

        if tier.has_bomb {
            let bomb = tier
                .bomb_item
                .ok_or_else(|| ConfigError::MissingBombItem { tier: tier.name.clone() })?;
            self.require_item(tier, bomb, None)?;
        }
        for (index, entry) in tier.potential_rewards.iter().enumerate() {
            self.require_item(tier, entry.item, Some(index))?;
        }
        Ok(())
    }

    fn require_item(
        &self,
        tier: &WheelTier,
        key: ItemKey,
        entry: Option<usize>,
    ) -> Result<(), ConfigError> {
        if self.catalog.contains(key) {
            Ok(())
        } else {
            Err(ConfigError::DanglingItem { tier: tier.name.clone(), entry })
        }
    }

    /// Stable hash of everything that influences generation. Items are hashed
    /// by id so two configs built from the same content agree.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.safe_zone_interval);
        hasher.write_u32(self.super_zone_interval);
        hasher.write_u64(self.amount_multiplier_per_zone.to_bits());
        for tier in self.tiers() {
            hasher.write(tier.name.as_bytes());
            hasher.write_u8(0xFF);
            hasher.write_u8(u8::from(tier.has_bomb));
            self.write_item(&mut hasher, tier.bomb_item);
            hasher.write_usize(tier.potential_rewards.len());
            for entry in &tier.potential_rewards {
                self.write_item(&mut hasher, Some(entry.item));
                hasher.write_u32(entry.base_amount);
                hasher.write_u64(entry.weight.to_bits());
            }
        }
        hasher.finish()
    }

    fn write_item(&self, hasher: &mut Xxh3, key: Option<ItemKey>) {
        match key.and_then(|key| self.catalog.get(key)) {
            Some(item) => {
                hasher.write_u8(1);
                hasher.write(item.id.as_bytes());
                hasher.write_u8(0xFF);
            }
            None => hasher.write_u8(0),
        }
    }
}
