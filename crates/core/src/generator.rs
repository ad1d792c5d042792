//! Wheel filling: one optional bomb plus weighted draws, scaled by zone, then
//! shuffled so the bomb has no fixed position.

use rand_chacha::rand_core::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::{ConfigError, SampleError};
use crate::sampler::{self, Draw};
use crate::shuffle::shuffle;
use crate::types::{RuntimeSlice, ZoneKind};
use crate::zone::classify_zone;

/// Fixed wheel capacity.
pub const SLOT_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplingMode {
    #[default]
    Strict,
    /// Degenerate pools yield their first entry; counted in
    /// [`GeneratedWheel::fallback_draws`].
    FallbackToFirst,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedWheel {
    pub zone_index: u32,
    pub zone_kind: ZoneKind,
    pub tier_name: String,
    pub slices: Vec<RuntimeSlice>,
    pub fallback_draws: u32,
}

impl GeneratedWheel {
    pub fn bomb_count(&self) -> usize {
        self.slices.iter().filter(|slice| slice.is_bomb).count()
    }
}

/// `base * (1 + zone * multiplier)`, rounded half away from zero. Saturates
/// at the `u32` bounds.
pub fn scaled_amount(base_amount: u32, zone_index: u32, multiplier: f64) -> u32 {
    let factor = 1.0 + f64::from(zone_index) * multiplier;
    (f64::from(base_amount) * factor).round() as u32
}

pub fn generate<R: Rng + ?Sized>(
    zone_index: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<RuntimeSlice>, ConfigError> {
    generate_with(zone_index, config, rng, SamplingMode::Strict).map(|wheel| wheel.slices)
}

pub fn generate_with<R: Rng + ?Sized>(
    zone_index: u32,
    config: &GameConfig,
    rng: &mut R,
    mode: SamplingMode,
) -> Result<GeneratedWheel, ConfigError> {
    let zone_kind = classify_zone(zone_index, config)?;
    config.check_multiplier()?;
    let tier = config.tier(zone_kind);
    let pool_error = |source: SampleError| ConfigError::Pool { tier: tier.name.clone(), source };

    let mut slices = Vec::with_capacity(SLOT_COUNT);
    if tier.has_bomb {
        let bomb = tier
            .bomb_item
            .ok_or_else(|| ConfigError::MissingBombItem { tier: tier.name.clone() })?;
        slices.push(RuntimeSlice::bomb(bomb));
    }

    let mut fallback_draws = 0;
    while slices.len() < SLOT_COUNT {
        let entry = match mode {
            SamplingMode::Strict => {
                sampler::sample(&tier.potential_rewards, rng).map_err(pool_error)?
            }
            SamplingMode::FallbackToFirst => {
                match sampler::sample_or_first(&tier.potential_rewards, rng) {
                    Some(Draw::Weighted(entry)) => entry,
                    Some(Draw::Fallback { entry, .. }) => {
                        fallback_draws += 1;
                        entry
                    }
                    None => return Err(pool_error(SampleError::EmptyPool)),
                }
            }
        };
        let amount =
            scaled_amount(entry.base_amount, zone_index, config.amount_multiplier_per_zone);
        slices.push(RuntimeSlice::reward(entry.item, amount));
    }

    shuffle(&mut slices, rng);
    debug!(zone_index, tier = %tier.name, fallback_draws, "generated wheel");

    Ok(GeneratedWheel {
        zone_index,
        zone_kind,
        tier_name: tier.name.clone(),
        slices,
        fallback_draws,
    })
}
