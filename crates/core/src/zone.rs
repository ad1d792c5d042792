//! Zone classification. Super zones are checked before safe zones because the
//! super interval is normally a multiple of the safe one.

use crate::catalog::WheelTier;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::types::ZoneKind;

pub fn classify_zone(zone_index: u32, config: &GameConfig) -> Result<ZoneKind, ConfigError> {
    let super_interval = nonzero(config.super_zone_interval, "super_zone_interval")?;
    let safe_interval = nonzero(config.safe_zone_interval, "safe_zone_interval")?;

    Ok(if zone_index % super_interval == 0 {
        ZoneKind::Super
    } else if zone_index % safe_interval == 0 {
        ZoneKind::Safe
    } else {
        ZoneKind::Normal
    })
}

pub fn tier_for_zone(zone_index: u32, config: &GameConfig) -> Result<&WheelTier, ConfigError> {
    classify_zone(zone_index, config).map(|kind| config.tier(kind))
}

fn nonzero(interval: u32, name: &'static str) -> Result<u32, ConfigError> {
    if interval == 0 { Err(ConfigError::ZeroInterval { interval: name }) } else { Ok(interval) }
}
