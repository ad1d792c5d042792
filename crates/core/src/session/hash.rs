//! Stable snapshot hashing for replay verification.
//! Item identities are hashed by their string id, so the value does not depend
//! on slotmap key allocation.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Session<'_> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.spins);
        hasher.write_u32(self.zone);
        hasher.write_u32(self.money);
        hasher.write_u8(match self.phase {
            SessionPhase::Idle => 0,
            SessionPhase::WheelReady => 1,
            SessionPhase::Spinning => 2,
            SessionPhase::ResolvedWin => 3,
            SessionPhase::ResolvedLose => 4,
            SessionPhase::Claiming => 5,
        });
        hasher.write_u8(match self.zone_kind {
            ZoneKind::Normal => 0,
            ZoneKind::Safe => 1,
            ZoneKind::Super => 2,
        });
        match self.landing {
            Some(index) => hasher.write_u64(index as u64 + 1),
            None => hasher.write_u64(0),
        }
        hasher.write_usize(self.wheel.len());
        for slice in &self.wheel {
            self.write_slice(&mut hasher, slice);
        }
        hasher.write_usize(self.collected.len());
        for slice in &self.collected {
            self.write_slice(&mut hasher, slice);
        }
        hasher.finish()
    }

    fn write_slice(&self, hasher: &mut Xxh3, slice: &RuntimeSlice) {
        let id = self.config.catalog.get(slice.item).map_or("", |item| item.id.as_str());
        hasher.write(id.as_bytes());
        hasher.write_u8(0xff);
        hasher.write_u32(slice.amount);
        hasher.write_u8(u8::from(slice.is_bomb));
    }
}
