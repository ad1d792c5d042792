pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod config_file;
pub mod content;
pub mod error;
pub mod generator;
pub mod journal;
pub mod replay;
pub mod rng;
pub mod sampler;
pub mod session;
pub mod shuffle;
pub mod types;
pub mod zone;

#[cfg(test)]
mod test_support;

pub use aggregate::{compress, total_for};
pub use catalog::{RewardCatalog, RewardWeightEntry, SliceView, WheelTier};
pub use config::GameConfig;
pub use config_file::{ConfigFile, ConfigFileError, bundled_config, load_config_from_file};
pub use error::{ConfigError, SampleError};
pub use generator::{GeneratedWheel, SLOT_COUNT, SamplingMode, generate, generate_with};
pub use journal::{ActionRecord, InputJournal};
pub use replay::*;
pub use session::{
    Session, SessionAction, SessionError, SessionEvent, SessionPhase, SessionRules, SpinOutcome,
};
pub use types::*;
pub use zone::{classify_zone, tier_for_zone};
