use thiserror::Error;

use crate::config::GameConfig;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::session::{Session, SessionError, SessionPhase};

#[derive(Debug, PartialEq, Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedVersion(u16),
    #[error("journal was recorded against content {recorded:#018x}, loaded {loaded:#018x}")]
    ContentMismatch { recorded: u64, loaded: u64 },
    #[error("action #{seq} was rejected: {source}")]
    RejectedAction {
        seq: u64,
        #[source]
        source: SessionError,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_phase: SessionPhase,
    pub final_zone: u32,
    pub final_money: u32,
    pub final_spins: u64,
    pub final_snapshot_hash: u64,
}

/// Re-runs every journaled action against a fresh session.
pub fn replay_to_end(
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let loaded = config.content_hash();
    if journal.content_hash != loaded {
        return Err(ReplayError::ContentMismatch { recorded: journal.content_hash, loaded });
    }

    let mut session = Session::new(journal.seed, config, journal.rules);
    for record in &journal.actions {
        session
            .apply(record.action)
            .map_err(|source| ReplayError::RejectedAction { seq: record.seq, source })?;
    }

    Ok(ReplayResult {
        final_phase: session.phase(),
        final_zone: session.zone(),
        final_money: session.money(),
        final_spins: session.spins(),
        final_snapshot_hash: session.snapshot_hash(),
    })
}
