//! Run orchestration around the pure generator.
//!
//! A session walks an explicit state machine:
//!
//! ```text
//! Idle -> WheelReady -> Spinning -> ResolvedWin  -> WheelReady (continue, zone + 1)
//!                                              \-> Claiming -> WheelReady (reset)
//!                                -> ResolvedLose -> WheelReady (revive, zone + 1)
//!                                              \-> WheelReady (give up, reset)
//! ```
//!
//! Presentation callbacks (spin animation finished, claim cards shown) map onto
//! single method calls. The session owns the run's random stream, counters and
//! collected-rewards accumulator; the configuration is only borrowed.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::aggregate::compress;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::generator::{SamplingMode, generate_with};
use crate::journal::InputJournal;
use crate::rng::uniform_index;
use crate::types::{RuntimeSlice, ZoneKind};

mod hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    pub starting_zone: u32,
    pub starting_money: u32,
    pub revive_cost: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self { starting_zone: 1, starting_money: 5000, revive_cost: 100 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    WheelReady,
    Spinning,
    ResolvedWin,
    ResolvedLose,
    Claiming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionAction {
    Start,
    Spin,
    ResolveSpin,
    Continue,
    ExitAndClaim,
    FinishClaim,
    Revive,
    GiveUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinOutcome {
    Win(RuntimeSlice),
    Lose(RuntimeSlice),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    WheelFilled { zone: u32, kind: ZoneKind },
    Landed { index: usize },
    Won { slice: RuntimeSlice },
    Exploded { zone: u32 },
    Revived { cost: u32 },
    Claimed { distinct_items: usize },
    Reset,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot {action:?} while {phase:?}")]
    InvalidTransition { phase: SessionPhase, action: SessionAction },
    #[error("revive costs {needed} but only {available} is available")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct Session<'c> {
    seed: u64,
    rng: ChaCha8Rng,
    config: &'c GameConfig,
    rules: SessionRules,
    phase: SessionPhase,
    zone: u32,
    zone_kind: ZoneKind,
    money: u32,
    wheel: Vec<RuntimeSlice>,
    landing: Option<usize>,
    collected: Vec<RuntimeSlice>,
    spins: u64,
    log: Vec<SessionEvent>,
    journal: InputJournal,
}

impl<'c> Session<'c> {
    pub fn new(seed: u64, config: &'c GameConfig, rules: SessionRules) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            rules,
            phase: SessionPhase::Idle,
            zone: rules.starting_zone,
            zone_kind: ZoneKind::Normal,
            money: rules.starting_money,
            wheel: Vec::new(),
            landing: None,
            collected: Vec::new(),
            spins: 0,
            log: Vec::new(),
            journal: InputJournal::new(seed, config.content_hash(), rules),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &'c GameConfig {
        self.config
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn zone(&self) -> u32 {
        self.zone
    }

    pub fn zone_kind(&self) -> ZoneKind {
        self.zone_kind
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn wheel(&self) -> &[RuntimeSlice] {
        &self.wheel
    }

    /// Slot chosen by the last spin, while it is still on screen.
    pub fn landing(&self) -> Option<usize> {
        self.landing
    }

    pub fn collected(&self) -> &[RuntimeSlice] {
        &self.collected
    }

    pub fn spins(&self) -> u64 {
        self.spins
    }

    pub fn log(&self) -> &[SessionEvent] {
        &self.log
    }

    /// Every accepted action so far, replayable with [`crate::replay::replay_to_end`].
    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn apply(&mut self, action: SessionAction) -> Result<(), SessionError> {
        match action {
            SessionAction::Start => self.start(),
            SessionAction::Spin => self.spin().map(drop),
            SessionAction::ResolveSpin => self.resolve_spin().map(drop),
            SessionAction::Continue => self.continue_run(),
            SessionAction::ExitAndClaim => self.exit_and_claim().map(drop),
            SessionAction::FinishClaim => self.finish_claim(),
            SessionAction::Revive => self.revive(),
            SessionAction::GiveUp => self.give_up(),
        }
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Idle, SessionAction::Start)?;
        self.reset_run()?;
        self.accept(SessionAction::Start);
        Ok(())
    }

    /// Picks the landing slot uniformly; the result is revealed by
    /// [`Session::resolve_spin`] once the presentation has finished spinning.
    pub fn spin(&mut self) -> Result<usize, SessionError> {
        self.expect_phase(SessionPhase::WheelReady, SessionAction::Spin)?;
        let index = uniform_index(&mut self.rng, self.wheel.len());
        self.landing = Some(index);
        self.spins += 1;
        self.log.push(SessionEvent::Landed { index });
        self.set_phase(SessionPhase::Spinning);
        self.accept(SessionAction::Spin);
        Ok(index)
    }

    pub fn resolve_spin(&mut self) -> Result<SpinOutcome, SessionError> {
        self.expect_phase(SessionPhase::Spinning, SessionAction::ResolveSpin)?;
        let slice = match self.landing.and_then(|index| self.wheel.get(index)) {
            Some(&slice) => slice,
            None => {
                return Err(SessionError::InvalidTransition {
                    phase: self.phase,
                    action: SessionAction::ResolveSpin,
                });
            }
        };

        let outcome = if slice.is_bomb {
            self.log.push(SessionEvent::Exploded { zone: self.zone });
            self.set_phase(SessionPhase::ResolvedLose);
            SpinOutcome::Lose(slice)
        } else {
            self.collected.push(slice);
            self.log.push(SessionEvent::Won { slice });
            self.set_phase(SessionPhase::ResolvedWin);
            SpinOutcome::Win(slice)
        };
        self.accept(SessionAction::ResolveSpin);
        Ok(outcome)
    }

    pub fn continue_run(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ResolvedWin, SessionAction::Continue)?;
        self.advance_zone()?;
        self.accept(SessionAction::Continue);
        Ok(())
    }

    /// Ends a winning run and returns the compressed claim.
    pub fn exit_and_claim(&mut self) -> Result<Vec<RuntimeSlice>, SessionError> {
        self.expect_phase(SessionPhase::ResolvedWin, SessionAction::ExitAndClaim)?;
        let claim = compress(&self.collected);
        self.log.push(SessionEvent::Claimed { distinct_items: claim.len() });
        self.landing = None;
        self.set_phase(SessionPhase::Claiming);
        self.accept(SessionAction::ExitAndClaim);
        Ok(claim)
    }

    pub fn finish_claim(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Claiming, SessionAction::FinishClaim)?;
        self.reset_run()?;
        self.accept(SessionAction::FinishClaim);
        Ok(())
    }

    /// Pays the revive cost and moves on to the next zone with the run intact.
    pub fn revive(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ResolvedLose, SessionAction::Revive)?;
        let cost = self.rules.revive_cost;
        if self.money < cost {
            return Err(SessionError::InsufficientFunds { needed: cost, available: self.money });
        }
        self.advance_zone()?;
        self.money -= cost;
        self.log.push(SessionEvent::Revived { cost });
        self.accept(SessionAction::Revive);
        Ok(())
    }

    pub fn give_up(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ResolvedLose, SessionAction::GiveUp)?;
        self.reset_run()?;
        self.accept(SessionAction::GiveUp);
        Ok(())
    }

    fn expect_phase(
        &self,
        expected: SessionPhase,
        action: SessionAction,
    ) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { phase: self.phase, action })
        }
    }

    fn reset_run(&mut self) -> Result<(), SessionError> {
        self.fill_wheel(self.rules.starting_zone)?;
        self.collected.clear();
        self.log.push(SessionEvent::Reset);
        Ok(())
    }

    fn advance_zone(&mut self) -> Result<(), SessionError> {
        self.fill_wheel(self.zone.saturating_add(1))
    }

    /// Generates first so a configuration error leaves the session untouched.
    fn fill_wheel(&mut self, zone: u32) -> Result<(), SessionError> {
        let generated = generate_with(zone, self.config, &mut self.rng, SamplingMode::Strict)?;
        self.zone = zone;
        self.zone_kind = generated.zone_kind;
        self.wheel = generated.slices;
        self.landing = None;
        self.log.push(SessionEvent::WheelFilled { zone, kind: generated.zone_kind });
        self.set_phase(SessionPhase::WheelReady);
        Ok(())
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        debug!(from = ?self.phase, to = ?phase, zone = self.zone, "session phase change");
        self.phase = phase;
    }

    fn accept(&mut self, action: SessionAction) {
        self.journal.append(action);
    }
}
