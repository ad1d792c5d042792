use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use wheel_core::{
    GameConfig, SLOT_COUNT, Session, SessionAction, SessionPhase, SessionRules, ZoneKind,
    replay_to_end,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    steps: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} steps...", args.seed, args.steps);
    let config = GameConfig::build_default();
    let mut session = Session::new(args.seed, &config, SessionRules::default());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.steps {
        let action = match session.phase() {
            SessionPhase::Idle => SessionAction::Start,
            SessionPhase::WheelReady => SessionAction::Spin,
            SessionPhase::Spinning => SessionAction::ResolveSpin,
            SessionPhase::ResolvedWin => {
                let options =
                    [SessionAction::Continue, SessionAction::Continue, SessionAction::ExitAndClaim];
                choose(&mut rng, &options) // Bias to keep going
            }
            SessionPhase::Claiming => SessionAction::FinishClaim,
            SessionPhase::ResolvedLose if session.money() < session.rules().revive_cost => {
                SessionAction::GiveUp
            }
            SessionPhase::ResolvedLose => {
                choose(&mut rng, &[SessionAction::Revive, SessionAction::GiveUp])
            }
        };
        session.apply(action)?;

        // Assert invariants
        if session.phase() != SessionPhase::Idle {
            assert_eq!(session.wheel().len(), SLOT_COUNT, "Invariant failed: wheel size");
            let bombs = session.wheel().iter().filter(|slice| slice.is_bomb).count();
            let expected = usize::from(session.zone_kind() == ZoneKind::Normal);
            assert_eq!(bombs, expected, "Invariant failed: bomb count at zone {}", session.zone());
        }
        assert!(
            session.collected().iter().all(|slice| !slice.is_bomb),
            "Invariant failed: bomb collected"
        );
    }

    let replayed = replay_to_end(&config, session.journal())?;
    if replayed.final_snapshot_hash != session.snapshot_hash() {
        bail!("replay diverged from the live session");
    }

    println!(
        "Fuzzing completed successfully at zone {} after {} spins.",
        session.zone(),
        session.spins()
    );
    Ok(())
}
