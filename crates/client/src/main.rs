//! Demo host: loads the bundled script and drives it at ~60Hz.

mod drill;

use std::sync::Arc;

use anyhow::Result;
use tokio::time::{self, Duration};

use drill::AdditionDrill;
use runtime::{ActionRegistry, Script, Sequencer};
use stage_core::{EmulatedSpeech, ObjectId, Prop, Stage, SystemClock, Vec2};

const DEMO_SCRIPT: &str = include_str!("../data/demo.json");
const FRAME_INTERVAL_MS: u64 = 16;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let clock = Arc::new(SystemClock);
    let mut stage = Stage::builder()
        .clock(clock.clone())
        .object("hero", Prop::new(Vec2::ZERO))
        .speech(EmulatedSpeech::new(clock))
        .exercises(AdditionDrill::new(10, 12))
        .build();

    let registry = ActionRegistry::with_builtins();
    let actions = Script::parse(DEMO_SCRIPT)?.build(&registry, &stage)?;

    let mut sequencer = Sequencer::new();
    sequencer.init(actions);
    sequencer.start(&mut stage)?;
    report(&sequencer);

    let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
    loop {
        tokio::select! {
            _ = frames.tick() => {
                sequencer.tick(&mut stage)?;
                report(&sequencer);
                if sequencer.finished() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(target: "client", "interrupted, abandoning run");
                break;
            }
        }
    }

    let hero = stage
        .object(&ObjectId::from("hero"))
        .map(|object| object.position());
    tracing::info!(
        target: "client",
        ticks = sequencer.resumptions(),
        hero = ?hero,
        "demo finished"
    );
    Ok(())
}

/// Surface the latest progress notes to the log.
fn report(sequencer: &Sequencer) {
    if let Some(step) = sequencer.last_step() {
        for note in step.notes() {
            tracing::info!(target: "client", "{note}");
        }
    }
}
