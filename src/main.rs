//! Draws the currency automaton and prints five generated amounts.

use anyhow::{Context, Result};
use currency_dfa::currency::currency_dfa;
use currency_dfa::generator::{collect_samples, RandomWalker, RngChoices, SampleConfig};
use currency_dfa::render::{GraphvizRenderer, RenderConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let dfa = currency_dfa();

    GraphvizRenderer::new(RenderConfig::default())
        .render(&dfa)
        .context("Failed to render the currency automaton")?;

    let mut walker = RandomWalker::new(RngChoices::from_thread_rng());
    let samples = collect_samples(&mut walker, &dfa, &SampleConfig::default())?;

    for sample in samples {
        println!("{sample}");
    }

    Ok(())
}
