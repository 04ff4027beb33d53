use anyhow::Result;
use minstd_random::{MinStd, MinStdRng, RandomSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("minstd_random=info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

fn main() -> Result<()> {
    init_logger()?;

    let mut rng = MinStd::try_new(1)?;
    let first = rng.next_raw();
    let second = rng.next_raw();
    let third = rng.next_raw();
    info!(first, second, third, "seed 1 reference draws");

    let die = rng.next_int(1, 6);
    let unit = rng.next_float_range(1.0, 0.0);
    let coin = rng.next_bool();
    info!(die, unit, coin, seed = rng.seed(), "derived draws");

    let mut adapter = MinStdRng::from(MinStd::from_time());
    let seed = adapter.generator().seed();
    let index = adapter.next_bounded(100);
    info!(seed, index, "time-seeded draw in [0, 100)");

    Ok(())
}
