use crate::config::{GenerateConfig, RngKind, ValidateConfig};
use anyhow::anyhow;
use fast_cuid2::{Cuid2, Cuid2Generator, OsRandom, RandSource, ThreadRandom, TimeSource, WallClock};
use std::{io::Write, thread::scope};

/// Generates `count` identifiers, split as evenly as possible across
/// `threads` scoped threads.
///
/// The first error from any thread is returned; identifiers produced before
/// it are discarded.
pub fn generate_ids<T, R>(
    generator: &Cuid2Generator<T, R>,
    count: usize,
    threads: usize,
) -> anyhow::Result<Vec<Cuid2>>
where
    T: TimeSource + Sync,
    R: RandSource + Sync,
{
    let threads = threads.clamp(1, count.max(1));
    let base = count / threads;
    let extra = count % threads;

    scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let share = base + usize::from(i < extra);
                s.spawn(move || {
                    (0..share)
                        .map(|_| generator.try_next_id())
                        .collect::<fast_cuid2::Result<Vec<_>>>()
                })
            })
            .collect();

        let mut ids = Vec::with_capacity(count);
        for handle in handles {
            let chunk = handle
                .join()
                .map_err(|_| anyhow!("generation thread panicked"))??;
            ids.extend(chunk);
        }
        Ok(ids)
    })
}

/// Runs `cuid2 generate`, writing one identifier per line.
pub fn run_generate(config: &GenerateConfig, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(
        count = config.count,
        threads = config.threads,
        rng = ?config.rng,
        "generating identifiers"
    );

    let ids = match config.rng {
        RngKind::Os => generate_ids(
            &Cuid2Generator::new(WallClock, OsRandom),
            config.count,
            config.threads,
        ),
        RngKind::Thread => generate_ids(
            &Cuid2Generator::new(WallClock, ThreadRandom),
            config.count,
            config.threads,
        ),
    }
    .inspect_err(|e| tracing::error!(error = %e, "generation failed"))?;

    for id in &ids {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}

/// Runs `cuid2 validate`. Returns `true` if every candidate is valid.
pub fn run_validate(config: &ValidateConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut all_valid = true;

    for candidate in &config.ids {
        let verdict = match fast_cuid2::validate(candidate) {
            Ok(()) => "valid",
            Err(reason) => {
                tracing::info!(candidate = %candidate, %reason, "invalid identifier");
                all_valid = false;
                "invalid"
            }
        };
        if !config.quiet {
            writeln!(out, "{candidate}\t{verdict}")?;
        }
    }
    out.flush()?;

    Ok(all_valid)
}
