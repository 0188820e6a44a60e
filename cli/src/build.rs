use std::time::Instant;

use color_eyre::eyre::{bail, Result};
use human_repr::HumanDuration;
use spvbatch_core::BatchMode;
use tracing::info;

use crate::{job_from_args, print_failures, print_report, Build};

pub fn build(args: Build) -> Result<()> {
    let job = job_from_args(&args.batch)?;
    info!(
        "compiling {} shader(s) with {}",
        job.shaders.len(),
        job.compiler.display()
    );

    let start = Instant::now();
    let report = job.run(BatchMode::Compile);
    let elapsed = start.elapsed();

    print_failures(&report);
    print_report(&report);
    info!("finished in {}", elapsed.as_secs_f64().human_duration());

    if !report.is_success() {
        bail!(
            "{} of {} shader(s) failed to compile",
            report.failure_count(),
            report.len()
        );
    }

    Ok(())
}
