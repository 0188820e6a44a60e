use color_eyre::eyre::{bail, Result};
use spvbatch_core::BatchMode;
use tracing::info;

use crate::{job_from_args, print_failures, print_report, Check};

pub fn check(args: Check) -> Result<()> {
    let job = job_from_args(&args.batch)?;
    info!(
        "validating {} shader(s) with {}",
        job.shaders.len(),
        job.compiler.display()
    );

    let report = job.run(BatchMode::Check);

    print_failures(&report);
    print_report(&report);

    if !report.is_success() {
        bail!(
            "{} of {} shader(s) failed validation",
            report.failure_count(),
            report.len()
        );
    }

    Ok(())
}
