//! Estimate command: fit AR coefficients to a series and print them.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use arcast_burg::BurgSpec;
use arcast_io::write_report;

use crate::cli::EstimateArgs;
use crate::convert;

/// Run the estimation pipeline.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();

    let config = convert::load_config(args.source.config.as_deref())?;
    let series = convert::resolve_series(&args.source, &config)?;

    let order = args
        .order
        .or(config.model.order)
        .ok_or_else(|| anyhow!("no model order: pass --order or set [model].order in config"))?;

    let fit = BurgSpec::new(order)
        .fit(series.values())
        .with_context(|| format!("AR({order}) estimation failed for {}", series.name()))?;
    info!(
        order,
        n_obs = fit.n_obs(),
        error_power = fit.error_power(),
        "model fitted"
    );

    println!("{}", convert::format_values(fit.coefficients()));

    if let Some(path) = &args.output {
        let report = convert::build_report(series.name(), &fit);
        write_report(path, &report)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    Ok(())
}
