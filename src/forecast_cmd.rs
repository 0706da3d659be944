//! Forecast command: extend a series by repeated re-estimation.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use arcast_burg::{BurgSpec, forecast};
use arcast_io::write_report;

use crate::cli::ForecastArgs;
use crate::convert;

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    let config = convert::load_config(args.source.config.as_deref())?;
    let series = convert::resolve_series(&args.source, &config)?;

    let order = args
        .order
        .or(config.model.order)
        .ok_or_else(|| anyhow!("no model order: pass --order or set [model].order in config"))?;
    let steps = args.steps.unwrap_or(config.model.steps);

    let predictions = forecast(series.values(), order, steps)
        .with_context(|| format!("AR({order}) forecast failed for {}", series.name()))?;
    info!(order, steps, n_obs = series.len(), "forecast complete");

    println!("{}", convert::format_values(&predictions));

    if let Some(path) = &args.output {
        // Report coefficients of the model fitted on the observed data only.
        let fit = BurgSpec::new(order)
            .fit(series.values())
            .with_context(|| format!("AR({order}) estimation failed for {}", series.name()))?;
        let report = convert::build_report(series.name(), &fit).with_forecast(predictions);
        write_report(path, &report)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    Ok(())
}
