//! CPI command: forecast the built-in yearly CPI series with a preset order.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use arcast_burg::{BurgSpec, forecast};
use arcast_io::write_report;

use crate::builtin::{CPI, CPI_FIRST_YEAR, cpi_preset_order};
use crate::cli::CpiArgs;
use crate::convert;

/// Run the CPI preset forecast.
pub fn run(args: CpiArgs) -> Result<()> {
    let _cmd = info_span!("cpi", variant = args.variant).entered();

    let order = cpi_preset_order(args.variant)?;
    let predictions = cpi_forecast(order, args.steps)?;

    let first_year = usize::from(CPI_FIRST_YEAR) + CPI.len();
    info!(
        order,
        from = first_year,
        to = first_year + predictions.len().saturating_sub(1),
        "CPI forecast complete"
    );

    println!("{}", convert::format_values(&predictions));

    if let Some(path) = &args.output {
        let fit = BurgSpec::new(order)
            .fit(&CPI)
            .with_context(|| format!("AR({order}) estimation failed for the CPI series"))?;
        let report = convert::build_report("cpi", &fit).with_forecast(predictions);
        write_report(path, &report)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    Ok(())
}

fn cpi_forecast(order: usize, steps: usize) -> Result<Vec<f64>> {
    forecast(&CPI, order, steps).with_context(|| format!("AR({order}) CPI forecast failed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn every_preset_produces_twenty_finite_values() {
        for variant in 1..=4 {
            let order = cpi_preset_order(variant).unwrap();
            let out = cpi_forecast(order, crate::builtin::CPI_STEPS).unwrap();
            assert_eq!(out.len(), 20);
            assert!(out.iter().all(|v| v.is_finite()), "variant {variant}");
        }
    }

    #[test]
    fn ar5_first_prediction() {
        let out = cpi_forecast(5, 1).unwrap();
        assert_abs_diff_eq!(out[0], 1.305218331823127, epsilon = 1e-9);
    }
}
