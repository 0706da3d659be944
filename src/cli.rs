use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Burg autoregressive estimation and forecasting.
#[derive(Parser)]
#[command(
    name = "arcast",
    version,
    about = "Burg autoregressive estimation and iterative forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate AR coefficients of a series.
    Estimate(EstimateArgs),
    /// Forecast a series by repeated re-estimation.
    Forecast(ForecastArgs),
    /// Forecast the built-in yearly CPI series with a preset order.
    Cpi(CpiArgs),
}

/// Where the input series comes from.
#[derive(clap::Args, Debug, Default)]
pub struct SourceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Column holding the series: header name or zero-based index.
    #[arg(long)]
    pub column: Option<String>,

    /// Inline series, e.g. "3.3, 8.5, 7.5".
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Treat the first CSV row as data.
    #[arg(long)]
    pub no_headers: bool,

    /// CSV field delimiter.
    #[arg(long)]
    pub delimiter: Option<char>,
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// AR model order.
    #[arg(short = 'p', long)]
    pub order: Option<usize>,

    /// Path for a JSON report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// AR model order.
    #[arg(short = 'p', long)]
    pub order: Option<usize>,

    /// Number of values to predict.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Path for a JSON report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `cpi` subcommand.
#[derive(clap::Args)]
pub struct CpiArgs {
    /// Preset: 1 = AR(18), 2 = AR(15), 3 = AR(10), 4 = AR(5).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub variant: u8,

    /// Number of values to predict.
    #[arg(short = 'n', long, default_value_t = crate::builtin::CPI_STEPS)]
    pub steps: usize,

    /// Path for a JSON report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_forecast_with_inline_values() {
        let cli = Cli::parse_from([
            "arcast", "forecast", "--values", "-1, 2, 3", "-p", "1", "-n", "4",
        ]);
        let Command::Forecast(args) = cli.command else {
            panic!("expected forecast subcommand");
        };
        assert_eq!(args.source.values.as_deref(), Some("-1, 2, 3"));
        assert_eq!(args.order, Some(1));
        assert_eq!(args.steps, Some(4));
    }

    #[test]
    fn cpi_variant_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["arcast", "cpi", "--variant", "5"]).is_err());
    }

    #[test]
    fn input_conflicts_with_values() {
        let res = Cli::try_parse_from([
            "arcast", "estimate", "--input", "a.csv", "--values", "1,2", "-p", "1",
        ]);
        assert!(res.is_err());
    }
}
