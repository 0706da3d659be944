//! Built-in yearly CPI series and its forecast presets.

use anyhow::{Result, bail};

/// Yearly CPI % increase in Slovakia, 2002 to 2020.
pub const CPI: [f64; 19] = [
    3.30, 8.50, 7.50, 2.70, 4.50, 2.80, 4.60, 1.60, 1.0, 3.90, 3.60, 1.40, -0.1, -0.3, -0.5, 1.3,
    2.5, 2.7, 1.9,
];

/// First year covered by [`CPI`].
pub const CPI_FIRST_YEAR: u16 = 2002;

/// Default number of predicted years.
pub const CPI_STEPS: usize = 20;

/// AR order of a numbered preset.
pub fn cpi_preset_order(variant: u8) -> Result<usize> {
    Ok(match variant {
        1 => 18,
        2 => 15,
        3 => 10,
        4 => 5,
        other => bail!("unknown CPI preset {other}, expected 1..=4"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_fit_the_series() {
        for variant in 1..=4 {
            let order = cpi_preset_order(variant).unwrap();
            assert!(order < CPI.len());
        }
    }

    #[test]
    fn unknown_preset() {
        assert!(cpi_preset_order(0).is_err());
        assert!(cpi_preset_order(5).is_err());
    }
}
