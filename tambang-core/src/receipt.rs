//! Fixed-layout text output for quotes: on-screen summary and saved receipt.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::model::{CarVariant, Quote};
use crate::ports::FareError;

const RULE: &str = "=========================";
const SEPARATOR: &str = "-------------------------";

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Field block shared by the summary and the receipt.
struct Fields<'quote>(&'quote Quote);

impl fmt::Display for Fields<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.0;
        let car = &quote.variant;
        writeln!(formatter, "{:<13}: {}", "Car Model", car.model)?;
        writeln!(formatter, "{:<13}: {}", "Variant", car.variant)?;
        writeln!(formatter, "{:<13}: {} cc", "Engine", car.engine_cc)?;
        writeln!(
            formatter,
            "{:<13}: {:.1} km/L",
            "Fuel Eff.", car.fuel_efficiency_km_per_litre
        )?;
        writeln!(
            formatter,
            "{:<13}: {}{:.2}",
            "Rate/km", quote.fare.currency, car.rate_per_km
        )?;
        writeln!(formatter, "{:<13}: {:.2} km", "Distance", quote.distance_km)?;
        writeln!(formatter, "{:<13}: {} minutes", "Time", quote.time_minutes)?;
        writeln!(formatter, "{:<13}: {}", "Traffic Jam", yes_no(quote.traffic_jam))?;
        writeln!(formatter, "{:<13}: {}", "Night Charge", yes_no(quote.night_charge))?;
        writeln!(formatter, "{SEPARATOR}")?;
        writeln!(formatter, "{:<13}: {}", "Total Fare", quote.fare)
    }
}

/// On-screen result block printed after a calculation.
pub struct Summary<'quote>(pub &'quote Quote);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "==== Fare Result ====")?;
        write!(formatter, "{}", Fields(self.0))?;
        writeln!(formatter, "{RULE}")
    }
}

/// Receipt text as saved to disk.
pub struct Receipt<'quote>(pub &'quote Quote);

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "{RULE}")?;
        writeln!(formatter, "       Fare Receipt")?;
        writeln!(formatter, "{RULE}")?;
        write!(formatter, "{}", Fields(self.0))?;
        writeln!(formatter, "{RULE}")
    }
}

impl Receipt<'_> {
    /// Write the receipt to `path`, replacing any previous receipt.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FareError> {
        fs::write(path, self.to_string())?;
        info!(path = %path.display(), "saved receipt");
        Ok(())
    }
}

/// One line of the numbered variant menu, e.g.
/// `1. Perodua Bezza - 1.0 G (M) (998cc, 22.8 km/L, Rate: RM1.20/km)`.
#[must_use]
pub fn menu_line(number: usize, variant: &CarVariant) -> String {
    format!(
        "{number}. {} ({}cc, {:.1} km/L, Rate: RM{:.2}/km)",
        variant.label(),
        variant.engine_cc,
        variant.fuel_efficiency_km_per_litre,
        variant.rate_per_km
    )
}
