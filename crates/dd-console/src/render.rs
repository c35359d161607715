//! Fixed text blocks of the console transcript.

use std::io::{self, Write};

use dd_core::Battery;
use dd_sim::{DaySummary, DeliveryOutcome};

pub const RULE: &str = "=============================";
pub const PROMPT: &str = "Press S to start delivery day: ";
pub const CANCELLED: &str = "Mission cancelled.";
pub const OBSTACLE: &str = "Obstacle found! Using more battery.";

pub fn write_banner<W: Write>(w: &mut W, battery: Battery) -> io::Result<()> {
    writeln!(w, "{RULE}")?;
    writeln!(w, "   DRONE DELIVERY PROGRAM")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "Starting battery: {battery}")?;
    writeln!(w, "Weather and obstacles are random.")?;
    writeln!(w)
}

/// Print the prompt without a newline and flush so it shows before input.
pub fn write_prompt<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "{PROMPT}")?;
    w.flush()
}

pub fn write_cancelled<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{CANCELLED}")
}

pub fn write_attempt_header<W: Write>(w: &mut W, location: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Delivering to {location}...")
}

/// Detour notice, outcome line, and, for flights that reached the drain
/// decision, the remaining charge.
pub fn write_outcome<W: Write>(w: &mut W, outcome: &DeliveryOutcome) -> io::Result<()> {
    if outcome.detoured {
        writeln!(w, "{OBSTACLE}")?;
    }
    writeln!(w, "{}", outcome.message())?;
    if outcome.reached_drain_decision() {
        writeln!(w, "Battery left: {}", outcome.battery_after)?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, summary: &DaySummary) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "      DAY SUMMARY")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "Successful deliveries: {}", summary.success)?;
    writeln!(w, "Failed deliveries: {}", summary.failed)?;
    writeln!(w, "Delayed deliveries: {}", summary.delayed)?;
    writeln!(w, "Battery remaining: {}", summary.battery)?;
    writeln!(w, "{RULE}")
}
