//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default time-to-live (2 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Default live-entry ceiling
pub const DEFAULT_CAPACITY: usize = 1 << 10;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default minutes between expiry sweeps
pub const DEFAULT_SWEEP_INTERVAL_MINS: u64 = 1;

/// Server configuration parameters.
///
/// Read once at startup. Absent or malformed values fall back to defaults
/// and never abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Age after which an entry is expired
    pub ttl: Duration,
    /// Maximum number of live entries
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Minutes between expiry sweep passes
    pub sweep_interval_mins: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPIRY_TIME` - TTL as a duration string such as `2h` or `1h30m` (default: 2h)
    /// - `MAX_CACHE` - Maximum live entries (default: 1024)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL_MINS` - Minutes between sweeps, must be positive (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates a Config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            ttl: lookup("EXPIRY_TIME")
                .and_then(|v| parse_duration(&v))
                .unwrap_or(DEFAULT_TTL),
            capacity: lookup("MAX_CACHE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            sweep_interval_mins: lookup("SWEEP_INTERVAL_MINS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|mins| *mins > 0)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_MINS),
        }
    }

    /// Returns the sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_mins.saturating_mul(60))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
            sweep_interval_mins: DEFAULT_SWEEP_INTERVAL_MINS,
        }
    }
}

// == Duration Parsing ==
/// Parses a duration string made of one or more `<number><unit>` terms,
/// e.g. `2h`, `1h30m`, `1.5h`, `250ms`, with an optional leading `+`.
///
/// Units: `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`. A bare `0` is accepted.
/// Negative, empty, unit-less or overflowing inputs return `None`.
/// Whole parts are summed as exact nanoseconds; only fractional parts are
/// rounded.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    let input = input.strip_prefix('+').unwrap_or(input);
    if input == "0" {
        return Some(Duration::ZERO);
    }
    if input.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut rest = input;

    while !rest.is_empty() {
        let (whole, tail) = split_digits(rest);
        let (fraction, tail) = match tail.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", tail),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let nanos_per_unit: u64 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            _ => return None,
        };

        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut nanos = whole.checked_mul(nanos_per_unit)?;
        if !fraction.is_empty() {
            let fraction: f64 = format!("0.{fraction}").parse().ok()?;
            nanos = nanos.checked_add((fraction * nanos_per_unit as f64).round() as u64)?;
        }

        total = total.checked_add(nanos)?;
        rest = tail;
    }

    Some(Duration::from_nanos(total))
}

/// Splits off the leading run of ASCII digits.
fn split_digits(input: &str) -> (&str, &str) {
    let len = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(len)
}
