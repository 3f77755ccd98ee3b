//! Display configuration, built once from the command line and then
//! treated as immutable for the lifetime of the process.

use std::time::Duration;

use crate::cli::Args;
use crate::error::ConfigError;

/// Which interfaces the snapshot reader should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceFilter {
    All,
    Named(String),
}

impl InterfaceFilter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            InterfaceFilter::All => true,
            InterfaceFilter::Named(wanted) => wanted == name,
        }
    }
}

/// How the interface set was chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceMode {
    /// No `-all`: every interface (or the `-i` one), combined row allowed
    Default,
    /// `-all`: every interface listed individually, combined row suppressed
    Individually,
}

/// Unit labels used when formatting rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    #[default]
    Bytes,
    Bits,
}

/// Optional table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub packets: bool,
    pub errors: bool,
    pub dropped: bool,
}

impl Columns {
    pub fn full() -> Self {
        Self { packets: true, errors: true, dropped: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub filter: InterfaceFilter,
    pub mode: InterfaceMode,
    /// Interval between snapshots, also the divisor for rates
    pub refresh: Duration,
    pub unit: UnitMode,
    pub combined: bool,
    pub columns: Columns,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            filter: InterfaceFilter::All,
            mode: InterfaceMode::Default,
            refresh: Duration::from_secs(1),
            unit: UnitMode::Bytes,
            combined: false,
            columns: Columns::default(),
        }
    }
}

impl DisplayConfig {
    /// Validate parsed arguments and build the configuration.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.interface.is_some() && args.all {
            return Err(ConfigError::InterfaceConflict);
        }
        if !(args.refresh.is_finite() && args.refresh > 0.0) {
            return Err(ConfigError::InvalidRefresh(args.refresh));
        }
        let refresh = Duration::try_from_secs_f64(args.refresh)
            .map_err(|_| ConfigError::InvalidRefresh(args.refresh))?;
        // Sub-nanosecond values round to zero
        if refresh.is_zero() {
            return Err(ConfigError::InvalidRefresh(args.refresh));
        }

        let (filter, mode) = match (&args.interface, args.all) {
            (_, true) => (InterfaceFilter::All, InterfaceMode::Individually),
            (Some(name), false) => (InterfaceFilter::Named(name.clone()), InterfaceMode::Default),
            (None, false) => (InterfaceFilter::All, InterfaceMode::Default),
        };

        let columns = if args.full {
            Columns::full()
        } else {
            Columns {
                packets: args.packets,
                errors: args.errors,
                dropped: args.dropped,
            }
        };

        Ok(Self {
            filter,
            mode,
            refresh,
            unit: if args.bits { UnitMode::Bits } else { UnitMode::Bytes },
            combined: args.combined && mode != InterfaceMode::Individually,
            columns,
        })
    }

    /// Refresh interval in seconds, the divisor used for every rate.
    pub fn refresh_secs(&self) -> f64 {
        self.refresh.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args { refresh: 1.0, ..Default::default() }
    }

    #[test]
    fn test_default_watches_everything() {
        let cfg = DisplayConfig::from_args(&args()).unwrap();
        assert_eq!(cfg, DisplayConfig::default());
    }

    #[test]
    fn test_interface_and_all_conflict() {
        let a = Args { interface: Some("eth0".into()), all: true, ..args() };
        assert_eq!(DisplayConfig::from_args(&a), Err(ConfigError::InterfaceConflict));
    }

    #[test]
    fn test_named_interface() {
        let a = Args { interface: Some("wlan0".into()), combined: true, ..args() };
        let cfg = DisplayConfig::from_args(&a).unwrap();
        assert_eq!(cfg.filter, InterfaceFilter::Named("wlan0".into()));
        assert!(cfg.combined);
    }

    #[test]
    fn test_all_suppresses_combined() {
        let a = Args { all: true, combined: true, ..args() };
        let cfg = DisplayConfig::from_args(&a).unwrap();
        assert_eq!(cfg.mode, InterfaceMode::Individually);
        assert_eq!(cfg.filter, InterfaceFilter::All);
        assert!(!cfg.combined);
    }

    #[test]
    fn test_full_enables_all_columns() {
        let a = Args { full: true, ..args() };
        assert_eq!(DisplayConfig::from_args(&a).unwrap().columns, Columns::full());

        let a = Args { errors: true, ..args() };
        let cols = DisplayConfig::from_args(&a).unwrap().columns;
        assert!(cols.errors && !cols.packets && !cols.dropped);
    }

    #[test]
    fn test_refresh_must_be_positive() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-12] {
            let a = Args { refresh: bad, ..args() };
            assert!(matches!(
                DisplayConfig::from_args(&a),
                Err(ConfigError::InvalidRefresh(_))
            ));
        }
        let a = Args { refresh: 0.25, ..args() };
        assert_eq!(DisplayConfig::from_args(&a).unwrap().refresh_secs(), 0.25);
    }

    #[test]
    fn test_bits_mode() {
        let a = Args { bits: true, ..args() };
        assert_eq!(DisplayConfig::from_args(&a).unwrap().unit, UnitMode::Bits);
    }

    #[test]
    fn test_filter_matches_exactly() {
        let f = InterfaceFilter::Named("eth0".into());
        assert!(f.matches("eth0"));
        assert!(!f.matches("eth01"));
        assert!(InterfaceFilter::All.matches("anything"));
    }
}
