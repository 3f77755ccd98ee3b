use std::ffi::OsString;

use clap::Parser;

use crate::ui::banner::BANNER;

/// NetSpeed - Advanced Network Speed Monitoring Tool with Detailed Interface Stats
#[derive(Parser, Debug, Default)]
#[command(name = "netspeed", version, before_help = BANNER)]
#[command(about = "Advanced Network Speed Monitoring Tool with Detailed Interface Stats", long_about = None)]
pub struct Args {
    /// Monitor specified interface (e.g., eth0, wlan0)
    #[arg(short, long, value_name = "INTERFACE_NAME")]
    pub interface: Option<String>,

    /// Monitor all interfaces separately (also accepted as -all)
    #[arg(short, long)]
    pub all: bool,

    /// Monitor combined speeds of all interfaces
    #[arg(short, long)]
    pub combined: bool,

    /// Set refresh rate in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = 1.0, allow_negative_numbers = true)]
    pub refresh: f64,

    /// Show speed in bits per second (default: bytes per second)
    #[arg(short, long)]
    pub bits: bool,

    /// Display packet counts (sent/received) per interface
    #[arg(short, long)]
    pub packets: bool,

    /// Show error count per interface
    #[arg(short, long)]
    pub errors: bool,

    /// Show dropped packet count per interface
    #[arg(short, long)]
    pub dropped: bool,

    /// Display the most detailed view (all info combined)
    #[arg(short, long)]
    pub full: bool,
}

impl Args {
    /// Parse the process arguments, accepting the historical `-all` spelling.
    pub fn parse_from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite the single-dash `-all` token to `--all`; clap would otherwise
/// read it as the short-flag cluster `-a -l -l`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| if arg == "-all" { OsString::from("--all") } else { arg })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let argv = std::iter::once("netspeed").chain(args.iter().copied()).map(OsString::from);
        Args::try_parse_from(normalize_args(argv)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.interface, None);
        assert!(!args.all);
        assert!(!args.combined);
        assert_eq!(args.refresh, 1.0);
        assert!(!args.bits);
        assert!(!args.full);
    }

    #[test]
    fn test_legacy_all_token() {
        let args = parse(&["-all", "-c"]);
        assert!(args.all);
        assert!(args.combined);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-i", "eth0", "-r", "0.5", "-b", "-p", "-e", "-d"]);
        assert_eq!(args.interface.as_deref(), Some("eth0"));
        assert_eq!(args.refresh, 0.5);
        assert!(args.bits && args.packets && args.errors && args.dropped);
    }

    #[test]
    fn test_negative_refresh_reaches_validation() {
        let args = parse(&["-r", "-1"]);
        assert_eq!(args.refresh, -1.0);
    }

    #[test]
    fn test_help_is_an_early_exit() {
        let err = Args::try_parse_from(["netspeed", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_normalize_leaves_other_tokens() {
        let out = normalize_args(["netspeed", "-a", "--all", "-allx"].map(OsString::from));
        assert_eq!(out, ["netspeed", "-a", "--all", "-allx"].map(OsString::from).to_vec());
    }
}
