//! Dropped-packet counters from `/sys/class/net/<iface>/statistics`.
//!
//! sysinfo does not expose drop counts, so on Linux they are read straight
//! from sysfs. Missing or unreadable files count as zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SYS_CLASS_NET: &str = "/sys/class/net";

/// Reader for per-interface drop counters under a sysfs root
#[derive(Debug, Clone)]
pub struct DropCounters {
    root: PathBuf,
}

impl Default for DropCounters {
    fn default() -> Self {
        Self::new(SYS_CLASS_NET)
    }
}

impl DropCounters {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Check that the statistics tree can be listed at all.
    pub fn probe(&self) -> io::Result<()> {
        if cfg!(target_os = "linux") {
            fs::read_dir(&self.root)?;
        }
        Ok(())
    }

    /// `(dropped_in, dropped_out)` for `iface`
    pub fn read(&self, iface: &str) -> (u64, u64) {
        if !cfg!(target_os = "linux") {
            return (0, 0);
        }
        let stats = self.root.join(iface).join("statistics");
        (
            read_counter(&stats.join("rx_dropped")),
            read_counter(&stats.join("tx_dropped")),
        )
    }
}

fn read_counter(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("unparsable counter in {}: {}", path.display(), e);
                0
            }
        },
        Err(e) => {
            log::debug!("cannot read {}: {}", path.display(), e);
            0
        }
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_iface(root: &Path, name: &str, rx: &str, tx: &str) {
        let stats = root.join(name).join("statistics");
        fs::create_dir_all(&stats).unwrap();
        fs::write(stats.join("rx_dropped"), rx).unwrap();
        fs::write(stats.join("tx_dropped"), tx).unwrap();
    }

    #[test]
    fn test_reads_drop_counters() {
        let dir = TempDir::new().unwrap();
        fake_iface(dir.path(), "eth0", "17\n", "3\n");

        let reader = DropCounters::new(dir.path());
        assert_eq!(reader.read("eth0"), (17, 3));
    }

    #[test]
    fn test_missing_interface_is_zero() {
        let dir = TempDir::new().unwrap();
        let reader = DropCounters::new(dir.path());
        assert_eq!(reader.read("nope0"), (0, 0));
    }

    #[test]
    fn test_probe() {
        let dir = TempDir::new().unwrap();
        assert!(DropCounters::new(dir.path()).probe().is_ok());
        assert!(DropCounters::new(dir.path().join("absent")).probe().is_err());
    }

    #[test]
    fn test_garbage_is_zero() {
        let dir = TempDir::new().unwrap();
        fake_iface(dir.path(), "wlan0", "n/a", "5");

        let reader = DropCounters::new(dir.path());
        assert_eq!(reader.read("wlan0"), (0, 5));
    }
}
