use sysinfo::{NetworkData, Networks};

use crate::config::InterfaceFilter;
use crate::error::{Error, Result};
use crate::system::network::{InterfaceCounters, Snapshot};
use crate::system::sysfs::DropCounters;

/// Anything that can produce a point-in-time counter snapshot
pub trait StatsSource {
    fn snapshot(&mut self, filter: &InterfaceFilter) -> Result<Snapshot>;
}

/// Snapshot reader backed by the `sysinfo` crate, with drop counters from sysfs
pub struct Collector {
    drops: DropCounters,
}

impl Collector {
    /// Fails when the platform has no usable network statistics.
    pub fn new() -> Result<Self> {
        Self::with_drop_counters(DropCounters::default())
    }

    pub fn with_drop_counters(drops: DropCounters) -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::Unsupported);
        }
        drops
            .probe()
            .map_err(|e| Error::Stats(format!("cannot list network interfaces: {}", e)))?;
        Ok(Self { drops })
    }

    fn counters(&self, name: &str, data: &NetworkData) -> InterfaceCounters {
        let (dropped_in, dropped_out) = self.drops.read(name);
        InterfaceCounters {
            bytes_sent: data.total_transmitted(),
            bytes_recv: data.total_received(),
            packets_sent: data.total_packets_transmitted(),
            packets_recv: data.total_packets_received(),
            errors_in: data.total_errors_on_received(),
            errors_out: data.total_errors_on_transmitted(),
            dropped_in,
            dropped_out,
        }
    }
}

impl StatsSource for Collector {
    fn snapshot(&mut self, filter: &InterfaceFilter) -> Result<Snapshot> {
        // Fresh list every call: interfaces come and go between iterations
        let networks = Networks::new_with_refreshed_list();

        let mut rows: Vec<(String, InterfaceCounters)> = networks
            .iter()
            .filter(|(name, _)| filter.matches(name))
            .map(|(name, data)| (name.clone(), self.counters(name, data)))
            .collect();

        // sysinfo hands back a hash map; sort so rows keep their place
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        log::debug!("snapshot: {} interface(s) for {:?}", rows.len(), filter);
        Ok(rows.into_iter().collect())
    }
}
