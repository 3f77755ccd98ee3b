use chrono::{DateTime, Local};

use crate::config::{Columns, DisplayConfig, UnitMode};
use crate::format::{format_pair, format_speed};
use crate::system::network::{InterfaceCounters, Snapshot};

/// Label of the synthetic aggregate row
pub const COMBINED_LABEL: &str = "All";

/// Per-second throughput of one interface between two snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceRate {
    pub name: String,
    pub sent_per_sec: f64,
    pub recv_per_sec: f64,
    /// Current-snapshot counters (zeroed when the interface vanished)
    pub counters: InterfaceCounters,
}

/// Rate of change of one counter. Goes negative if the counter was reset.
pub fn counter_rate(previous: u64, current: u64, refresh_secs: f64) -> f64 {
    (current as i128 - previous as i128) as f64 / refresh_secs
}

/// Rates for every interface of `previous`, in its order.
///
/// Interfaces that joined in `current` show up from the next iteration on;
/// interfaces that left report zero throughput.
pub fn compute_rates(previous: &Snapshot, current: &Snapshot, refresh_secs: f64) -> Vec<InterfaceRate> {
    previous
        .iter()
        .map(|(name, prev)| match current.get(name) {
            Some(curr) => InterfaceRate {
                name: name.to_string(),
                sent_per_sec: counter_rate(prev.bytes_sent, curr.bytes_sent, refresh_secs),
                recv_per_sec: counter_rate(prev.bytes_recv, curr.bytes_recv, refresh_secs),
                counters: *curr,
            },
            None => InterfaceRate {
                name: name.to_string(),
                sent_per_sec: 0.0,
                recv_per_sec: 0.0,
                counters: InterfaceCounters::default(),
            },
        })
        .collect()
}

/// One formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub label: String,
    pub upload: String,
    pub download: String,
    pub packets: Option<String>,
    pub errors: Option<String>,
    pub dropped: Option<String>,
    pub combined: bool,
}

impl RateRow {
    fn interface(rate: &InterfaceRate, unit: UnitMode, columns: Columns) -> Self {
        let c = &rate.counters;
        Self {
            label: rate.name.clone(),
            upload: format_speed(rate.sent_per_sec, unit),
            download: format_speed(rate.recv_per_sec, unit),
            packets: columns.packets.then(|| format_pair(c.packets_sent, c.packets_recv)),
            errors: columns.errors.then(|| format_pair(c.errors_in, c.errors_out)),
            dropped: columns.dropped.then(|| format_pair(c.dropped_in, c.dropped_out)),
            combined: false,
        }
    }

    fn combined(sent: f64, recv: f64, unit: UnitMode) -> Self {
        Self {
            label: COMBINED_LABEL.to_string(),
            upload: format_speed(sent, unit),
            download: format_speed(recv, unit),
            packets: None,
            errors: None,
            dropped: None,
            combined: true,
        }
    }
}

/// Everything one frame of the display needs
#[derive(Debug, Clone)]
pub struct RateView {
    pub rows: Vec<RateRow>,
    pub columns: Columns,
    pub updated_at: DateTime<Local>,
}

impl RateView {
    pub fn build(config: &DisplayConfig, previous: &Snapshot, current: &Snapshot) -> Self {
        Self::build_at(config, previous, current, Local::now())
    }

    pub fn build_at(
        config: &DisplayConfig,
        previous: &Snapshot,
        current: &Snapshot,
        updated_at: DateTime<Local>,
    ) -> Self {
        let rates = compute_rates(previous, current, config.refresh_secs());

        let mut rows: Vec<RateRow> = rates
            .iter()
            .map(|r| RateRow::interface(r, config.unit, config.columns))
            .collect();

        if config.combined {
            // Sum of this iteration's rates, not of raw counters
            let sent = rates.iter().map(|r| r.sent_per_sec).sum();
            let recv = rates.iter().map(|r| r.recv_per_sec).sum();
            rows.push(RateRow::combined(sent, recv, config.unit));
        }

        Self {
            rows,
            columns: config.columns,
            updated_at,
        }
    }

    /// Header labels for the active columns, in display order
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Interface", "Upload Speed", "Download Speed"];
        if self.columns.packets {
            headers.push("Packets Sent/Received");
        }
        if self.columns.errors {
            headers.push("Errors In/Out");
        }
        if self.columns.dropped {
            headers.push("Dropped In/Out");
        }
        headers
    }
}
