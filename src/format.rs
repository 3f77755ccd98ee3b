use crate::config::UnitMode;

const BYTE_UNITS: [&str; 4] = ["Bps", "KBps", "MBps", "GBps"];
const BIT_UNITS: [&str; 4] = ["bps", "Kbps", "Mbps", "Gbps"];

/// Format a rate (bytes per second) as e.g. `"1.50 MBps"`.
///
/// Bits mode only swaps the unit labels; the number is not multiplied by 8.
/// Values of 1024 GBps and above stay in the last unit.
pub fn format_speed(value: f64, unit: UnitMode) -> String {
    let units = match unit {
        UnitMode::Bytes => &BYTE_UNITS,
        UnitMode::Bits => &BIT_UNITS,
    };
    let (scaled, idx) = scale(value, units.len());
    format!("{:.2} {}", scaled, units[idx])
}

/// Divide by 1024 until the value drops below 1024 or the table runs out.
fn scale(mut value: f64, unit_count: usize) -> (f64, usize) {
    let mut idx = 0;
    while value >= 1024.0 && idx + 1 < unit_count {
        value /= 1024.0;
        idx += 1;
    }
    (value, idx)
}

/// Format a pair of plain counters as `"a / b"`.
pub fn format_pair(a: u64, b: u64) -> String {
    format!("{} / {}", a, b)
}
