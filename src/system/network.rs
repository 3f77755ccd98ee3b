/// Cumulative counters of one interface at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub dropped_in: u64,
    pub dropped_out: u64,
}

/// Counters for every matching interface, in reader order.
///
/// Names are unique; the order is kept so table rows stay put between
/// iterations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(String, InterfaceCounters)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the counters for `name`, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, counters: InterfaceCounters) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = counters,
            None => self.entries.push((name, counters)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceCounters> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InterfaceCounters)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, InterfaceCounters)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (String, InterfaceCounters)>>(iter: T) -> Self {
        let mut snapshot = Snapshot::new();
        for (name, counters) in iter {
            snapshot.insert(name, counters);
        }
        snapshot
    }
}
