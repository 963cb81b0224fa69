//! Summary statistics shown above the table

/// Visual emphasis of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Destructive,
    Info,
    Neutral,
}

/// One labeled figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub tone: Tone,
}

impl Metric {
    pub fn new(key: &'static str, label: &'static str, value: u64, tone: Tone) -> Self {
        Self {
            key,
            label,
            value,
            tone,
        }
    }
}

/// Derived from the collection on every call, never stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub metrics: Vec<Metric>,
}

impl Statistics {
    pub fn metric(&self, key: &str) -> Option<u64> {
        self.metrics.iter().find(|m| m.key == key).map(|m| m.value)
    }
}
