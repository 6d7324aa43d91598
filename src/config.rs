//! Configuration management for the cluster table builder

/// Default prefix of placeholder names given to inferred nodes
pub const DEFAULT_HYPOTHETICAL_PREFIX: &str = "_hypo";

/// Default sample name reserved for file-level bookkeeping
pub const DEFAULT_SENTINEL: &str = "FILE";

/// Run configuration shared by the core and the I/O collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sample names starting with this prefix are never emitted
    pub hypothetical_prefix: String,

    /// Sample name that is never emitted
    pub sentinel: String,

    /// Header of the leading label column
    pub label_column: String,

    /// Field delimiter of the output table
    pub delimiter: char,

    /// Cell text for a sample absent at a threshold
    pub missing_marker: String,

    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hypothetical_prefix: DEFAULT_HYPOTHETICAL_PREFIX.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            label_column: "genome".to_string(),
            delimiter: '\t',
            missing_marker: String::new(),
            threads: 0,
        }
    }
}

impl Config {
    /// Create a configuration with custom exclusion rules
    pub fn new(hypothetical_prefix: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self {
            hypothetical_prefix: hypothetical_prefix.into(),
            sentinel: sentinel.into(),
            ..Self::default()
        }
    }

    /// Whether a sample name is filtered out of every cluster assignment
    pub fn is_excluded(&self, sample: &str) -> bool {
        sample.starts_with(&self.hypothetical_prefix) || sample == self.sentinel
    }

    /// Resolve the worker thread count
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
