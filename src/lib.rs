// Public modules
pub mod aggregate;
pub mod client;
pub mod error;
pub mod pipeline;
pub mod selector;
pub mod threshold;
pub mod types;

// Re-export commonly used items
pub use aggregate::{filter_events, tally};
pub use client::ApiClient;
pub use error::{CheckError, Result};
pub use pipeline::run;
pub use selector::parse_labels;
pub use threshold::{evaluate, Verdict};
pub use types::{Config, Counters, Credential, Event, Thresholds};
