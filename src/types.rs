use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub check_labels: String,
    pub entity_labels: String,
    pub namespaces: Vec<String>,
    pub api_proto: String,
    pub api_host: String,
    pub api_port: u16,
    pub api_user: String,
    pub api_pass: String,
    pub ca_path: Option<PathBuf>,
    pub thresholds: Thresholds,
}

/// Threshold rules for the aggregate verdict. A value of zero disables
/// the rule, so a literal zero threshold cannot be configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct Thresholds {
    pub warn_percent: usize,
    pub crit_percent: usize,
    pub warn_count: usize,
    pub crit_count: usize,
}

/// Bearer token obtained from the backend's `/auth` endpoint. Used for
/// the whole run and never refreshed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: i64,
}

/// One check execution result tied to one entity, as returned by
/// `/api/core/v2/namespaces/{ns}/events`. Fields the aggregate does not
/// consume are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub entity: Entity,
    #[serde(default)]
    pub check: Check,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Check {
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Status ordinal: 0=OK, 1=Warning, 2=Critical, anything else Unknown.
    #[serde(default)]
    pub status: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Aggregate tallies over the filtered events of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counters {
    pub entities: usize,
    pub checks: usize,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
    pub total: usize,
}

impl Counters {
    /// Percentage of events in OK state, truncated toward zero.
    /// Zero when no events were counted.
    pub fn percent_ok(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.ok * 100 / self.total
        }
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entities={} checks={} ok={} warning={} critical={} unknown={} total={}",
            self.entities, self.checks, self.ok, self.warning, self.critical, self.unknown, self.total
        )
    }
}
