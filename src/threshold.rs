use std::fmt;

use crate::types::{Counters, Thresholds};

/// Final health judgment of the aggregate, carrying the operator-facing
/// message. Exit-code mapping happens once at the process boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Warning(String),
    Critical(String),
    Unknown(String),
}

impl Verdict {
    /// Monitoring-plugin exit code for this verdict.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Ok => 0,
            Verdict::Warning(_) => 1,
            Verdict::Critical(_) => 2,
            Verdict::Unknown(_) => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "Everything is OK"),
            Verdict::Warning(msg) => write!(f, "WARNING: {msg}"),
            Verdict::Critical(msg) => write!(f, "CRITICAL: {msg}"),
            Verdict::Unknown(msg) => write!(f, "UNKNOWN: {msg}"),
        }
    }
}

/// Applies the threshold rules to the aggregate counters.
///
/// The rules form an ordered decision list and only the first match
/// fires: zero events, critical percent, warning percent, critical
/// count, warning count. A threshold of zero disables its rule.
pub fn evaluate(counters: &Counters, thresholds: &Thresholds) -> Verdict {
    if counters.total == 0 {
        return Verdict::Warning("No Events returned for Aggregate".to_string());
    }

    let percent = counters.percent_ok();

    if thresholds.crit_percent != 0 && percent <= thresholds.crit_percent {
        return Verdict::Critical(format!(
            "Less than {}% percent OK ({}%)",
            thresholds.crit_percent, percent
        ));
    }

    if thresholds.warn_percent != 0 && percent <= thresholds.warn_percent {
        return Verdict::Warning(format!(
            "Less than {}% percent OK ({}%)",
            thresholds.warn_percent, percent
        ));
    }

    if thresholds.crit_count != 0 && counters.critical >= thresholds.crit_count {
        return Verdict::Critical(format!(
            "{} or more Events are in a Critical state ({})",
            thresholds.crit_count, counters.critical
        ));
    }

    if thresholds.warn_count != 0 && counters.warning >= thresholds.warn_count {
        return Verdict::Warning(format!(
            "{} or more Events are in a Warning state ({})",
            thresholds.warn_count, counters.warning
        ));
    }

    Verdict::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(ok: usize, warning: usize, critical: usize, unknown: usize) -> Counters {
        Counters {
            ok,
            warning,
            critical,
            unknown,
            total: ok + warning + critical + unknown,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_events_is_warning_regardless_of_thresholds() {
        let thresholds = Thresholds {
            warn_percent: 90,
            crit_percent: 50,
            warn_count: 1,
            crit_count: 1,
        };
        let verdict = evaluate(&Counters::default(), &thresholds);
        assert_eq!(
            verdict,
            Verdict::Warning("No Events returned for Aggregate".to_string())
        );
        assert_eq!(verdict.exit_code(), 1);
    }

    #[test]
    fn test_crit_percent_fires_first() {
        // statuses [0, 0, 1, 2]: total=4, ok=2, percent_ok=50
        let counters = counters(2, 1, 1, 0);
        let thresholds = Thresholds {
            crit_percent: 60,
            ..Default::default()
        };
        let verdict = evaluate(&counters, &thresholds);
        assert!(matches!(verdict, Verdict::Critical(_)));
        assert_eq!(verdict.to_string(), "CRITICAL: Less than 60% percent OK (50%)");
        assert_eq!(verdict.exit_code(), 2);
    }

    #[test]
    fn test_warn_percent_when_crit_percent_disabled() {
        let counters = counters(2, 1, 1, 0);
        let thresholds = Thresholds {
            warn_percent: 60,
            ..Default::default()
        };
        let verdict = evaluate(&counters, &thresholds);
        assert_eq!(
            verdict,
            Verdict::Warning("Less than 60% percent OK (50%)".to_string())
        );
    }

    #[test]
    fn test_crit_percent_boundary_is_inclusive() {
        // percent_ok == crit_percent still fires.
        let counters = counters(1, 1, 0, 0);
        let thresholds = Thresholds {
            crit_percent: 50,
            ..Default::default()
        };
        assert!(matches!(
            evaluate(&counters, &thresholds),
            Verdict::Critical(_)
        ));
    }

    #[test]
    fn test_crit_count_fires_with_percent_rules_disabled() {
        let counters = counters(10, 0, 1, 0);
        let thresholds = Thresholds {
            crit_count: 1,
            ..Default::default()
        };
        let verdict = evaluate(&counters, &thresholds);
        assert_eq!(
            verdict,
            Verdict::Critical("1 or more Events are in a Critical state (1)".to_string())
        );
    }

    #[test]
    fn test_warn_count_exits_one() {
        // The warn-count rule yields WARNING and exit 1.
        let counters = counters(10, 3, 0, 0);
        let thresholds = Thresholds {
            warn_count: 2,
            ..Default::default()
        };
        let verdict = evaluate(&counters, &thresholds);
        assert_eq!(
            verdict,
            Verdict::Warning("2 or more Events are in a Warning state (3)".to_string())
        );
        assert_eq!(verdict.exit_code(), 1);
    }

    #[test]
    fn test_percent_rules_take_precedence_over_count_rules() {
        // Both a percent rule and a count rule would match; only the
        // percent rule may fire.
        let counters = counters(1, 0, 3, 0);
        let thresholds = Thresholds {
            crit_percent: 50,
            warn_count: 1,
            crit_count: 1,
            ..Default::default()
        };
        let verdict = evaluate(&counters, &thresholds);
        assert_eq!(
            verdict,
            Verdict::Critical("Less than 50% percent OK (25%)".to_string())
        );
    }

    #[test]
    fn test_disabled_thresholds_yield_ok() {
        let counters = counters(0, 5, 5, 5);
        let verdict = evaluate(&counters, &Thresholds::default());
        assert_eq!(verdict, Verdict::Ok);
        assert_eq!(verdict.exit_code(), 0);
    }

    #[test]
    fn test_all_ok_above_thresholds() {
        let counters = counters(99, 1, 0, 0);
        let thresholds = Thresholds {
            warn_percent: 75,
            crit_percent: 50,
            warn_count: 5,
            crit_count: 5,
        };
        assert_eq!(evaluate(&counters, &thresholds), Verdict::Ok);
    }

    #[test]
    fn test_unknown_exit_code() {
        assert_eq!(Verdict::Unknown("boom".to_string()).exit_code(), 3);
    }
}
