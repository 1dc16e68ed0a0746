use tracing::{debug, info};

use crate::aggregate::{filter_events, tally};
use crate::client::ApiClient;
use crate::error::{CheckError, Result};
use crate::selector::parse_labels;
use crate::threshold::{evaluate, Verdict};
use crate::types::{Config, Counters, Event};

/// Runs one aggregate evaluation: authenticate, fetch and filter each
/// namespace in order, tally, evaluate thresholds.
///
/// Any I/O failure aborts the run before a verdict is produced; there is
/// no partial-success mode.
pub async fn run(client: &ApiClient, config: &Config) -> Result<(Counters, Verdict)> {
    if config.check_labels.is_empty() {
        return Err(CheckError::Config(
            "check-labels selector must not be empty".to_string(),
        ));
    }

    let check_selector = parse_labels(&config.check_labels);
    let entity_selector = parse_labels(&config.entity_labels);

    let credential = client.authenticate().await?;

    let mut events: Vec<Event> = Vec::new();
    for namespace in &config.namespaces {
        info!("fetching events for namespace: {namespace}");
        let fetched = client.events(&credential, namespace).await?;
        debug!("namespace {namespace}: {} events before filtering", fetched.len());
        events.extend(filter_events(fetched, &check_selector, &entity_selector));
    }

    let counters = tally(&events);
    let verdict = evaluate(&counters, &config.thresholds);

    Ok((counters, verdict))
}
