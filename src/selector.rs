use std::collections::HashMap;

/// Parses a comma-separated `key=value` list into a label selector.
///
/// Malformed pairs (no `=`, or more than one `=`) are dropped silently;
/// selector parsing never fails the run.
pub fn parse_labels(arg: &str) -> HashMap<String, String> {
    let mut labels = HashMap::new();

    for pair in arg.split(',') {
        let parts: Vec<&str> = pair.split('=').collect();
        if parts.len() == 2 {
            labels.insert(parts[0].to_string(), parts[1].to_string());
        }
    }

    labels
}

/// True iff every selector key's value equals the corresponding label
/// value, with a missing label key reading as the empty string. An empty
/// selector matches everything.
pub fn matches(selector: &HashMap<String, String>, labels: &HashMap<String, String>) -> bool {
    selector
        .iter()
        .all(|(key, value)| labels.get(key).map(String::as_str).unwrap_or("") == value)
}
