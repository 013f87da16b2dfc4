#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("connection refused") || msg_lower.contains("error sending request") {
        suggestions.push("Check that the remote server is running and reachable".to_string());
    }

    if msg_lower.contains("dns") || msg_lower.contains("failed to lookup address") {
        suggestions.push("Check the host in base_url or pass --url".to_string());
    }

    if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
        suggestions.push("The device did not answer in time, try raising timeout_secs".to_string());
    }

    suggestions
}
