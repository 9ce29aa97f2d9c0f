//! API endpoint paths, relative to the configured base URL.

pub const SERIES_QUERY: &str = "series/query";
pub const SERIES_INSERT: &str = "series/insert";

pub const PROPERTIES_QUERY: &str = "properties/query";
pub const PROPERTIES_INSERT: &str = "properties/insert";
pub const PROPERTIES_DELETE: &str = "properties/delete";

pub const ALERTS_QUERY: &str = "alerts/query";
pub const ALERTS_UPDATE: &str = "alerts/update";
pub const ALERTS_DELETE: &str = "alerts/delete";
pub const ALERTS_HISTORY_QUERY: &str = "alerts/history/query";

pub const MESSAGES_INSERT: &str = "messages/insert";
pub const MESSAGES_QUERY: &str = "messages/query";
pub const MESSAGES_STATS_QUERY: &str = "messages/stats/query";

pub const ENTITIES: &str = "entities";
pub const METRICS: &str = "metrics";
pub const ENTITY_GROUPS: &str = "entity-groups";

pub fn properties_types(entity: &str) -> String {
    format!("properties/{}/types", encode_segment(entity))
}

pub fn entity(name: &str) -> String {
    format!("entities/{}", encode_segment(name))
}

pub fn metric(name: &str) -> String {
    format!("metrics/{}", encode_segment(name))
}

pub fn entity_group(name: &str) -> String {
    format!("entity-groups/{}", encode_segment(name))
}

// Percent-encode a name used as a single path segment.
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_encoded_as_path_segments() {
        assert_eq!(entity("nurswgvml007"), "entities/nurswgvml007");
        assert_eq!(entity("host a/b"), "entities/host%20a%2Fb");
        assert_eq!(
            properties_types("sensor-1"),
            "properties/sensor-1/types"
        );
    }
}
