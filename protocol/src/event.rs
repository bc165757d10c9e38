use serde::Deserialize;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Subset of the parent error event consulted when synthesizing the
/// virtual breadcrumb: the triggering exception (first value) or, failing
/// that, the event's log message.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ParentEvent {
    pub event_id: String,
    pub message: Option<String>,
    pub date_created: Option<String>,
    #[serde(default)]
    pub tags: Vec<EventTag>,
    #[serde(default)]
    pub exception_values: Vec<ExceptionValue>,
}

impl ParentEvent {
    /// Value of the event's `level` tag, if the ingest pipeline set one.
    pub fn level_tag(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == "level")
            .map(|tag| tag.value.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventTag {
    pub key: String,
    pub value: String,
}

/// One entry of the event's exception chain.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExceptionValue {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
    pub module: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_tag_is_found_by_key() {
        let event = ParentEvent {
            event_id: "deadbeef".to_string(),
            tags: vec![
                EventTag {
                    key: "browser".to_string(),
                    value: "firefox".to_string(),
                },
                EventTag {
                    key: "level".to_string(),
                    value: "warning".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(event.level_tag(), Some("warning"));
        assert_eq!(ParentEvent::default().level_tag(), None);
    }
}
