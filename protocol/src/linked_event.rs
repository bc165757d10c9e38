use serde::Deserialize;
use serde::Serialize;

/// Response of `GET /organizations/{org}/eventids/{event_id}/`: resolves a
/// raw event id to the issue group that owns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventIdLookup {
    pub group_id: String,
}

/// Response of `GET /organizations/{org}/issues/{group_id}/`, reduced to
/// the fields the linked-event badge needs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLookup {
    pub short_id: String,
    pub project: Project,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Cache entry for one resolved cross-reference, keyed by event id and
/// kept for the life of the viewing route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredLinkedEvent {
    pub short_id: String,
    pub project: Project,
    pub group_id: String,
    pub org_slug: String,
}

impl StoredLinkedEvent {
    /// Target of the short-id badge for the given event.
    pub fn issue_url(&self, event_id: &str) -> String {
        format!(
            "/{}/{}/issues/{}/events/{}/?referrer=linked-event",
            self.org_slug, self.project.slug, self.group_id, event_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn issue_lookup_deserializes_from_camel_case() {
        let issue: IssueLookup = serde_json::from_str(
            r#"{"shortId":"FRONTEND-9","project":{"id":"42","slug":"frontend","name":"Frontend"}}"#,
        )
        .unwrap();
        assert_eq!(issue.short_id, "FRONTEND-9");
        assert_eq!(issue.project.slug, "frontend");
    }

    #[test]
    fn issue_url_includes_referrer() {
        let entry = StoredLinkedEvent {
            short_id: "FRONTEND-9".to_string(),
            project: Project {
                id: None,
                slug: "frontend".to_string(),
                name: None,
            },
            group_id: "1337".to_string(),
            org_slug: "acme".to_string(),
        };
        assert_eq!(
            entry.issue_url("abc123"),
            "/acme/frontend/issues/1337/events/abc123/?referrer=linked-event"
        );
    }
}
