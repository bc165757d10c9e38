use crumbline_protocol::StoredLinkedEvent;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::debug;

/// Identifies the route (view) whose teardown evicts the entries it
/// registered. Supplied by the surrounding navigation layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session-scoped store of resolved linked events, keyed by event id.
/// Entries live until the route that created them is left; nothing expires
/// on a timer.
#[derive(Debug, Default)]
pub struct SessionCache {
    state: Mutex<CacheState>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, StoredLinkedEvent>,
    routes: HashMap<RouteId, HashSet<String>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, event_id: &str) -> Option<StoredLinkedEvent> {
        self.lock().entries.get(event_id).cloned()
    }

    /// First write wins: a resolved entry is never replaced while it lives.
    pub fn insert(&self, route: &RouteId, event_id: &str, entry: StoredLinkedEvent) {
        let mut state = self.lock();
        if state.entries.contains_key(event_id) {
            return;
        }
        debug!(event_id, route = route.as_str(), "caching linked event");
        state.entries.insert(event_id.to_string(), entry);
        state
            .routes
            .entry(route.clone())
            .or_default()
            .insert(event_id.to_string());
    }

    /// Route-leave hook: drops every entry the given route registered.
    pub fn evict_on_exit(&self, route: &RouteId) {
        let mut state = self.lock();
        let Some(event_ids) = state.routes.remove(route) else {
            return;
        };
        debug!(
            route = route.as_str(),
            count = event_ids.len(),
            "evicting linked-event entries"
        );
        for event_id in event_ids {
            state.entries.remove(&event_id);
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbline_protocol::Project;
    use pretty_assertions::assert_eq;

    fn entry(short_id: &str) -> StoredLinkedEvent {
        StoredLinkedEvent {
            short_id: short_id.to_string(),
            project: Project {
                id: None,
                slug: "frontend".to_string(),
                name: None,
            },
            group_id: "1337".to_string(),
            org_slug: "acme".to_string(),
        }
    }

    #[test]
    fn get_returns_inserted_entry() {
        let cache = SessionCache::new();
        let route = RouteId::new("/acme/frontend/issues/1337/");
        cache.insert(&route, "abc", entry("FRONTEND-9"));
        assert_eq!(cache.get("abc"), Some(entry("FRONTEND-9")));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn first_write_wins() {
        let cache = SessionCache::new();
        let route = RouteId::new("r1");
        cache.insert(&route, "abc", entry("FRONTEND-9"));
        cache.insert(&route, "abc", entry("FRONTEND-10"));
        assert_eq!(cache.get("abc"), Some(entry("FRONTEND-9")));
    }

    #[test]
    fn route_exit_evicts_only_that_route() {
        let cache = SessionCache::new();
        let issue_route = RouteId::new("r1");
        let other_route = RouteId::new("r2");
        cache.insert(&issue_route, "abc", entry("FRONTEND-9"));
        cache.insert(&other_route, "def", entry("FRONTEND-10"));

        cache.evict_on_exit(&issue_route);
        assert_eq!(cache.get("abc"), None);
        assert_eq!(cache.get("def"), Some(entry("FRONTEND-10")));

        // A second exit for the same route is a no-op.
        cache.evict_on_exit(&issue_route);
        assert_eq!(cache.get("def"), Some(entry("FRONTEND-10")));
    }
}
