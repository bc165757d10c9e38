use crate::client::LinkedEventApi;
use crate::error::BackendError;
use crate::session_cache::RouteId;
use crate::session_cache::SessionCache;
use crumbline_protocol::StoredLinkedEvent;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::error;

const LINK_FETCH_ERROR: &str =
    "An error occurred while fetching the data of the breadcrumb event link";
const ISSUE_FETCH_ERROR: &str = "An error occurred while fetching an issue";

/// Footprint of the eventual badge, reserved while the lookups run so the
/// row does not shift once resolved.
const PLACEHOLDER_WIDTH: u16 = 109;
const PLACEHOLDER_HEIGHT: u16 = 16;

/// Receives the user-visible message when a lookup fails for any reason
/// other than the event id being unknown.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// States of one breadcrumb's cross-reference lookup. Failures are
/// terminal until the component is remounted; there are no retries.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkedEventState {
    Idle,
    Loading,
    Resolved(StoredLinkedEvent),
    Failed { notified: bool },
}

/// What the surrounding view should draw for a given state.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderHint {
    Placeholder { width: u16, height: u16 },
    Nothing,
    Badge {
        short_id: String,
        project_slug: String,
        target: String,
    },
}

impl LinkedEventState {
    /// The link is omitted on failure; pending states reserve the badge's
    /// footprint.
    pub fn render(&self, event_id: &str) -> RenderHint {
        match self {
            LinkedEventState::Idle | LinkedEventState::Loading => RenderHint::Placeholder {
                width: PLACEHOLDER_WIDTH,
                height: PLACEHOLDER_HEIGHT,
            },
            LinkedEventState::Failed { .. } => RenderHint::Nothing,
            LinkedEventState::Resolved(entry) => RenderHint::Badge {
                short_id: entry.short_id.clone(),
                project_slug: entry.project.slug.clone(),
                target: entry.issue_url(event_id),
            },
        }
    }
}

/// Resolves the issue a breadcrumb's event id points to, via two
/// sequential lookups, and caches the result for the life of the route.
pub struct LinkedEventResolver {
    org_slug: String,
    event_id: String,
    route: RouteId,
    api: Arc<dyn LinkedEventApi>,
    cache: Arc<SessionCache>,
    notifier: Arc<dyn Notifier>,
    unmounted: CancellationToken,
}

impl LinkedEventResolver {
    pub fn new(
        org_slug: impl Into<String>,
        event_id: impl Into<String>,
        route: RouteId,
        api: Arc<dyn LinkedEventApi>,
        cache: Arc<SessionCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            org_slug: org_slug.into(),
            event_id: event_id.into(),
            route,
            api,
            cache,
            notifier,
            unmounted: CancellationToken::new(),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Token the owning view cancels on teardown. A result arriving after
    /// cancellation is dropped without touching the cache or notifying.
    pub fn unmount_guard(&self) -> CancellationToken {
        self.unmounted.clone()
    }

    /// State to render before [`resolve`](Self::resolve) completes: a
    /// cached entry resolves immediately with no network traffic,
    /// otherwise the view shows the placeholder while the lookups run.
    pub fn mount(&self) -> LinkedEventState {
        match self.cache.get(&self.event_id) {
            Some(entry) => LinkedEventState::Resolved(entry),
            None => LinkedEventState::Loading,
        }
    }

    /// Runs the two-step lookup, short-circuiting on a cache hit.
    pub async fn resolve(&self) -> LinkedEventState {
        if let Some(entry) = self.cache.get(&self.event_id) {
            return LinkedEventState::Resolved(entry);
        }

        let lookup = match self.api.lookup_event_id(&self.org_slug, &self.event_id).await {
            Ok(lookup) => lookup,
            Err(err) => return self.fail(err, LINK_FETCH_ERROR),
        };
        if self.unmounted.is_cancelled() {
            return LinkedEventState::Idle;
        }

        let issue = match self.api.lookup_issue(&self.org_slug, &lookup.group_id).await {
            Ok(issue) => issue,
            Err(err) => return self.fail(err, ISSUE_FETCH_ERROR),
        };
        if self.unmounted.is_cancelled() {
            return LinkedEventState::Idle;
        }

        let entry = StoredLinkedEvent {
            short_id: issue.short_id,
            project: issue.project,
            group_id: lookup.group_id,
            org_slug: self.org_slug.clone(),
        };
        self.cache.insert(&self.route, &self.event_id, entry.clone());
        LinkedEventState::Resolved(entry)
    }

    fn fail(&self, err: BackendError, message: &str) -> LinkedEventState {
        if self.unmounted.is_cancelled() {
            return LinkedEventState::Idle;
        }
        if err.is_not_found() {
            return LinkedEventState::Failed { notified: false };
        }
        error!(%err, event_id = %self.event_id, "breadcrumb link lookup failed");
        self.notifier.notify_error(message);
        LinkedEventState::Failed { notified: true }
    }
}
