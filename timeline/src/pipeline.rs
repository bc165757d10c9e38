use crate::filter::filter_by_selection;
use crate::normalize::normalize;
use crate::options::FacetValue;
use crate::options::FilterOptions;
use crate::options::build_filter_options;
use crate::search::filter_by_search;
use crumbline_protocol::Crumb;
use crumbline_protocol::ParentEvent;
use crumbline_protocol::RawCrumb;
use indexmap::IndexSet;
use tracing::debug;

/// Inputs the surrounding view can feed the pipeline.
#[derive(Clone, Debug)]
pub enum Action {
    /// (Re)load the timeline from raw records and the parent event.
    Load {
        crumbs: Vec<RawCrumb>,
        event: ParentEvent,
    },
    /// Update the free-text query.
    Search(String),
    /// Replace the checked facet set.
    FacetChange(IndexSet<FacetValue>),
    /// Uncheck every facet.
    ResetFacets,
    /// Clear the free-text query.
    ResetSearch,
    /// Switch between absolute and relative timestamp display.
    ToggleTimeFormat,
}

/// Why the post-filter view is empty, and what the view should offer to
/// recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    NoSearchResults { recovery: RecoveryAction },
    NoBreadcrumbs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    ClearFilters,
    ClearSearch,
}

/// The whole pipeline as one immutable state value. Derived views are
/// recomputed in a fixed order on every action: facets against the full
/// normalized sequence, then search against the facet view, so the two
/// filters compose instead of accumulating.
#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    crumbs: Vec<Crumb>,
    by_facet: Vec<Crumb>,
    by_search: Vec<Crumb>,
    search_term: String,
    selections: IndexSet<FacetValue>,
    options: FilterOptions,
    relative_time: Option<String>,
    display_relative_time: bool,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Load { crumbs, event } => {
                let normalized = normalize(&crumbs, &event);
                debug!(count = normalized.len(), "loaded breadcrumb timeline");
                // The oldest crumb anchors relative-time display; it is the
                // event creation time whenever the virtual crumb exists.
                self.relative_time = normalized
                    .last()
                    .and_then(|crumb| crumb.timestamp.clone());
                self.options = build_filter_options(&normalized);
                self.by_facet = filter_by_selection(&self.selections, &normalized);
                self.by_search = filter_by_search(&self.search_term, &self.by_facet);
                self.crumbs = normalized;
            }
            Action::Search(term) => {
                self.by_search = filter_by_search(&term, &self.by_facet);
                self.search_term = term;
            }
            Action::FacetChange(selections) => {
                self.by_facet = filter_by_selection(&selections, &self.crumbs);
                self.by_search = filter_by_search(&self.search_term, &self.by_facet);
                self.selections = selections;
            }
            Action::ResetFacets => {
                self.selections = IndexSet::new();
                self.by_facet = self.crumbs.clone();
                self.by_search = filter_by_search(&self.search_term, &self.by_facet);
            }
            Action::ResetSearch => {
                self.search_term = String::new();
                self.by_search = self.by_facet.clone();
            }
            Action::ToggleTimeFormat => {
                self.display_relative_time = !self.display_relative_time;
            }
        }
        self
    }

    /// The full normalized sequence, newest first.
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// The facet-filtered view the search runs against.
    pub fn facet_view(&self) -> &[Crumb] {
        &self.by_facet
    }

    /// The view the timeline renders: facets, then search.
    pub fn visible(&self) -> &[Crumb] {
        &self.by_search
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selections(&self) -> &IndexSet<FacetValue> {
        &self.selections
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// Timestamp of the oldest crumb, the anchor for relative display.
    pub fn relative_time(&self) -> Option<&str> {
        self.relative_time.as_deref()
    }

    pub fn display_relative_time(&self) -> bool {
        self.display_relative_time
    }

    /// Classifies an empty view. `None` while anything is visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.by_search.is_empty() {
            return None;
        }
        if !self.search_term.is_empty() {
            let recovery = if self.selections.is_empty() {
                RecoveryAction::ClearSearch
            } else {
                RecoveryAction::ClearFilters
            };
            return Some(EmptyState::NoSearchResults { recovery });
        }
        Some(EmptyState::NoBreadcrumbs)
    }
}
