//! Filtering and search pipeline for the breadcrumb timeline: raw records
//! are normalized into display-ready crumbs (newest first, with a virtual
//! crumb synthesized from the parent event), facet options are derived from
//! the normalized sequence, and a single reducer keeps the facet and search
//! views in sync.

mod filter;
mod normalize;
mod options;
mod pipeline;
mod search;

pub use filter::filter_by_selection;
pub use normalize::normalize;
pub use options::FacetParseError;
pub use options::FacetValue;
pub use options::FilterOption;
pub use options::FilterOptions;
pub use options::build_filter_options;
pub use pipeline::Action;
pub use pipeline::EmptyState;
pub use pipeline::PipelineState;
pub use pipeline::RecoveryAction;
pub use search::filter_by_search;
