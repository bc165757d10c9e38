use crumbline_protocol::BreadcrumbLevel;
use crumbline_protocol::BreadcrumbType;
use crumbline_protocol::Crumb;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const TYPE_SLUG_PREFIX: &str = "type-";
const LEVEL_SLUG_PREFIX: &str = "level-";

/// A selectable facet bucket. The facet widget addresses buckets by slug
/// (`type-http`, `level-info`); `Display`/`FromStr` round-trip that form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetValue {
    Type(BreadcrumbType),
    Level(BreadcrumbLevel),
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Type(kind) => write!(f, "{TYPE_SLUG_PREFIX}{kind}"),
            FacetValue::Level(level) => write!(f, "{LEVEL_SLUG_PREFIX}{level}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized facet slug: {0}")]
pub struct FacetParseError(String);

impl FromStr for FacetValue {
    type Err = FacetParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = raw.strip_prefix(TYPE_SLUG_PREFIX) {
            return Ok(FacetValue::Type(BreadcrumbType::from_raw(kind)));
        }
        if let Some(level) = raw.strip_prefix(LEVEL_SLUG_PREFIX) {
            return Ok(FacetValue::Level(BreadcrumbLevel::from_raw(Some(level))));
        }
        Err(FacetParseError(raw.to_string()))
    }
}

/// One facet choice as handed to the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub value: FacetValue,
    pub label: String,
}

/// Facet groups derived from the normalized sequence. A group with no
/// options is omitted from display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub types: Vec<FilterOption>,
    pub levels: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.levels.is_empty()
    }
}

/// Type facet under construction; the per-type level list only exists to
/// order the level group and is stripped before exposure.
struct TypeFacet {
    kind: BreadcrumbType,
    label: String,
    levels: Vec<BreadcrumbLevel>,
}

/// Derives the facet groups from the crumbs in display order: the type
/// group in first-seen order, then the level group by walking each type's
/// levels in first-seen order. The level order is deliberately not
/// chronological.
pub fn build_filter_options(crumbs: &[Crumb]) -> FilterOptions {
    let type_facets = collect_type_facets(crumbs);
    let levels = collect_level_facets(&type_facets);
    FilterOptions {
        types: type_facets
            .into_iter()
            .map(|facet| FilterOption {
                value: FacetValue::Type(facet.kind),
                label: facet.label,
            })
            .collect(),
        levels,
    }
}

fn collect_type_facets(crumbs: &[Crumb]) -> Vec<TypeFacet> {
    let mut facets: Vec<TypeFacet> = Vec::new();
    for crumb in crumbs {
        match facets.iter_mut().find(|facet| facet.kind == crumb.kind) {
            None => facets.push(TypeFacet {
                kind: crumb.kind,
                label: crumb.description.to_string(),
                levels: vec![crumb.level],
            }),
            Some(facet) => {
                if !facet.levels.contains(&crumb.level) {
                    facet.levels.push(crumb.level);
                }
            }
        }
    }
    facets
}

fn collect_level_facets(types: &[TypeFacet]) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for facet in types {
        for level in &facet.levels {
            let value = FacetValue::Level(*level);
            if options.iter().any(|existing| existing.value == value) {
                continue;
            }
            options.push(FilterOption {
                value,
                label: level.to_string(),
            });
        }
    }
    options
}
