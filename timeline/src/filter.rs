use crate::options::FacetValue;
use crumbline_protocol::BreadcrumbLevel;
use crumbline_protocol::BreadcrumbType;
use crumbline_protocol::Crumb;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Applies the checked facets to the full normalized sequence. Checked
/// types OR together, checked levels OR together, and the two groups AND
/// together; with nothing checked the sequence passes through untouched.
///
/// Always evaluated against the full sequence, never a prior filtered
/// view: facet filtering is reset-and-reapply.
pub fn filter_by_selection(selections: &IndexSet<FacetValue>, crumbs: &[Crumb]) -> Vec<Crumb> {
    let mut checked_types: HashSet<BreadcrumbType> = HashSet::new();
    let mut checked_levels: HashSet<BreadcrumbLevel> = HashSet::new();
    for selection in selections {
        match selection {
            FacetValue::Type(kind) => {
                checked_types.insert(*kind);
            }
            FacetValue::Level(level) => {
                checked_levels.insert(*level);
            }
        }
    }

    if !checked_types.is_empty() && !checked_levels.is_empty() {
        return crumbs
            .iter()
            .filter(|crumb| {
                checked_types.contains(&crumb.kind) && checked_levels.contains(&crumb.level)
            })
            .cloned()
            .collect();
    }
    if !checked_types.is_empty() {
        return crumbs
            .iter()
            .filter(|crumb| checked_types.contains(&crumb.kind))
            .cloned()
            .collect();
    }
    if !checked_levels.is_empty() {
        return crumbs
            .iter()
            .filter(|crumb| checked_levels.contains(&crumb.level))
            .cloned()
            .collect();
    }
    crumbs.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn crumb(id: usize, kind: BreadcrumbType, level: BreadcrumbLevel) -> Crumb {
        Crumb {
            id,
            kind,
            level,
            description: kind.description(),
            color: kind.color(),
            category: None,
            message: None,
            timestamp: None,
            data: None,
        }
    }

    fn sample() -> Vec<Crumb> {
        vec![
            crumb(0, BreadcrumbType::Http, BreadcrumbLevel::Info),
            crumb(1, BreadcrumbType::Http, BreadcrumbLevel::Error),
            crumb(2, BreadcrumbType::Navigation, BreadcrumbLevel::Info),
            crumb(3, BreadcrumbType::Debug, BreadcrumbLevel::Undefined),
        ]
    }

    fn ids(crumbs: &[Crumb]) -> Vec<usize> {
        crumbs.iter().map(|crumb| crumb.id).collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let crumbs = sample();
        assert_eq!(filter_by_selection(&IndexSet::new(), &crumbs), crumbs);
    }

    #[test]
    fn types_only_keeps_matching_kinds() {
        let selections: IndexSet<FacetValue> =
            [FacetValue::Type(BreadcrumbType::Http)].into_iter().collect();
        assert_eq!(ids(&filter_by_selection(&selections, &sample())), vec![0, 1]);
    }

    #[test]
    fn levels_only_keeps_matching_levels() {
        let selections: IndexSet<FacetValue> = [FacetValue::Level(BreadcrumbLevel::Info)]
            .into_iter()
            .collect();
        assert_eq!(ids(&filter_by_selection(&selections, &sample())), vec![0, 2]);
    }

    #[test]
    fn undefined_level_is_selectable() {
        let selections: IndexSet<FacetValue> = [FacetValue::Level(BreadcrumbLevel::Undefined)]
            .into_iter()
            .collect();
        assert_eq!(ids(&filter_by_selection(&selections, &sample())), vec![3]);
    }

    #[test]
    fn groups_intersect() {
        // type in {http} AND level in {info} must equal the intersection
        // of the two single-group results.
        let crumbs = sample();
        let types: IndexSet<FacetValue> =
            [FacetValue::Type(BreadcrumbType::Http)].into_iter().collect();
        let levels: IndexSet<FacetValue> = [FacetValue::Level(BreadcrumbLevel::Info)]
            .into_iter()
            .collect();
        let both: IndexSet<FacetValue> = types.iter().chain(levels.iter()).copied().collect();

        let by_type: HashSet<usize> = ids(&filter_by_selection(&types, &crumbs)).into_iter().collect();
        let by_level: HashSet<usize> =
            ids(&filter_by_selection(&levels, &crumbs)).into_iter().collect();
        let intersection: HashSet<usize> = by_type.intersection(&by_level).copied().collect();

        let combined: HashSet<usize> =
            ids(&filter_by_selection(&both, &crumbs)).into_iter().collect();
        assert_eq!(combined, intersection);
        assert_eq!(ids(&filter_by_selection(&both, &crumbs)), vec![0]);
    }

    #[test]
    fn multiple_values_within_a_group_union() {
        let selections: IndexSet<FacetValue> = [
            FacetValue::Type(BreadcrumbType::Http),
            FacetValue::Type(BreadcrumbType::Debug),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            ids(&filter_by_selection(&selections, &sample())),
            vec![0, 1, 3]
        );
    }
}
