//! Grouping of workshop records into display sections.
//!
//! Derived on demand from the registry; never persisted. Groups appear in
//! first-seen order of the records, and records keep their registry order
//! within each group.

use crate::models::Registry;

/// Label for the single section when grouping is disabled
pub const FLAT_LABEL: &str = "Todos los talleres";

/// Fallback label for records without a unit
pub const NO_UNIT_LABEL: &str = "Sin unidad";

/// One display section: a label and the registry indices of its records
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub items: Vec<usize>,
}

/// Ordered arrangement of the registry for display
#[derive(Debug, Clone, Default)]
pub struct GroupedView {
    pub groups: Vec<Group>,
}

impl GroupedView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Registry indices in group traversal order (selection order)
    pub fn flattened(&self) -> Vec<usize> {
        self.groups.iter().flat_map(|g| g.items.iter().copied()).collect()
    }

    #[allow(dead_code)]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Arrange the registry for display.
///
/// With `by_unit` false, every record lands in a single section labeled
/// [`FLAT_LABEL`]. With `by_unit` true, records are partitioned by their
/// `unidad` field, with [`NO_UNIT_LABEL`] standing in for records that have
/// none. Empty input yields an empty view; never an error.
pub fn group_workshops(registry: &Registry, by_unit: bool) -> GroupedView {
    if registry.is_empty() {
        return GroupedView::default();
    }

    if !by_unit {
        return GroupedView {
            groups: vec![Group {
                label: FLAT_LABEL.to_string(),
                items: (0..registry.len()).collect(),
            }],
        };
    }

    let mut groups: Vec<Group> = Vec::new();
    for (idx, workshop) in registry.workshops.iter().enumerate() {
        let label = workshop.unit.as_deref().unwrap_or(NO_UNIT_LABEL);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.items.push(idx),
            None => groups.push(Group {
                label: label.to_string(),
                items: vec![idx],
            }),
        }
    }

    GroupedView { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Registry;

    fn registry(entries: &[(&str, Option<&str>)]) -> Registry {
        let workshops = entries
            .iter()
            .map(|(id, unit)| crate::models::Workshop {
                id: id.to_string(),
                name: id.to_uppercase(),
                description: String::new(),
                resource_path: format!("/pdfs/{id}.pdf"),
                unit: unit.map(str::to_string),
                week: None,
                published: None,
            })
            .collect();
        Registry { workshops }
    }

    #[test]
    fn test_flat_mode_single_group_preserves_order() {
        let reg = registry(&[("a", Some("U1")), ("b", None), ("c", Some("U2"))]);
        let view = group_workshops(&reg, false);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].label, FLAT_LABEL);
        assert_eq!(view.groups[0].items, vec![0, 1, 2]);
    }

    #[test]
    fn test_by_unit_partitions_with_fallback() {
        let reg = registry(&[("a", Some("U1")), ("b", Some("U1")), ("c", None)]);
        let view = group_workshops(&reg, true);
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].label, "U1");
        assert_eq!(view.groups[0].items, vec![0, 1]);
        assert_eq!(view.groups[1].label, NO_UNIT_LABEL);
        assert_eq!(view.groups[1].items, vec![2]);
    }

    #[test]
    fn test_by_unit_groups_in_first_seen_order() {
        let reg = registry(&[
            ("a", Some("U2")),
            ("b", Some("U1")),
            ("c", Some("U2")),
            ("d", None),
            ("e", Some("U1")),
        ]);
        let view = group_workshops(&reg, true);
        let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["U2", "U1", NO_UNIT_LABEL]);
        assert_eq!(view.groups[0].items, vec![0, 2]);
        assert_eq!(view.groups[1].items, vec![1, 4]);
    }

    #[test]
    fn test_union_of_groups_equals_registry() {
        let reg = registry(&[("a", Some("U1")), ("b", None), ("c", Some("U2")), ("d", None)]);
        let view = group_workshops(&reg, true);
        let mut all = view.flattened();
        assert_eq!(view.total(), reg.len());
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_registry_yields_empty_view() {
        let reg = Registry { workshops: vec![] };
        assert!(group_workshops(&reg, true).is_empty());
        assert!(group_workshops(&reg, false).is_empty());
    }

    #[test]
    fn test_flattened_follows_group_traversal_order() {
        let reg = registry(&[("a", Some("U2")), ("b", Some("U1")), ("c", Some("U2"))]);
        let view = group_workshops(&reg, true);
        assert_eq!(view.flattened(), vec![0, 2, 1]);
    }
}
