//! Expansion state of the grouped "On this page" menu.

use std::collections::BTreeSet;

use docs_model::SectionGroup;

/// Which section groups are expanded.
///
/// Every group starts expanded. Loading a different set of groups (another
/// page) resets to all expanded; re-syncing the same groups keeps whatever the
/// reader collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedGroups {
    group_ids: Vec<String>,
    expanded: BTreeSet<String>,
}

impl ExpandedGroups {
    /// State for `groups` with everything expanded.
    pub fn all_expanded(groups: &[SectionGroup]) -> Self {
        let mut state = Self::default();
        state.sync_groups(groups);
        state
    }

    /// Track `groups`. Returns `true` if the group list changed and state was reset.
    pub fn sync_groups(&mut self, groups: &[SectionGroup]) -> bool {
        let same = self.group_ids.len() == groups.len()
            && self
                .group_ids
                .iter()
                .zip(groups)
                .all(|(known, group)| *known == group.id);
        if same {
            return false;
        }
        self.group_ids = groups.iter().map(|group| group.id.clone()).collect();
        self.expanded = self.group_ids.iter().cloned().collect();
        true
    }

    /// Flip one group. Unknown ids are toggled too, matching how the menu
    /// treats them as independent keys.
    pub fn toggle(&mut self, group_id: &str) {
        if !self.expanded.remove(group_id) {
            self.expanded.insert(group_id.to_string());
        }
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.contains(group_id)
    }

    pub fn group_ids(&self) -> &[String] {
        &self.group_ids
    }
}

/// Whether `group` holds the active section, for highlighting its header.
pub fn group_has_active(group: &SectionGroup, active: Option<&str>) -> bool {
    active.is_some_and(|id| group.contains(id))
}

#[cfg(test)]
mod tests {
    use docs_model::Anchor;
    use proptest::prelude::*;

    use super::*;

    fn groups(ids: &[&str]) -> Vec<SectionGroup> {
        ids.iter()
            .map(|id| SectionGroup::new(*id, *id, vec![Anchor::new(format!("{id}-1"), "one")]))
            .collect()
    }

    #[test]
    fn new_groups_start_expanded() {
        let state = ExpandedGroups::all_expanded(&groups(&["setup", "backend"]));
        assert!(state.is_expanded("setup"));
        assert!(state.is_expanded("backend"));
    }

    #[test]
    fn resync_with_same_groups_keeps_collapsed() {
        let list = groups(&["setup", "backend"]);
        let mut state = ExpandedGroups::all_expanded(&list);
        state.toggle("setup");
        assert!(!state.sync_groups(&list));
        assert!(!state.is_expanded("setup"));
    }

    #[test]
    fn different_groups_reset_to_expanded() {
        let mut state = ExpandedGroups::all_expanded(&groups(&["setup", "backend"]));
        state.toggle("setup");
        assert!(state.sync_groups(&groups(&["setup", "frontend"])));
        assert!(state.is_expanded("setup"));
        assert!(state.is_expanded("frontend"));
        assert!(!state.is_expanded("backend"));
    }

    #[test]
    fn header_highlight_follows_active_section() {
        let list = groups(&["setup"]);
        assert!(group_has_active(&list[0], Some("setup-1")));
        assert!(!group_has_active(&list[0], Some("other")));
        assert!(!group_has_active(&list[0], None));
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_state(
            collapsed in prop::collection::vec(any::<bool>(), 4),
            target in 0usize..4,
        ) {
            let list = groups(&["a", "b", "c", "d"]);
            let mut state = ExpandedGroups::all_expanded(&list);
            for (group, collapse) in list.iter().zip(&collapsed) {
                if *collapse {
                    state.toggle(&group.id);
                }
            }
            let before = state.clone();
            state.toggle(&list[target].id);
            state.toggle(&list[target].id);
            prop_assert_eq!(state, before);
        }
    }
}
