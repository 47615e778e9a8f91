//
// Expansion-depth state machine.
//
// Two mechanisms feed the expanded set:
// - the drill level (collapse_all / expand_all / drill_down / drill_up),
//   which rebuilds the set in bulk from the full tree
// - toggle_expand, a manual per-node override
//
// Level changes always win: every level transition rebuilds the set from
// scratch and discards manual toggles. Manual toggles never touch the level.

use std::collections::BTreeSet;

use log::debug;

use super::model::MindmapState;

impl MindmapState {
    /// Longest root-to-leaf hop count over the full tree.
    pub fn max_depth(&self) -> usize {
        self.index()
            .walk(usize::MAX, |_| true)
            .iter()
            .map(|v| v.depth)
            .max()
            .unwrap_or(0)
    }

    pub fn collapse_all(&mut self) {
        self.current_level = 0;
        self.expanded.clear();
    }

    pub fn expand_all(&mut self) {
        self.current_level = self.max_depth();
        self.expand_to_level();
    }

    pub fn drill_down(&mut self) {
        self.current_level = (self.current_level + 1).min(self.max_depth());
        self.expand_to_level();
    }

    pub fn drill_up(&mut self) {
        self.current_level = self.current_level.saturating_sub(1);
        self.expand_to_level();
    }

    /// Flip a single node in or out of the expanded set.
    pub fn toggle_expand(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Rebuild the expanded set: a node at depth `d` is expanded iff
    /// `d < current_level`.
    fn expand_to_level(&mut self) {
        let level = self.current_level;
        let expanded: BTreeSet<String> = {
            let index = self.index();
            index
                .walk(usize::MAX, |_| true)
                .into_iter()
                .filter(|v| v.depth < level)
                .map(|v| index.id(v.node).to_string())
                .collect()
        };
        self.expanded = expanded;
        debug!("level {} expands {} nodes", level, self.expanded.len());
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::fixtures::{branching, chain, node};
    use super::super::model::{MindmapState, MindmapTree};

    fn expanded(state: &MindmapState) -> Vec<&str> {
        state.expanded.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_max_depth_over_full_tree() {
        let state = MindmapState::new(branching());
        assert_eq!(state.max_depth(), 3);
        assert_eq!(MindmapState::default().max_depth(), 0);
    }

    #[test]
    fn test_expand_all_reveals_every_ring_above_max_depth() {
        let mut state = MindmapState::new(MindmapTree::with_derived_links(vec![
            node("root", &["a"]),
            node("a", &["b"]),
            node("b", &["c"]),
            node("c", &[]),
        ]));
        state.expand_all();
        assert_eq!(state.current_level, 3);
        assert_eq!(expanded(&state), ["a", "b", "root"]);
    }

    #[test]
    fn test_collapse_all_clears() {
        let mut state = MindmapState::new(branching());
        state.expand_all();
        state.collapse_all();
        assert_eq!(state.current_level, 0);
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn test_drill_down_is_capped_at_max_depth() {
        let mut state = MindmapState::new(chain());
        state.drill_down();
        assert_eq!(state.current_level, 1);
        assert_eq!(expanded(&state), ["root"]);

        state.drill_down();
        state.drill_down();
        state.drill_down();
        assert_eq!(state.current_level, 2);
        assert_eq!(expanded(&state), ["a", "root"]);
    }

    #[test]
    fn test_drill_up_is_floored_at_zero() {
        let mut state = MindmapState::new(branching());
        state.drill_down();
        state.drill_down();
        state.drill_up();
        assert_eq!(state.current_level, 1);
        assert_eq!(expanded(&state), ["root"]);

        state.drill_up();
        state.drill_up();
        assert_eq!(state.current_level, 0);
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn test_level_counts_rings_not_deepest_node() {
        let mut state = MindmapState::new(branching());
        state.drill_down();
        state.drill_down();
        // depth 0 and 1 expanded, leaves included
        assert_eq!(expanded(&state), ["a", "b", "c", "root"]);
    }

    #[test]
    fn test_toggle_is_symmetric_difference() {
        let mut state = MindmapState::new(branching());
        state.toggle_expand("a");
        assert_eq!(expanded(&state), ["a"]);
        state.toggle_expand("a");
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn test_toggle_does_not_move_level() {
        let mut state = MindmapState::new(branching());
        state.drill_down();
        state.toggle_expand("a");
        assert_eq!(state.current_level, 1);
        assert_eq!(expanded(&state), ["a", "root"]);
    }

    #[test]
    fn test_level_change_discards_manual_toggles() {
        let mut state = MindmapState::new(branching());
        state.drill_down();
        state.toggle_expand("a1");
        state.toggle_expand("root");
        state.drill_down();
        assert_eq!(state.current_level, 2);
        assert_eq!(expanded(&state), ["a", "b", "c", "root"]);
    }
}
