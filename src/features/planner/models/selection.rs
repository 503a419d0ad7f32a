/// Mutually exclusive option selection: at most one option name is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.current() == Some(name)
    }

    /// Make `name` the active option, replacing any previous one
    pub fn select(&mut self, name: impl Into<String>) {
        self.0 = Some(name.into());
    }

    /// Clear the selection if `name` is the active option.
    ///
    /// Deselecting an option that is not active leaves the selection alone.
    pub fn deselect(&mut self, name: &str) -> bool {
        if self.is_selected(name) {
            self.0 = None;
            true
        } else {
            false
        }
    }

    /// Apply a checkbox change for `name`
    pub fn toggle(&mut self, name: &str, checked: bool) {
        if checked {
            self.select(name);
        } else {
            self.deselect(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = Selection::default();
        selection.select("Rear Extension");
        selection.select("Loft Conversion");

        assert!(!selection.is_selected("Rear Extension"));
        assert!(selection.is_selected("Loft Conversion"));
    }

    #[test]
    fn test_deselect_active_clears() {
        let mut selection = Selection::default();
        selection.toggle("Porch", true);
        selection.toggle("Porch", false);

        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_deselect_inactive_is_noop() {
        let mut selection = Selection::default();
        selection.select("Porch");

        assert!(!selection.deselect("Outbuilding"));
        assert_eq!(selection.current(), Some("Porch"));
    }

    #[test]
    fn test_at_most_one_selected_for_any_sequence() {
        let names = ["A", "B", "C", "D", "E"];
        let mut selection = Selection::default();

        // Deterministic pseudo-random walk over toggles (LCG)
        let mut seed: u64 = 0x5eed;
        for _ in 0..1_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let name = names[(seed >> 33) as usize % names.len()];
            let checked = (seed >> 13) & 1 == 1;
            let before = selection.clone();

            selection.toggle(name, checked);

            let selected: Vec<_> = names.iter().filter(|n| selection.is_selected(n)).collect();
            assert!(selected.len() <= 1);
            if checked {
                assert_eq!(selection.current(), Some(name));
            } else if before.is_selected(name) {
                assert_eq!(selection.current(), None);
            } else {
                assert_eq!(selection, before);
            }
        }
    }
}
