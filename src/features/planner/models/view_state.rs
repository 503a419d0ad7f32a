use crate::features::geocoding::ResolvedLocation;
use crate::features::planner::models::Selection;

/// Map center and zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
}

/// Per-session state of the tile session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TileStatus {
    /// Not requested yet for this session
    #[default]
    Pending,
    Ready { url_template: String },
    /// Creation failed; the session does not retry
    Failed { message: String },
}

impl TileStatus {
    pub fn url_template(&self) -> Option<&str> {
        match self {
            TileStatus::Ready { url_template } => Some(url_template),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TileStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Fixed rules the reducer applies
#[derive(Debug, Clone, Copy)]
pub struct ViewRules {
    pub default_zoom: f64,
    /// Keep the first search's center and zoom for the rest of the session
    pub lock_center: bool,
}

/// One user interaction, with any external lookups already resolved
#[derive(Debug, Clone)]
pub enum ViewEvent {
    TileSessionResolved(Result<String, String>),
    AddressSearched {
        address: String,
        location: Option<ResolvedLocation>,
    },
    OptionToggled {
        name: String,
        checked: bool,
    },
}

/// Everything the page shows for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub address: String,
    /// Result of the latest search; `None` when it had no match
    pub location: Option<ResolvedLocation>,
    pub map_view: Option<MapView>,
    pub selection: Selection,
    pub tiles: TileStatus,
}

impl ViewState {
    /// Produce the next state for `event`
    pub fn apply(mut self, event: ViewEvent, rules: &ViewRules) -> Self {
        match event {
            ViewEvent::TileSessionResolved(result) => {
                if self.tiles == TileStatus::Pending {
                    self.tiles = match result {
                        Ok(url_template) => TileStatus::Ready { url_template },
                        Err(message) => TileStatus::Failed { message },
                    };
                }
            }
            ViewEvent::AddressSearched { address, location } => {
                if let Some(found) = &location {
                    let keep = rules.lock_center && self.map_view.is_some();
                    if !keep {
                        self.map_view = Some(MapView {
                            lat: found.latitude,
                            lon: found.longitude,
                            zoom: rules.default_zoom,
                        });
                    }
                }
                self.address = address;
                self.location = location;
            }
            ViewEvent::OptionToggled { name, checked } => {
                self.selection.toggle(&name, checked);
            }
        }
        self
    }

    /// The map and the options panel are only shown for a resolved search
    /// on a working tile session
    pub fn map_visible(&self) -> bool {
        !self.address.trim().is_empty()
            && self.tiles.url_template().is_some()
            && self.location.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: ViewRules = ViewRules {
        default_zoom: 17.5,
        lock_center: false,
    };

    fn location(lat: f64, lon: f64) -> ResolvedLocation {
        ResolvedLocation {
            latitude: lat,
            longitude: lon,
            address: format!("{}, {}", lat, lon),
        }
    }

    fn searched(address: &str, location: Option<ResolvedLocation>) -> ViewEvent {
        ViewEvent::AddressSearched {
            address: address.to_string(),
            location,
        }
    }

    fn ready_state() -> ViewState {
        ViewState::default().apply(
            ViewEvent::TileSessionResolved(Ok("https://tiles/{z}/{x}/{y}".to_string())),
            &RULES,
        )
    }

    #[test]
    fn test_tile_failure_is_sticky() {
        let state = ViewState::default()
            .apply(
                ViewEvent::TileSessionResolved(Err("Failed to create session: denied".into())),
                &RULES,
            )
            .apply(
                ViewEvent::TileSessionResolved(Ok("https://tiles".into())),
                &RULES,
            );

        assert_eq!(state.tiles.error(), Some("Failed to create session: denied"));
        assert_eq!(state.tiles.url_template(), None);
    }

    #[test]
    fn test_search_centers_map() {
        let state = ready_state().apply(searched("Main St", Some(location(51.0, -1.0))), &RULES);

        assert!(state.map_visible());
        assert_eq!(
            state.map_view,
            Some(MapView {
                lat: 51.0,
                lon: -1.0,
                zoom: 17.5
            })
        );
    }

    #[test]
    fn test_search_recenters_by_default() {
        let state = ready_state()
            .apply(searched("First", Some(location(51.0, -1.0))), &RULES)
            .apply(searched("Second", Some(location(52.0, -2.0))), &RULES);

        let view = state.map_view.unwrap();
        assert_eq!((view.lat, view.lon), (52.0, -2.0));
    }

    #[test]
    fn test_locked_center_keeps_first_search() {
        let rules = ViewRules {
            lock_center: true,
            ..RULES
        };
        let state = ready_state()
            .apply(searched("First", Some(location(51.0, -1.0))), &rules)
            .apply(searched("Second", Some(location(52.0, -2.0))), &rules);

        let view = state.map_view.unwrap();
        assert_eq!((view.lat, view.lon), (51.0, -1.0));
        // The marker still follows the latest search
        assert_eq!(state.location.unwrap().latitude, 52.0);
    }

    #[test]
    fn test_no_match_hides_map() {
        let state = ready_state()
            .apply(searched("First", Some(location(51.0, -1.0))), &RULES)
            .apply(searched("Nowhere", None), &RULES);

        assert!(!state.map_visible());
        assert_eq!(state.address, "Nowhere");
        assert!(state.location.is_none());
    }

    #[test]
    fn test_map_hidden_without_tiles() {
        let state = ViewState::default().apply(searched("Main St", Some(location(1.0, 2.0))), &RULES);

        assert!(!state.map_visible());
    }

    #[test]
    fn test_selection_survives_searches() {
        let state = ready_state()
            .apply(
                ViewEvent::OptionToggled {
                    name: "Porch".into(),
                    checked: true,
                },
                &RULES,
            )
            .apply(searched("Main St", Some(location(1.0, 2.0))), &RULES);

        assert_eq!(state.selection.current(), Some("Porch"));
    }

    #[test]
    fn test_toggle_events_are_exclusive() {
        let toggle = |name: &str, checked| ViewEvent::OptionToggled {
            name: name.to_string(),
            checked,
        };
        let state = ready_state()
            .apply(toggle("A", true), &RULES)
            .apply(toggle("B", true), &RULES);
        assert_eq!(state.selection.current(), Some("B"));

        let state = state.apply(toggle("A", false), &RULES);
        assert_eq!(state.selection.current(), Some("B"));

        let state = state.apply(toggle("B", false), &RULES);
        assert_eq!(state.selection.current(), None);
    }
}
