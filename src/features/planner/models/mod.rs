mod selection;
mod view_state;

pub use selection::Selection;
pub use view_state::{TileStatus, ViewEvent, ViewRules, ViewState};
