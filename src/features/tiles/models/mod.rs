mod tile_session;

pub use tile_session::{CreateSessionRequest, CreateSessionResponse, TileSession};
