mod tile_session_service;

pub use tile_session_service::TileSessionService;
