mod option_handler;

pub use option_handler::*;
