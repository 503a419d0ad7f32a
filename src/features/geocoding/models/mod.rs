mod resolved_location;

pub use resolved_location::ResolvedLocation;
