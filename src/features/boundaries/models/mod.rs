mod boundary;

pub use boundary::BoundaryPolygon;
