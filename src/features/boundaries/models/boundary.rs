/// Polygon vertices as parallel latitude/longitude sequences, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryPolygon {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
}

impl BoundaryPolygon {
    pub fn len(&self) -> usize {
        self.lats.len()
    }
}
