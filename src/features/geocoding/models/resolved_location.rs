/// First geocoder match for a free-text address
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Normalized address as reported by the geocoder
    pub address: String,
}
