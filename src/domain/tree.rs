/// A single street-tree point in WGS84
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl TreeRecord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Position as (lon, lat), the order map layers consume
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
