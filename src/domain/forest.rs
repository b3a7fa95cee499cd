/// A forest area outline as an ordered ring of (lon, lat) vertices
#[derive(Debug, Clone)]
pub struct ForestPolygon {
    pub ring: Vec<[f64; 2]>,
}

impl ForestPolygon {
    pub fn new(ring: Vec<[f64; 2]>) -> Self {
        Self { ring }
    }

    pub fn is_valid(&self) -> bool {
        self.ring.len() >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_ring_is_invalid() {
        let polygon = ForestPolygon::new(vec![[-73.95, 40.75], [-73.94, 40.75]]);
        assert!(!polygon.is_valid());

        let polygon = ForestPolygon::new(vec![
            [-73.95, 40.75],
            [-73.94, 40.75],
            [-73.94, 40.76],
        ]);
        assert!(polygon.is_valid());
    }
}
