use crate::domain::TreeRecord;

/// A tree record extended with synthetic microclimate scalars.
///
/// Temperature and AQI are deterministic placeholders derived from the
/// record's index in the shaped sequence, not measurements:
///   temperature = 30 - (index mod 5)
///   aqi         = 100 - (index mod 50)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateSample {
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub aqi: f64,
}

impl ClimateSample {
    pub fn from_record(record: &TreeRecord, index: usize) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            temperature: 30.0 - (index % 5) as f64,
            aqi: 100.0 - (index % 50) as f64,
        }
    }

    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_cycles_every_5() {
        let tree = TreeRecord::new(40.75, -73.95);
        assert_eq!(ClimateSample::from_record(&tree, 0).temperature, 30.0);
        assert_eq!(ClimateSample::from_record(&tree, 4).temperature, 26.0);
        assert_eq!(ClimateSample::from_record(&tree, 5).temperature, 30.0);
        assert_eq!(ClimateSample::from_record(&tree, 7).temperature, 28.0);
    }

    #[test]
    fn test_aqi_cycles_every_50() {
        let tree = TreeRecord::new(40.75, -73.95);
        assert_eq!(ClimateSample::from_record(&tree, 0).aqi, 100.0);
        assert_eq!(ClimateSample::from_record(&tree, 49).aqi, 51.0);
        assert_eq!(ClimateSample::from_record(&tree, 50).aqi, 100.0);
    }

    #[test]
    fn test_sample_keeps_coordinates() {
        let tree = TreeRecord::new(40.75, -73.95);
        let sample = ClimateSample::from_record(&tree, 3);
        assert_eq!(sample.latitude, 40.75);
        assert_eq!(sample.longitude, -73.95);
    }
}
