use crate::config::Controls;
use crate::domain::ClimateSample;
use crate::layers::LayerDescriptor;
use crate::layers::canopy::{ScatterPoint, ScatterplotLayer};

/// Standard AQI band colors, good/moderate/unhealthy-sensitive/unhealthy/
/// very-unhealthy/hazardous
const AQI_GOOD: [u8; 4] = [0, 228, 0, 200];
const AQI_MODERATE: [u8; 4] = [255, 255, 0, 200];
const AQI_SENSITIVE: [u8; 4] = [255, 126, 0, 200];
const AQI_UNHEALTHY: [u8; 4] = [255, 0, 0, 200];
const AQI_VERY_UNHEALTHY: [u8; 4] = [143, 63, 151, 200];
const AQI_HAZARDOUS: [u8; 4] = [126, 0, 35, 200];

/// Map an AQI value onto the standard band colors
pub fn aqi_color(aqi: f64) -> [u8; 4] {
    if aqi <= 50.0 {
        AQI_GOOD
    } else if aqi <= 100.0 {
        AQI_MODERATE
    } else if aqi <= 150.0 {
        AQI_SENSITIVE
    } else if aqi <= 200.0 {
        AQI_UNHEALTHY
    } else if aqi <= 300.0 {
        AQI_VERY_UNHEALTHY
    } else {
        AQI_HAZARDOUS
    }
}

/// Scatter layer over sample positions, colored by the derived AQI column
pub fn build_air_quality_layer(
    samples: &[ClimateSample],
    controls: &Controls,
) -> Option<LayerDescriptor> {
    if samples.is_empty() {
        return None;
    }

    let data = samples
        .iter()
        .map(|sample| ScatterPoint {
            position: sample.position(),
            fill_color: aqi_color(sample.aqi),
            aqi: Some(sample.aqi),
        })
        .collect();

    Some(LayerDescriptor::Scatterplot(ScatterplotLayer {
        id: "air-quality".to_string(),
        data,
        radius: controls.radius as f64,
        radius_min_pixels: 2,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TreeRecord;

    #[test]
    fn test_empty_rows_yield_no_layer() {
        assert!(build_air_quality_layer(&[], &Controls::default()).is_none());
    }

    #[test]
    fn test_aqi_band_thresholds() {
        assert_eq!(aqi_color(40.0), AQI_GOOD);
        assert_eq!(aqi_color(50.0), AQI_GOOD);
        assert_eq!(aqi_color(51.0), AQI_MODERATE);
        assert_eq!(aqi_color(100.0), AQI_MODERATE);
        assert_eq!(aqi_color(175.0), AQI_UNHEALTHY);
        assert_eq!(aqi_color(500.0), AQI_HAZARDOUS);
    }

    #[test]
    fn test_rows_carry_the_aqi_column() {
        let tree = TreeRecord::new(40.75, -73.95);
        let samples = vec![ClimateSample::from_record(&tree, 49)];

        let layer = build_air_quality_layer(&samples, &Controls::default()).unwrap();
        let LayerDescriptor::Scatterplot(scatter) = layer else {
            panic!("expected a scatterplot layer");
        };
        assert_eq!(scatter.data[0].aqi, Some(51.0));
        assert_eq!(scatter.data[0].fill_color, AQI_MODERATE);
    }
}
