/// A named camera preset: (lon, lat) center plus a default zoom
#[derive(Debug, Clone, Copy)]
pub struct LocationPreset {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

/// Static preset table. The first entry is the default.
pub const LOCATIONS: &[LocationPreset] = &[
    LocationPreset {
        name: "New York, USA",
        longitude: -73.95,
        latitude: 40.75,
        zoom: 12.0,
    },
    LocationPreset {
        name: "Mount Merapi, Indonesia",
        longitude: 110.44,
        latitude: -7.54,
        zoom: 10.0,
    },
    LocationPreset {
        name: "Mount Bromo, Indonesia",
        longitude: 112.95,
        latitude: -7.92,
        zoom: 11.0,
    },
    LocationPreset {
        name: "Jakarta, Indonesia",
        longitude: 106.85,
        latitude: -6.2,
        zoom: 10.0,
    },
];

impl LocationPreset {
    pub fn default_preset() -> &'static LocationPreset {
        &LOCATIONS[0]
    }

    /// Look up a preset by name, case-insensitively, also accepting the
    /// part before the first comma ("jakarta" matches "Jakarta, Indonesia")
    pub fn find(name: &str) -> Option<&'static LocationPreset> {
        let wanted = name.trim().to_lowercase();
        LOCATIONS.iter().find(|p| {
            let full = p.name.to_lowercase();
            let short = full.split(',').next().unwrap_or(&full).trim().to_string();
            full == wanted || short == wanted
        })
    }

    pub fn center(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_new_york() {
        let preset = LocationPreset::default_preset();
        assert_eq!(preset.longitude, -73.95);
        assert_eq!(preset.latitude, 40.75);
    }

    #[test]
    fn test_find_by_short_name() {
        let preset = LocationPreset::find("jakarta").unwrap();
        assert_eq!(preset.name, "Jakarta, Indonesia");

        let preset = LocationPreset::find("Mount Bromo, Indonesia").unwrap();
        assert_eq!(preset.zoom, 11.0);

        assert!(LocationPreset::find("atlantis").is_none());
    }
}
