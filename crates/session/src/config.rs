/// Static map configuration shared by surface implementations.
///
/// Carries no logic; defaults match the viewer this engine drives.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// ZXY tile URL template.
    pub tile_url: String,
    pub heat: HeatOptions,
    pub accident_icon: IconOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            min_zoom: 10,
            max_zoom: 15,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            heat: HeatOptions::default(),
            accident_icon: IconOptions::default(),
        }
    }
}

/// Density layer tuning: gradient stops (position 0..=1, CSS color) and the
/// point weight mapped to full intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatOptions {
    pub max_intensity: f64,
    pub gradient: Vec<(f64, &'static str)>,
}

impl Default for HeatOptions {
    fn default() -> Self {
        Self {
            max_intensity: 0.2,
            gradient: vec![(0.1, "blue"), (0.2, "lime"), (1.0, "red")],
        }
    }
}

/// Marker icon asset and its on-screen size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct IconOptions {
    pub asset: String,
    pub size_px: [u32; 2],
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            asset: "image/accident.png".to_string(),
            size_px: [32, 32],
        }
    }
}
