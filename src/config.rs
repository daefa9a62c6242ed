use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BullseyeError, Result};
use crate::layout::RingGeometry;

/// Default config filename
pub const CONFIG_FILENAME: &str = "bullseye.toml";

/// Bullseye configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BullseyeConfig {
    /// Canvas and grid geometry
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Bullseye ring boundaries and band interpolation
    #[serde(default)]
    pub rings: RingConfig,

    /// Linear section layout
    #[serde(default)]
    pub linear: LinearConfig,

    /// View transition timing
    #[serde(default)]
    pub transition: TransitionConfig,

    /// Synthetic roster generation
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of the square grid (px)
    pub width: f64,

    /// Grid divisions per side
    pub grid_divisions: u32,

    /// Extra rows below the grid for labels
    pub label_rows: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            grid_divisions: 4,
            label_rows: 1,
        }
    }
}

impl CanvasConfig {
    /// Size of one grid cell
    pub fn cell(&self) -> f64 {
        self.width / f64::from(self.grid_divisions.max(1))
    }

    /// Side of the square grid (without the label rows)
    pub fn grid_size(&self) -> f64 {
        self.cell() * f64::from(self.grid_divisions.max(1))
    }

    /// Full canvas height including label rows
    pub fn height(&self) -> f64 {
        self.cell() * f64::from(self.grid_divisions.max(1) + self.label_rows)
    }
}

/// Ring boundaries are expressed in ring units (one grid cell for the
/// quarter geometry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub geometry: RingGeometry,
    pub practitioner: f64,
    pub explorer: f64,
    pub newcomer: f64,
    pub outsider: f64,
    /// Inner boundary of the practitioner band (keeps members off the centre)
    pub practitioner_inner: f64,
    /// Edge sub-radius, as a fraction of the band thickness
    pub edge_fraction: f64,
    /// Core sub-radius, as a fraction of the band thickness
    pub core_fraction: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            geometry: RingGeometry::Quarter,
            practitioner: 1.0,
            explorer: 2.0,
            newcomer: 3.0,
            outsider: 4.2,
            practitioner_inner: 0.3,
            edge_fraction: 0.35,
            core_fraction: 0.70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    pub column_spacing: f64,
    pub row_spacing: f64,
    /// Distance of the baseline from the bottom of the canvas
    pub baseline_offset: f64,
    /// Gap between the baseline and the first row
    pub stack_lift: f64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            column_spacing: 20.0,
            row_spacing: 25.0,
            baseline_offset: 120.0,
            stack_lift: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Position animation length
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 800 }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms)
    }

    /// Delay between animation start and the background swap
    pub fn decoration_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms / 4)
    }

    /// Fade-in of the new background
    pub fn decoration_fade(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms / 3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
        }
    }
}

impl BullseyeConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BullseyeError::io(path, e))?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `bullseye.toml` if present, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BullseyeError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| BullseyeError::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ============================================================================
    // DEFAULT VALUE TESTS
    // ============================================================================

    #[test]
    fn test_canvas_config_default() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.cell(), 225.0);
        assert_eq!(canvas.grid_size(), 900.0);
        assert_eq!(canvas.height(), 1125.0);
    }

    #[test]
    fn test_ring_config_default() {
        let rings = RingConfig::default();
        assert_eq!(rings.geometry, RingGeometry::Quarter);
        assert!(rings.practitioner < rings.explorer);
        assert!(rings.explorer < rings.newcomer);
        assert!(rings.newcomer < rings.outsider);
        assert_eq!(rings.edge_fraction, 0.35);
        assert_eq!(rings.core_fraction, 0.70);
    }

    #[test]
    fn test_transition_timing() {
        let t = TransitionConfig::default();
        assert_eq!(t.duration().as_millis(), 800);
        assert_eq!(t.decoration_delay().as_millis(), 200);
        assert_eq!(t.decoration_fade().as_millis(), 266);
    }

    #[test]
    fn test_generator_config_default() {
        let g = GeneratorConfig::default();
        assert_eq!(g.count, 100);
        assert_eq!(g.seed, 42);
    }

    // ============================================================================
    // LOAD/SAVE TESTS
    // ============================================================================

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bullseye.toml");

        let mut config = BullseyeConfig::default();
        config.rings.geometry = RingGeometry::Full;
        config.linear.column_spacing = 32.0;
        config.generator.seed = 7;

        config.save(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = BullseyeConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        std::fs::write(&config_path, "[generator]\ncount = 12\n").unwrap();

        let loaded = BullseyeConfig::load(&config_path).unwrap();
        assert_eq!(loaded.generator.count, 12);
        assert_eq!(loaded.generator.seed, 42);
        assert_eq!(loaded.canvas, CanvasConfig::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = BullseyeConfig::load(Path::new("/nonexistent/bullseye.toml"));
        assert!(matches!(result, Err(BullseyeError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");
        std::fs::write(&config_path, "invalid toml content [[[").unwrap();

        let result = BullseyeConfig::load(&config_path);
        assert!(matches!(result, Err(BullseyeError::ConfigParse(_))));
    }

    #[test]
    fn test_save_config_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("bullseye.toml");
        BullseyeConfig::default().save(&nested).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_load_or_default_with_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        std::fs::write(&config_path, "[transition]\nduration_ms = 400\n").unwrap();

        let loaded = BullseyeConfig::load_or_default(Some(&config_path)).unwrap();
        assert_eq!(loaded.transition.duration_ms, 400);
    }
}
