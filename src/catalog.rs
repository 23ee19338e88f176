//! Preset materials, grid configurations, and layered subsurface profiles.
//!
//! Configuration collaborators for scenario assembly; the solver itself only
//! ever sees the validated [`Material`] and [`Grid`] values built from them.

use serde::Serialize;

use crate::medium::{Grid, Material};
use crate::Error;

/// Broad grouping of the preset materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialCategory {
    Atmospheric,
    Soil,
    Liquid,
    Construction,
    Metal,
}

/// One record of the material database.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaterialPreset {
    pub name: &'static str,
    pub epsilon_r: f64,
    pub sigma: f64,
    pub mu_r: f64,
    pub category: MaterialCategory,
}

/// Electromagnetic material database for subsurface sensing.
pub const MATERIALS: &[MaterialPreset] = &[
    MaterialPreset {
        name: "Air",
        epsilon_r: 1.0006,
        sigma: 0.0,
        mu_r: 1.0,
        category: MaterialCategory::Atmospheric,
    },
    MaterialPreset {
        name: "Dry Soil",
        epsilon_r: 3.0,
        sigma: 0.001,
        mu_r: 1.0,
        category: MaterialCategory::Soil,
    },
    MaterialPreset {
        name: "Moist Soil",
        epsilon_r: 10.0,
        sigma: 0.02,
        mu_r: 1.0,
        category: MaterialCategory::Soil,
    },
    MaterialPreset {
        name: "Wet Soil",
        epsilon_r: 20.0,
        sigma: 0.1,
        mu_r: 1.0,
        category: MaterialCategory::Soil,
    },
    MaterialPreset {
        name: "Dry Sand",
        epsilon_r: 2.5,
        sigma: 0.0001,
        mu_r: 1.0,
        category: MaterialCategory::Soil,
    },
    MaterialPreset {
        name: "Clay",
        epsilon_r: 15.0,
        sigma: 0.5,
        mu_r: 1.0,
        category: MaterialCategory::Soil,
    },
    MaterialPreset {
        name: "Fresh Water",
        epsilon_r: 80.0,
        sigma: 0.01,
        mu_r: 1.0,
        category: MaterialCategory::Liquid,
    },
    MaterialPreset {
        name: "Sea Water",
        epsilon_r: 80.0,
        sigma: 4.0,
        mu_r: 1.0,
        category: MaterialCategory::Liquid,
    },
    MaterialPreset {
        name: "Concrete",
        epsilon_r: 6.0,
        sigma: 0.01,
        mu_r: 1.0,
        category: MaterialCategory::Construction,
    },
    MaterialPreset {
        name: "Asphalt",
        epsilon_r: 5.0,
        sigma: 0.02,
        mu_r: 1.0,
        category: MaterialCategory::Construction,
    },
    MaterialPreset {
        name: "Brick",
        epsilon_r: 4.5,
        sigma: 0.02,
        mu_r: 1.0,
        category: MaterialCategory::Construction,
    },
    MaterialPreset {
        name: "Aluminum",
        epsilon_r: 1.0,
        sigma: 3.5e7,
        mu_r: 1.0,
        category: MaterialCategory::Metal,
    },
    MaterialPreset {
        name: "Copper",
        epsilon_r: 1.0,
        sigma: 5.8e7,
        mu_r: 1.0,
        category: MaterialCategory::Metal,
    },
    MaterialPreset {
        name: "Steel",
        epsilon_r: 1.0,
        sigma: 1e6,
        mu_r: 100.0,
        category: MaterialCategory::Metal,
    },
];

/// Builds the validated [`Material`] for a database entry.
pub fn material(name: &str) -> Result<Material, Error> {
    let preset = MATERIALS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| Error::UnknownMaterial(name.to_string()))?;

    Material::new(preset.name, preset.epsilon_r, preset.mu_r, preset.sigma)
}

/// A named grid configuration.
#[derive(Debug, Clone, Copy)]
pub struct GridPreset {
    pub name: &'static str,
    pub nx: usize,
    pub nt: usize,
    pub dx: f64,
}

pub const GRID_PRESETS: &[GridPreset] = &[
    GridPreset {
        name: "Small Test",
        nx: 200,
        nt: 400,
        dx: 1e-3,
    },
    GridPreset {
        name: "Standard GPR",
        nx: 400,
        nt: 800,
        dx: 1e-3,
    },
    GridPreset {
        name: "High Resolution",
        nx: 800,
        nt: 1500,
        dx: 5e-4,
    },
];

/// Radar center-frequency presets (Hz).
pub const RADAR_FREQUENCIES: &[(&str, f64)] = &[
    ("Low Frequency (50 MHz)", 50e6),
    ("Medium Frequency (250 MHz)", 250e6),
    ("High Frequency (1 GHz)", 1e9),
];

/// Recommended Courant stability safety factor.
pub const CFL_SAFETY_FACTOR: f64 = 0.99;

/// A predefined layered subsurface, in cell-index spans.
#[derive(Debug, Clone, Copy)]
pub struct LayerProfile {
    pub name: &'static str,
    /// `(first_cell, last_cell, material_name)` spans.
    pub layers: &'static [(usize, usize, &'static str)],
}

pub const LAYER_PROFILES: &[LayerProfile] = &[
    LayerProfile {
        name: "Air-Soil",
        layers: &[(0, 150, "Air"), (150, 400, "Dry Soil")],
    },
    LayerProfile {
        name: "Air-MoistSoil",
        layers: &[(0, 150, "Air"), (150, 400, "Moist Soil")],
    },
    LayerProfile {
        name: "Air-Concrete",
        layers: &[(0, 100, "Air"), (100, 400, "Concrete")],
    },
    LayerProfile {
        name: "Road Structure",
        layers: &[(0, 80, "Air"), (80, 200, "Asphalt"), (200, 400, "Dry Soil")],
    },
];

/// Looks up a predefined profile by name.
pub fn profile(name: &str) -> Option<&'static LayerProfile> {
    LAYER_PROFILES.iter().find(|profile| profile.name == name)
}

/// Assigns a profile's layers to the grid, in order.
///
/// Spans are given in cell indices and clamped to the grid's extent, so a
/// profile written for a 400-cell domain also applies to a shorter one.
pub fn apply_profile(grid: &mut Grid, profile: &LayerProfile) -> Result<(), Error> {
    for &(first, last, material_name) in profile.layers {
        let start = first as f64 * grid.dx();
        let end = (last as f64 * grid.dx()).min(grid.max_x());
        if start >= end {
            continue;
        }

        let layer_material = material(material_name)?;
        grid.add_layer(start, end, &layer_material)?;
    }

    Ok(())
}
