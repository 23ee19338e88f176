use crate::medium::Material;
use crate::Error;

/// A 1-D spatial domain holding per-cell material properties.
///
/// Cell `i` sits at coordinate `i * dx`. Layer and object assignment
/// overwrite the per-cell arrays in place; later calls win on overlap.
pub struct Grid {
    nx: usize,
    dx: f64,
    x: ndarray::Array1<f64>,
    background: Material,
    epsilon_r: ndarray::Array1<f64>,
    sigma: ndarray::Array1<f64>,
}

impl Grid {
    /// Creates a grid filled with the background material.
    pub fn new(nx: usize, dx: f64, background: Material) -> Result<Self, Error> {
        if nx == 0 {
            return Err(Error::InvalidParameter {
                name: "nx",
                message: "cell count must be positive".to_string(),
            });
        }
        if dx <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "dx",
                message: format!("spatial step must be positive ( got {dx} )"),
            });
        }

        let x = ndarray::Array1::from_iter((0..nx).map(|i| i as f64 * dx));
        let epsilon_r = ndarray::Array1::from_elem(nx, background.epsilon_r());
        let sigma = ndarray::Array1::from_elem(nx, background.sigma());

        Ok(Self {
            nx,
            dx,
            x,
            background,
            epsilon_r,
            sigma,
        })
    }

    /// Creates a grid with a free-space background.
    pub fn free_space(nx: usize, dx: f64) -> Result<Self, Error> {
        Self::new(nx, dx, Material::free_space())
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell coordinates.
    pub fn x(&self) -> &ndarray::Array1<f64> {
        &self.x
    }

    /// The largest cell coordinate, `(nx - 1) * dx`.
    pub fn max_x(&self) -> f64 {
        self.x[self.nx - 1]
    }

    pub fn background(&self) -> &Material {
        &self.background
    }

    pub fn epsilon_r(&self) -> &ndarray::Array1<f64> {
        &self.epsilon_r
    }

    pub fn sigma(&self) -> &ndarray::Array1<f64> {
        &self.sigma
    }

    /// Assigns `material` to every cell whose coordinate lies in
    /// `[start, end]`, both ends inclusive.
    ///
    /// Validation happens before any array mutation, so a failed call leaves
    /// the grid untouched.
    pub fn add_layer(&mut self, start: f64, end: f64, material: &Material) -> Result<(), Error> {
        if start < 0.0 || end > self.max_x() || start >= end {
            return Err(Error::InvalidRange {
                start,
                end,
                message: format!(
                    "layer must satisfy 0 <= start < end <= {:.6}",
                    self.max_x()
                ),
            });
        }

        ndarray::Zip::from(&self.x)
            .and(&mut self.epsilon_r)
            .and(&mut self.sigma)
            .for_each(|&x, eps_r, sig| {
                if x >= start && x <= end {
                    *eps_r = material.epsilon_r();
                    *sig = material.sigma();
                }
            });

        Ok(())
    }

    /// Embeds an object of the given width centered at `center`.
    pub fn embed_object(&mut self, center: f64, width: f64, material: &Material) -> Result<(), Error> {
        if width <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "width",
                message: format!("object width must be positive ( got {width} )"),
            });
        }

        self.add_layer(center - width / 2.0, center + width / 2.0, material)
    }

    /// Restores every cell to the background material.
    pub fn reset_medium(&mut self) {
        self.epsilon_r.fill(self.background.epsilon_r());
        self.sigma.fill(self.background.sigma());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn soil() -> Material {
        Material::new("Dry Soil", 3.0, 1.0, 0.001).unwrap()
    }

    #[test]
    fn starts_as_background() {
        let grid = Grid::new(100, 1e-3, Material::new("Air", 1.0006, 1.0, 0.0).unwrap()).unwrap();
        assert_eq!(grid.nx(), 100);
        assert_relative_eq!(grid.max_x(), 0.099);
        for i in 0..100 {
            assert_relative_eq!(grid.epsilon_r()[i], 1.0006);
            assert_relative_eq!(grid.sigma()[i], 0.0);
        }
    }

    #[test]
    fn layer_assignment_is_inclusive() {
        let mut grid = Grid::free_space(100, 1e-3).unwrap();
        grid.add_layer(0.010, 0.020, &soil()).unwrap();

        assert_relative_eq!(grid.epsilon_r()[9], 1.0);
        assert_relative_eq!(grid.epsilon_r()[10], 3.0);
        assert_relative_eq!(grid.epsilon_r()[20], 3.0);
        assert_relative_eq!(grid.epsilon_r()[21], 1.0);
        assert_relative_eq!(grid.sigma()[15], 0.001);
    }

    #[test]
    fn later_assignment_wins() {
        let mut grid = Grid::free_space(100, 1e-3).unwrap();
        let clay = Material::new("Clay", 15.0, 1.0, 0.5).unwrap();

        grid.add_layer(0.010, 0.050, &soil()).unwrap();
        grid.add_layer(0.030, 0.060, &clay).unwrap();

        assert_relative_eq!(grid.epsilon_r()[20], 3.0);
        assert_relative_eq!(grid.epsilon_r()[40], 15.0);
    }

    #[test]
    fn invalid_layer_leaves_grid_unchanged() {
        let mut grid = Grid::free_space(100, 1e-3).unwrap();
        let before = grid.epsilon_r().clone();

        assert!(grid.add_layer(-0.001, 0.020, &soil()).is_err());
        assert!(grid.add_layer(0.010, 0.200, &soil()).is_err());
        assert!(grid.add_layer(0.020, 0.020, &soil()).is_err());
        assert!(grid.add_layer(0.030, 0.020, &soil()).is_err());

        assert_eq!(grid.epsilon_r(), &before);
    }

    #[test]
    fn embedded_object_spans_width() {
        let mut grid = Grid::free_space(400, 1e-3).unwrap();
        let metal = Material::new("Aluminum", 1.0, 1.0, 3.5e7).unwrap();

        grid.embed_object(0.200, 0.020, &metal).unwrap();

        assert_relative_eq!(grid.sigma()[189], 0.0);
        assert_relative_eq!(grid.sigma()[190], 3.5e7);
        assert_relative_eq!(grid.sigma()[210], 3.5e7);
        assert_relative_eq!(grid.sigma()[211], 0.0);
    }

    #[test]
    fn object_validation() {
        let mut grid = Grid::free_space(100, 1e-3).unwrap();
        assert!(grid.embed_object(0.050, 0.0, &soil()).is_err());
        assert!(grid.embed_object(0.050, -0.01, &soil()).is_err());
        assert!(grid.embed_object(0.001, 0.010, &soil()).is_err());
    }

    #[test]
    fn reset_restores_background() {
        let mut grid = Grid::free_space(100, 1e-3).unwrap();
        grid.add_layer(0.010, 0.090, &soil()).unwrap();
        grid.reset_medium();

        for i in 0..100 {
            assert_relative_eq!(grid.epsilon_r()[i], 1.0);
            assert_relative_eq!(grid.sigma()[i], 0.0);
        }
    }

    #[test]
    fn degenerate_grids_rejected() {
        assert!(Grid::free_space(0, 1e-3).is_err());
        assert!(Grid::free_space(100, 0.0).is_err());
    }
}
