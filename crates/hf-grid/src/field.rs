//! Dense 2D temperature field.

use crate::boundary::BoundaryTemps;
use crate::error::{GridError, GridResult};
use hf_core::Real;
use nalgebra::DMatrix;

/// nx x ny temperature field indexed by (i, j), i along x and j along y.
///
/// Boundary cells (i == 0, i == nx-1, j == 0, j == ny-1) hold fixed
/// Dirichlet values and are never written after initialization; only
/// interior cells are updated by relaxation sweeps.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    nx: usize,
    ny: usize,
    values: DMatrix<Real>,
}

impl TemperatureField {
    /// Allocate an nx x ny field and populate it from the edge temperatures.
    ///
    /// Per-cell edge precedence: left, right, bottom, top. The corners on
    /// i == 0 therefore take the left value and the corners on i == nx-1
    /// the right value, regardless of what top/bottom are set to.
    pub fn initialized(nx: usize, ny: usize, temps: &BoundaryTemps) -> GridResult<Self> {
        if nx < 2 {
            return Err(GridError::InvalidDimension {
                axis: "nx",
                points: nx,
            });
        }
        if ny < 2 {
            return Err(GridError::InvalidDimension {
                axis: "ny",
                points: ny,
            });
        }

        let mut values = DMatrix::zeros(nx, ny);
        for i in 0..nx {
            for j in 0..ny {
                values[(i, j)] = if i == 0 {
                    temps.left
                } else if i == nx - 1 {
                    temps.right
                } else if j == 0 {
                    temps.bottom
                } else if j == ny - 1 {
                    temps.top
                } else {
                    0.0
                };
            }
        }

        Ok(Self { nx, ny, values })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.values[(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Real) {
        self.values[(i, j)] = value;
    }

    /// Overwrite every cell from `other`. Both fields must have the same
    /// dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        self.values.copy_from(&other.values);
    }

    /// One output row (fixed i), values in ascending j.
    pub fn row(&self, i: usize) -> Vec<Real> {
        (0..self.ny).map(|j| self.values[(i, j)]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> BoundaryTemps {
        BoundaryTemps {
            top: 100.0,
            bottom: 0.0,
            left: 50.0,
            right: 75.0,
        }
    }

    #[test]
    fn edges_take_configured_values() {
        let field = TemperatureField::initialized(4, 5, &mixed()).unwrap();
        for j in 1..4 {
            assert_eq!(field.get(0, j), 50.0);
            assert_eq!(field.get(3, j), 75.0);
        }
        for i in 1..3 {
            assert_eq!(field.get(i, 0), 0.0);
            assert_eq!(field.get(i, 4), 100.0);
        }
    }

    #[test]
    fn interior_seeds_to_zero() {
        let field = TemperatureField::initialized(4, 5, &mixed()).unwrap();
        for i in 1..3 {
            for j in 1..4 {
                assert_eq!(field.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn corner_cells_take_left_right_values() {
        let field = TemperatureField::initialized(4, 5, &mixed()).unwrap();
        assert_eq!(field.get(0, 0), 50.0);
        assert_eq!(field.get(0, 4), 50.0);
        assert_eq!(field.get(3, 0), 75.0);
        assert_eq!(field.get(3, 4), 75.0);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let temps = BoundaryTemps::uniform(1.0);
        assert!(matches!(
            TemperatureField::initialized(1, 5, &temps),
            Err(GridError::InvalidDimension {
                axis: "nx",
                points: 1
            })
        ));
        assert!(matches!(
            TemperatureField::initialized(5, 0, &temps),
            Err(GridError::InvalidDimension {
                axis: "ny",
                points: 0
            })
        ));
    }

    #[test]
    fn row_export_is_j_ascending() {
        let field = TemperatureField::initialized(3, 3, &mixed()).unwrap();
        assert_eq!(field.row(0), vec![50.0, 50.0, 50.0]);
        assert_eq!(field.row(1), vec![0.0, 0.0, 100.0]);
        assert_eq!(field.row(2), vec![75.0, 75.0, 75.0]);
    }
}
