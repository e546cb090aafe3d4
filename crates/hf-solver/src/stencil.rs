//! Five-point finite-difference stencil coefficients.

use hf_core::Real;

/// Coefficients derived from the domain length and the grid dimensions.
///
/// `k` is the diagonal coefficient of the 5-point stencil,
/// 2*(dx^2 + dy^2) / (dx^2 * dy^2); a cell update is the neighbor sum
/// weighted by 1/dx^2 and 1/dy^2, divided by `k`.
#[derive(Debug, Clone, Copy)]
pub struct StencilCoeffs {
    pub dx2: Real,
    pub dy2: Real,
    pub k: Real,
}

impl StencilCoeffs {
    /// Spacings follow from placing nx (ny) points across a square domain
    /// of side `domain_length`: dx = L/(nx-1), dy = L/(ny-1). Callers
    /// guarantee nx, ny >= 2 (enforced at field construction).
    pub fn new(domain_length: Real, nx: usize, ny: usize) -> Self {
        let dx = domain_length / (nx - 1) as Real;
        let dy = domain_length / (ny - 1) as Real;
        let dx2 = dx * dx;
        let dy2 = dy * dy;
        Self {
            dx2,
            dy2,
            k: 2.0 * (dx2 + dy2) / (dx2 * dy2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_three_points() {
        // dx = dy = 0.5, so k = 2 * 0.5 / 0.0625 = 16.
        let coeffs = StencilCoeffs::new(1.0, 3, 3);
        assert_eq!(coeffs.dx2, 0.25);
        assert_eq!(coeffs.dy2, 0.25);
        assert_eq!(coeffs.k, 16.0);
    }

    #[test]
    fn anisotropic_spacing() {
        let coeffs = StencilCoeffs::new(2.0, 5, 3);
        // dx = 0.5, dy = 1.0
        assert!((coeffs.dx2 - 0.25).abs() < 1e-15);
        assert!((coeffs.dy2 - 1.0).abs() < 1e-15);
        assert!((coeffs.k - 2.0 * 1.25 / 0.25).abs() < 1e-12);
    }
}
