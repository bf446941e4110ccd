//! Common view over the results of the direct solvers

use crate::config::Method;
use math_linsys_matrix::Scalar;
use ndarray::Array1;

/// Implemented by every solver result so accuracy checks can treat them
/// alike.
pub trait LinearSystemSolution<T: Scalar> {
    /// Method that produced this result
    fn method(&self) -> Method;

    /// Solution vector in original variable order
    fn solution(&self) -> &Array1<T>;

    /// Number of unknowns
    fn size(&self) -> usize {
        self.solution().len()
    }

    /// `false` if any component is `Inf` or `NaN`
    fn is_finite(&self) -> bool {
        self.solution().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::{gauss_solve, householder_solve};
    use ndarray::array;

    #[test]
    fn test_solutions_share_interface() {
        let a = array![[2.0_f64, 1.0], [1.0, 2.0]];
        let b = array![[3.0_f64], [3.0]];

        let gauss = gauss_solve(&mut a.clone(), &mut b.clone()).unwrap();
        let qr = householder_solve(&mut a.clone(), &mut b.clone()).unwrap();

        let results: [&dyn LinearSystemSolution<f64>; 2] = [&gauss, &qr];
        assert_eq!(results[0].method(), Method::Gauss);
        assert_eq!(results[1].method(), Method::Householder);
        for r in results {
            assert_eq!(r.size(), 2);
            assert!(r.is_finite());
        }
    }

    #[test]
    fn test_is_finite_detects_nan() {
        let mut a = array![[0.0_f64]];
        let mut b = array![[0.0_f64]];
        let gauss = gauss_solve(&mut a, &mut b).unwrap();
        assert!(!gauss.is_finite());
    }
}
