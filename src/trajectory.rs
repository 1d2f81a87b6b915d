//! Integrated trajectory: time grid plus the `u` and `w` sequences.
//!
//! A trajectory is filled once by the integrator and is read-only
//! afterwards.

use ndarray::Array1;

use crate::systems::{FhnParams, FhnState};

/// Result of a FitzHugh-Nagumo run
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    params: FhnParams,
    time: Array1<f64>,
    u: Array1<f64>,
    w: Array1<f64>,
}

impl Trajectory {
    pub(crate) fn from_parts(
        params: FhnParams,
        time: Array1<f64>,
        u: Array1<f64>,
        w: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(time.len(), u.len());
        debug_assert_eq!(time.len(), w.len());
        Self { params, time, u, w }
    }

    /// Parameters the trajectory was integrated with
    pub fn params(&self) -> &FhnParams {
        &self.params
    }

    /// Number of grid points N
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time grid
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Membrane potential sequence
    pub fn u(&self) -> &Array1<f64> {
        &self.u
    }

    /// Adaptation sequence
    pub fn w(&self) -> &Array1<f64> {
        &self.w
    }

    /// State at grid index `k`
    pub fn state_at(&self, k: usize) -> Option<FhnState> {
        if k < self.len() {
            Some(FhnState {
                u: self.u[k],
                w: self.w[k],
            })
        } else {
            None
        }
    }

    /// Rows of (t, u, w)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.u.iter())
            .zip(self.w.iter())
            .map(|((&t, &u), &w)| (t, u, w))
    }

    /// (min, max) of the potential
    pub fn u_range(&self) -> (f64, f64) {
        min_max(&self.u)
    }

    /// (min, max) of the adaptation variable
    pub fn w_range(&self) -> (f64, f64) {
        min_max(&self.w)
    }

    /// Peak-to-peak potential over the whole run
    pub fn amplitude(&self) -> f64 {
        let (lo, hi) = self.u_range();
        hi - lo
    }
}

fn min_max(values: &Array1<f64>) -> (f64, f64) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> Trajectory {
        Trajectory::from_parts(
            FhnParams::new(0.01, 0.1, 1.0, 0.2, 0.1),
            array![0.0, 0.1, 0.2],
            array![0.0, 0.4, -0.3],
            array![0.0, 0.01, 0.02],
        )
    }

    #[test]
    fn test_accessors() {
        let traj = sample();
        assert_eq!(traj.len(), 3);
        assert!(!traj.is_empty());
        assert_eq!(traj.params().dt, 0.1);
        assert_eq!(traj.state_at(1), Some(FhnState { u: 0.4, w: 0.01 }));
        assert_eq!(traj.state_at(3), None);
    }

    #[test]
    fn test_ranges_and_amplitude() {
        let traj = sample();
        assert_eq!(traj.u_range(), (-0.3, 0.4));
        assert_eq!(traj.w_range(), (0.0, 0.02));
        assert!((traj.amplitude() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_rows() {
        let rows: Vec<_> = sample().iter().collect();
        assert_eq!(rows[2], (0.2, -0.3, 0.02));
        assert_eq!(rows.len(), 3);
    }
}
