//! FitzHugh-Nagumo Model: Excitable Membrane with Cubic Thresholds
//!
//! Two-variable reduction of excitable-membrane dynamics with a cubic
//! nullcline whose zeros sit at 0, 1/2 and 1:
//!
//!   du/dt = u·(u - 1/2)·(1 - u) - w + I
//!   dw/dt = ε·(u - γ·w)
//!
//! where:
//! - u: membrane potential (fast variable)
//! - w: adaptation variable (slow variable)
//! - ε: adaptation rate (timescale separation)
//! - γ: adaptation strength
//! - I: input stimulus current
//!
//! ## Thresholds
//!
//! With I = 0 and w = 0 the fixed points u = 0 and u = 1 are stable and
//! u = 1/2 is the excitation threshold between them. Changing the cubic
//! (its sign or the 1/2 constant) moves that boundary and changes the
//! qualitative dynamics.
//!
//! ## Integration
//!
//! Explicit Euler with a fixed step Δt. Each state depends only on its
//! immediate predecessor, so a run is a single left-to-right pass.
//!
//! ## References
//!
//! - FitzHugh, R. (1961). Impulses and physiological states in theoretical
//!   models of nerve membrane. Biophysical Journal, 1(6), 445-466.
//! - Nagumo, J., et al. (1962). An active pulse transmission line
//!   simulating nerve axon. Proceedings of the IRE, 50(10), 2061-2070.

use ndarray::Array1;

use super::traits::DynamicalSystem;
use crate::error::{Error, Result};
use crate::trajectory::Trajectory;

/// Parameters of a single FitzHugh-Nagumo run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FhnParams {
    /// Adaptation rate ε
    pub epsilon: f64,
    /// Adaptation strength γ
    pub gamma: f64,
    /// Input stimulus current I
    pub current: f64,
    /// Total duration T
    pub duration: f64,
    /// Integration timestep Δt
    pub dt: f64,
}

impl Default for FhnParams {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            gamma: 0.1,
            current: 1.0,
            duration: 100.0,
            dt: 0.01,
        }
    }
}

impl FhnParams {
    pub fn new(epsilon: f64, gamma: f64, current: f64, duration: f64, dt: f64) -> Self {
        Self {
            epsilon,
            gamma,
            current,
            duration,
            dt,
        }
    }

    /// Check the time grid parameters.
    ///
    /// T and Δt must be finite and positive, and T/Δt must round to at
    /// least one step. The size of the grid is not bounded here.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(Error::invalid(
                "duration",
                self.duration,
                "must be finite and positive",
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::invalid("dt", self.dt, "must be finite and positive"));
        }

        let steps = (self.duration / self.dt).round();
        // N = steps + 1 must be representable
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(Error::invalid("dt", self.dt, "too small for the duration"));
        }
        if steps < 1.0 {
            return Err(Error::invalid(
                "dt",
                self.dt,
                "time grid needs at least two points",
            ));
        }
        Ok(())
    }

    /// Number of grid points N = round(T/Δt) + 1
    pub fn n_points(&self) -> Result<usize> {
        self.validate()?;
        Ok((self.duration / self.dt).round() as usize + 1)
    }

    /// Vector field (du/dt, dw/dt) at a state
    pub fn derivatives(&self, state: FhnState) -> (f64, f64) {
        let FhnState { u, w } = state;
        let du = u * (u - 0.5) * (1.0 - u) - w + self.current;
        let dw = self.epsilon * (u - self.gamma * w);
        (du, dw)
    }

    /// One explicit Euler step from `state`
    pub fn euler_step(&self, state: FhnState) -> FhnState {
        let (du, dw) = self.derivatives(state);
        FhnState {
            u: state.u + self.dt * du,
            w: state.w + self.dt * dw,
        }
    }
}

/// Point in the (u, w) phase plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FhnState {
    /// Membrane potential
    pub u: f64,
    /// Adaptation variable
    pub w: f64,
}

/// Single FitzHugh-Nagumo membrane advanced step by step
#[derive(Debug, Clone)]
pub struct FitzHughNagumoSystem {
    params: FhnParams,
    state: FhnState,
    /// Steps taken so far
    steps: usize,
}

impl FitzHughNagumoSystem {
    /// Create a system at rest (u = w = 0)
    pub fn new(params: FhnParams) -> Result<Self> {
        Self::with_state(params, FhnState::default())
    }

    /// Create a system starting from an arbitrary initial condition
    pub fn with_state(params: FhnParams, state: FhnState) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            state,
            steps: 0,
        })
    }

    pub fn params(&self) -> &FhnParams {
        &self.params
    }

    /// Membrane potential
    pub fn potential(&self) -> f64 {
        self.state.u
    }

    /// Adaptation variable
    pub fn adaptation(&self) -> f64 {
        self.state.w
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl DynamicalSystem for FitzHughNagumoSystem {
    type State = FhnState;

    fn step(&mut self) {
        self.state = self.params.euler_step(self.state);
        self.steps += 1;
    }

    fn state(&self) -> FhnState {
        self.state
    }

    fn time(&self) -> f64 {
        self.steps as f64 * self.params.dt
    }

    fn state_dimension(&self) -> usize {
        2 // (u, w) plane
    }
}

/// Integrate from rest over the whole time grid.
///
/// Returns the grid `time[k] = k·T/(N-1)` together with `u` and `w`, all
/// of length N = round(T/Δt) + 1 and starting at `u[0] = w[0] = 0`.
/// Parameters are validated before anything is allocated.
pub fn integrate(params: &FhnParams) -> Result<Trajectory> {
    let n = params.n_points()?;
    log::debug!(
        "integrating FitzHugh-Nagumo: N = {}, dt = {}, T = {}",
        n,
        params.dt,
        params.duration
    );

    let last = (n - 1) as f64;
    let time = Array1::from_shape_fn(n, |k| k as f64 * params.duration / last);
    let mut u = Array1::<f64>::zeros(n);
    let mut w = Array1::<f64>::zeros(n);

    let mut system = FitzHughNagumoSystem::new(*params)?;
    for k in 1..n {
        system.step();
        u[k] = system.potential();
        w[k] = system.adaptation();
    }

    Ok(Trajectory::from_parts(*params, time, u, w))
}


#[cfg(test)]
mod proptests {
    use super::{integrate, FhnParams};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_grid_length(
            duration in 0.05f64..20.0,
            dt in 0.001f64..0.05,
        ) {
            let p = FhnParams { duration, dt, ..FhnParams::default() };
            let n = (duration / dt).round() as usize + 1;
            let traj = integrate(&p).unwrap();
            prop_assert_eq!(traj.len(), n);
            prop_assert_eq!(traj.time().len(), n);
            prop_assert_eq!(traj.u().len(), n);
            prop_assert_eq!(traj.w().len(), n);
            prop_assert_eq!(traj.time()[0], 0.0);
            prop_assert!((traj.time()[n - 1] - duration).abs() <= 1e-12 * duration.max(1.0));
        }

        #[test]
        fn prop_euler_recurrence_and_determinism(
            epsilon in 0.0f64..0.1,
            gamma in 0.0f64..1.0,
            current in -1.0f64..1.0,
            duration in 0.1f64..5.0,
        ) {
            let p = FhnParams::new(epsilon, gamma, current, duration, 0.01);
            let a = integrate(&p).unwrap();
            let b = integrate(&p).unwrap();
            prop_assert_eq!(a.u(), b.u());
            prop_assert_eq!(a.w(), b.w());
            prop_assert_eq!(a.time(), b.time());

            prop_assert_eq!(a.u()[0], 0.0);
            prop_assert_eq!(a.w()[0], 0.0);
            let (u, w) = (a.u(), a.w());
            for k in 0..a.len() - 1 {
                let uk = u[k];
                let wk = w[k];
                let u_next = uk + p.dt * (uk * (uk - 0.5) * (1.0 - uk) - wk + current);
                let w_next = wk + p.dt * (epsilon * (uk - gamma * wk));
                prop_assert_eq!(u[k + 1], u_next);
                prop_assert_eq!(w[k + 1], w_next);
            }
        }
    }
}
