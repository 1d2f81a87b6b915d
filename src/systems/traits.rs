//! Dynamical System Traits: Fixed-Step Simulation API
//!
//! Models advance one fixed timestep at a time and expose a snapshot of
//! their current state:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DynamicalSystem Trait                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + step()              - Advance system by dt               │
//! │  + run(n)              - Run n steps                        │
//! │  + state()             - Current state snapshot             │
//! │  + time()              - Elapsed simulation time            │
//! │  + state_dimension()   - Dimension of state space           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

/// Trait for fixed-step dynamical systems
pub trait DynamicalSystem {
    /// State type for this system
    type State;

    /// Advance system by one timestep
    fn step(&mut self);

    /// Run multiple timesteps
    fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Get current state snapshot
    fn state(&self) -> Self::State;

    /// Simulation time reached so far
    fn time(&self) -> f64;

    /// Dimension of state space
    fn state_dimension(&self) -> usize;
}
