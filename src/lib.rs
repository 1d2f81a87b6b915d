//! # FHN-Dynamics
//!
//! FitzHugh-Nagumo excitable membrane simulation with fixed-step explicit
//! Euler integration and trajectory plots.
//!
//! ## Model
//!
//!   du/dt = u·(u - 1/2)·(1 - u) - w + I
//!   dw/dt = ε·(u - γ·w)
//!
//! The cubic nullcline has zeros at 0, 1/2 and 1; the middle zero is the
//! excitation threshold. The slow variable `w` adapts the membrane back
//! toward rest.
//!
//! ## Pipeline
//!
//! ```text
//! FhnParams ──► integrate() ──► Trajectory ──► plot::render() ──► PNG files
//! ```
//!
//! The integrator only produces numeric sequences; the [`plot`] module is
//! the sole consumer that knows about images.
//!
//! ## Example
//!
//! ```no_run
//! use fhn_dynamics::{integrate, plot, FhnParams};
//!
//! let trajectory = integrate(&FhnParams::default())?;
//! plot::render(&trajectory, std::path::Path::new("."), &plot::PlotConfig::default())?;
//! # Ok::<(), fhn_dynamics::Error>(())
//! ```
//!
//! The crate also carries a small Fibonacci sequence generator used by the
//! `fibonacci` binary.

pub mod error;
pub mod fibonacci;
pub mod plot;
pub mod systems;
pub mod trajectory;

pub use error::{Error, Result};

pub use fibonacci::{fibonacci, Fibonacci};

pub use plot::{PlotConfig, RenderedPlots};

pub use systems::{
    // Traits
    DynamicalSystem,
    // FitzHugh-Nagumo
    FhnParams,
    FhnState,
    FitzHughNagumoSystem,
    integrate,
};

pub use trajectory::Trajectory;
