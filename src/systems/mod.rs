//! Physical Systems Module: Excitable Membrane Models
//!
//! - **FitzHugh-Nagumo**: cubic-nullcline excitable membrane integrated
//!   with fixed-step explicit Euler

mod traits;
mod fitzhugh_nagumo;

pub use traits::DynamicalSystem;
pub use fitzhugh_nagumo::{FhnParams, FhnState, FitzHughNagumoSystem, integrate};
