//! FitzHugh-Nagumo: Time Series and Phase Plane
//!
//! Integrates the cubic-threshold FitzHugh-Nagumo model from rest with
//! the default parameters and writes two figures into the working
//! directory:
//!
//! - `fn_model_tser.png`: u and w against time
//! - `fn_model_pplane.png`: w against u

use std::path::Path;

use fhn_dynamics::{integrate, plot, FhnParams, PlotConfig};

fn main() -> fhn_dynamics::Result<()> {
    env_logger::init();

    let params = FhnParams::default();

    println!("FitzHugh-Nagumo (explicit Euler)");
    println!("  ε = {}, γ = {}, I = {}", params.epsilon, params.gamma, params.current);
    println!("  T = {}, Δt = {}", params.duration, params.dt);

    let trajectory = integrate(&params)?;
    let (u_min, u_max) = trajectory.u_range();
    let (w_min, w_max) = trajectory.w_range();
    println!("  N = {} points", trajectory.len());
    println!("  u ∈ [{:.4}, {:.4}], w ∈ [{:.4}, {:.4}]", u_min, u_max, w_min, w_max);

    let written = plot::render(&trajectory, Path::new("."), &PlotConfig::default())?;
    log::info!(
        "figures written: {}, {}",
        written.time_series.display(),
        written.phase_plane.display()
    );
    println!("  wrote {}", written.time_series.display());
    println!("  wrote {}", written.phase_plane.display());

    Ok(())
}
