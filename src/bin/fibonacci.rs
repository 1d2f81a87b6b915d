//! Prints the first `N_TERMS` Fibonacci numbers, one per line.

use fhn_dynamics::fibonacci;

/// Number of terms to print (at least 2)
const N_TERMS: usize = 3;

fn main() -> fhn_dynamics::Result<()> {
    env_logger::init();

    let terms = fibonacci(N_TERMS)?;
    log::debug!("printing {} Fibonacci terms", terms.len());
    for term in terms {
        println!("{}", term);
    }
    Ok(())
}
