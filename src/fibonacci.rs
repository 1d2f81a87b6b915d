//! Fibonacci sequence starting 1, 1, 2, 3, ...

use crate::error::{Error, Result};

/// Iterator over Fibonacci terms that stops instead of overflowing
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current?;
        let following = self.next.and_then(|n| term.checked_add(n));
        self.current = self.next;
        self.next = following;
        Some(term)
    }
}

/// First `n` terms; `n` must be at least 2
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    if n < 2 {
        return Err(Error::invalid("n", n as f64, "need at least two terms"));
    }
    let terms: Vec<u64> = Fibonacci::new().take(n).collect();
    if terms.len() < n {
        return Err(Error::Overflow { n });
    }
    Ok(terms)
}
