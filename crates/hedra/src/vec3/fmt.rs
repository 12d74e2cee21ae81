//! Textual form: `"x y z"`, six decimals at most, trailing zeros trimmed.

use std::fmt;

use super::Vector3;
use crate::cfg::{to_fixed, TEXT_DECIMALS};

/// Render one component: fixed-point (never exponential), exact ties away
/// from zero, trimmed, `-0` → `0`.
fn component(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let mut s = to_fixed(x, TEXT_DECIMALS);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            component(self.x),
            component(self.y),
            component(self.z)
        )
    }
}
