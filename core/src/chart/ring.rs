use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub radius: f64,
    pub circumference: f64,
    pub filled: f64,
}

impl ProgressRing {
    pub fn new(radius: f64, fraction: f64) -> Self {
        let circumference = 2.0 * PI * radius;
        Self {
            radius,
            circumference,
            filled: circumference * fraction.clamp(0.0, 1.0),
        }
    }

    pub fn gap(&self) -> f64 {
        self.circumference - self.filled
    }
}
