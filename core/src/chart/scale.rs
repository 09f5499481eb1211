use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self { x0, y0, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y0 + self.height
    }

    pub fn right(&self) -> f64 {
        self.x0 + self.width
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps samples onto `frame`: the minimum lands on the bottom edge, the maximum
/// on the top edge. A constant series is drawn one pixel above the bottom edge.
pub fn scale_series(samples: &[u64], frame: &ChartFrame) -> Vec<ScaledPoint> {
    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return Vec::new();
    };

    let flat = max == min;
    let range = (max - min) as f64;
    let steps = samples.len().saturating_sub(1).max(1) as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if samples.len() == 1 {
                frame.x0 + frame.width / 2.0
            } else {
                frame.x0 + frame.width * i as f64 / steps
            };
            let y = if flat {
                frame.bottom() - 1.0
            } else {
                frame.bottom() - frame.height * (value - min) as f64 / range
            };
            ScaledPoint { x, y }
        })
        .collect()
}
