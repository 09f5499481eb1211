pub mod ring;
pub mod scale;
pub mod segments;

pub use ring::ProgressRing;
pub use scale::{scale_series, ChartFrame, ScaledPoint};
pub use segments::{allocate_widths, percent_of};
