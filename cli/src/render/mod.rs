pub mod dashboard;
pub mod signal;

use std::fmt::Write;

use anyhow::Result;
use ghmetrics_core::chart::ScaledPoint;
use ghmetrics_core::service::dto::ChartSeries;
use ghmetrics_core::{expand_key, RenderedMetrics};

pub use dashboard::DashboardSkin;
pub use signal::SignalSkin;

/// Turns a finished metrics record into an SVG document.
pub trait Skin {
    fn name(&self) -> &'static str;
    fn render(&self, metrics: &RenderedMetrics) -> String;
}

pub const SKIN_NAMES: &[&str] = &["dashboard", "signal"];

/// Looks a skin up by name or unique prefix.
pub fn skin_named(name: &str) -> Result<Box<dyn Skin>> {
    let name = expand_key(&name.to_lowercase(), SKIN_NAMES)?;
    Ok(match name.as_str() {
        "signal" => Box::new(SignalSkin),
        _ => Box::new(DashboardSkin),
    })
}

pub const FONT_STACK: &str = "-apple-system,BlinkMacSystemFont,Segoe UI,Helvetica,Arial,sans-serif";

pub const SEGMENT_OPACITIES: [f64; 4] = [0.85, 0.65, 0.45, 0.28];

pub fn segment_opacity(index: usize) -> f64 {
    SEGMENT_OPACITIES[index % SEGMENT_OPACITIES.len()]
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `M x,y L x,y ...` through every point.
pub fn line_path(points: &[ScaledPoint]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{} {:.1},{:.1}", command, point.x, point.y);
    }
    path
}

/// The line path closed along the bottom edge of the chart frame.
pub fn area_path(series: &ChartSeries) -> String {
    let frame = &series.frame;
    format!(
        "{} L {:.1},{:.1} L {:.1},{:.1} Z",
        line_path(&series.points),
        frame.right(),
        frame.bottom(),
        frame.x0,
        frame.bottom()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghmetrics_core::ChartFrame;

    #[test]
    fn test_escape() {
        assert_eq!(escape("C++ & <Shell>"), "C++ &amp; &lt;Shell&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_paths() {
        let series = ChartSeries {
            frame: ChartFrame::new(0.0, 0.0, 10.0, 5.0),
            points: vec![ScaledPoint { x: 0.0, y: 5.0 }, ScaledPoint { x: 10.0, y: 0.0 }],
            min: 0,
            max: 1,
            flat: false,
            first_date: None,
            last_date: None,
        };
        assert_eq!(line_path(&series.points), "M 0.0,5.0 L 10.0,0.0");
        assert_eq!(area_path(&series), "M 0.0,5.0 L 10.0,0.0 L 10.0,5.0 L 0.0,5.0 Z");
    }

    #[test]
    fn test_skin_lookup() {
        assert_eq!(skin_named("dashboard").unwrap().name(), "dashboard");
        assert_eq!(skin_named("sig").unwrap().name(), "signal");
        assert_eq!(skin_named("D").unwrap().name(), "dashboard");
        assert!(skin_named("neon").is_err());
    }
}
