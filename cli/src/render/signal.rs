use std::fmt::Write;

use ghmetrics_core::RenderedMetrics;

use crate::render::{area_path, escape, line_path, segment_opacity, Skin, FONT_STACK};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 300;
const RING_CX: f64 = 680.0;
const RING_CY: f64 = 104.0;
const LANG_X: f64 = 560.0;
const LANG_Y: f64 = 236.0;
const LANG_WIDTH: f64 = 200.0;

/// Compact card: streaks, the signal ring, the yearly activity line and a slim language bar.
pub struct SignalSkin;

impl Skin for SignalSkin {
    fn name(&self) -> &'static str {
        "signal"
    }

    fn render(&self, metrics: &RenderedMetrics) -> String {
        let mut svg = String::new();
        let streak = &metrics.streak;
        let signal = &metrics.signal;

        let longest_span = match (streak.longest_start, streak.longest_end) {
            (Some(start), Some(end)) => format!("{} → {}", start.format("%b %d"), end.format("%b %d, %Y")),
            _ => "no streak yet".to_string(),
        };

        let _ = write!(
            svg,
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Activity signal for {login}">
  <defs>
    <linearGradient id="yearArea" x1="0" x2="0" y1="0" y2="1">
      <stop offset="0%" stop-color="#0f172a" stop-opacity="0.35"/>
      <stop offset="100%" stop-color="#0f172a" stop-opacity="0.02"/>
    </linearGradient>
    <style>
      .title{{font:800 22px {f}; fill:#0f172a}}
      .label{{font:700 11px {f}; fill:#64748b; letter-spacing:0.06em}}
      .big{{font:900 34px {f}; fill:#0f172a}}
      .t{{font:600 12px {f}; fill:#334155}}
      .grade{{font:900 30px {f}; fill:#0f172a}}
    </style>
  </defs>
  <rect x="0.5" y="0.5" width="{iw}" height="{ih}" rx="18" fill="#ffffff" stroke="#e2e8f0"/>

  <text class="title" x="24" y="24" dominant-baseline="hanging">{login}</text>
  <text class="t" x="24" y="54" dominant-baseline="hanging">Updated {updated} · policy {policy}</text>

  <g transform="translate(24,96)">
    <text class="label" x="0" y="0" dominant-baseline="hanging">CURRENT STREAK</text>
    <text class="big" x="0" y="18" dominant-baseline="hanging">{current}</text>
    <text class="label" x="170" y="0" dominant-baseline="hanging">LONGEST STREAK</text>
    <text class="big" x="170" y="18" dominant-baseline="hanging">{longest}</text>
    <text class="t" x="170" y="62" dominant-baseline="hanging">{span}</text>
    <text class="label" x="340" y="0" dominant-baseline="hanging">ACTIVE DAYS</text>
    <text class="big" x="340" y="18" dominant-baseline="hanging">{active}</text>
  </g>
"##,
            w = WIDTH,
            h = HEIGHT,
            iw = WIDTH - 1,
            ih = HEIGHT - 1,
            f = FONT_STACK,
            login = escape(&metrics.login),
            updated = metrics.updated.format("%Y-%m-%d"),
            policy = escape(&signal.policy_version),
            current = streak.current,
            longest = streak.longest,
            span = escape(&longest_span),
            active = signal.active_days.display,
        );

        let ring = &signal.ring;
        let _ = write!(
            svg,
            r##"
  <g>
    <circle cx="{cx}" cy="{cy}" r="{r:.1}" fill="none" stroke="#e2e8f0" stroke-width="10"/>
    <circle cx="{cx}" cy="{cy}" r="{r:.1}" fill="none" stroke="#0f172a" stroke-width="10" stroke-linecap="round" stroke-dasharray="{filled:.2} {gap:.2}" transform="rotate(-90 {cx} {cy})"/>
    <text class="grade" x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="middle">{grade}</text>
    <text class="label" x="{cx}" y="{below}" text-anchor="middle" dominant-baseline="hanging">SIGNAL {pct}%</text>
  </g>
"##,
            cx = RING_CX,
            cy = RING_CY,
            r = ring.radius,
            filled = ring.filled,
            gap = ring.gap(),
            grade = escape(signal.grade.label()),
            below = RING_CY + ring.radius + 14.0,
            pct = signal.percent,
        );

        let yearly = &metrics.yearly;
        let _ = write!(
            svg,
            r##"
  <text class="label" x="{x}" y="{label_y}" dominant-baseline="hanging">LAST {days} DAYS · {total} CONTRIBUTIONS</text>
  <path d="{area}" fill="url(#yearArea)"/>
  <path d="{line}" fill="none" stroke="#0f172a" stroke-width="1.5" stroke-linejoin="round"/>
"##,
            x = yearly.frame.x0,
            label_y = yearly.frame.y0 - 20.0,
            days = yearly.days(),
            total = escape(&signal.contributions.display),
            area = area_path(yearly),
            line = line_path(&yearly.points),
        );

        if !metrics.languages.is_empty() && metrics.bar_width > 0 {
            let scale = LANG_WIDTH / metrics.bar_width as f64;
            let _ = writeln!(
                svg,
                r#"  <g transform="translate({},{}) scale({:.4},1)">"#,
                LANG_X, LANG_Y, scale
            );
            for (i, segment) in metrics.languages.iter().enumerate() {
                let _ = writeln!(
                    svg,
                    r##"    <rect x="{}" y="0" width="{}" height="10" fill="#0f172a" fill-opacity="{:.2}"/>"##,
                    segment.offset,
                    segment.width.max(0),
                    segment_opacity(i)
                );
            }
            svg.push_str("  </g>\n");

            let names: Vec<String> = metrics
                .languages
                .iter()
                .map(|s| format!("{} {}%", escape(&s.name), s.percent))
                .collect();
            let _ = writeln!(
                svg,
                r#"  <text class="t" x="{}" y="{}" dominant-baseline="hanging">{}</text>"#,
                LANG_X,
                LANG_Y + 18.0,
                names.join(" · ")
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}
