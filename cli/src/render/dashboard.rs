use std::fmt::Write;

use ghmetrics_core::service::dto::{Kpi, LanguageSegment};
use ghmetrics_core::{ChartFrame, RenderedMetrics};

use crate::render::{area_path, escape, line_path, segment_opacity, Skin, FONT_STACK};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;
const BAR_X: i64 = 16;
const BAR_Y: i64 = 22;
const BAR_HEIGHT: i64 = 14;
const LEGEND_COLUMNS: [i64; 2] = [16, 340];
const LEGEND_FIRST_ROW: i64 = 52;
const LEGEND_ROW_STEP: i64 = 26;
const CARD_PADDING: f64 = 18.0;
const GRID_DIVISIONS: u32 = 4;

/// Wide card: KPI chips, account scale, language bar and the cadence chart.
pub struct DashboardSkin;

impl Skin for DashboardSkin {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn render(&self, metrics: &RenderedMetrics) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Engineering metrics for {login}">
"#,
            w = WIDTH,
            h = HEIGHT,
            login = escape(&metrics.login),
        );
        defs(&mut svg, metrics.bar_width);
        header(&mut svg, metrics);
        indicators(&mut svg, metrics);
        cadence(&mut svg, metrics);
        svg.push_str("</svg>\n");
        svg
    }
}

fn defs(svg: &mut String, bar_width: i64) {
    let _ = write!(
        svg,
        r##"  <defs>
    <linearGradient id="bg" x1="0" x2="1" y1="0" y2="1">
      <stop offset="0%" stop-color="#ffffff"/>
      <stop offset="100%" stop-color="#f8fafc"/>
    </linearGradient>
    <linearGradient id="accent" x1="0" x2="1" y1="0" y2="0">
      <stop offset="0%" stop-color="#0f172a"/>
      <stop offset="50%" stop-color="#334155"/>
      <stop offset="100%" stop-color="#0f172a"/>
    </linearGradient>
    <linearGradient id="area" x1="0" x2="1" y1="0" y2="0">
      <stop offset="0%" stop-color="#0f172a" stop-opacity="0.10"/>
      <stop offset="70%" stop-color="#0f172a" stop-opacity="0.55"/>
      <stop offset="100%" stop-color="#0f172a" stop-opacity="0.85"/>
    </linearGradient>
    <filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">
      <feDropShadow dx="0" dy="2" stdDeviation="8" flood-color="#0f172a" flood-opacity="0.10"/>
    </filter>
    <clipPath id="langClip">
      <rect x="{bx}" y="{by}" width="{bw}" height="{bh}" rx="7" ry="7"/>
    </clipPath>
    <style>
      .title{{font:800 30px {f}; fill:#0f172a}}
      .sub{{font:600 13px {f}; fill:#334155}}
      .tiny{{font:600 11px {f}; fill:#64748b}}
      .h{{font:800 14px {f}; fill:#0f172a}}
      .t{{font:600 12px {f}; fill:#334155}}
      .mono{{font:700 11px ui-monospace,SFMono-Regular,Menlo,Monaco,Consolas,monospace; fill:#334155}}
      .muted{{fill:#64748b}}
      .card{{fill:#ffffff; stroke:#e2e8f0; stroke-width:1}}
      .chip{{fill:#f1f5f9; stroke:#e2e8f0; stroke-width:1}}
      .kpi{{font:900 22px {f}; fill:#0f172a}}
      .kpiLabel{{font:700 11px {f}; fill:#64748b}}
      .barbg{{fill:#e2e8f0}}
    </style>
  </defs>

  <rect x="0" y="0" width="{w}" height="{h}" fill="url(#bg)"/>
"##,
        bx = BAR_X,
        by = BAR_Y,
        bw = bar_width,
        bh = BAR_HEIGHT,
        f = FONT_STACK,
        w = WIDTH,
        h = HEIGHT,
    );
}

fn header(svg: &mut String, metrics: &RenderedMetrics) {
    let _ = write!(
        svg,
        r##"
  <g transform="translate(44,34)">
    <text class="title" x="0" y="0" dominant-baseline="hanging">{login} · Engineering Metrics</text>
    <text class="sub" x="0" y="42" dominant-baseline="hanging">Signal {grade} · {active} active days · longest streak {longest} days</text>
    <g transform="translate(0,78)">
      <rect x="0" y="0" width="640" height="6" rx="3" fill="url(#accent)"/>
      <text class="tiny" x="660" y="3" dominant-baseline="middle">Updated: {updated} · Self-hosted SVG</text>
    </g>
  </g>

  <g filter="url(#shadow)">
    <rect class="card" x="44" y="140" width="712" height="416" rx="18"/>
    <rect class="card" x="776" y="140" width="380" height="416" rx="18"/>
  </g>
"##,
        login = escape(&metrics.login),
        grade = escape(metrics.signal.grade.label()),
        active = metrics.signal.active_days.display,
        longest = metrics.streak.longest,
        updated = metrics.updated.format("%Y-%m-%d"),
    );
}

fn chip(svg: &mut String, x: i64, width: i64, height: i64, kpi: &Kpi, label: &str, label_above: bool) {
    let _ = write!(svg, r#"        <rect class="chip" x="{}" y="0" width="{}" height="{}" rx="14"/>"#, x, width, height);
    svg.push('\n');
    if label_above {
        let _ = writeln!(
            svg,
            r#"        <text class="mono" x="{x}" y="18" dominant-baseline="hanging">{label}</text>
        <text class="kpi" x="{x}" y="26" dominant-baseline="hanging">{value}</text>"#,
            x = x + 16,
            label = label,
            value = escape(&kpi.display),
        );
    } else {
        let _ = writeln!(
            svg,
            r#"        <text class="kpi" x="{x}" y="18" dominant-baseline="hanging">{value}</text>
        <text class="kpiLabel" x="{x}" y="54" dominant-baseline="hanging">{label}</text>"#,
            x = x + 16,
            label = label,
            value = escape(&kpi.display),
        );
    }
}

fn indicators(svg: &mut String, metrics: &RenderedMetrics) {
    let kpis = &metrics.kpis;
    let _ = write!(
        svg,
        r#"
  <g transform="translate(68,168)">
    <text class="h" x="0" y="0" dominant-baseline="hanging">Key indicators (last {} days)</text>
    <text class="t" x="0" y="24" dominant-baseline="hanging">Generated from the contribution calendar and owned repositories.</text>

    <g transform="translate(0,58)">
"#,
        metrics.summary_days
    );
    chip(svg, 0, 160, 78, &kpis.contributions, "Contributions", false);
    chip(svg, 176, 160, 78, &kpis.commits, "Commits", false);
    chip(svg, 352, 160, 78, &kpis.pull_requests, "PRs", false);
    chip(svg, 528, 160, 78, &kpis.stars, "Total stars", false);
    svg.push_str(
        r#"    </g>

    <g transform="translate(0,156)">
      <text class="h" x="0" y="0" dominant-baseline="hanging">Account scale</text>
      <g transform="translate(0,28)">
"#,
    );
    chip(svg, 0, 224, 56, &kpis.repositories, "Repos", true);
    chip(svg, 244, 224, 56, &kpis.followers, "Followers", true);
    chip(svg, 488, 200, 56, &kpis.following, "Following", true);
    svg.push_str("      </g>\n    </g>\n");

    languages(svg, metrics);
    svg.push_str("  </g>\n");
}

fn languages(svg: &mut String, metrics: &RenderedMetrics) {
    let legend_rows = metrics.languages.len().div_ceil(2).max(2) as i64;
    let card_height = LEGEND_FIRST_ROW + LEGEND_ROW_STEP * (legend_rows - 1) + 26;
    let _ = write!(
        svg,
        r#"
    <g transform="translate(0,276)">
      <text class="h" x="0" y="0" dominant-baseline="hanging">Language distribution</text>
      <text class="tiny" x="0" y="22" dominant-baseline="hanging">Size-weighted across owned, non-fork repositories.</text>

      <g transform="translate(0,36)">
        <rect class="chip" x="0" y="0" width="688" height="{}" rx="16"/>
        <rect class="barbg" x="{}" y="{}" width="{}" height="{}" rx="7"/>
"#,
        card_height, BAR_X, BAR_Y, metrics.bar_width, BAR_HEIGHT
    );

    if metrics.languages.is_empty() {
        let _ = writeln!(
            svg,
            r#"        <text class="t muted" x="{}" y="{}" dominant-baseline="middle">No language data</text>"#,
            LEGEND_COLUMNS[0],
            LEGEND_FIRST_ROW - 2
        );
    } else {
        svg.push_str("        <g clip-path=\"url(#langClip)\">\n");
        for (i, segment) in metrics.languages.iter().enumerate() {
            let _ = writeln!(
                svg,
                r##"        <rect x="{}" y="{}" width="{}" height="{}" fill="#0f172a" fill-opacity="{:.2}"/>"##,
                BAR_X + segment.offset,
                BAR_Y,
                segment.width.max(0),
                BAR_HEIGHT,
                segment_opacity(i)
            );
        }
        svg.push_str("        </g>\n");
        for (i, segment) in metrics.languages.iter().enumerate() {
            legend_item(svg, i, segment);
        }
    }
    svg.push_str("      </g>\n    </g>\n");
}

fn legend_item(svg: &mut String, index: usize, segment: &LanguageSegment) {
    let x = LEGEND_COLUMNS[index % 2];
    let y = LEGEND_FIRST_ROW + LEGEND_ROW_STEP * (index / 2) as i64;
    let _ = writeln!(
        svg,
        r##"        <g transform="translate({x},{y})"><rect x="0" y="-8" width="12" height="12" rx="3" fill="#0f172a" fill-opacity="{op:.2}"/><text class="t" x="18" y="-2" dominant-baseline="middle">{name}</text><text class="t muted" x="200" y="-2" dominant-baseline="middle">{pct}%</text></g>"##,
        x = x,
        y = y,
        op = segment_opacity(index),
        name = escape(&segment.name),
        pct = segment.percent,
    );
}

fn grid_lines(frame: &ChartFrame) -> String {
    let mut lines = String::new();
    for step in 1..GRID_DIVISIONS {
        let y = frame.y0 + frame.height * step as f64 / GRID_DIVISIONS as f64;
        let _ = writeln!(
            lines,
            r##"        <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#e2e8f0" stroke-width="1"/>"##,
            frame.x0,
            y,
            frame.right(),
            y
        );
    }
    lines
}

fn cadence(svg: &mut String, metrics: &RenderedMetrics) {
    let series = &metrics.cadence;
    let frame = &series.frame;
    let card_width = frame.width + 2.0 * CARD_PADDING;
    let card_height = frame.height + 2.0 * CARD_PADDING;

    let _ = write!(
        svg,
        r##"
  <g transform="translate(800,168)">
    <text class="h" x="0" y="0" dominant-baseline="hanging">Cadence</text>
    <text class="t" x="0" y="24" dominant-baseline="hanging">Daily contributions (last {days} days)</text>

    <g transform="translate(0,54)">
      <rect x="0" y="0" width="{cw}" height="{ch}" rx="16" fill="#f1f5f9" stroke="#cbd5e1"/>
      <g opacity="0.65">
{grid}      </g>
      <path d="{area}" fill="url(#area)"/>
      <path d="{line}" fill="none" stroke="#0f172a" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>
"##,
        days = series.days(),
        cw = card_width,
        ch = card_height,
        grid = grid_lines(frame),
        area = area_path(series),
        line = line_path(&series.points),
    );
    if let Some(last) = series.last_point() {
        let _ = writeln!(
            svg,
            r##"      <circle cx="{:.1}" cy="{:.1}" r="4.5" fill="#0f172a"/>"##,
            last.x, last.y
        );
    }
    let _ = write!(
        svg,
        r#"      <text class="tiny" x="18" y="20" dominant-baseline="hanging">min: {} · max: {}</text>
    </g>

    <g transform="translate(0,288)">
      <text class="h" x="0" y="0" dominant-baseline="hanging">Streaks</text>
      <text class="t" x="0" y="24" dominant-baseline="hanging">Current {} days · longest {} days · {} contributions this year</text>
    </g>
  </g>
"#,
        series.min,
        series.max,
        metrics.streak.current,
        metrics.streak.longest,
        metrics.signal.contributions.display,
    );
}
