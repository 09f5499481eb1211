use ghmetrics_core::service::dto::LanguageSegment;
use ghmetrics_core::RenderedMetrics;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_COLUMN_WIDTH: usize = 18;

#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "Language")]
    name: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Bar px")]
    width: String,
}

fn kpi_rows(metrics: &RenderedMetrics) -> Vec<KpiRow> {
    let kpis = &metrics.kpis;
    let window = format!(" ({}d)", metrics.summary_days);
    let row = |metric: &str, value: &str| KpiRow {
        metric: metric.to_string(),
        value: value.to_string(),
    };

    vec![
        row(&format!("Contributions{}", window), &kpis.contributions.display),
        row(&format!("Commits{}", window), &kpis.commits.display),
        row(&format!("Pull requests{}", window), &kpis.pull_requests.display),
        row(&format!("Issues{}", window), &kpis.issues.display),
        row("Stars", &kpis.stars.display),
        row("Repositories", &kpis.repositories.display),
        row("Followers", &kpis.followers.display),
        row("Following", &kpis.following.display),
        row("Current streak", &format!("{} days", metrics.streak.current)),
        row("Longest streak", &format!("{} days", metrics.streak.longest)),
        row(
            "Signal",
            &format!("{} ({}%)", metrics.signal.grade, metrics.signal.percent),
        ),
    ]
}

fn language_rows(segments: &[LanguageSegment]) -> Vec<LanguageRow> {
    segments
        .iter()
        .map(|s| LanguageRow {
            name: fit_width(&s.name, NAME_COLUMN_WIDTH),
            share: format!("{}%", s.percent),
            width: s.width.to_string(),
        })
        .collect()
}

/// Cuts `text` to at most `max` terminal columns, marking the cut with `…`.
fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

fn styled<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn show_summary(metrics: &RenderedMetrics) {
    println!(
        "\n\x1b[1;36m{}\x1b[0m (updated {})",
        metrics.login,
        metrics.updated.format("%Y-%m-%d")
    );
    println!("{}", styled(kpi_rows(metrics)));

    if metrics.languages.is_empty() {
        println!("No language data found.");
        return;
    }
    println!(
        "\nTop {} of {} languages",
        metrics.languages.len(),
        metrics.language_count
    );
    println!("{}", styled(language_rows(&metrics.languages)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("Rust", 18), "Rust");
        assert_eq!(fit_width("Jupyter Notebook", 8), "Jupyter…");
        assert_eq!(fit_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_language_rows() {
        let rows = language_rows(&[LanguageSegment {
            name: "TypeScript".to_string(),
            bytes: 10,
            percent: 75,
            offset: 0,
            width: 480,
        }]);
        assert_eq!(rows[0].share, "75%");
        assert_eq!(rows[0].width, "480");
        let table = styled(rows).to_string();
        assert!(table.contains("TypeScript"));
        assert!(table.contains("Language"));
    }
}
