use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph, Sparkline},
    Frame,
};

use crate::tui::app::DashboardApp;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    activity: Color,
    signal: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    activity: Color::Green,
    signal: Color::Blue,
};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, main_layout[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Length(1),
            Constraint::Percentage(35),
        ])
        .split(main_layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[0]);
    draw_activity(frame, app, left[0]);
    draw_languages(frame, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(content[2]);
    draw_summary(frame, app, right[0]);
    draw_signal(frame, app, right[1]);

    let help = Line::from(vec![
        Span::styled("WINDOW: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_header(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let rendered = &app.rendered;
    let title = Line::from(vec![
        Span::styled(
            rendered.login.clone(),
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  updated {}", rendered.updated.format("%Y-%m-%d")),
            Style::default().fg(THEME.muted),
        ),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(THEME.muted))
            .padding(Padding::new(0, 0, 1, 0)),
    );
    frame.render_widget(header, area);
}

fn draw_activity(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let counts = app.counts();
    let title = app.window_title();
    let sparkline = Sparkline::default()
        .block(panel(&title))
        .style(Style::default().fg(THEME.activity))
        .data(counts.iter().copied());
    frame.render_widget(sparkline, area);
}

fn draw_languages(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let bars: Vec<Bar> = app
        .rendered
        .languages
        .iter()
        .map(|segment| {
            Bar::default()
                .label(segment.name.as_str())
                .value(segment.percent as u64)
                .text_value(format!("{}%", segment.percent))
                .style(Style::default().fg(THEME.primary))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(" Languages "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(100);
    frame.render_widget(chart, area);
}

fn draw_summary(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let rendered = &app.rendered;
    let kpis = &rendered.kpis;
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Contributions", kpis.contributions.display.clone()),
        row("Commits", kpis.commits.display.clone()),
        row("Pull requests", kpis.pull_requests.display.clone()),
        row("Issues", kpis.issues.display.clone()),
        Line::from(""),
        row("Stars", kpis.stars.display.clone()),
        row("Repositories", kpis.repositories.display.clone()),
        row("Followers", kpis.followers.display.clone()),
        row("Following", kpis.following.display.clone()),
        Line::from(""),
        row("Streak", format!("{} days", rendered.streak.current)),
        row("Longest", format!("{} days", rendered.streak.longest)),
        row("Active days", rendered.signal.active_days.display.clone()),
    ];

    let title = format!(" Last {} days ", rendered.summary_days);
    frame.render_widget(Paragraph::new(lines).block(panel(&title)), area);
}

fn draw_signal(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let signal = &app.rendered.signal;
    let gauge = Gauge::default()
        .block(panel(" Signal "))
        .gauge_style(Style::default().fg(THEME.signal))
        .ratio(app.signal_ratio())
        .label(format!("{} · {}%", signal.grade, signal.percent));
    frame.render_widget(gauge, area);
}
