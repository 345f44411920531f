//! Chart area: legend line, one scatter+trend chart per facet, hover readout.
//!
//! Every facet shares the same x (days) and y (close) bounds so panels line up
//! the way a faceted plot does.

use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Wrap};

use moonlab_core::chart::{HoverEntry, LegendGlyph};
use moonlab_core::ChartSpec;

use crate::app::AppState;
use crate::theme;

/// Readout rows shown below the facets before truncating.
const MAX_READOUT_ROWS: usize = 6;

/// Fraction of the close range added above and below the data.
const Y_PADDING: f64 = 0.05;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.chart {
        Ok(spec) => render_chart(f, area, spec, app.hover_date()),
        Err(e) => render_warning(f, area, &e.to_string()),
    }
}

fn render_warning(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("⚠ {message}"), theme::warning())),
        Line::from(""),
        Line::from(Span::styled(
            "Select at least one ticker and one moon phase in the sidebar.",
            theme::muted(),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec, hover: Option<NaiveDate>) {
    let readout = hover.map(|d| (d, spec.hover_at(d)));
    let readout_height = match &readout {
        Some((_, entries)) => entries.len().min(MAX_READOUT_ROWS) + 1,
        None => 1,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(readout_height as u16),
        ])
        .split(area);

    f.render_widget(Paragraph::new(legend_line(spec)), chunks[0]);
    render_facets(f, chunks[1], spec, hover);

    let lines = match readout {
        Some((date, entries)) => readout_lines(spec, date, &entries),
        None => vec![Line::from(Span::styled(
            "Focus the chart (Tab) and press h/l to inspect a date.",
            theme::muted(),
        ))],
    };
    f.render_widget(Paragraph::new(lines), chunks[2]);
}

fn legend_line(spec: &ChartSpec) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{}: ", spec.legend_title),
        theme::neutral(),
    )];
    for entry in spec.legend() {
        spans.push(Span::styled(
            theme::legend_glyph(entry.glyph),
            theme::series_style(entry.color),
        ));
        spans.push(Span::styled(format!(" {}  ", entry.label), theme::text()));
    }
    Line::from(spans)
}

/// Shared axis bounds: x in days since the common era, y in price units.
fn bounds(spec: &ChartSpec) -> ([f64; 2], [f64; 2]) {
    let x = match spec.date_range() {
        Some((lo, hi)) if lo < hi => [day(lo), day(hi)],
        Some((lo, _)) => [day(lo) - 1.0, day(lo) + 1.0],
        None => [0.0, 1.0],
    };
    let y = match spec.close_range() {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * Y_PADDING;
            [lo - pad, hi + pad]
        }
        Some((lo, _)) => [lo - 1.0, lo + 1.0],
        None => [0.0, 1.0],
    };
    (x, y)
}

fn day(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn render_facets(f: &mut Frame, area: Rect, spec: &ChartSpec, hover: Option<NaiveDate>) {
    let n = spec.facet_count();
    if n == 0 {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n as u32); n])
        .split(area);

    let (x_bounds, y_bounds) = bounds(spec);
    let x_labels = match spec.date_range() {
        Some((lo, hi)) => vec![
            Span::styled(lo.format("%Y-%m-%d").to_string(), theme::muted()),
            Span::styled(hi.format("%Y-%m-%d").to_string(), theme::muted()),
        ],
        None => Vec::new(),
    };
    let y_labels = vec![
        Span::styled(format!("{:.2}", y_bounds[0]), theme::muted()),
        Span::styled(format!("{:.2}", y_bounds[1]), theme::muted()),
    ];
    let hover_line: Option<Vec<(f64, f64)>> =
        hover.map(|d| vec![(day(d), y_bounds[0]), (day(d), y_bounds[1])]);

    for (i, facet) in spec.facets.iter().enumerate() {
        let points: Vec<_> = spec
            .point_traces_in(i)
            .map(|t| {
                let data: Vec<(f64, f64)> = t.points.iter().map(|p| (day(p.x), p.y)).collect();
                (t, data)
            })
            .collect();
        let trends: Vec<_> = spec
            .trend_traces_in(i)
            .map(|t| {
                let data: Vec<(f64, f64)> = t.points.iter().map(|p| (day(p.x), p.y)).collect();
                (t, data)
            })
            .collect();

        // Lines first so markers draw on top.
        let mut datasets = Vec::new();
        if let Some(line) = &hover_line {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(theme::muted())
                    .data(line),
            );
        }
        for (trace, data) in &trends {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(theme::series_style(trace.color))
                    .data(data),
            );
        }
        for (trace, data) in &points {
            datasets.push(
                Dataset::default()
                    .marker(theme::plot_marker(trace.marker))
                    .graph_type(GraphType::Scatter)
                    .style(theme::series_style(trace.color))
                    .data(data),
            );
        }

        let y_axis = if i == 0 {
            Axis::default()
                .title(Span::styled(spec.y_axis.title.clone(), theme::muted()))
                .labels(y_labels.clone())
        } else {
            Axis::default()
        };

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(facet.title.as_str())
                    .title_alignment(Alignment::Center)
                    .title_style(theme::accent()),
            )
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .title(Span::styled(spec.x_axis.title.clone(), theme::muted()))
                    .style(theme::muted())
                    .bounds(x_bounds)
                    .labels(x_labels.clone()),
            )
            .y_axis(y_axis.style(theme::muted()).bounds(y_bounds));

        f.render_widget(chart, columns[i]);
    }
}

fn readout_lines(spec: &ChartSpec, date: NaiveDate, entries: &[HoverEntry]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", spec.x_axis.title), theme::neutral()),
        Span::styled(date.format("%Y-%m-%d").to_string(), theme::accent_bold()),
        Span::styled(format!("  ({} traces)", entries.len()), theme::muted()),
    ])];

    let legend = spec.legend();
    for entry in entries.iter().take(MAX_READOUT_ROWS) {
        let facet = entry
            .facet
            .and_then(|i| spec.facets.get(i))
            .map(|facet| facet.title.as_str())
            .unwrap_or("");
        let glyph = match &entry.data {
            Some(_) => legend
                .iter()
                .find(|l| l.label == entry.trace)
                .map(|l| theme::legend_glyph(l.glyph))
                .unwrap_or("●"),
            None => theme::legend_glyph(LegendGlyph::Line),
        };

        let mut spans = vec![
            Span::styled(format!(" {glyph} "), theme::series_style(entry.color)),
            Span::styled(format!("{facet:<12} {:<14}", entry.trace), theme::text()),
            Span::styled(format!(" {}: {:.2}", spec.y_axis.title, entry.y), theme::accent()),
        ];
        if let Some(data) = &entry.data {
            spans.push(Span::styled(
                format!(
                    "  Open {:.2}  High {:.2}  Low {:.2}  Volume {:.0}",
                    data.open, data.high, data.low, data.volume
                ),
                theme::muted(),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}
