use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, MetricsTab};
use crate::data::{
    ATHLETE, FTP_SERIES, HRV_SERIES, LOAD_SERIES, METRIC_INSIGHTS, SLEEP_SERIES, TODAY,
};
use crate::theme::Palette;
use crate::ui::cards::{metric_card, stat_badge, BadgeVariant};

pub fn draw_metrics(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(7),
        ])
        .split(area);

    draw_headline_cards(f, chunks[0], palette);
    draw_chart_tabs(f, app, chunks[1], palette);

    match app.metrics_tab {
        MetricsTab::Ftp => draw_ftp_chart(f, chunks[2], palette),
        MetricsTab::Hrv => draw_hrv_chart(f, chunks[2], palette),
        MetricsTab::Load => draw_load_chart(f, chunks[2], palette),
        MetricsTab::Sleep => draw_sleep_chart(f, chunks[2], palette),
    }

    draw_insights(f, chunks[3], palette);
}

fn draw_headline_cards(f: &mut Frame, area: Rect, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    metric_card(
        f,
        cols[0],
        "FTP Actual",
        &format!("{}W", ATHLETE.ftp_watts),
        &format!("{} W/kg • +2.5%", ATHLETE.watts_per_kg),
        None,
        palette.primary,
        palette,
    );
    metric_card(
        f,
        cols[1],
        "HRV Promedio",
        &format!("{}ms", TODAY.hrv_avg_7d),
        "7 días • +7.4%",
        None,
        palette.error,
        palette,
    );
    metric_card(
        f,
        cols[2],
        "TSS Semanal",
        &TODAY.weekly_tss.to_string(),
        "Esta semana • Óptimo",
        None,
        palette.success,
        palette,
    );
    metric_card(
        f,
        cols[3],
        "Readiness",
        &format!("{}/100", TODAY.readiness),
        "Hoy • Excelente",
        None,
        palette.accent_agent,
        palette,
    );
}

fn draw_chart_tabs(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let titles = ["FTP", "HRV & Estrés", "Carga", "Sueño"];
    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(app.metrics_tab.index())
        .style(Style::default().fg(palette.text_tertiary))
        .highlight_style(
            Style::default()
                .fg(palette.accent_metrics)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(tabs, area);
}

fn chart_block<'a>(title: &str, subtitle: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(vec![
            Span::styled(
                format!(" {title} "),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{subtitle} "),
                Style::default().fg(palette.text_tertiary),
            ),
        ]))
}

fn draw_ftp_chart(f: &mut Frame, area: Rect, palette: &Palette) {
    let points: Vec<(f64, f64)> = FTP_SERIES
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.ftp)))
        .collect();

    let datasets = vec![Dataset::default()
        .name("FTP (W)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.primary))
        .data(&points)];

    let x_labels: Vec<Line> = [0, FTP_SERIES.len() / 2, FTP_SERIES.len() - 1]
        .iter()
        .map(|&i| Line::from(FTP_SERIES[i].date))
        .collect();

    let chart = Chart::new(datasets)
        .block(chart_block("Evolución de FTP", "Últimos 90 días • +15W (+5.5%)", palette))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.text_tertiary))
                .bounds([0.0, (FTP_SERIES.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.text_tertiary))
                .bounds([260.0, 290.0])
                .labels(vec![
                    Line::from("260"),
                    Line::from("275"),
                    Line::from("290"),
                ]),
        );

    f.render_widget(chart, area);
}

fn draw_hrv_chart(f: &mut Frame, area: Rect, palette: &Palette) {
    let hrv: Vec<(f64, f64)> = HRV_SERIES
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.hrv)))
        .collect();
    let stress: Vec<(f64, f64)> = HRV_SERIES
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.stress)))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("HRV (ms)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.error))
            .data(&hrv),
        Dataset::default()
            .name("Estrés")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.warning))
            .data(&stress),
    ];

    let x_labels: Vec<Line> = [0, HRV_SERIES.len() / 2, HRV_SERIES.len() - 1]
        .iter()
        .map(|&i| Line::from(HRV_SERIES[i].date))
        .collect();

    let chart = Chart::new(datasets)
        .block(chart_block(
            "HRV & Nivel de Estrés",
            "Últimos 7 días • Recuperación óptima",
            palette,
        ))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.text_tertiary))
                .bounds([0.0, (HRV_SERIES.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.text_tertiary))
                .bounds([0.0, 70.0])
                .labels(vec![Line::from("0"), Line::from("35"), Line::from("70")]),
        );

    f.render_widget(chart, area);
}

fn draw_load_chart(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut chart = BarChart::default()
        .block(chart_block(
            "Carga de Entrenamiento",
            "TSS semanal / aguda / crónica • Ratio: 0.99 (óptimo)",
            palette,
        ))
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3);

    for point in LOAD_SERIES {
        let bars = [
            Bar::default()
                .value(u64::from(point.tss))
                .style(Style::default().fg(palette.primary)),
            Bar::default()
                .value(u64::from(point.acute))
                .style(Style::default().fg(palette.success)),
            Bar::default()
                .value(u64::from(point.chronic))
                .style(Style::default().fg(palette.warning)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.week))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

fn draw_sleep_chart(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut chart = BarChart::default()
        .block(chart_block(
            "Análisis del Sueño",
            "total / profundo / REM en horas • Promedio: 7.5h",
            palette,
        ))
        .bar_width(4)
        .bar_gap(1)
        .group_gap(2);

    for point in SLEEP_SERIES {
        let bars = [
            sleep_bar(point.total_h, palette.accent_metrics),
            sleep_bar(point.deep_h, palette.primary),
            sleep_bar(point.rem_h, palette.accent_agent),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.date))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

/// Hours carry one decimal; bars only take integers, so plot tenths and
/// print the real value on the bar.
fn sleep_bar(hours: f64, color: ratatui::style::Color) -> Bar<'static> {
    Bar::default()
        .value((hours * 10.0).round() as u64)
        .text_value(format!("{hours:.1}"))
        .style(Style::default().fg(color))
}

fn draw_insights(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent_agent))
        .title(Span::styled(
            " Análisis Predictivo del Agente IA ",
            Style::default()
                .fg(palette.accent_agent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = METRIC_INSIGHTS
        .iter()
        .map(|insight| {
            Line::from(Span::styled(
                (*insight).to_string(),
                Style::default().fg(palette.text_secondary),
            ))
        })
        .collect();
    lines.push(Line::from(vec![
        stat_badge("Forma pico: 87/100", BadgeVariant::Success, palette),
        Span::raw(" "),
        stat_badge("Riesgo lesión: 12/100", BadgeVariant::Info, palette),
        Span::raw(" "),
        stat_badge("Readiness: 78/100", BadgeVariant::Warning, palette),
    ]));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
