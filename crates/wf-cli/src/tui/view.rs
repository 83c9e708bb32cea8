use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use wf_simulation::{CoordinateDomain, Rgb};

use crate::tui::app::App;

/// Weeds listed in the side panel, newest first.
const RECENT_WEEDS: usize = 40;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Field + side panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(chunks[0]);

    draw_field(frame, app, body[0]);
    draw_weed_list(frame, app, body[1]);
    draw_status_bar(frame, app, chunks[1]);
}

fn draw_field(frame: &mut Frame, app: &App, area: Rect) {
    let grid = &app.grid;
    let newest = app.newest();
    let mut lines: Vec<Line> = Vec::with_capacity(grid.rows() + 4);

    for row in 0..grid.rows() {
        let mut spans: Vec<Span> = Vec::with_capacity(grid.cols() + 1);
        for (col, label) in grid.id_labels(row).into_iter().enumerate() {
            let span = match grid.mark(col, row) {
                Some(mark) => {
                    let mut style = Style::default().fg(weed_color(mark.color));
                    if Some(mark.id) == newest {
                        style = style.bold();
                    }
                    Span::styled("●", style)
                }
                None => match label {
                    Some(ch) => Span::styled(ch.to_string(), Style::default().fg(Color::Gray)),
                    None => Span::styled("·", Style::default().fg(Color::DarkGray)),
                },
            };
            spans.push(span);
        }
        if let Some(label) = grid.y_label(row) {
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }
    for axis_row in grid.x_axis() {
        lines.push(Line::styled(axis_row, Style::default().fg(Color::Gray)));
    }

    let field = Paragraph::new(lines).block(
        Block::default()
            .title(" Field ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(field, area);
}

fn draw_weed_list(frame: &mut Frame, app: &App, area: Rect) {
    let integer = app.sim.config().coordinates == CoordinateDomain::Integer;
    let items: Vec<ListItem> = app
        .sim
        .field()
        .as_slice()
        .iter()
        .rev()
        .take(RECENT_WEEDS)
        .map(|weed| {
            let p = weed.position();
            let pos = if integer {
                format!("({:.0}, {:.0})", p.x, p.y)
            } else {
                format!("({:.1}, {:.1})", p.x, p.y)
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(weed_color(weed.color()))),
                Span::styled(
                    format!("{:>5}", weed.id().0),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::raw("  "),
                Span::styled(pos, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Weeds ({}) ", app.sim.field().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.sim.config();
    let inside = app
        .sim
        .field()
        .count_within(config.field_width, config.field_height);
    let state = if app.sim.is_running() {
        "running"
    } else {
        "stopped"
    };
    let hint = format!(
        " {state} | tick {} | {} weeds | {} in field | seed {} | q/Esc: stop ",
        app.sim.current_tick(),
        app.sim.field().len(),
        inside,
        config.seed,
    );
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, area);
}

fn weed_color(color: Option<Rgb>) -> Color {
    match color {
        Some(Rgb(r, g, b)) => Color::Rgb(r, g, b),
        None => Color::White,
    }
}
