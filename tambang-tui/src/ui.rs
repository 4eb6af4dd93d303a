use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tambang_core::receipt::Summary;

use crate::app::{App, Field, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new("tambang – car fare calculator")
        .block(Block::default().borders(Borders::ALL).title("Tambang"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::ModelSelect => draw_model_select(frame, app, *content_area),
        Screen::VariantSelect => draw_variant_select(frame, app, *content_area),
        Screen::TripForm => draw_trip_form(frame, app, *content_area),
        Screen::FareView => draw_fare_view(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::ModelSelect => "↑/↓ move · Enter/Space select model · q/Ctrl-C quit",
        Screen::VariantSelect => "↑/↓ move · Enter/Space select variant · Left/Esc back · q quit",
        Screen::TripForm => {
            "Type numbers · Tab/↑/↓ next field · Space toggle · Enter calculate · Esc back · q quit"
        }
        Screen::FareView => "Esc/←/b edit trip · n new fare · q/Ctrl-C quit",
    };

    let status_text = match &app.error_message {
        Some(msg) => format!("{msg} · {nav_hint}"),
        None => nav_hint.to_owned(),
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_selection_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: String,
    entries: &[String],
    selected: usize,
) {
    let items = entries
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let prefix = if idx == selected { "> " } else { "  " };
            ListItem::new(format!("{prefix}{name}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_model_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    draw_selection_list(
        frame,
        area,
        "Select car model (↑/↓, Enter)".to_owned(),
        &app.models,
        app.model_list_index,
    );
}

fn draw_variant_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let model = app.selected_model.as_deref().unwrap_or("<model>");
    draw_selection_list(
        frame,
        area,
        format!("Select variant of {model} (↑/↓, Enter)"),
        &app.variants,
        app.variant_list_index,
    );
}

fn draw_trip_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let model = app.selected_model.as_deref().unwrap_or("<model>");
    let variant = app.selected_variant.as_deref().unwrap_or("<variant>");

    let checkbox = |checked: bool| if checked { "[x]" } else { "[ ]" };
    let rows = [
        (Field::Distance, format!("Distance (km)  : {}", app.distance_input)),
        (Field::Time, format!("Time (minutes) : {}", app.time_input)),
        (Field::TrafficJam, format!("Traffic jam    : {}", checkbox(app.traffic_jam))),
        (Field::NightCharge, format!("Night charge   : {}", checkbox(app.night_charge))),
    ];

    let lines = rows
        .into_iter()
        .map(|(field, text)| {
            if field == app.focused {
                Line::styled(
                    format!("> {text}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(format!("  {text}"))
            }
        })
        .collect::<Vec<Line<'_>>>();

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Trip in {model} {variant} (Enter to calculate)")),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(form, area);
}

fn draw_fare_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = app
        .quote
        .as_ref()
        .map_or_else(|| "No fare calculated yet.".to_owned(), |quote| Summary(quote).to_string());

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Fare (n for a new fare, Esc to edit)"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
