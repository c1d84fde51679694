//! UI rendering
//!
//! Render functions read state and draw to the frame; they never mutate
//! application state. The search box is the only stateful widget.

pub mod job_list;
pub mod search;

pub use search::SearchBox;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, DropdownState, FilterKind, Focus};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, search: &mut SearchBox) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(6),    // Filters + listing
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    search.render(frame, rows[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(rows[1]);

    let pickers = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);

    render_picker(frame, pickers[0], state, FilterKind::City);
    render_picker(frame, pickers[1], state, FilterKind::Niche);
    job_list::render(frame, columns[1], state);
    render_status_bar(frame, rows[2], state);

    if let Some(dropdown) = state.dropdown {
        render_dropdown(frame, area, state, dropdown);
    }

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref toast) = state.toast {
        render_toast(frame, area, &toast.message, state);
    }
}

/// Checklist entries for a picker, marking the active filter
pub fn picker_lines(state: &AppState, kind: FilterKind) -> Vec<String> {
    let selected = kind.selected_index(&state.filters);
    kind.options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if i == selected { "[x]" } else { "[ ]" };
            format!("{} {}", mark, option)
        })
        .collect()
}

fn render_picker(frame: &mut Frame, area: Rect, state: &AppState, kind: FilterKind) {
    let focused = state.focus.picker() == Some(kind) && !state.has_overlay();
    let colors = state.config.colors_enabled;

    let items: Vec<ListItem> = picker_lines(state, kind)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let border = if focused && colors {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let highlight = if colors {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", kind.title()))
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(highlight);

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.cursor(kind)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One-line status: active filters, loading indicator and key hints
pub fn status_text(state: &AppState) -> String {
    let city = FilterKind::City.current(&state.filters).unwrap_or("All");
    let niche = FilterKind::Niche.current(&state.filters).unwrap_or("All");
    let activity = if state.loading() { "Loading..." } else { "Ready" };
    let focus = match state.focus {
        Focus::Search => "search",
        Focus::CityPicker => "city",
        Focus::NichePicker => "niche",
        Focus::Jobs => "jobs",
    };

    format!(
        " {} | City: {} | Niche: {} | Focus: {} | Tab: switch  F2/F3: dropdown  F5: refresh  F1: help",
        activity, city, niche, focus
    )
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.loading() && state.config.colors_enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(Paragraph::new(status_text(state)).style(style), area);
}

fn render_dropdown(frame: &mut Frame, area: Rect, state: &AppState, dropdown: DropdownState) {
    let kind = dropdown.kind;
    let height = (dropdown.entry_count() as u16 + 2).min(area.height);
    let popup = centered_fixed(40, height, area);

    let mut entries = vec![ListItem::new(kind.placeholder())];
    entries.extend(kind.options().iter().map(|option| ListItem::new(*option)));

    let highlight = if state.config.colors_enabled {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(entries)
        .block(
            Block::default()
                .title(format!(" {} (Enter to apply, Esc to cancel) ", kind.title()))
                .borders(Borders::ALL),
        )
        .highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(dropdown.cursor));

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut list_state);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+C      - Quit"),
        Line::from("  q           - Quit (outside the search box)"),
        Line::from("  F1          - Toggle help"),
        Line::from("  F2 / F3     - City / niche dropdown"),
        Line::from("  F5, Ctrl+R  - Refresh listing"),
        Line::from("  Tab         - Next panel"),
        Line::from("  Esc         - Dismiss overlays"),
        Line::from(""),
        Line::from("Search:"),
        Line::from("  Enter       - Search"),
        Line::from(""),
        Line::from("Pickers:"),
        Line::from("  Up/Down     - Move"),
        Line::from("  Space/Enter - Apply filter"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_toast(frame: &mut Frame, area: Rect, message: &str, state: &AppState) {
    let width = (message.chars().count() as u16 + 4).clamp(20, area.width);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3.min(area.height),
    };

    let style = if state.config.colors_enabled {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let toast = Paragraph::new(message.to_string())
        .block(Block::default().title(" Error ").borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(toast, popup);
}

fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
