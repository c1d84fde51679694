//! Job listing panel
//!
//! Renders the current search results as cards. The listing is kept on
//! screen while a refresh is in flight or after a refresh failed.

use libjobboard::types::Job;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Focus};

pub const EMPTY_MESSAGE: &str = "No jobs found matching your criteria.";

/// Lines making up one job card
pub fn card_lines(job: &Job, colors: bool) -> Vec<Line<'static>> {
    let (badge, badge_style) = if job.hiring_multiple_candidates.is_yes() {
        ("Hiring Multiple Candidates", Style::default().fg(Color::Green))
    } else {
        ("Hiring", Style::default().fg(Color::Yellow))
    };
    let badge_style = if colors { badge_style } else { Style::default() };
    let label = if colors {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    vec![
        Line::from(Span::styled(badge, badge_style)),
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(job.company_name.clone()),
        Line::from(vec![Span::styled("Location: ", label), Span::raw(job.location.clone())]),
        Line::from(vec![Span::styled("Salary: ", label), Span::raw(job.salary.clone())]),
        Line::from(vec![Span::styled("Posted On: ", label), Span::raw(job.posted_date())]),
        Line::from(""),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snapshot = state.board.jobs.snapshot();
    let jobs = snapshot.data();
    let focused = state.focus == Focus::Jobs && !state.has_overlay();

    let title = if snapshot.loading() {
        " Jobs (loading...) ".to_string()
    } else {
        format!(" Jobs ({}) ", jobs.len())
    };
    let border = if focused && state.config.colors_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);

    if jobs.is_empty() {
        let text = if snapshot.loading() {
            "Loading jobs..."
        } else {
            EMPTY_MESSAGE
        };
        let empty = Paragraph::new(vec![Line::from(""), Line::from(text)])
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = jobs
        .iter()
        .skip(state.job_scroll)
        .flat_map(|job| card_lines(job, state.config.colors_enabled))
        .collect();

    let list = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(list, area);
}
