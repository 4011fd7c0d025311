use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use storydeck_core::{AppViewModel, SortKey, SortState};

use super::constants;
use super::layout;
use super::UiState;

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let chunks = layout::chunks(frame.area());

    render_search(frame, view, ui, chunks.search);
    render_recent(frame, view, chunks.recent);
    render_banner(frame, view, chunks.banner);
    render_table(frame, view, ui, chunks.table);
    render_status(frame, ui, chunks.status);
}

fn render_search(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} | {}", constants::TITLE, constants::SEARCH_BOX_TITLE));

    let text = if ui.editing {
        format!("{}_", view.input)
    } else {
        view.input.clone()
    };
    let style = if ui.editing {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn render_recent(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let mut spans = vec![Span::raw("Recent: ")];
    if view.recent_searches.is_empty() {
        spans.push(Span::raw(constants::NO_RECENT_TEXT));
    }
    for (index, term) in view.recent_searches.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}] {}", index + 1, term),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_banner(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    if view.is_error {
        frame.render_widget(
            Paragraph::new(constants::ERROR_BANNER).style(Style::default().fg(Color::Red)),
            area,
        );
    } else if view.is_loading {
        frame.render_widget(Paragraph::new(constants::LOADING_TEXT), area);
    }
}

fn render_table(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let header = Row::new(vec![
        header_cell("Title (t)", SortKey::Title, view.sort),
        header_cell("Author (a)", SortKey::Author, view.sort),
        header_cell("Comments (c)", SortKey::Comments, view.sort),
        header_cell("Points (p)", SortKey::Points, view.sort),
        Cell::from("Actions"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.stories.iter().enumerate().map(|(index, story)| {
        let row = Row::new(vec![
            Cell::from(story.title.clone()),
            Cell::from(story.author.clone()),
            Cell::from(story.num_comments.to_string()),
            Cell::from(story.points.to_string()),
            Cell::from(constants::DISMISS_HINT),
        ]);
        if index == ui.selected {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Results (page {})", view.page)),
    );

    frame.render_widget(table, area);
}

fn header_cell(label: &str, key: SortKey, sort: SortState) -> Cell<'static> {
    let marker = if sort.key == key {
        if sort.reversed {
            " v"
        } else {
            " ^"
        }
    } else {
        ""
    };
    Cell::from(format!("{label}{marker}"))
}

fn render_status(frame: &mut Frame, ui: &UiState, area: Rect) {
    let help = if ui.editing {
        constants::HELP_EDITING
    } else {
        constants::HELP_NORMAL
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
