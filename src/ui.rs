//! UI rendering helpers for the terminal user interface.
//!
//! Two screens: the login picker while nobody is logged in, and the catalog
//! browser afterwards. Everything is drawn from `App` on each frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, FormField, InputMode};
use crate::auth::{IDENTITIES, Role};
use crate::config::UiSettings;
use crate::library::Track;
use crate::view::GroupField;

pub const NO_RESULTS: &str = "No songs found matching your criteria.";
pub const ADD_SONG_CONTROL: &str = "+ Add Song";
pub const DELETE_MARKER: &str = "✕";

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("/", "search");
    map.insert("f", "filter field");
    map.insert("s", "sort field");
    map.insert("o", "sort order");
    map.insert("b", "group by");
    map.insert("a", "add song");
    map.insert("d", "delete song");
    map.insert("L", "logout");
    map.insert("q", "quit");
    map
});

/// Render the key binding help, leaving out editing keys for read-only users.
fn controls_text(can_edit: bool) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "gg/G", "/", "f", "s", "o", "b", "a", "d", "L", "q"];
    order
        .iter()
        .filter(|k| can_edit || !matches!(**k, "a" | "d"))
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    match app.current_user() {
        None => draw_login(frame, app, ui_settings),
        Some(_) => draw_browser(frame, app, ui_settings),
    }
}

fn role_text(role: Role) -> &'static str {
    match role {
        Role::Admin => "Login as Admin",
        Role::User => "Login as User",
    }
}

fn draw_login(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let area = centered_rect_sized(52, 14, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![Line::from("Choose a user to login:"), Line::from("")];
    for (i, identity) in IDENTITIES.iter().enumerate() {
        let label = role_text(identity.role);
        if i == app.login_choice {
            lines.push(Line::from(format!("> {label}")).add_modifier(Modifier::REVERSED));
        } else {
            lines.push(Line::from(format!("  {label}")));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::from("Admin:").bold(),
        Span::from(" Can add and delete songs"),
    ]));
    lines.push(Line::from(vec![
        Span::from("User:").bold(),
        Span::from(" Can only view and filter songs"),
    ]));
    if ui_settings.show_help {
        lines.push(Line::from(""));
        lines.push(Line::from("[j/k] choose | [enter] login | [q] quit").italic());
    }

    let card = Paragraph::new(lines)
        .block(
            left_padded(" Music Library Login ")
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn draw_browser(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let footer_height = if ui_settings.show_help { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    // Header
    let welcome = app
        .current_user()
        .map(|u| format!("Welcome, {} ({}) • [L] Logout", u.username, u.role.as_str()))
        .unwrap_or_default();
    let header = Paragraph::new(welcome).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(ui_settings.header_text.as_str())
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, chunks[0]);

    // Stats
    let stats = app.stats();
    let stats_text = [
        format!("{} Songs", stats.total_tracks),
        format!("{} Artists", stats.artists),
        format!("{} Albums", stats.albums),
        format!("{} Genres", stats.genres),
        format!("{} Total Duration", stats.total_duration()),
    ]
    .join(" • ");
    frame.render_widget(Paragraph::new(stats_text).block(left_padded(" stats ")), chunks[1]);

    // View controls
    frame.render_widget(
        Paragraph::new(controls_line(app)).block(left_padded(" controls ")),
        chunks[2],
    );

    draw_song_list(frame, app, chunks[3]);

    if app.show_add_form && app.can_edit() {
        draw_add_form(frame, app, chunks[3]);
    }

    if ui_settings.show_help {
        let footer = Paragraph::new(controls_text(app.can_edit()))
            .block(left_padded(" keys "))
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[4]);
    }
}

fn controls_line(app: &App) -> Line<'static> {
    let c = &app.controls;
    let searching = app.mode == InputMode::Search;

    let search = if c.search.is_empty() && !searching {
        Span::from("Search songs...").dim()
    } else if searching {
        Span::from(format!("{}▏", c.search)).add_modifier(Modifier::UNDERLINED)
    } else {
        Span::from(c.search.clone())
    };

    let group = match c.group_by {
        GroupField::None => GroupField::None.label().to_string(),
        g => format!("Group by {}", g.label()),
    };

    let mut spans = vec![
        Span::from("Search: "),
        search,
        Span::from(format!(" | Filter by {}", c.filter_by.label())),
        Span::from(format!(
            " | Sort by {} {}",
            c.sort_by.label(),
            c.sort_order.arrow()
        )),
        Span::from(format!(" | {group}")),
    ];
    if app.can_edit() {
        spans.push(Span::from(" | "));
        spans.push(Span::from(ADD_SONG_CONTROL).bold());
    }
    Line::from(spans)
}

fn song_row(track: &Track, can_edit: bool) -> ListItem<'static> {
    let mut spans = vec![
        Span::from(track.title.clone()).bold(),
        Span::from(format!(" — {} · {}", track.artist, track.album)),
        Span::from(format!(
            " · {} · {} · {}",
            track.year, track.genre, track.duration
        ))
        .dim(),
    ];
    if can_edit {
        spans.push(Span::from(format!("  {DELETE_MARKER}")));
    }
    ListItem::new(Line::from(spans))
}

fn draw_song_list(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.derived_view();
    let block = Block::default().borders(Borders::ALL).title(" songs ");

    if view.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let show_titles = app.controls.group_by != GroupField::None;
    let can_edit = app.can_edit();
    let mut items: Vec<ListItem> = Vec::with_capacity(view.len + view.groups.len());
    let mut selected_item = None;
    let mut pos = 0usize;

    for group in &view.groups {
        if show_titles {
            items.push(ListItem::new(Line::from(group.label.clone()).underlined().bold()));
        }
        for track in &group.tracks {
            if pos == app.selected {
                selected_item = Some(items.len());
            }
            items.push(song_row(track, can_edit));
            pos += 1;
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(selected_item);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_sized(60, 12, area);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&f| {
            let value = app.form.value(f);
            if f == app.form.focus {
                Line::from(format!("> {}: {}▏", f.label(), value)).bold()
            } else {
                Line::from(format!("  {}: {}", f.label(), value))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("[enter] Save Song | [esc] Cancel | [tab] next field").italic());

    let form = Paragraph::new(lines).block(left_padded(" Add New Song "));
    frame.render_widget(form, popup_area);
}
