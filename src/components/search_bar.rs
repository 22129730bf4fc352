use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use super::theme::{self, ACCENT_GOLD, BG_BASE, BG_PANEL, TEXT_DIM, TEXT_MAIN, type_color};
use crate::action::Action;
use crate::catalog::TypeFilter;
use crate::state::SearchState;

const LABEL: &str = "Search: ";

pub struct SearchBarProps<'a> {
    pub search: &'a SearchState,
    pub type_filter: &'a TypeFilter,
    /// Filtered count, once the catalog is loaded
    pub found: Option<usize>,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props(search: &SearchState, is_focused: bool) -> TextInputProps<'_, Action> {
        TextInputProps {
            value: &search.query,
            placeholder: "name or number (/)",
            is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::default(),
                    bg: is_focused.then_some(BG_BASE),
                    fg: Some(TEXT_MAIN),
                },
                placeholder_style: Some(Style::default().fg(TEXT_DIM)),
                cursor_style: Some(Style::default().bg(ACCENT_GOLD).fg(BG_BASE)),
            },
            on_change: Action::SearchQueryChange,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || !props.search.active {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.code == KeyCode::Esc {
            return vec![Action::SearchCancel];
        }

        self.input
            .handle_event(event, Self::input_props(props.search, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let search = props.search;
        let is_editing = props.is_focused && search.active;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Pokédex ", theme::title_style()))
            .border_style(theme::border_style(is_editing))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Type filter and count
        ])
        .split(inner);
        let [label, field] = Layout::horizontal([
            Constraint::Length(LABEL.len() as u16),
            Constraint::Min(1),
        ])
        .areas(rows[0]);

        frame.render_widget(
            Paragraph::new(Span::styled(LABEL, Style::default().fg(TEXT_DIM))),
            label,
        );
        self.input
            .render(frame, field, Self::input_props(search, is_editing));

        let filter_style = match props.type_filter {
            TypeFilter::All => Style::default().fg(TEXT_MAIN),
            TypeFilter::Only(name) => Style::default()
                .fg(type_color(name))
                .add_modifier(Modifier::BOLD),
        };
        let mut status = vec![
            Span::styled("Type: ", Style::default().fg(TEXT_DIM)),
            Span::styled(props.type_filter.label().to_string(), filter_style),
        ];
        if let Some(found) = props.found {
            status.push(Span::raw("   "));
            status.push(Span::styled(
                format!("{found} Pokémon found"),
                Style::default().fg(ACCENT_GOLD),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(status)), rows[1]);
    }
}
