use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, SelectList,
    SelectListBehavior, SelectListProps, SelectListStyle, SelectionStyle, centered_rect,
};

use super::Component;
use super::theme::{self, ACCENT_GREEN, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::{AppState, AssignDialog};

pub const NO_TRAINERS: &str = "No trainer is registered yet. Create one first!";

pub struct AssignModalProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Modal for putting the selected Pokedex entry on a trainer's team
pub struct AssignModal {
    list: SelectList,
    modal: Modal,
    was_open: bool,
}

impl Default for AssignModal {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl AssignModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.list = SelectList::new();
        }
        self.was_open = is_open;
    }

    pub fn area(area: Rect) -> Rect {
        centered_rect(60, 12, area)
    }

    fn trainer_items(state: &AppState, dialog: &AssignDialog) -> Vec<Line<'static>> {
        state
            .roster
            .trainers()
            .iter()
            .map(|trainer| {
                let mut spans = vec![Span::raw(format!(
                    "{} ({} Pokémon)",
                    trainer.name,
                    trainer.roster.len()
                ))];
                if trainer.has_pokemon(dialog.pokemon_id) {
                    spans.push(Span::styled("  ✓", Style::default().fg(ACCENT_GREEN)));
                }
                Line::from(spans)
            })
            .collect()
    }

    fn list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: None,
                fg: Some(TEXT_MAIN),
            },
            selection: SelectionStyle {
                style: Some(
                    Style::default()
                        .bg(BG_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: None,
                disabled: false,
            },
            ..SelectListStyle::default()
        }
    }
}

impl Component<Action> for AssignModal {
    type Props<'a> = AssignModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        let Some(dialog) = state.assign.as_ref() else {
            return Vec::new();
        };
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => vec![Action::AssignClose],
            KeyCode::Enter if dialog.success.is_some() => vec![Action::AssignClose],
            KeyCode::Enter => state
                .roster
                .trainers()
                .get(dialog.selected)
                .map(|trainer| Action::RosterAdd {
                    trainer_id: trainer.id,
                    pokemon_id: dialog.pokemon_id,
                })
                .into_iter()
                .collect(),
            KeyCode::Up | KeyCode::Down => {
                let items = Self::trainer_items(state, dialog);
                if items.is_empty() {
                    return Vec::new();
                }
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: dialog.selected.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: Self::list_style(),
                    behavior: SelectListBehavior::default(),
                    on_select: Action::AssignSelect,
                    render_item: &|item| item.clone(),
                };
                self.list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let Some(dialog) = state.assign.as_ref() else {
            return;
        };
        if area.width < 20 || area.height < 8 {
            return;
        }

        let pokemon_name = state
            .find_pokemon(dialog.pokemon_id)
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| format!("#{:03}", dialog.pokemon_id));
        let items = Self::trainer_items(state, dialog);

        let AssignModal { list, modal, .. } = self;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(2), // Title
                Constraint::Min(1),    // Trainers
                Constraint::Length(1), // Success
            ])
            .split(content_area);

            let title = Paragraph::new(Line::from(vec![
                Span::styled("Add ", Style::default().fg(TEXT_DIM)),
                Span::styled(pokemon_name.clone(), theme::title_style()),
                Span::styled(" to a team", Style::default().fg(TEXT_DIM)),
            ]));
            frame.render_widget(title, chunks[0]);

            if items.is_empty() {
                let text = Paragraph::new(Line::from(Span::styled(
                    NO_TRAINERS,
                    Style::default().fg(TEXT_DIM),
                )));
                frame.render_widget(text, chunks[1]);
            } else {
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: dialog.selected.min(items.len().saturating_sub(1)),
                    is_focused: props.is_focused && dialog.success.is_none(),
                    style: Self::list_style(),
                    behavior: SelectListBehavior::default(),
                    on_select: Action::AssignSelect,
                    render_item: &|item| item.clone(),
                };
                list.render(frame, chunks[1], list_props);
            }

            if let Some(success) = &dialog.success {
                let text = Paragraph::new(Line::from(Span::styled(
                    success.clone(),
                    Style::default()
                        .fg(ACCENT_GREEN)
                        .add_modifier(Modifier::BOLD),
                )));
                frame.render_widget(text, chunks[2]);
            }
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: Self::area(area),
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(BG_PANEL),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::AssignClose,
                render_content: &mut render_content,
            },
        );
    }
}
