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
use super::theme::{self, ACCENT_GOLD, ACCENT_RED, BG_BASE, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::roster::{MAX_TRAINERS, TrainerId};
use crate::state::TrainerForm;

pub const CAP_REACHED: &str = "You can only register two trainers!";

const LABEL: &str = "Name: ";

pub struct RegistrationFormProps<'a> {
    pub form: &'a TrainerForm,
    pub trainer_count: usize,
    pub is_focused: bool,
}

/// Name input for registering a trainer. Only handles keys while editing.
#[derive(Default)]
pub struct RegistrationForm {
    input: TextInput,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }
}

fn submit_name(_: String) -> Action {
    Action::TrainerFormSubmit(TrainerId::now())
}

fn input_props<'a>(form: &'a TrainerForm, is_focused: bool) -> TextInputProps<'a, Action> {
    TextInputProps {
        value: &form.name,
        placeholder: "Trainer name",
        is_focused,
        style: TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::default(),
                bg: Some(BG_BASE),
                fg: Some(TEXT_MAIN),
            },
            placeholder_style: Some(Style::default().fg(TEXT_DIM)),
            cursor_style: Some(Style::default().bg(ACCENT_GOLD).fg(BG_BASE)),
        },
        on_change: Action::TrainerFormNameChange,
        on_submit: submit_name,
        on_cursor_move: Some(|_| Action::Render),
    }
}

impl Component<Action> for RegistrationForm {
    type Props<'a> = RegistrationFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || !props.form.editing {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.code == KeyCode::Esc {
            return vec![Action::TrainerFormCancel];
        }

        self.input
            .handle_event(event, input_props(props.form, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let form = props.form;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" New trainer ", theme::title_style()))
            .border_style(theme::border_style(props.is_focused && form.editing))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // Name
            Constraint::Min(0),    // Messages
        ])
        .split(inner);

        if form.editing {
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
                .render(frame, field, input_props(form, props.is_focused));
        } else if form.name.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Press n to register a trainer",
                    Style::default().fg(TEXT_DIM),
                )),
                rows[0],
            );
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(LABEL, Style::default().fg(TEXT_DIM)),
                    Span::styled(form.name.clone(), Style::default().fg(TEXT_MAIN)),
                ])),
                rows[0],
            );
        }

        let mut lines = Vec::new();
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
            )));
        }
        if props.trainer_count >= MAX_TRAINERS {
            lines.push(Line::from(Span::styled(
                CAP_REACHED,
                Style::default().fg(ACCENT_GOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{}/{MAX_TRAINERS} registered", props.trainer_count),
                Style::default().fg(TEXT_DIM),
            )));
        }

        frame.render_widget(Paragraph::new(lines), rows[1]);
    }
}
