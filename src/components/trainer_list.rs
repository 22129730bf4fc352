use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::Component;
use super::theme::{self, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN, type_color};
use crate::action::Action;
use crate::roster::Trainer;
use crate::state::AppState;

pub struct TrainerListProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Registered trainers side by side, each with their roster
#[derive(Default)]
pub struct TrainerList {
    rosters: Vec<SelectList>,
}

impl TrainerList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for TrainerList {
    type Props<'a> = TrainerListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        let state = props.state;

        match key.code {
            KeyCode::Char('n') => Some(Action::TrainerFormStart),
            KeyCode::Char('R') => Some(Action::TrainersReset),
            KeyCode::Left => state
                .trainer_selected
                .checked_sub(1)
                .map(Action::TrainerSelect),
            KeyCode::Right => Some(Action::TrainerSelect(state.trainer_selected + 1)),
            KeyCode::Up => state
                .roster_selected
                .checked_sub(1)
                .map(Action::RosterSelect),
            KeyCode::Down => Some(Action::RosterSelect(state.roster_selected + 1)),
            KeyCode::Char('d') | KeyCode::Delete => {
                let trainer = state.selected_trainer();
                let pokemon = state.selected_roster_pokemon();
                trainer.zip(pokemon).map(|(trainer, pokemon)| Action::RosterRemove {
                    trainer_id: trainer.id,
                    pokemon_id: pokemon.pokedex_id,
                })
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let trainers = state.roster.trainers();

        if trainers.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Trainers ", theme::title_style()))
                .border_style(theme::border_style(false))
                .style(Style::default().bg(BG_PANEL));
            let text = Paragraph::new(Line::from(Span::styled(
                "No trainer registered yet.",
                Style::default().fg(TEXT_DIM),
            )))
            .block(block);
            frame.render_widget(text, area);
            return;
        }

        self.rosters.resize_with(trainers.len(), SelectList::new);
        let constraints = vec![Constraint::Ratio(1, trainers.len() as u32); trainers.len()];
        let columns = Layout::horizontal(constraints).split(area);
        for (index, ((trainer, column), list)) in trainers
            .iter()
            .zip(columns.iter())
            .zip(self.rosters.iter_mut())
            .enumerate()
        {
            let selected = index == state.trainer_selected;
            let roster_selected = selected.then_some(state.roster_selected);
            render_trainer(
                frame,
                *column,
                list,
                trainer,
                roster_selected,
                props.is_focused && selected,
            );
        }
    }
}

fn roster_items(trainer: &Trainer) -> Vec<Line<'static>> {
    trainer
        .roster
        .iter()
        .map(|pokemon| {
            let mut spans = vec![
                Span::styled(
                    format!("{} ", pokemon.number_label()),
                    Style::default().fg(TEXT_DIM),
                ),
                Span::styled(
                    pokemon.display_name().to_string(),
                    Style::default().fg(TEXT_MAIN),
                ),
            ];
            for name in pokemon.type_names() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    name.to_string(),
                    Style::default().fg(type_color(name)),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

/// Only the selected column highlights its entry.
fn render_trainer(
    frame: &mut Frame,
    area: Rect,
    list: &mut SelectList,
    trainer: &Trainer,
    roster_selected: Option<usize>,
    is_focused: bool,
) {
    let count = trainer.roster.len();
    let title = format!(" {} ({count} Pokémon) ", trainer.name);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, theme::title_style()))
        .border_style(theme::border_style(is_focused || roster_selected.is_some()))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if trainer.roster.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No Pokémon yet", Style::default().fg(TEXT_DIM))),
            inner,
        );
        return;
    }

    let items = roster_items(trainer);
    let list_props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: roster_selected.unwrap_or(0).min(count - 1),
        is_focused,
        style: SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::default(),
                bg: Some(BG_PANEL),
                fg: Some(TEXT_MAIN),
            },
            selection: SelectionStyle {
                style: Some(
                    Style::default()
                        .bg(BG_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: None,
                disabled: roster_selected.is_none(),
            },
            ..SelectListStyle::default()
        },
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: false,
        },
        on_select: Action::RosterSelect,
        render_item: &|item| item.clone(),
    };
    list.render(frame, inner, list_props);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Names, Pokemon};
    use crate::roster::TrainerId;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn pokemon(id: u32, name: &str) -> Pokemon {
        Pokemon {
            pokedex_id: id,
            name: Names {
                fr: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn with_trainers() -> AppState {
        let mut state = AppState::default();
        state.roster.add_trainer_with_id(TrainerId(1), "Ash");
        state.roster.add_trainer_with_id(TrainerId(2), "Misty");
        state
            .roster
            .add_pokemon_to_trainer(TrainerId(1), &pokemon(25, "Pikachu"));
        state
            .roster
            .add_pokemon_to_trainer(TrainerId(1), &pokemon(1, "Bulbizarre"));
        state
    }

    fn actions_for(state: &AppState, event: EventKind) -> Vec<Action> {
        let mut component = TrainerList::new();
        let props = TrainerListProps {
            state,
            is_focused: true,
        };
        component.handle_event(&event, props).into_iter().collect()
    }

    #[test]
    fn test_n_starts_form() {
        let state = AppState::default();
        let actions = actions_for(&state, EventKind::Key(key("n")));
        actions.assert_first(Action::TrainerFormStart);
    }

    #[test]
    fn test_delete_removes_selected_entry() {
        let mut state = with_trainers();
        state.roster_selected = 1;
        let actions = actions_for(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)),
        );
        actions.assert_count(1);
        actions.assert_first(Action::RosterRemove {
            trainer_id: TrainerId(1),
            pokemon_id: 1,
        });
    }

    #[test]
    fn test_delete_with_empty_roster_does_nothing() {
        let mut state = with_trainers();
        state.trainer_selected = 1;
        let actions = actions_for(&state, EventKind::Key(key("d")));
        actions.assert_empty();
    }

    #[test]
    fn test_left_at_first_trainer_does_nothing() {
        let state = with_trainers();
        let actions = actions_for(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
        );
        actions.assert_empty();
    }

    #[test]
    fn test_render_rosters() {
        let mut render = RenderHarness::new(80, 10);
        let mut component = TrainerList::new();
        let state = with_trainers();

        let output = render.render_to_string_plain(|frame| {
            let props = TrainerListProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Ash (2 Pokémon)"));
        assert!(output.contains("Misty (0 Pokémon)"));
        assert!(output.contains("#025 Pikachu"));
        assert!(output.contains("No Pokémon yet"));
    }

    #[test]
    fn test_render_empty() {
        let mut render = RenderHarness::new(60, 5);
        let mut component = TrainerList::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = TrainerListProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("No trainer registered yet."));
    }
}
