use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle, highlight_substring,
};

use super::{Component, PokemonCard, PokemonCardProps, SearchBar, SearchBarProps};
use super::theme::{
    self, ACCENT_GOLD, ACCENT_RED, BG_BASE, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN,
};
use crate::action::Action;
use crate::catalog::TypeFilter;
use crate::state::AppState;

pub const NO_MATCH: &str = "No Pokémon matches your search";
pub const LOADING: &str = "Loading Pokédex...";
pub const RESTART_HINT: &str = "Restart the application to try again.";

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct PokedexViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Catalog browser: header, current page, detail card and pager
#[derive(Default)]
pub struct PokedexView {
    list: SelectList,
    header: SearchBar,
    card: PokemonCard,
}

impl PokedexView {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_items(state: &AppState) -> Vec<Line<'static>> {
        let base = Style::default().fg(TEXT_MAIN);
        let highlight = Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD);
        state
            .visible_page()
            .iter()
            .map(|pokemon| {
                let marker = if state.is_favorite(pokemon.pokedex_id) {
                    "★ "
                } else {
                    "  "
                };
                let text = format!(
                    "{marker}{} {}",
                    pokemon.number_label(),
                    pokemon.display_name()
                );
                highlight_substring(&text, &state.search.query, base, highlight)
            })
            .collect()
    }

    fn list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(BG_BASE),
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

    fn render_list(&mut self, frame: &mut Frame, area: Rect, props: &PokedexViewProps<'_>) {
        let state = props.state;
        let items = Self::page_items(state);
        if items.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(false))
                .style(Style::default().bg(BG_PANEL));
            let text = Paragraph::new(Line::from(Span::styled(
                NO_MATCH,
                Style::default().fg(TEXT_DIM),
            )))
            .block(block);
            frame.render_widget(text, area);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(props.is_focused))
            .style(Style::default().bg(BG_BASE));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: state.selected.min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: Self::list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: false,
                wrap_navigation: false,
            },
            on_select: Action::DexSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}

impl Component<Action> for PokedexView {
    type Props<'a> = PokedexViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        if !props.is_focused || !state.catalog.is_loaded() {
            return Vec::new();
        }
        if state.search.active {
            let header_props = SearchBarProps {
                search: &state.search,
                type_filter: &state.type_filter,
                found: None,
                is_focused: true,
            };
            return self
                .header
                .handle_event(event, header_props)
                .into_iter()
                .collect();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Char('/') => vec![Action::SearchStart],
            KeyCode::Char(']') => vec![Action::TypeFilterNext],
            KeyCode::Char('[') => vec![Action::TypeFilterPrev],
            KeyCode::Char('c') => vec![Action::TypeFilterSet(TypeFilter::All)],
            // Digits pick a button of the pager window
            KeyCode::Char(digit @ '1'..='9') => {
                let button = digit as usize - '1' as usize;
                state
                    .page_window()
                    .get(button)
                    .map(|&page| Action::PageSet(page))
                    .into_iter()
                    .collect()
            }
            KeyCode::Left | KeyCode::PageUp => vec![Action::PagePrev],
            KeyCode::Right | KeyCode::PageDown => vec![Action::PageNext],
            KeyCode::Home => vec![Action::PageFirst],
            KeyCode::End => vec![Action::PageLast],
            KeyCode::Char('f') => vec![Action::DexFavoriteToggle],
            KeyCode::Enter | KeyCode::Char('a') => vec![Action::AssignOpen],
            KeyCode::Up | KeyCode::Down => {
                let items = Self::page_items(state);
                if items.is_empty() {
                    return Vec::new();
                }
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.selected.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: Self::list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: false,
                        wrap_navigation: false,
                    },
                    on_select: Action::DexSelect,
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
        let chunks = Layout::vertical([
            Constraint::Length(4), // Search, type, count
            Constraint::Min(1),    // List + details
            Constraint::Length(1), // Pager
        ])
        .split(area);

        let found = state
            .catalog
            .is_loaded()
            .then(|| state.filtered().len());
        self.header.render(
            frame,
            chunks[0],
            SearchBarProps {
                search: &state.search,
                type_filter: &state.type_filter,
                found,
                is_focused: props.is_focused,
            },
        );

        match &state.catalog {
            DataResource::Loaded(_) => {
                let body = Layout::horizontal([
                    Constraint::Percentage(45),
                    Constraint::Percentage(55),
                ])
                .split(chunks[1]);
                self.render_list(frame, body[0], &props);

                let pokemon = state.selected_pokemon();
                let is_favorite = pokemon.is_some_and(|p| state.is_favorite(p.pokedex_id));
                self.card.render(
                    frame,
                    body[1],
                    PokemonCardProps {
                        pokemon,
                        is_favorite,
                    },
                );

                render_pager(frame, chunks[2], state);
            }
            DataResource::Failed(error) => render_error(frame, chunks[1], error),
            DataResource::Empty | DataResource::Loading => {
                render_loading(frame, chunks[1], state.tick_count)
            }
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let frame_index = tick_count as usize % SPINNER.len();
    let text = Paragraph::new(Line::from(vec![
        Span::styled(SPINNER[frame_index], Style::default().fg(ACCENT_GOLD)),
        Span::raw(" "),
        Span::styled(LOADING, Style::default().fg(TEXT_MAIN)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).style(Style::default().bg(BG_PANEL)));
    frame.render_widget(text, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Could not load the Pokédex",
            Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(error.to_string(), Style::default().fg(TEXT_MAIN))),
        Line::default(),
        Line::from(Span::styled(RESTART_HINT, Style::default().fg(TEXT_DIM))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).style(Style::default().bg(BG_PANEL)));
    frame.render_widget(text, area);
}

fn render_pager(frame: &mut Frame, area: Rect, state: &AppState) {
    let total = state.total_pages();
    if total == 0 {
        return;
    }
    let dim = Style::default().fg(TEXT_DIM);
    let mut spans = vec![Span::styled("‹ ", dim)];
    for page in state.page_window() {
        if page == state.page {
            spans.push(Span::styled(
                format!("[{page}]"),
                Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(page.to_string(), Style::default().fg(TEXT_MAIN)));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("›", dim));
    spans.push(Span::styled(format!("   Page {}/{total}", state.page), dim));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Names, Pokemon};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn loaded(count: u32) -> AppState {
        let catalog = (1..=count)
            .map(|id| Pokemon {
                pokedex_id: id,
                name: Names {
                    fr: format!("Pokemon {id}"),
                    ..Default::default()
                },
                ..Default::default()
            })
            .collect();
        AppState {
            catalog: DataResource::Loaded(catalog),
            ..Default::default()
        }
    }

    fn actions_for(state: &AppState, event: EventKind) -> Vec<Action> {
        let mut component = PokedexView::new();
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component.handle_event(&event, props).into_iter().collect()
    }

    fn render_view(state: &AppState) -> String {
        let mut render = RenderHarness::new(90, 24);
        let mut component = PokedexView::new();
        render.render_to_string_plain(|frame| {
            let props = PokedexViewProps {
                state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_browse_keys() {
        let state = loaded(30);
        actions_for(&state, EventKind::Key(key("/"))).assert_first(Action::SearchStart);
        actions_for(&state, EventKind::Key(key("]"))).assert_first(Action::TypeFilterNext);
        actions_for(&state, EventKind::Key(key("f"))).assert_first(Action::DexFavoriteToggle);
        actions_for(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
        )
        .assert_first(Action::PageNext);
        actions_for(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        )
        .assert_first(Action::AssignOpen);
    }

    #[test]
    fn test_filter_and_pager_keys() {
        let mut state = loaded(60);
        state.type_filter = TypeFilter::parse("Feu");
        actions_for(&state, EventKind::Key(key("c")))
            .assert_first(Action::TypeFilterSet(TypeFilter::All));

        // 8 pages, window centered on page 6
        let mut state = loaded(90);
        state.page = 6;
        assert_eq!(state.page_window(), vec![4, 5, 6, 7, 8]);
        actions_for(&state, EventKind::Key(key("1"))).assert_first(Action::PageSet(4));
        actions_for(&state, EventKind::Key(key("5"))).assert_first(Action::PageSet(8));
        actions_for(&state, EventKind::Key(key("6"))).assert_empty();
    }

    #[test]
    fn test_active_search_takes_text_keys() {
        let mut state = loaded(30);
        state.search.active = true;
        actions_for(&state, EventKind::Key(key("f")))
            .assert_first(Action::SearchQueryChange("f".into()));
        actions_for(&state, EventKind::Key(key("esc"))).assert_first(Action::SearchCancel);
    }

    #[test]
    fn test_down_selects_next_entry() {
        let state = loaded(30);
        let actions = actions_for(
            &state,
            EventKind::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
        );
        actions.assert_first(Action::DexSelect(1));
    }

    #[test]
    fn test_keys_ignored_until_loaded() {
        let state = AppState {
            catalog: DataResource::Loading,
            ..Default::default()
        };
        actions_for(&state, EventKind::Key(key("/"))).assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let state = AppState {
            catalog: DataResource::Loading,
            ..Default::default()
        };
        assert!(render_view(&state).contains(LOADING));
    }

    #[test]
    fn test_render_error() {
        let state = AppState {
            catalog: DataResource::Failed("HTTP status 503".into()),
            ..Default::default()
        };
        let output = render_view(&state);
        assert!(output.contains("HTTP status 503"));
        assert!(output.contains(RESTART_HINT));
    }

    #[test]
    fn test_render_page_and_pager() {
        let state = loaded(30);
        let output = render_view(&state);
        assert!(output.contains("30 Pokémon found"));
        assert!(output.contains("#001 Pokemon 1"));
        assert!(output.contains("#012 Pokemon 12"));
        assert!(!output.contains("#013"));
        assert!(output.contains("Page 1/3"));
    }

    #[test]
    fn test_render_no_match() {
        let mut state = loaded(30);
        state.search.query = "zzz".into();
        let output = render_view(&state);
        assert!(output.contains("0 Pokémon found"));
        assert!(output.contains(NO_MATCH));
    }
}
