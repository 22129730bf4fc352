use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps,
    StatusBarSection, StatusBarStyle,
};

use super::Component;
use super::theme::{ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::{AppState, Screen};

pub struct HelpBarProps<'a> {
    pub state: &'a AppState,
}

/// One-line key hints for whatever currently has the keyboard
pub struct HelpBar {
    status_bar: StatusBar,
}

impl Default for HelpBar {
    fn default() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }
}

impl HelpBar {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    if state.assign.is_some() {
        return vec![
            StatusBarHint::new("↑↓", "trainer"),
            StatusBarHint::new("Enter", "assign"),
            StatusBarHint::new("Esc", "close"),
        ];
    }
    if state.text_input_active() {
        return vec![
            StatusBarHint::new("Enter", "ok"),
            StatusBarHint::new("Esc", "cancel"),
            StatusBarHint::new("←→", "cursor"),
        ];
    }
    let mut hints = match state.screen {
        Screen::Trainers => vec![
            StatusBarHint::new("n", "new trainer"),
            StatusBarHint::new("←→", "trainer"),
            StatusBarHint::new("↑↓", "pokémon"),
            StatusBarHint::new("d", "remove"),
            StatusBarHint::new("R", "reset"),
        ],
        Screen::Pokedex => vec![
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("[ ]/c", "type"),
            StatusBarHint::new("←→", "page"),
            StatusBarHint::new("1-5", "jump"),
            StatusBarHint::new("f", "favorite"),
            StatusBarHint::new("a", "assign"),
        ],
    };
    hints.push(StatusBarHint::new("Tab", state.screen.toggle().title()));
    hints.push(StatusBarHint::new("q", "quit"));
    hints
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let hints = hints(state);
        let screen = Span::styled(
            state.screen.title(),
            Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
        );
        let screen_items = [StatusBarItem::span(screen)];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(BG_PANEL),
                fg: Some(TEXT_MAIN),
            },
            text: Style::default().fg(TEXT_DIM),
            hint_key: Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_DIM),
            separator: Style::default().fg(TEXT_DIM),
        };

        let props = StatusBarProps {
            left: StatusBarSection::items(&screen_items),
            center: StatusBarSection::hints(&hints).with_separator("  "),
            right: StatusBarSection::empty(),
            style,
            is_focused: false,
        };
        Component::<Action>::render(&mut self.status_bar, frame, area, props);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AssignDialog;
    use tui_dispatch::testing::*;

    fn render_bar(state: &AppState) -> String {
        let mut render = RenderHarness::new(120, 1);
        let mut component = HelpBar::new();
        render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), HelpBarProps { state });
        })
    }

    #[test]
    fn test_screen_hints() {
        let mut state = AppState::default();
        let output = render_bar(&state);
        assert!(output.contains("new trainer"));
        assert!(output.contains("Trainers"));

        state.screen = Screen::Pokedex;
        let output = render_bar(&state);
        assert!(output.contains("search"));
        assert!(output.contains("favorite"));
        assert!(output.contains("jump"));
    }

    #[test]
    fn test_editing_hides_shortcuts() {
        let mut state = AppState::default();
        state.trainer_form.editing = true;
        let output = render_bar(&state);
        assert!(output.contains("cancel"));
        assert!(!output.contains("quit"));
    }

    #[test]
    fn test_dialog_hints() {
        let state = AppState {
            assign: Some(AssignDialog::default()),
            ..Default::default()
        };
        let output = render_bar(&state);
        assert!(output.contains("assign"));
        assert!(!output.contains("new trainer"));
    }
}
