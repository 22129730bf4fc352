//! Trainerdex - Pokedex browser with two-trainer rosters

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use trainerdex::action::Action;
use trainerdex::api;
use trainerdex::catalog::{DEFAULT_API_URL, PAGE_SIZE};
use trainerdex::components::{
    AssignModal, AssignModalProps, Component, HelpBar, HelpBarProps, PokedexView,
    PokedexViewProps, RegistrationForm, RegistrationFormProps, TrainerList, TrainerListProps,
};
use trainerdex::effect::Effect;
use trainerdex::reducer::reducer;
use trainerdex::state::{AppState, CatalogConfig, Screen, TICK_MS};

/// Trainerdex - browse the Pokedex and build two trainer teams
#[derive(Parser, Debug)]
#[command(name = "trainerdex")]
#[command(about = "Pokedex TUI with two-trainer rosters, built on tui-dispatch")]
struct Args {
    /// Catalog endpoint returning the full Pokemon list as JSON
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Entries per Pokedex page (minimum 1)
    #[arg(long, default_value_t = PAGE_SIZE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DexComponentId {
    Trainers,
    Form,
    Pokedex,
    Search,
    Assign,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DexContext {
    Trainers,
    TextInput,
    Pokedex,
    Assign,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        if self.assign.is_some() {
            return Some(DexComponentId::Assign);
        }
        match self.screen {
            Screen::Trainers if self.trainer_form.editing => Some(DexComponentId::Form),
            Screen::Trainers => Some(DexComponentId::Trainers),
            Screen::Pokedex if self.search.active => Some(DexComponentId::Search),
            Screen::Pokedex => Some(DexComponentId::Pokedex),
        }
    }

    fn modal(&self) -> Option<DexComponentId> {
        if self.assign.is_some() {
            Some(DexComponentId::Assign)
        } else if self.trainer_form.editing {
            Some(DexComponentId::Form)
        } else if self.search.active {
            Some(DexComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: DexComponentId) -> DexContext {
        match id {
            DexComponentId::Trainers => DexContext::Trainers,
            DexComponentId::Form | DexComponentId::Search => DexContext::TextInput,
            DexComponentId::Pokedex => DexContext::Pokedex,
            DexComponentId::Assign => DexContext::Assign,
        }
    }

    fn default_context(&self) -> DexContext {
        DexContext::Trainers
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_url,
        page_size,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(CatalogConfig {
                api_url,
                page_size: page_size as usize,
            }))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct DexUi {
    form: RegistrationForm,
    trainers: TrainerList,
    pokedex: PokedexView,
    assign: AssignModal,
    help: HelpBar,
}

impl DexUi {
    fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            trainers: TrainerList::new(),
            pokedex: PokedexView::new(),
            assign: AssignModal::new(),
            help: HelpBar::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Help bar
        ])
        .split(area);
        let focused = render_ctx.is_focused() && state.assign.is_none();

        match state.screen {
            Screen::Trainers => {
                let parts = Layout::vertical([
                    Constraint::Length(5), // Registration form
                    Constraint::Min(1),    // Trainer columns
                ])
                .split(chunks[0]);
                event_ctx.set_component_area(DexComponentId::Form, parts[0]);
                event_ctx.set_component_area(DexComponentId::Trainers, parts[1]);
                event_ctx.component_areas.remove(&DexComponentId::Pokedex);
                event_ctx.component_areas.remove(&DexComponentId::Search);

                self.form.render(
                    frame,
                    parts[0],
                    RegistrationFormProps {
                        form: &state.trainer_form,
                        trainer_count: state.roster.len(),
                        is_focused: focused,
                    },
                );
                self.trainers.render(
                    frame,
                    parts[1],
                    TrainerListProps {
                        state,
                        is_focused: focused && !state.trainer_form.editing,
                    },
                );
            }
            Screen::Pokedex => {
                event_ctx.set_component_area(DexComponentId::Pokedex, chunks[0]);
                event_ctx.set_component_area(DexComponentId::Search, chunks[0]);
                event_ctx.component_areas.remove(&DexComponentId::Form);
                event_ctx.component_areas.remove(&DexComponentId::Trainers);

                self.pokedex.render(
                    frame,
                    chunks[0],
                    PokedexViewProps {
                        state,
                        is_focused: focused,
                    },
                );
            }
        }

        self.help.render(frame, chunks[1], HelpBarProps { state });

        self.assign.set_open(state.assign.is_some());
        if state.assign.is_some() {
            event_ctx.set_component_area(DexComponentId::Assign, AssignModal::area(area));
            let props = AssignModalProps {
                state,
                is_focused: render_ctx.is_focused(),
            };
            self.assign.render(frame, area, props);
        } else {
            event_ctx.component_areas.remove(&DexComponentId::Assign);
        }
    }

    fn handle_trainers_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = TrainerListProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .trainers
            .handle_event(event, props)
            .into_iter()
            .collect();
        handler_response(actions)
    }

    fn handle_form_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = RegistrationFormProps {
            form: &state.trainer_form,
            trainer_count: state.roster.len(),
            is_focused: true,
        };
        let actions: Vec<_> = self.form.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }

    fn handle_pokedex_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .pokedex
            .handle_event(event, props)
            .into_iter()
            .collect();
        handler_response(actions)
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        // The Pokedex view owns the search input and its cursor
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .pokedex
            .handle_event(event, props)
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }

    fn handle_assign_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.assign.set_open(state.assign.is_some());
        let props = AssignModalProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.assign.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_trainers = Rc::clone(&ui);
    bus.register(DexComponentId::Trainers, move |event, state| {
        ui_trainers
            .borrow_mut()
            .handle_trainers_event(&event.kind, state)
    });

    let ui_form = Rc::clone(&ui);
    bus.register(DexComponentId::Form, move |event, state| {
        ui_form.borrow_mut().handle_form_event(&event.kind, state)
    });

    let ui_pokedex = Rc::clone(&ui);
    bus.register(DexComponentId::Pokedex, move |event, state| {
        ui_pokedex
            .borrow_mut()
            .handle_pokedex_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(DexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_assign = Rc::clone(&ui);
    bus.register(DexComponentId::Assign, move |event, state| {
        ui_assign
            .borrow_mut()
            .handle_assign_event(&event.kind, state)
    });

    // Shortcuts never fire while a text field has the keyboard
    bus.register_global(|event, state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        EventKind::Key(key) if !state.text_input_active() => match key.code {
            KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            KeyCode::Tab if state.assign.is_none() => {
                HandlerResponse::action(Action::UiToggleScreen)
            }
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadCatalog { url } => {
            ctx.tasks().spawn(TaskKey::new("catalog"), async move {
                match api::fetch_catalog(&url).await {
                    Ok(entries) => Action::CatalogDidLoad(entries),
                    Err(err) => Action::CatalogDidError(err.to_string()),
                }
            });
        }
    }
}
