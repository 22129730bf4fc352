//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use trainerdex::{
    catalog::TypeFilter,
    components::{
        AssignModal, AssignModalProps, Component, PokedexView, PokedexViewProps, TrainerList,
        TrainerListProps,
    },
    pokemon::{Names, Pokemon, PokemonType},
    roster::TrainerId,
    state::{AppState, AssignDialog},
};
use tui_dispatch::{DataResource, testing::*};

fn pokemon(id: u32, name: &str, ty: &str) -> Pokemon {
    Pokemon {
        pokedex_id: id,
        name: Names {
            fr: name.into(),
            ..Default::default()
        },
        types: Some(vec![PokemonType {
            name: ty.into(),
            image: String::new(),
        }]),
        ..Default::default()
    }
}

fn loaded_state() -> AppState {
    AppState {
        catalog: DataResource::Loaded(vec![
            pokemon(1, "Bulbizarre", "Plante"),
            pokemon(4, "Salamèche", "Feu"),
            pokemon(7, "Carapuce", "Eau"),
        ]),
        ..Default::default()
    }
}

fn render_pokedex(state: &AppState) -> String {
    let mut render = RenderHarness::new(90, 24);
    let mut view = PokedexView::new();
    render.render_to_string_plain(|frame| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        catalog: DataResource::Loading,
        tick_count: 3,
        ..Default::default()
    };

    let output = render_pokedex(&state);

    assert!(output.contains("Loading Pokédex..."), "Should show loading text");
    assert!(!output.contains("Pokémon found"), "No count before load");
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        catalog: DataResource::Failed("Network error".into()),
        ..Default::default()
    };

    let output = render_pokedex(&state);

    assert!(
        output.contains("Network error"),
        "Should show error message"
    );
    assert!(
        output.contains("Restart the application to try again."),
        "Should show restart hint"
    );
}

#[test]
fn test_render_catalog_page() {
    let state = loaded_state();

    let output = render_pokedex(&state);

    assert!(output.contains("3 Pokémon found"));
    assert!(output.contains("#001 Bulbizarre"));
    assert!(output.contains("#007 Carapuce"));
    assert!(output.contains("Page 1/1"));
}

#[test]
fn test_render_type_filter() {
    let mut state = loaded_state();
    state.type_filter = TypeFilter::parse("Feu");

    let output = render_pokedex(&state);

    assert!(output.contains("1 Pokémon found"));
    assert!(output.contains("#004 Salamèche"));
    assert!(!output.contains("Bulbizarre"));
}

#[test]
fn test_render_empty_result() {
    let mut state = loaded_state();
    state.search.query = "mew".into();

    let output = render_pokedex(&state);

    assert!(output.contains("No Pokémon matches your search"));
}

#[test]
fn test_render_trainer_columns() {
    let mut render = RenderHarness::new(80, 12);
    let mut list = TrainerList::new();

    let mut state = loaded_state();
    state.roster.add_trainer_with_id(TrainerId(1), "Ash");
    state.roster.add_trainer_with_id(TrainerId(2), "Misty");
    state
        .roster
        .add_pokemon_to_trainer(TrainerId(2), &pokemon(7, "Carapuce", "Eau"));

    let output = render.render_to_string_plain(|frame| {
        let props = TrainerListProps {
            state: &state,
            is_focused: true,
        };
        list.render(frame, frame.area(), props);
    });

    assert!(output.contains("Ash (0 Pokémon)"));
    assert!(output.contains("Misty (1 Pokémon)"));
    assert!(output.contains("#007 Carapuce"));
}

#[test]
fn test_render_long_roster_follows_selection() {
    let mut render = RenderHarness::new(60, 12);
    let mut list = TrainerList::new();

    let mut state = loaded_state();
    state.roster.add_trainer_with_id(TrainerId(1), "Ash");
    for id in 1..=30 {
        state.roster.add_pokemon_to_trainer(
            TrainerId(1),
            &pokemon(id, &format!("Mon{id:02}"), "Normal"),
        );
    }
    state.roster_selected = 29;

    let output = render.render_to_string_plain(|frame| {
        let props = TrainerListProps {
            state: &state,
            is_focused: true,
        };
        list.render(frame, frame.area(), props);
    });

    assert!(output.contains("Ash (30 Pokémon)"));
    assert!(
        output.contains("#030 Mon30"),
        "Selected entry should be scrolled into view:\n{}",
        output
    );
    assert!(!output.contains("Mon01"));

    // Moving back to the top scrolls the column back
    state.roster_selected = 0;
    let output = render.render_to_string_plain(|frame| {
        let props = TrainerListProps {
            state: &state,
            is_focused: true,
        };
        list.render(frame, frame.area(), props);
    });
    assert!(output.contains("#001 Mon01"));
    assert!(!output.contains("Mon30"));
}

#[test]
fn test_render_assign_dialog_without_trainers() {
    let mut render = RenderHarness::new(80, 24);
    let mut modal = AssignModal::new();

    let state = AppState {
        assign: Some(AssignDialog {
            pokemon_id: 4,
            ..Default::default()
        }),
        ..loaded_state()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = AssignModalProps {
            state: &state,
            is_focused: true,
        };
        modal.render(frame, frame.area(), props);
    });

    assert!(output.contains("Add Salamèche to a team"));
    assert!(output.contains("No trainer is registered yet."));
}
