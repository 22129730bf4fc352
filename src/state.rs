//! Application state - single source of truth

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::catalog::{self, DEFAULT_API_URL, PAGE_BUTTONS, PAGE_SIZE, TypeFilter};
use crate::pokemon::Pokemon;
use crate::roster::{RosterStore, Trainer};

pub const TICK_MS: u64 = 100;
/// Ticks the assign dialog stays open after a successful assignment (~2s).
pub const ASSIGN_CLOSE_TICKS: u32 = 20;

/// Where the catalog comes from and how it is paged
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogConfig {
    pub api_url: String,
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Screen {
    #[default]
    Trainers,
    Pokedex,
}

impl Screen {
    pub fn toggle(&self) -> Self {
        match self {
            Screen::Trainers => Screen::Pokedex,
            Screen::Pokedex => Screen::Trainers,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Trainers => "Trainers",
            Screen::Pokedex => "Pokédex",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrainerForm {
    pub editing: bool,
    pub name: String,
    /// Inline validation message from the last submit
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssignDialog {
    pub pokemon_id: u32,
    pub selected: usize,
    pub success: Option<String>,
    pub close_ticks_remaining: u32,
}

#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Config ---
    #[debug(section = "Catalog", label = "Config", debug_fmt)]
    pub config: CatalogConfig,

    #[debug(section = "Catalog", label = "Screen", debug_fmt)]
    pub screen: Screen,

    /// Catalog lifecycle: Empty → Loading → Loaded/Failed, fetched once
    #[debug(skip)]
    pub catalog: DataResource<Vec<Pokemon>>,

    // --- Catalog view inputs; the view itself is always derived ---
    #[debug(section = "Filters", label = "Search", debug_fmt)]
    pub search: SearchState,

    #[debug(section = "Filters", label = "Type", debug_fmt)]
    pub type_filter: TypeFilter,

    /// One-based page number
    #[debug(section = "Filters", label = "Page")]
    pub page: usize,

    /// Index within the visible page
    #[debug(section = "Filters", label = "Selected")]
    pub selected: usize,

    #[debug(section = "Filters", label = "Favorites", debug_fmt)]
    pub favorites: BTreeSet<u32>,

    // --- Trainers ---
    #[debug(section = "Trainers", label = "Store", debug_fmt)]
    pub roster: RosterStore,

    #[debug(section = "Trainers", label = "Form", debug_fmt)]
    pub trainer_form: TrainerForm,

    #[debug(section = "Trainers", label = "Trainer")]
    pub trainer_selected: usize,

    #[debug(section = "Trainers", label = "Roster entry")]
    pub roster_selected: usize,

    #[debug(section = "Trainers", label = "Assign", debug_fmt)]
    pub assign: Option<AssignDialog>,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            screen: Screen::default(),
            catalog: DataResource::Empty,
            search: SearchState::default(),
            type_filter: TypeFilter::All,
            page: 1,
            selected: 0,
            favorites: BTreeSet::new(),
            roster: RosterStore::new(),
            trainer_form: TrainerForm::default(),
            trainer_selected: 0,
            roster_selected: 0,
            assign: None,
            tick_count: 0,
        }
    }

    /// The loaded catalog, or nothing while loading or failed.
    pub fn catalog(&self) -> &[Pokemon] {
        self.catalog.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find_pokemon(&self, pokemon_id: u32) -> Option<&Pokemon> {
        self.catalog().iter().find(|p| p.pokedex_id == pokemon_id)
    }

    pub fn filtered(&self) -> Vec<&Pokemon> {
        catalog::apply_filter(self.catalog(), &self.search.query, &self.type_filter)
    }

    pub fn total_pages(&self) -> usize {
        catalog::total_pages(self.filtered().len(), self.config.page_size)
    }

    pub fn visible_page(&self) -> Vec<&Pokemon> {
        let filtered = self.filtered();
        catalog::paginate(&filtered, self.config.page_size, self.page).to_vec()
    }

    pub fn page_window(&self) -> Vec<usize> {
        catalog::page_window(self.page, self.total_pages(), PAGE_BUTTONS)
    }

    pub fn selected_pokemon(&self) -> Option<&Pokemon> {
        self.visible_page().get(self.selected).copied()
    }

    pub fn selected_trainer(&self) -> Option<&Trainer> {
        self.roster.trainers().get(self.trainer_selected)
    }

    pub fn selected_roster_pokemon(&self) -> Option<&Pokemon> {
        self.selected_trainer()
            .and_then(|trainer| trainer.roster.get(self.roster_selected))
    }

    pub fn is_favorite(&self, pokemon_id: u32) -> bool {
        self.favorites.contains(&pokemon_id)
    }

    /// Keys go to a text field rather than to shortcuts.
    pub fn text_input_active(&self) -> bool {
        self.search.active || self.trainer_form.editing
    }

    pub fn loading_anim_active(&self) -> bool {
        self.catalog.is_loading()
    }

    /// Back to page 1, first entry. Run whenever a filter input changes.
    pub fn reset_paging(&mut self) {
        self.page = 1;
        self.selected = 0;
    }

    pub fn clamp_trainer_selection(&mut self) {
        let trainers = self.roster.len();
        self.trainer_selected = self.trainer_selected.min(trainers.saturating_sub(1));
        let entries = self.selected_trainer().map_or(0, |t| t.roster.len());
        self.roster_selected = self.roster_selected.min(entries.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::Names;
    use pretty_assertions::assert_eq;

    fn numbered(count: u32) -> Vec<Pokemon> {
        (1..=count)
            .map(|id| Pokemon {
                pokedex_id: id,
                name: Names {
                    fr: format!("Pokemon {id}"),
                    ..Default::default()
                },
                ..Default::default()
            })
            .collect()
    }

    fn loaded(count: u32) -> AppState {
        AppState {
            catalog: DataResource::Loaded(numbered(count)),
            ..Default::default()
        }
    }

    #[test]
    fn empty_catalog_derives_nothing() {
        let state = AppState::default();
        assert!(state.filtered().is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(state.selected_pokemon().is_none());
    }

    #[test]
    fn visible_page_follows_page_number() {
        let mut state = loaded(30);
        assert_eq!(state.total_pages(), 3);
        state.page = 3;
        let ids: Vec<_> = state.visible_page().iter().map(|p| p.pokedex_id).collect();
        assert_eq!(ids, (25..=30).collect::<Vec<_>>());
    }
}
