//! Actions - every intent and async result that can change state

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::TypeFilter;
use crate::pokemon::Pokemon;
use crate::roster::TrainerId;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Start the one-shot catalog fetch
    Init,

    // ===== Catalog category =====
    /// Result: catalog fetched, sentinel removed and sorted
    CatalogDidLoad(Vec<Pokemon>),

    /// Result: catalog fetch failed (terminal)
    CatalogDidError(String),

    // ===== Search category =====
    SearchStart,
    SearchCancel,
    SearchSubmit,
    /// Full query after an edit in the search input
    SearchQueryChange(String),

    // ===== TypeFilter category =====
    TypeFilterNext,
    TypeFilterPrev,
    TypeFilterSet(TypeFilter),

    // ===== Page category =====
    PageNext,
    PagePrev,
    PageFirst,
    PageLast,
    PageSet(usize),

    // ===== Dex category =====
    /// Select an entry on the visible page (by index)
    DexSelect(usize),
    DexFavoriteToggle,

    // ===== TrainerForm category =====
    TrainerFormStart,
    TrainerFormCancel,
    TrainerFormNameChange(String),
    /// Submit the typed name; the id is minted by the caller
    TrainerFormSubmit(TrainerId),

    // ===== Trainer category =====
    TrainerSelect(usize),
    TrainersReset,

    // ===== Roster category =====
    RosterSelect(usize),
    RosterAdd { trainer_id: TrainerId, pokemon_id: u32 },
    RosterRemove { trainer_id: TrainerId, pokemon_id: u32 },

    // ===== Assign category =====
    /// Open the assign dialog for the selected Pokedex entry
    AssignOpen,
    AssignClose,
    AssignSelect(usize),

    // ===== UI category =====
    UiToggleScreen,

    /// Force a re-render
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the spinner and the dialog auto-close
    Tick,

    Quit,
}
