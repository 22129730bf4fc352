//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::catalog::TypeFilter;
use crate::effect::Effect;
use crate::state::{ASSIGN_CLOSE_TICKS, AppState, AssignDialog, Screen};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            // The catalog is fetched exactly once per session.
            if !state.catalog.is_empty() {
                return DispatchResult::unchanged();
            }
            state.catalog = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::LoadCatalog {
                url: state.config.api_url.clone(),
            })
        }

        // ===== Catalog =====
        Action::CatalogDidLoad(entries) => {
            state.catalog = DataResource::Loaded(entries);
            state.reset_paging();
            DispatchResult::changed()
        }

        Action::CatalogDidError(error) => {
            state.catalog = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== Search =====
        Action::SearchStart => {
            if state.search.active {
                return DispatchResult::unchanged();
            }
            state.search.active = true;
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            if !state.search.active && state.search.query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search.active = false;
            state.search.query.clear();
            state.reset_paging();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            state.search.active = false;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            if state.search.query == query {
                return DispatchResult::unchanged();
            }
            state.search.query = query;
            state.reset_paging();
            DispatchResult::changed()
        }

        // ===== Type filter =====
        Action::TypeFilterNext => {
            let next = state.type_filter.next();
            set_type_filter(state, next)
        }
        Action::TypeFilterPrev => {
            let prev = state.type_filter.prev();
            set_type_filter(state, prev)
        }
        Action::TypeFilterSet(filter) => set_type_filter(state, filter),

        // ===== Paging =====
        Action::PageNext => {
            let page = state.page.saturating_add(1);
            set_page(state, page)
        }
        Action::PagePrev => {
            let page = state.page.saturating_sub(1);
            set_page(state, page)
        }
        Action::PageFirst => set_page(state, 1),
        Action::PageLast => {
            let page = state.total_pages();
            set_page(state, page)
        }
        Action::PageSet(page) => set_page(state, page),

        Action::DexSelect(index) => {
            let visible = state.visible_page().len();
            if index >= visible || index == state.selected {
                return DispatchResult::unchanged();
            }
            state.selected = index;
            DispatchResult::changed()
        }

        Action::DexFavoriteToggle => {
            let Some(id) = state.selected_pokemon().map(|p| p.pokedex_id) else {
                return DispatchResult::unchanged();
            };
            if !state.favorites.remove(&id) {
                state.favorites.insert(id);
            }
            DispatchResult::changed()
        }

        // ===== Trainer form =====
        Action::TrainerFormStart => {
            if state.trainer_form.editing {
                return DispatchResult::unchanged();
            }
            state.trainer_form.editing = true;
            state.trainer_form.error = None;
            DispatchResult::changed()
        }

        Action::TrainerFormCancel => {
            state.trainer_form.editing = false;
            state.trainer_form.name.clear();
            state.trainer_form.error = None;
            DispatchResult::changed()
        }

        Action::TrainerFormNameChange(name) => {
            if state.trainer_form.name == name {
                return DispatchResult::unchanged();
            }
            state.trainer_form.name = name;
            DispatchResult::changed()
        }

        Action::TrainerFormSubmit(id) => {
            let name = match state.roster.validate_name(&state.trainer_form.name) {
                Ok(name) => name,
                Err(error) => {
                    state.trainer_form.error = Some(error.to_string());
                    return DispatchResult::changed();
                }
            };
            if state.roster.add_trainer_with_id(id, &name).is_some() {
                state.trainer_form.name.clear();
                state.trainer_form.error = None;
                state.trainer_form.editing = false;
            }
            DispatchResult::changed()
        }

        // ===== Trainers =====
        Action::TrainerSelect(index) => {
            if index >= state.roster.len() || index == state.trainer_selected {
                return DispatchResult::unchanged();
            }
            state.trainer_selected = index;
            state.roster_selected = 0;
            DispatchResult::changed()
        }

        Action::TrainersReset => {
            if state.roster.is_empty() {
                return DispatchResult::unchanged();
            }
            state.roster.reset_trainers();
            state.trainer_selected = 0;
            state.roster_selected = 0;
            state.assign = None;
            DispatchResult::changed()
        }

        // ===== Roster =====
        Action::RosterSelect(index) => {
            let entries = state.selected_trainer().map_or(0, |t| t.roster.len());
            if index >= entries || index == state.roster_selected {
                return DispatchResult::unchanged();
            }
            state.roster_selected = index;
            DispatchResult::changed()
        }

        Action::RosterAdd {
            trainer_id,
            pokemon_id,
        } => {
            let Some(pokemon) = state.find_pokemon(pokemon_id).cloned() else {
                return DispatchResult::unchanged();
            };
            let added = state.roster.add_pokemon_to_trainer(trainer_id, &pokemon);
            let trainer_name = state.roster.get(trainer_id).map(|t| t.name.clone());
            let (Some(dialog), Some(trainer_name)) = (state.assign.as_mut(), trainer_name) else {
                return if added {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                };
            };
            let name = pokemon.display_name();
            dialog.success = Some(if added {
                format!("{name} joined {trainer_name}'s team!")
            } else {
                format!("{name} is already on {trainer_name}'s team.")
            });
            dialog.close_ticks_remaining = ASSIGN_CLOSE_TICKS;
            DispatchResult::changed()
        }

        Action::RosterRemove {
            trainer_id,
            pokemon_id,
        } => {
            if !state
                .roster
                .remove_pokemon_from_trainer(trainer_id, pokemon_id)
            {
                return DispatchResult::unchanged();
            }
            state.clamp_trainer_selection();
            DispatchResult::changed()
        }

        // ===== Assign dialog =====
        Action::AssignOpen => {
            if state.assign.is_some() {
                return DispatchResult::unchanged();
            }
            let Some(pokemon_id) = state.selected_pokemon().map(|p| p.pokedex_id) else {
                return DispatchResult::unchanged();
            };
            state.assign = Some(AssignDialog {
                pokemon_id,
                ..Default::default()
            });
            DispatchResult::changed()
        }

        Action::AssignClose => {
            if state.assign.take().is_none() {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::AssignSelect(index) => {
            let trainers = state.roster.len();
            let Some(dialog) = state.assign.as_mut() else {
                return DispatchResult::unchanged();
            };
            if index >= trainers || index == dialog.selected {
                return DispatchResult::unchanged();
            }
            dialog.selected = index;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiToggleScreen => {
            if state.text_input_active() || state.assign.is_some() {
                return DispatchResult::unchanged();
            }
            state.screen = state.screen.toggle();
            if state.screen == Screen::Trainers {
                state.clamp_trainer_selection();
            }
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global =====
        Action::Tick => tick(state),

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_type_filter(state: &mut AppState, filter: TypeFilter) -> DispatchResult<Effect> {
    if state.type_filter == filter {
        return DispatchResult::unchanged();
    }
    state.type_filter = filter;
    state.reset_paging();
    DispatchResult::changed()
}

fn set_page(state: &mut AppState, page: usize) -> DispatchResult<Effect> {
    let total = state.total_pages();
    if total == 0 {
        return DispatchResult::unchanged();
    }
    let page = page.clamp(1, total);
    if page == state.page {
        return DispatchResult::unchanged();
    }
    state.page = page;
    state.selected = 0;
    DispatchResult::changed()
}

fn tick(state: &mut AppState) -> DispatchResult<Effect> {
    let mut changed = false;
    if state.loading_anim_active() {
        state.tick_count = state.tick_count.wrapping_add(1);
        changed = true;
    }
    if let Some(dialog) = state.assign.as_mut() {
        if dialog.success.is_some() {
            dialog.close_ticks_remaining = dialog.close_ticks_remaining.saturating_sub(1);
            if dialog.close_ticks_remaining == 0 {
                state.assign = None;
            }
            changed = true;
        }
    }
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}
