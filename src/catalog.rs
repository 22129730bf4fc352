//! Catalog preparation, filtering and pagination
//!
//! All of this is pure: the filtered list and the visible page are derived
//! from the fetched catalog on every render, never stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;

pub const DEFAULT_API_URL: &str = "https://tyradex.app/api/v1/pokemon";
pub const PAGE_SIZE: usize = 12;
/// Pager buttons shown around the current page.
pub const PAGE_BUTTONS: usize = 5;

/// Type names offered by the type filter, in feed spelling.
pub const POKEMON_TYPES: [&str; 18] = [
    "Normal", "Feu", "Eau", "Plante", "Électrik", "Glace", "Combat", "Poison", "Sol", "Vol",
    "Psy", "Insecte", "Roche", "Spectre", "Dragon", "Ténèbres", "Acier", "Fée",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// `"all"` selects everything; anything else is an exact type name.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            TypeFilter::All
        } else {
            TypeFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(name) => pokemon.has_type(name),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "All types",
            TypeFilter::Only(name) => name,
        }
    }

    /// Cycles All -> Normal -> ... -> Fée -> All.
    pub fn next(&self) -> Self {
        self.step(1)
    }

    pub fn prev(&self) -> Self {
        self.step(-1)
    }

    fn step(&self, delta: isize) -> Self {
        // Slot 0 is All, slots 1..=18 are the types.
        let slots = POKEMON_TYPES.len() as isize + 1;
        let current = match self {
            TypeFilter::All => 0,
            TypeFilter::Only(name) => POKEMON_TYPES
                .iter()
                .position(|ty| ty == name)
                .map(|idx| idx as isize + 1)
                .unwrap_or(0),
        };
        let next = (current + delta).rem_euclid(slots);
        if next == 0 {
            TypeFilter::All
        } else {
            TypeFilter::Only(POKEMON_TYPES[next as usize - 1].to_string())
        }
    }
}

/// Drops the sentinel id 0 record and sorts by pokedex id.
pub fn prepare(raw: Vec<Pokemon>) -> Vec<Pokemon> {
    let mut catalog: Vec<Pokemon> = raw.into_iter().filter(|p| p.pokedex_id != 0).collect();
    catalog.sort_by_key(|p| p.pokedex_id);
    catalog
}

pub fn matches_search(pokemon: &Pokemon, search: &str) -> bool {
    let query = search.to_lowercase();
    query.is_empty()
        || pokemon.name.fr.to_lowercase().contains(&query)
        || pokemon.pokedex_id.to_string().contains(&query)
}

/// Subsequence of `catalog` matching both the search text and the type filter.
pub fn apply_filter<'a>(
    catalog: &'a [Pokemon],
    search: &str,
    type_filter: &TypeFilter,
) -> Vec<&'a Pokemon> {
    catalog
        .iter()
        .filter(|p| matches_search(p, search) && type_filter.matches(p))
        .collect()
}

/// One-based page slice, clamped to what is available.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page numbers for the pager: up to `max_buttons` around `current`,
/// pulled back when close to the last page.
pub fn page_window(current: usize, total: usize, max_buttons: usize) -> Vec<usize> {
    if total == 0 || max_buttons == 0 {
        return Vec::new();
    }
    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let end = (start + max_buttons - 1).min(total);
    if end + 1 - start < max_buttons {
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }
    (start..=end).collect()
}
