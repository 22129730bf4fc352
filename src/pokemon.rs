//! Catalog records as served by the Tyradex API
//!
//! The feed is trusted as-is: nullable collections are kept as `Option` and
//! read through the accessors below, so a `null` in the raw JSON never fails
//! the whole decode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Localized names
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Names {
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub jp: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sprites {
    #[serde(default)]
    pub regular: String,
    #[serde(default)]
    pub shiny: Option<String>,
    /// Either null or an object of urls, depending on the entry.
    #[serde(default)]
    pub gmax: Option<serde_json::Value>,
}

/// Elemental type, e.g. `Plante` or `Feu`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonType {
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Ability; `tc` marks a hidden one ("talent caché").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Talent {
    pub name: String,
    #[serde(default)]
    pub tc: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Resistance {
    pub name: String,
    pub multiplier: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvolutionStep {
    #[serde(default)]
    pub pokedex_id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl EvolutionStep {
    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("?");
        match self.condition.as_deref() {
            Some(condition) if !condition.is_empty() => format!("{name} ({condition})"),
            _ => name.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Evolution {
    #[serde(default)]
    pub pre: Option<Vec<EvolutionStep>>,
    #[serde(default)]
    pub next: Option<Vec<EvolutionStep>>,
    #[serde(default)]
    pub mega: Option<Vec<serde_json::Value>>,
}

/// Fixed six-stat block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spe_atk: u16,
    pub spe_def: u16,
    pub vit: u16,
}

impl Stats {
    /// Named stats in display order.
    pub fn entries(&self) -> [(&'static str, u16); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.atk),
            ("Defense", self.def),
            ("Sp. Atk", self.spe_atk),
            ("Sp. Def", self.spe_def),
            ("Speed", self.vit),
        ]
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, value)| u32::from(*value)).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sexe {
    pub male: f32,
    pub female: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pokemon {
    pub pokedex_id: u32,
    #[serde(default)]
    pub generation: u8,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: Names,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Option<Vec<PokemonType>>,
    #[serde(default)]
    pub talents: Option<Vec<Talent>>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub resistances: Option<Vec<Resistance>>,
    #[serde(default)]
    pub evolution: Option<Evolution>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub egg_groups: Option<Vec<String>>,
    #[serde(default)]
    pub sexe: Option<Sexe>,
    #[serde(default)]
    pub catch_rate: Option<u32>,
    #[serde(default)]
    pub level_100: Option<u32>,
    #[serde(default)]
    pub formes: Option<serde_json::Value>,
}

impl Pokemon {
    pub fn id(&self) -> u32 {
        self.pokedex_id
    }

    /// French name, the one the catalog is searched by.
    pub fn display_name(&self) -> &str {
        &self.name.fr
    }

    pub fn types(&self) -> &[PokemonType] {
        self.types.as_deref().unwrap_or_default()
    }

    pub fn talents(&self) -> &[Talent] {
        self.talents.as_deref().unwrap_or_default()
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types().iter().any(|ty| ty.name == name)
    }

    /// `#001` style number
    pub fn number_label(&self) -> String {
        format!("#{:03}", self.pokedex_id)
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types().iter().map(|ty| ty.name.as_str()).collect()
    }
}
