//! Trainer roster store
//!
//! Every mutation is total and silent: invalid input leaves the store as it
//! was and reports `false`/`None` so the reducer can skip the re-render.
//! Form-level feedback goes through [`RosterStore::validate_name`] instead.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;

pub const MAX_TRAINERS: usize = 2;

/// Creation timestamp in milliseconds, unique within a store.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct TrainerId(pub u64);

impl TrainerId {
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self(millis)
    }
}

impl fmt::Display for TrainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Trainer {
    pub id: TrainerId,
    pub name: String,
    /// Assignment order, unique by pokedex id
    pub roster: Vec<Pokemon>,
}

impl Trainer {
    pub fn has_pokemon(&self, pokemon_id: u32) -> bool {
        self.roster.iter().any(|p| p.pokedex_id == pokemon_id)
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum TrainerFormError {
    #[error("Name cannot be empty.")]
    EmptyName,
    #[error("Maximum {MAX_TRAINERS} trainers!")]
    TooManyTrainers,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RosterStore {
    trainers: Vec<Trainer>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn get(&self, id: TrainerId) -> Option<&Trainer> {
        self.trainers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.trainers.len() >= MAX_TRAINERS
    }

    /// Checks a form submission and returns the trimmed name to store.
    pub fn validate_name(&self, name: &str) -> Result<String, TrainerFormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrainerFormError::EmptyName);
        }
        if self.is_full() {
            return Err(TrainerFormError::TooManyTrainers);
        }
        Ok(name.to_string())
    }

    pub fn add_trainer(&mut self, name: &str) -> Option<TrainerId> {
        self.add_trainer_with_id(TrainerId::now(), name)
    }

    /// Same as [`add_trainer`](Self::add_trainer) with a caller-chosen id.
    /// An id already in use is bumped past the largest one.
    pub fn add_trainer_with_id(&mut self, id: TrainerId, name: &str) -> Option<TrainerId> {
        let name = self.validate_name(name).ok()?;
        let id = if self.get(id).is_some() {
            let max = self.trainers.iter().map(|t| t.id.0).max().unwrap_or(id.0);
            TrainerId(max.saturating_add(1))
        } else {
            id
        };
        self.trainers.push(Trainer {
            id,
            name,
            roster: Vec::new(),
        });
        Some(id)
    }

    pub fn add_pokemon_to_trainer(&mut self, trainer_id: TrainerId, pokemon: &Pokemon) -> bool {
        let Some(trainer) = self.trainers.iter_mut().find(|t| t.id == trainer_id) else {
            return false;
        };
        if trainer.has_pokemon(pokemon.pokedex_id) {
            return false;
        }
        trainer.roster.push(pokemon.clone());
        true
    }

    pub fn remove_pokemon_from_trainer(&mut self, trainer_id: TrainerId, pokemon_id: u32) -> bool {
        let Some(trainer) = self.trainers.iter_mut().find(|t| t.id == trainer_id) else {
            return false;
        };
        let Some(index) = trainer
            .roster
            .iter()
            .position(|p| p.pokedex_id == pokemon_id)
        else {
            return false;
        };
        trainer.roster.remove(index);
        true
    }

    pub fn reset_trainers(&mut self) {
        self.trainers.clear();
    }
}
