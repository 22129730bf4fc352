pub mod assign_modal;
pub mod help_bar;
pub mod pokedex_view;
pub mod pokemon_card;
pub mod registration_form;
pub mod search_bar;
pub mod theme;
pub mod trainer_list;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use assign_modal::{AssignModal, AssignModalProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use pokedex_view::{PokedexView, PokedexViewProps};
pub use pokemon_card::{PokemonCard, PokemonCardProps};
pub use registration_form::{RegistrationForm, RegistrationFormProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use trainer_list::{TrainerList, TrainerListProps};
