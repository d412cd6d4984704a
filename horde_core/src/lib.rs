pub mod card;
pub mod config;
pub mod dice;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod ids;
pub mod image;
pub mod state;

pub use card::{Card, CardFace, CardList, ImageUris};
pub use config::{default_config_path, HordeConfig};
pub use dice::{HordeDice, ScriptedDice};
pub use error::{ConfigError, FetchError};
pub use fetch::{CardSource, FetchCache, FetchKey, FetchState};
pub use generate::roll_horde;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use image::{image_or, resolve_image, PLACEHOLDER_IMAGE};
pub use state::{HordeAction, HordeState};
