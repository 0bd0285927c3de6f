mod config;
mod slot;
mod space;
mod space_id;


pub use config::{ConfigError, SpaceConfig};
pub use slot::Slot;
pub use space::Space;
pub use space_id::SpaceId;
