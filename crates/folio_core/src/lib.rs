pub mod config;
pub mod constants;
pub mod types;

pub use config::{
    ContactConfig, FieldConfig, FolioConfig, GlowConfig, NavConfig, RevealConfig,
    TypewriterConfig,
};
pub use constants::*;
pub use types::*;
