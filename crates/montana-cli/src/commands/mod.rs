//! CLI command implementations

pub mod export;
pub mod list;
pub mod sound;
pub mod sprite;
pub mod tone;

mod output;

pub use output::AssetRecord;
