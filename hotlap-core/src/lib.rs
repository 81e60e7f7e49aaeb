pub mod control;
pub mod lap;
mod settings;
pub mod time;

pub use settings::GLOBAL_CONFIG;
