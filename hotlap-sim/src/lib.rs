pub mod physics;
pub mod progress;
pub mod race;
pub mod track;
