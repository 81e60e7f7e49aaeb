use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub tick_ms: u64,
    pub countdown_ms: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub max_car_speed: f64,
    pub car_accelerator: f64,
    pub car_friction: f64,
    pub car_turn_rate: f64,
    pub car_width: f64,
    pub car_height: f64,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("tick_ms", 16)?
            .set_default("countdown_ms", 3000.0)?
            .set_default("world_width", 800.0)?
            .set_default("world_height", 600.0)?
            .set_default("max_car_speed", 400.0)?
            .set_default("car_accelerator", 600.0)?
            .set_default("car_friction", 0.98)?
            .set_default("car_turn_rate", 3.0)?
            .set_default("car_width", 30.0)?
            .set_default("car_height", 15.0)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
