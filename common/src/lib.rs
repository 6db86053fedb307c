pub mod config;
pub mod json;
pub mod error;
use log::{info, error};

pub fn parse_config(path: String)->Result<config::Config, Box<dyn std::error::Error>>{
    let results = std::fs::read_to_string(path);
    match results {
        Ok(content) => {
            let cfg = toml::from_str(content.as_str())?;
            info!("cfg: {:?}", cfg);
            return Ok(cfg);
        }
        Err(error) => {
            error!("failed to parse, err: {:?}", error);
            return Err(Box::new(error));
        }
    }
}

// installs the log4rs backend described by the yaml file at path.
pub fn init_log(path: &str) -> Result<(), String> {
    match log4rs::init_file(path, Default::default()) {
        Ok(_) => {
            info!("log is configured from {}", path);
            Ok(())
        }
        Err(error) => {
            Err(format!("failed to config log from {}, err: {}", path, error))
        }
    }
}
