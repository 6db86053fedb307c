use std::path::PathBuf;
use log::{info, error};

fn conf_path(name: &str) -> Result<String, String> {
    let pathb : PathBuf;
    match std::env::current_dir(){
        Ok(pb) => {pathb = pb;}
        Err(error) => {
            return Err(format!("failed to get current dir, err: {}", error));
        }
    }
    match pathb.as_os_str().to_str(){
        Some(p) => {
            Ok(format!("{}/tests/conf/{}", p, name))
        }
        None => {
            Err(String::from("failed to convert to str"))
        }
    }
}

#[test]
fn test_parse_config()->Result<(), String>{
    let test_config_file = conf_path("interval_set.toml")?;
    let parse_result = common::parse_config(test_config_file);
    match parse_result {
        Ok(cfg) => {
            info!("got cfg: {:?}", cfg);
            if cfg.log_config.path != "tests/conf/interval_set_log.yaml" {
                return Err(format!("got invalid log path: {}", cfg.log_config.path));
            }
            let expected: Vec<Vec<i64>> = vec![vec![1, 3], vec![5, 7], vec![2, 6], vec![10, 12]];
            if cfg.interval_config.seed != expected {
                return Err(format!("got invalid seed: {:?}", cfg.interval_config.seed));
            }
            Ok(())
        }
        Err(error) => {
            error!("failed to parse with err: {}", error);
            Err(format!{"failed to parse with err: {}", error})
        }
    }
}

#[test]
fn test_parse_config_without_seed()->Result<(), String>{
    let test_config_file = conf_path("interval_set_no_seed.toml")?;
    match common::parse_config(test_config_file) {
        Ok(cfg) => {
            if !cfg.interval_config.seed.is_empty() {
                return Err(format!("seed should default to empty, got: {:?}", cfg.interval_config.seed));
            }
            Ok(())
        }
        Err(error) => {
            Err(format!{"failed to parse with err: {}", error})
        }
    }
}

#[test]
fn test_parse_config_missing_file()->Result<(), String>{
    let test_config_file = conf_path("no_such_file.toml")?;
    if common::parse_config(test_config_file).is_ok() {
        return Err(String::from("parse of a missing file should fail"));
    }
    Ok(())
}
