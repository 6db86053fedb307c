use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config{
    pub log_config: LogConfig,
    #[serde(default)]
    pub interval_config: IntervalConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LogConfig {
    // path of the log4rs yaml file.
    pub path: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct IntervalConfig {
    // ranges inserted, in order, into a freshly created set.
    // kept as raw vectors so that malformed entries are reported by validation.
    #[serde(default)]
    pub seed: Vec<Vec<i64>>,
}
