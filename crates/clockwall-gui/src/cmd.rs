use std::path::Path;

use clap::Parser;
use clockwall_lib::config::{load_config, Config};
use clockwall_lib::zones::local_zone;
use clockwall_lib::ClockError;

#[derive(Debug, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = None, help = "Path to a TOML configuration file")]
    pub config: Option<String>,
    #[arg(
        short,
        long,
        default_value = None,
        help = "Zone preselected as the main time zone, such as \"Europe/Paris\". Defaults to the TZ environment variable"
    )]
    pub main_zone: Option<String>,
    #[arg(long, default_value = None, help = "Number of clocks per row on the wall")]
    pub columns: Option<usize>,
}

impl Args {
    /// The configuration file, if any, with the command line options applied on top.
    pub fn config(&self) -> Result<Config, ClockError> {
        let mut config = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => Config::default(),
        };
        if let Some(zone) = &self.main_zone {
            config.main_zone = Some(zone.clone());
        }
        if let Some(columns) = self.columns {
            config.wall.columns = columns;
        }
        if config.main_zone.is_none() {
            config.main_zone = local_zone().map(|zone| zone.name().to_string());
        }
        config.validate()?;
        Ok(config)
    }
}
