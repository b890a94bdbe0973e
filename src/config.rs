use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::model::AvocadoType;

/// Command-line options for the dashboard window.
#[derive(Debug, Clone, Parser)]
#[command(name = "avocado-analytics", about = "Analyze the behaviour of avocado prices")]
pub struct Config {
    /// CSV file with Date, AveragePrice, Total Volume, type and region columns
    #[arg(long, default_value = "resources/avocado.csv")]
    pub data: PathBuf,

    /// Region selected on startup
    #[arg(long, default_value = "Albany")]
    pub region: String,

    /// Avocado type selected on startup
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Organic)]
    pub avocado_type: TypeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Conventional,
    Organic,
}

impl From<TypeArg> for AvocadoType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Conventional => AvocadoType::Conventional,
            TypeArg::Organic => AvocadoType::Organic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["avocado-analytics"]);
        assert_eq!(config.data, PathBuf::from("resources/avocado.csv"));
        assert_eq!(config.region, "Albany");
        assert_eq!(AvocadoType::from(config.avocado_type), AvocadoType::Organic);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "avocado-analytics",
            "--data",
            "/tmp/a.csv",
            "--region",
            "Denver",
            "--type",
            "conventional",
        ]);
        assert_eq!(config.data, PathBuf::from("/tmp/a.csv"));
        assert_eq!(config.region, "Denver");
        assert_eq!(config.avocado_type, TypeArg::Conventional);
        assert!(Config::try_parse_from(["avocado-analytics", "--type", "hass"]).is_err());
    }
}
