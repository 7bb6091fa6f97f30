use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_addr, validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hireboard")]
#[command(about = "A small HTTP API for tracking company hiring status")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind_addr: String,

    #[arg(long, default_value = "10", help = "Default number of records per list page")]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("bind_addr", &self.bind_addr)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CliConfig::parse_from(["hireboard"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = CliConfig::parse_from(["hireboard", "--page-size", "0"]);
        assert!(config.validate().is_err());
    }
}
