use crate::utils::error::{BoardError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.is_empty() {
        return Err(BoardError::InvalidConfigValue {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Bind address cannot be empty".to_string(),
        });
    }

    addr.parse().map_err(|e| BoardError::InvalidConfigValue {
        field: field_name.to_string(),
        value: addr.to_string(),
        reason: format!("Invalid socket address: {}", e),
    })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BoardError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
