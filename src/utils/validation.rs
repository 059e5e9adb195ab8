use crate::utils::error::{CarbonError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_company_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "cannot be empty or just whitespace".to_string(),
        });
    }

    if value.chars().count() > 100 {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "is too long (maximum 100 characters)".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a valid number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a positive number greater than zero".to_string(),
        });
    }

    Ok(())
}

pub fn validate_amount_ceiling(field_name: &str, value: f64, ceiling: f64) -> Result<()> {
    if value > ceiling {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("seems unrealistically high (maximum {ceiling}), please verify"),
        });
    }

    Ok(())
}

pub fn validate_percentage(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a valid number".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&value) {
        return Err(CarbonError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be between 0 and 100".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CarbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CarbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_bind_address(field_name: &str, addr: &str) -> Result<()> {
    if addr.is_empty() {
        return Err(CarbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Bind address cannot be empty".to_string(),
        });
    }

    match addr.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(CarbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        }),
    }
}

pub fn validate_positive_factor(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CarbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Emission factor must be a positive number".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_company_name() {
        assert!(validate_company_name("Company name", "Acme Corp").is_ok());
        assert!(validate_company_name("Company name", "").is_err());
        assert!(validate_company_name("Company name", "   ").is_err());
        assert!(validate_company_name("Company name", &"x".repeat(100)).is_ok());
        assert!(validate_company_name("Company name", &"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount("Electricity bill", 120.5).is_ok());
        assert!(validate_positive_amount("Electricity bill", 0.0).is_err());
        assert!(validate_positive_amount("Electricity bill", -3.0).is_err());
        assert!(validate_positive_amount("Electricity bill", f64::NAN).is_err());
        assert!(validate_positive_amount("Electricity bill", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_amount_ceiling() {
        assert!(validate_amount_ceiling("Electricity bill", 10_000.0, 10_000.0).is_ok());
        assert!(validate_amount_ceiling("Electricity bill", 10_000.01, 10_000.0).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("Recycled waste percent", 0.0).is_ok());
        assert!(validate_percentage("Recycled waste percent", 100.0).is_ok());
        assert!(validate_percentage("Recycled waste percent", -0.1).is_err());
        assert!(validate_percentage("Recycled waste percent", 100.1).is_err());
        assert!(validate_percentage("Recycled waste percent", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("server.bind", "127.0.0.1:7860").is_ok());
        assert!(validate_bind_address("server.bind", "").is_err());
        assert!(validate_bind_address("server.bind", "not-an-address").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("report.output_path", "./reports").is_ok());
        assert!(validate_path("report.output_path", "").is_err());
        assert!(validate_path("report.output_path", "bad\0path").is_err());
    }
}
