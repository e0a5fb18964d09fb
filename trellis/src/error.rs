//! Crate error type.

use thiserror::Error;

use crate::binding::BindingError;
use crate::config::ConfigError;

/// Everything fallible in trellis. Layout itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Value, ValueKind};
    use crate::config::TrellisConfig;

    fn parse_both(config: &str, count: &str) -> Result<(TrellisConfig, Value)> {
        let config = TrellisConfig::from_json_str(config)?;
        let value = Value::parse(ValueKind::Int, count)?;
        Ok((config, value))
    }

    #[test]
    fn test_question_mark_conversions() {
        assert!(parse_both("{}", "3").is_ok());
        assert!(matches!(parse_both("[", "3"), Err(Error::Config(_))));
        let err = parse_both("{}", "three").unwrap_err();
        assert!(matches!(err, Error::Binding(_)));
        assert_eq!(err.to_string(), "cannot parse \"three\" as int");
    }
}
