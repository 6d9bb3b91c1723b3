use anyhow::{bail, Result};
use thiserror::Error;

use crate::commands::CommandKind;

/// Returned when the parsing of a command failed
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Unknown command")]
    UnknownCommand,
}

/// Find out which command an interaction was sent for
pub fn parse(name: &str) -> Result<CommandKind> {
    match name {
        "secret" => Ok(CommandKind::Secret),
        _ => bail!(ParsingError::UnknownCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, ParsingError};
    use crate::commands::CommandKind;

    #[test]
    fn parse_secret() {
        assert_eq!(parse("secret").unwrap(), CommandKind::Secret);
    }

    #[test]
    fn parse_unknown() {
        let err = parse("roll").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParsingError>(),
            Some(ParsingError::UnknownCommand)
        ));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(parse("Secret").is_err());
    }
}
