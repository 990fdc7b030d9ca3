//! Replay shell commands
//!
//! One command per line. Blank lines and `#` comments are skipped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Core finished loading
    Ready,
    /// Plugin listing arrived
    Plugins(Vec<String>),
    /// User picked a plugin; `None` unsets it
    Select(Option<String>),
    Route(String),
    Unroute,
    /// Address bar edited to this fragment
    Hash(String),
    Reload(u64),
    ToggleReload,
    /// Print the state as JSON
    State,
    /// Print the current fragment and history length
    Location,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid reload period '{0}', expected milliseconds")]
    InvalidPeriod(String),
}

impl Command {
    /// Parse one line; `Ok(None)` for lines that carry no command
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            "ready" => Command::Ready,
            "plugins" => Command::Plugins(
                arg.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            "select" => Command::Select(if arg.is_empty() {
                None
            } else {
                Some(arg.to_string())
            }),
            "route" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("route"));
                }
                Command::Route(arg.to_string())
            }
            "unroute" => Command::Unroute,
            "hash" => Command::Hash(arg.to_string()),
            "reload" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("reload"));
                }
                let period = arg
                    .parse::<u64>()
                    .map_err(|_| CommandError::InvalidPeriod(arg.to_string()))?;
                Command::Reload(period)
            }
            "toggle-reload" => Command::ToggleReload,
            "state" => Command::State,
            "location" => Command::Location,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comments() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(Command::parse("# open the scalars tab"), Ok(None));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("ready"), Ok(Some(Command::Ready)));
        assert_eq!(
            Command::parse("plugins scalars, images,,graphs"),
            Ok(Some(Command::Plugins(vec![
                "scalars".to_string(),
                "images".to_string(),
                "graphs".to_string()
            ])))
        );
        assert_eq!(
            Command::parse("  select   hparams "),
            Ok(Some(Command::Select(Some("hparams".to_string()))))
        );
        assert_eq!(Command::parse("select"), Ok(Some(Command::Select(None))));
        assert_eq!(
            Command::parse("route /experiment/3"),
            Ok(Some(Command::Route("/experiment/3".to_string())))
        );
        assert_eq!(
            Command::parse("hash #plugin=graphs"),
            Ok(Some(Command::Hash("#plugin=graphs".to_string())))
        );
        assert_eq!(Command::parse("reload 60000"), Ok(Some(Command::Reload(60_000))));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("jump"),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            Command::parse("route"),
            Err(CommandError::MissingArgument("route"))
        );
        assert_eq!(
            Command::parse("reload soon"),
            Err(CommandError::InvalidPeriod("soon".to_string()))
        );
    }
}
