//! Console options: what the `setoption` command can change and what the
//! `options` command advertises.

use serde::{Deserialize, Serialize};

/// Option value types
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum OptionType {
    Check { default: bool },
    String { default: String },
}

/// One advertised option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleOption {
    pub name: &'static str,
    pub opt_type: OptionType,
}

impl ConsoleOption {
    /// Line printed by the `options` command.
    pub fn describe(&self) -> String {
        match &self.opt_type {
            OptionType::Check { default } => {
                format!("option name {} type check default {}", self.name, default)
            }
            OptionType::String { default } => {
                let shown = if default.is_empty() { "<empty>" } else { default };
                format!("option name {} type string default {}", self.name, shown)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("option {0} requires a value")]
    MissingValue(String),

    #[error("invalid value for option {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleOptions {
    pub engine_name: String,
    pub author: String,
    /// Print the board diagram after every applied move
    pub echo_board: bool,
    /// List the next side's legal moves after every applied move
    pub show_legal_after_move: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            engine_name: "Scacchiera".to_string(),
            author: "Gaspare".to_string(),
            echo_board: false,
            show_legal_after_move: false,
        }
    }
}

impl ConsoleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advertised() -> Vec<ConsoleOption> {
        let defaults = Self::default();
        vec![
            ConsoleOption {
                name: "EchoBoard",
                opt_type: OptionType::Check {
                    default: defaults.echo_board,
                },
            },
            ConsoleOption {
                name: "ShowLegalAfterMove",
                opt_type: OptionType::Check {
                    default: defaults.show_legal_after_move,
                },
            },
            ConsoleOption {
                name: "EngineName",
                opt_type: OptionType::String {
                    default: defaults.engine_name,
                },
            },
        ]
    }

    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        match name {
            "EchoBoard" => self.echo_board = parse_check(name, value)?,
            "ShowLegalAfterMove" => self.show_legal_after_move = parse_check(name, value)?,
            "EngineName" => {
                let v = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
                self.engine_name = v.to_string();
            }
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        tracing::debug!(option = name, ?value, "option set");
        Ok(())
    }
}

fn parse_check(name: &str, value: Option<&str>) -> Result<bool, OptionError> {
    let v = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
    match v.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            name: name.to_string(),
            value: v.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let options = ConsoleOptions::new();
        assert_eq!(options.engine_name, "Scacchiera");
        assert!(!options.echo_board);
        assert!(!options.show_legal_after_move);
    }

    #[test]
    fn test_set_check_option() {
        let mut options = ConsoleOptions::new();
        options.set_option("EchoBoard", Some("true")).unwrap();
        assert!(options.echo_board);
        options.set_option("EchoBoard", Some("off")).unwrap();
        assert!(!options.echo_board);
    }

    #[test]
    fn test_set_option_errors() {
        let mut options = ConsoleOptions::new();
        assert_eq!(
            options.set_option("Hash", Some("16")),
            Err(OptionError::Unknown("Hash".to_string()))
        );
        assert_eq!(
            options.set_option("EchoBoard", None),
            Err(OptionError::MissingValue("EchoBoard".to_string()))
        );
        assert!(matches!(
            options.set_option("ShowLegalAfterMove", Some("maybe")),
            Err(OptionError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_advertised_lines() {
        let lines: Vec<String> = ConsoleOptions::advertised()
            .iter()
            .map(|o| o.describe())
            .collect();
        assert_eq!(lines[0], "option name EchoBoard type check default false");
        assert_eq!(lines[2], "option name EngineName type string default Scacchiera");
    }
}
