use crate::domain::InputField;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(InputField, String),
    Clear(InputField),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  balance <value>      set account balance (saved)
  risk <value>         set risk amount, 1R (saved)
  entry <value>        set entry price
  stop <value>         set stop loss price
  clear <field>        empty a field
  show                 print inputs and result
  help                 this text
  quit                 leave";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let head = parts
            .next()
            .ok_or_else(|| anyhow!("Empty command"))?
            .to_ascii_lowercase();

        let cmd = match head.as_str() {
            "show" | "s" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "clear" => {
                let field = parts
                    .next()
                    .ok_or_else(|| anyhow!("Usage: clear <field>"))?
                    .parse()?;
                Command::Clear(field)
            }
            _ => {
                let field: InputField = head.parse()?;
                let value = parts.next().unwrap_or("").to_string();
                return match parts.next() {
                    Some(extra) => Err(anyhow!("Unexpected argument: {}", extra)),
                    None => Ok(Command::Set(field, value)),
                };
            }
        };

        match parts.next() {
            Some(extra) => Err(anyhow!("Unexpected argument: {}", extra)),
            None => Ok(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_commands() {
        assert_eq!(
            "balance 500".parse::<Command>().unwrap(),
            Command::Set(InputField::Balance, "500".to_string())
        );
        assert_eq!(
            "SL 41.5".parse::<Command>().unwrap(),
            Command::Set(InputField::StopLossPrice, "41.5".to_string())
        );
        assert_eq!(
            "entry".parse::<Command>().unwrap(),
            Command::Set(InputField::EntryPrice, String::new())
        );
    }

    #[test]
    fn test_control_commands() {
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!(" quit ".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!(
            "clear risk".parse::<Command>().unwrap(),
            Command::Clear(InputField::RiskAmount)
        );
    }

    #[test]
    fn test_bad_commands() {
        assert!("".parse::<Command>().is_err());
        assert!("leverage 5".parse::<Command>().is_err());
        assert!("clear".parse::<Command>().is_err());
        assert!("balance 1 2".parse::<Command>().is_err());
        assert!("show now".parse::<Command>().is_err());
    }
}
