//! Command parser for the text console.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// List the supported options
    Options,
    NewGame,
    /// `position startpos|placement <placement> [fields...] [moves <m>...]`
    Position {
        placement: Option<String>,
        moves: Vec<String>,
    },
    /// Legal moves of one square, or of the whole side to move
    Moves {
        square: Option<String>,
    },
    Play {
        mv: String,
    },
    Check {
        color: Option<String>,
    },
    Status,
    Board,
    Placement,
    SetOption {
        name: String,
        value: Option<String>,
    },
    Quit,
    Unknown(String),
}

impl Command {
    /// Commands that read or change the current game.
    pub fn needs_game(&self) -> bool {
        matches!(
            self,
            Command::Moves { .. }
                | Command::Play { .. }
                | Command::Check { .. }
                | Command::Status
                | Command::Board
                | Command::Placement
        )
    }
}

/// Parse a console command from a line (whitespace tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown(String::new());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts[0] {
        "options" => Command::Options,
        "newgame" => Command::NewGame,
        "status" => Command::Status,
        "board" => Command::Board,
        "placement" => Command::Placement,
        "quit" => Command::Quit,
        "moves" => Command::Moves {
            square: parts.get(1).map(|s| s.to_string()),
        },
        "check" => Command::Check {
            color: parts.get(1).map(|s| s.to_string()),
        },
        "play" => match parts.get(1) {
            Some(mv) => Command::Play { mv: mv.to_string() },
            None => Command::Unknown(trimmed.to_string()),
        },
        "setoption" => {
            // setoption name <name> [value <val>]
            let mut name = String::new();
            let mut value: Option<String> = None;
            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "name" => {
                        i += 1;
                        let mut vals = Vec::new();
                        while i < parts.len() && parts[i] != "value" {
                            vals.push(parts[i]);
                            i += 1;
                        }
                        name = vals.join(" ");
                    }
                    "value" => {
                        value = Some(parts[i + 1..].join(" "));
                        break;
                    }
                    _ => i += 1,
                }
            }
            Command::SetOption { name, value }
        }
        "position" => {
            let mut placement: Option<String> = None;
            let mut moves: Vec<String> = Vec::new();
            let moves_at = parts.iter().position(|&s| s == "moves");
            let head_end = moves_at.unwrap_or(parts.len());
            match parts.get(1) {
                Some(&"startpos") => {}
                Some(&"placement") if head_end > 2 => {
                    placement = Some(parts[2..head_end].join(" "));
                }
                _ => return Command::Unknown(trimmed.to_string()),
            }
            if let Some(at) = moves_at {
                moves.extend(parts[at + 1..].iter().map(|m| m.to_string()));
            }
            Command::Position { placement, moves }
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}
