//! Console event loop and state machine.

use std::io::{self, BufRead, Write};

use super::options::ConsoleOptions;
use super::parser::{parse_command, Command};
use crate::board::{Color, Position};
use crate::error::{ChessError, ChessResult};
use crate::game::{GameState, GameStatus};
use crate::moves::Move;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    /// No game set up yet
    Idle,
    Playing,
    /// The side to move ran out of legal moves
    Finished,
}

pub struct Console {
    state: ConsoleState,
    game: GameState,
    running: bool,
    options: ConsoleOptions,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self::with_options(ConsoleOptions::default())
    }

    pub fn with_options(options: ConsoleOptions) -> Self {
        Self {
            state: ConsoleState::Idle,
            game: GameState::new(),
            running: true,
            options,
        }
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        // Game queries need a game set up with newgame or position
        if self.state == ConsoleState::Idle && cmd.needs_game() {
            res.push("error no game in progress".to_string());
            return res;
        }
        match cmd {
            Command::Options => {
                res.push(format!("id name {}", self.options.engine_name));
                res.push(format!("id author {}", self.options.author));
                for opt in ConsoleOptions::advertised() {
                    res.push(opt.describe());
                }
                res.push("optionsok".to_string());
            }
            Command::NewGame => {
                self.start(GameState::new());
                res.push("ok".to_string());
            }
            Command::Position { placement, moves } => {
                // Validate everything on a scratch state before committing
                match replay(placement.as_deref(), &moves) {
                    Ok(game) => {
                        self.start(game);
                        res.push("ok".to_string());
                    }
                    Err(e) => res.push(format!("error {}", e)),
                }
            }
            Command::Moves { square } => {
                let listed = match square {
                    Some(s) => Position::from_algebraic(&s).map(|pos| self.game.legal_moves(pos)),
                    None => Ok(self.game.all_legal_moves()),
                };
                match listed {
                    Ok(moves) => res.push(format_legal(&moves)),
                    Err(e) => res.push(format!("error {}", e)),
                }
            }
            Command::Play { mv } => {
                if self.state == ConsoleState::Finished {
                    res.push("error no game in progress".to_string());
                    return res;
                }
                match parse_coordinate_move(&self.game, &mv)
                    .and_then(|m| self.game.apply_move(&m))
                {
                    Ok(next) => {
                        self.game = next;
                        res.push(format!("played {}", mv));
                        if self.options.echo_board {
                            res.extend(self.game.board().to_string().lines().map(str::to_string));
                        }
                        if self.options.show_legal_after_move {
                            res.push(format_legal(&self.game.all_legal_moves()));
                        }
                        if self.game.status() == GameStatus::NoLegalMoves {
                            self.state = ConsoleState::Finished;
                            res.push(format!(
                                "gameover {} has no legal moves check {}",
                                self.game.active_color(),
                                self.game.is_in_check()
                            ));
                        }
                    }
                    Err(e) => res.push(format!("error {}", e)),
                }
            }
            Command::Check { color } => {
                let color = match color {
                    Some(c) => c.parse::<Color>(),
                    None => Ok(self.game.active_color()),
                };
                match color {
                    Ok(c) => res.push(format!(
                        "check {} {}",
                        c,
                        rules::is_king_in_check(self.game.board(), c)
                    )),
                    Err(e) => res.push(format!("error {}", e)),
                }
            }
            Command::Status => {
                let status = match self.game.status() {
                    GameStatus::Active => "active",
                    GameStatus::NoLegalMoves => "nolegalmoves",
                };
                res.push(format!(
                    "status {} side {} turn {} check {}",
                    status,
                    self.game.active_color(),
                    self.game.turn(),
                    self.game.is_in_check()
                ));
            }
            Command::Board => {
                res.extend(self.game.board().to_string().lines().map(str::to_string));
            }
            Command::Placement => {
                res.push(format!("placement {}", self.game.board().to_placement()));
            }
            Command::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => res.push("ok".to_string()),
                    Err(e) => res.push(format!("error {}", e)),
                }
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                if !s.is_empty() {
                    res.push(format!("error unknown command: {}", s));
                }
            }
        }
        res
    }

    fn start(&mut self, game: GameState) {
        self.state = match game.status() {
            GameStatus::Active => ConsoleState::Playing,
            GameStatus::NoLegalMoves => ConsoleState::Finished,
        };
        self.game = game;
    }
}

/// Resolve "e2e4" against the legal moves of `game`.
pub fn parse_coordinate_move(game: &GameState, text: &str) -> ChessResult<Move> {
    let (from, to) = match (text.get(0..2), text.get(2..)) {
        (Some(from), Some(to)) => (Position::from_algebraic(from)?, Position::from_algebraic(to)?),
        _ => return Err(ChessError::InvalidSquare(text.to_string())),
    };
    if game.board().is_empty(from) {
        return Err(ChessError::EmptySquare(from));
    }
    game.find_move(from, to)
        .ok_or(ChessError::IllegalMove { from, to })
}

fn replay(placement: Option<&str>, moves: &[String]) -> ChessResult<GameState> {
    let mut game = match placement {
        Some(p) => GameState::from_placement(p)?,
        None => GameState::new(),
    };
    for text in moves {
        let mv = parse_coordinate_move(&game, text)?;
        game = game.apply_move(&mv)?;
    }
    Ok(game)
}

fn format_legal(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "legal none".to_string();
    }
    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    format!("legal {}", listed.join(" "))
}

/// Parse and run one line against `console`.
pub fn process_line(line: &str, console: &mut Console) -> Vec<String> {
    console.handle_command(parse_command(line))
}

/// Read commands from stdin until `quit` or end of input.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = Console::new();
    tracing::info!("console ready");

    for line in stdin.lock().lines() {
        let line = line?;
        for out in process_line(&line, &mut console) {
            writeln!(stdout, "{}", out)?;
        }
        stdout.flush()?;
        if !console.is_running() {
            break;
        }
    }
    Ok(())
}
