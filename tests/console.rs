//! Integration tests for the text console

use scacchiera::console::{process_line, Console, ConsoleOptions, ConsoleState};
use scacchiera::Color;

#[test]
fn test_options_handshake() {
    let mut console = Console::new();

    let responses = process_line("options", &mut console);
    assert!(responses[0].starts_with("id name"));
    assert!(responses[1].starts_with("id author"));
    assert!(responses.iter().any(|l| l.starts_with("option name EchoBoard")));
    assert_eq!(responses.last().map(String::as_str), Some("optionsok"));
    assert_eq!(console.state(), ConsoleState::Idle);
}

#[test]
fn test_play_requires_a_game() {
    let mut console = Console::new();
    let responses = process_line("play e2e4", &mut console);
    assert_eq!(responses, vec!["error no game in progress"]);
}

#[test]
fn test_queries_require_a_game() {
    let mut console = Console::new();
    for line in ["moves", "moves e2", "check", "check white", "status", "board", "placement"] {
        assert_eq!(
            process_line(line, &mut console),
            vec!["error no game in progress"],
            "{}",
            line
        );
    }
    assert_eq!(console.state(), ConsoleState::Idle);

    process_line("newgame", &mut console);
    assert_eq!(
        process_line("status", &mut console),
        vec!["status active side white turn 0 check false"]
    );
}

#[test]
fn test_newgame_and_play() {
    let mut console = Console::new();

    assert_eq!(process_line("newgame", &mut console), vec!["ok"]);
    assert_eq!(console.state(), ConsoleState::Playing);

    assert_eq!(process_line("play e2e4", &mut console), vec!["played e2e4"]);
    assert_eq!(console.game().active_color(), Color::Black);

    let responses = process_line("status", &mut console);
    assert_eq!(responses, vec!["status active side black turn 1 check false"]);

    let responses = process_line("placement", &mut console);
    assert_eq!(
        responses,
        vec!["placement rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"]
    );
}

#[test]
fn test_rejected_moves_keep_the_game() {
    let mut console = Console::new();
    process_line("newgame", &mut console);

    // Mossa del nero con il bianco al tratto
    let responses = process_line("play e7e5", &mut console);
    assert!(responses[0].starts_with("error"), "{:?}", responses);
    let responses = process_line("play e2e5", &mut console);
    assert!(responses[0].starts_with("error illegal move"), "{:?}", responses);
    let responses = process_line("play e3e4", &mut console);
    assert!(responses[0].starts_with("error no piece"), "{:?}", responses);
    let responses = process_line("play z9e4", &mut console);
    assert!(responses[0].starts_with("error invalid square"), "{:?}", responses);

    assert_eq!(console.game().turn(), 0);
    assert_eq!(console.game().active_color(), Color::White);
}

#[test]
fn test_position_with_moves_and_listing() {
    let mut console = Console::new();

    let responses = process_line("position startpos moves e2e4 e7e5 g1f3", &mut console);
    assert_eq!(responses, vec!["ok"]);
    assert_eq!(console.game().turn(), 3);

    let responses = process_line("moves b8", &mut console);
    assert_eq!(sorted_listing(&responses[0]), vec!["b8a6", "b8c6"]);

    let responses = process_line("moves e5", &mut console);
    assert_eq!(responses, vec!["legal none"]);

    // Una mossa illegale nella lista lascia intatta la partita corrente
    let responses = process_line("position startpos moves e2e5", &mut console);
    assert!(responses[0].starts_with("error"));
    assert_eq!(console.game().turn(), 3);
}

#[test]
fn test_fools_mate_finishes_the_game() {
    let mut console = Console::new();
    process_line("position startpos moves f2f3 e7e5 g2g4", &mut console);

    let responses = process_line("play d8h4", &mut console);
    assert_eq!(
        responses,
        vec!["played d8h4", "gameover white has no legal moves check true"]
    );
    assert_eq!(console.state(), ConsoleState::Finished);
    assert_eq!(process_line("check", &mut console), vec!["check white true"]);
    assert_eq!(process_line("check black", &mut console), vec!["check black false"]);
    assert_eq!(
        process_line("play a2a3", &mut console),
        vec!["error no game in progress"]
    );
}

#[test]
fn test_position_placement_ignores_trailer() {
    let mut console = Console::new();
    let responses = process_line("position placement 4r3/8/8/8/8/8/8/4K3 b - - 0 1", &mut console);
    assert_eq!(responses, vec!["ok"]);
    assert_eq!(console.game().active_color(), Color::White);
    assert_eq!(process_line("check", &mut console), vec!["check white true"]);

    let responses = process_line("moves", &mut console);
    assert_eq!(sorted_listing(&responses[0]), vec!["e1d1", "e1d2", "e1f1", "e1f2"]);
}

#[test]
fn test_options_change_play_output() {
    let mut options = ConsoleOptions::default();
    options.show_legal_after_move = true;
    let mut console = Console::with_options(options);
    process_line("position placement 4k3/8/8/8/8/8/8/4K3", &mut console);

    assert_eq!(process_line("setoption name EchoBoard value true", &mut console), vec!["ok"]);
    let responses = process_line("play e1e2", &mut console);
    assert_eq!(responses[0], "played e1e2");
    // diagramma: 8 traverse piu' la riga delle colonne
    assert_eq!(responses.len(), 1 + 9 + 1);
    assert!(responses.last().map_or(false, |l| l.starts_with("legal ")));

    let responses = process_line("setoption name Hash value 16", &mut console);
    assert_eq!(responses, vec!["error unknown option: Hash"]);
}

#[test]
fn test_quit_and_unknown() {
    let mut console = Console::new();
    assert!(process_line("", &mut console).is_empty());
    assert_eq!(
        process_line("go depth 5", &mut console),
        vec!["error unknown command: go depth 5"]
    );
    assert!(console.is_running());
    assert!(process_line("quit", &mut console).is_empty());
    assert!(!console.is_running());
}

fn sorted_listing(line: &str) -> Vec<String> {
    let mut moves: Vec<String> = line
        .strip_prefix("legal ")
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    moves.sort();
    moves
}
