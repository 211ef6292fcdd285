//! Text console front-end and command loop.
//!
//! Reads one command per line, keeps a `GameSession`, routes `go` to the
//! selected engine, and writes plain-text replies. Command failures are
//! reported as `error: ...` lines and never end the loop.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::chess_errors::ChessResult;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::host::game_session::GameSession;
use crate::move_generation::perft::perft;
use crate::moves::move_descriptions::parse_long_algebraic;
use crate::search::board_scoring::evaluate;
use crate::search::negamax::SearchConfig;
use crate::utils::fen_generator::generate_board_field;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineChoice {
    #[default]
    Negamax,
    Random,
}

impl FromStr for EngineChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "negamax" => Ok(EngineChoice::Negamax),
            "random" => Ok(EngineChoice::Random),
            other => Err(format!("unknown engine '{other}' (expected negamax or random)")),
        }
    }
}

impl fmt::Display for EngineChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineChoice::Negamax => f.write_str("negamax"),
            EngineChoice::Random => f.write_str("random"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    pub search: SearchConfig,
    pub engine: EngineChoice,
}

pub fn build_engine(choice: EngineChoice, search: SearchConfig) -> Box<dyn Engine> {
    match choice {
        EngineChoice::Negamax => Box::new(NegamaxEngine::new(search)),
        EngineChoice::Random => Box::new(RandomEngine::new()),
    }
}

pub fn run_stdio_loop(config: ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console =
        ConsoleState::new(config).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    session: GameSession,
    config: ConsoleConfig,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig) -> ChessResult<Self> {
        let session =
            GameSession::new_game()?.with_engine(build_engine(config.engine, config.search));
        Ok(Self { session, config })
    }

    pub fn with_engine(mut self, engine: Box<dyn Engine>) -> Self {
        self.session.set_engine(engine);
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one input line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match cmd {
            "new" => {
                match GameSession::new_game() {
                    Ok(session) => {
                        self.session = session
                            .with_engine(build_engine(self.config.engine, self.config.search));
                        writeln!(out, "ok")?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "position" => {
                let fen = rest.join(" ");
                match self.session.load_fen(&fen) {
                    Ok(()) => writeln!(out, "ok")?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "fen" => {
                writeln!(out, "{}", generate_board_field(self.session.board()))?;
            }
            "state" => {
                writeln!(out, "{}", self.session.state_string())?;
            }
            "setstate" => {
                let state = rest.first().copied().unwrap_or_default();
                match self.session.set_state_string(state) {
                    Ok(()) => writeln!(out, "ok")?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "board" => {
                writeln!(out, "{}", render_board(self.session.board()))?;
                writeln!(out, "side {}", side_name(self.session.side_to_move()))?;
            }
            "side" => match rest.first().copied() {
                Some("w") | Some("white") => {
                    self.session.set_side_to_move(Color::Light);
                    writeln!(out, "ok")?;
                }
                Some("b") | Some("black") => {
                    self.session.set_side_to_move(Color::Dark);
                    writeln!(out, "ok")?;
                }
                _ => writeln!(out, "side {}", side_name(self.session.side_to_move()))?,
            },
            "moves" => {
                let moves = self
                    .session
                    .available_moves()
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect::<Vec<_>>();
                writeln!(out, "moves {}: {}", moves.len(), moves.join(" "))?;
            }
            "move" => {
                let result = rest
                    .first()
                    .copied()
                    .map_or_else(|| parse_long_algebraic(""), parse_long_algebraic)
                    .and_then(|(from, to)| self.session.play_move(from, to));
                match result {
                    Ok(mv) => writeln!(out, "played {mv}")?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "go" => self.handle_go(&rest, out)?,
            "eval" => {
                writeln!(out, "eval {}", evaluate(self.session.board()))?;
            }
            "perft" => match rest.first().and_then(|d| d.parse::<u8>().ok()) {
                Some(depth) => {
                    let counts = perft(self.session.board(), self.session.side_to_move(), depth);
                    writeln!(out, "nodes {} captures {}", counts.nodes, counts.captures)?;
                }
                None => writeln!(out, "error: perft needs a depth")?,
            },
            "engine" => match rest.first().map(|name| name.parse::<EngineChoice>()) {
                Some(Ok(choice)) => {
                    self.config.engine = choice;
                    self.session
                        .set_engine(build_engine(choice, self.config.search));
                    writeln!(out, "engine {choice}")?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "engine {}", self.config.engine)?,
            },
            "quit" | "exit" => {
                return Ok(true);
            }
            other => {
                log::debug!("ignoring unknown command '{other}'");
                writeln!(out, "error: unknown command '{other}'")?;
            }
        }

        Ok(false)
    }

    /// Ask the engine for a move and play it.
    fn handle_go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let params = GoParams {
            depth: args.first().and_then(|d| d.parse::<u8>().ok()),
        };
        let output = self.session.suggest_move(&params);

        for info in &output.info_lines {
            writeln!(out, "{info}")?;
        }

        match output.best_move {
            Some(mv) => match self.session.play_move(mv.from, mv.to) {
                Ok(_) => writeln!(out, "bestmove {mv}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            None => writeln!(out, "bestmove 0000")?,
        }

        Ok(())
    }
}

fn side_name(side: Color) -> &'static str {
    match side {
        Color::Light => "white",
        Color::Dark => "black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;

    fn run_script(console: &mut ConsoleState, script: &[&str]) -> (String, bool) {
        let mut out = Vec::new();
        let mut quit = false;
        for line in script {
            if console.handle_command(line, &mut out).expect("writing to a Vec cannot fail") {
                quit = true;
                break;
            }
        }
        (String::from_utf8(out).expect("console output is UTF-8"), quit)
    }

    fn console_with_depth(depth: u8) -> ConsoleState {
        ConsoleState::new(ConsoleConfig {
            search: SearchConfig { depth },
            engine: EngineChoice::Negamax,
        })
        .expect("starting position should parse")
    }

    #[test]
    fn engine_choice_parses_names() {
        assert_eq!("negamax".parse::<EngineChoice>(), Ok(EngineChoice::Negamax));
        assert_eq!("RANDOM".parse::<EngineChoice>(), Ok(EngineChoice::Random));
        assert!("alphazero".parse::<EngineChoice>().is_err());
        assert_eq!(EngineChoice::Random.to_string(), "random");
    }

    #[test]
    fn move_then_state_reports_new_position() {
        let mut console = console_with_depth(2);
        let (out, quit) = run_script(&mut console, &["move e2e4", "side", "state"]);
        let lines: Vec<&str> = out.lines().collect();

        assert!(!quit);
        assert_eq!(lines[0], "played e2e4");
        assert_eq!(lines[1], "side black");
        assert_eq!(&lines[2][..16], "RNBQKBNRPPPP0PPP");
        assert_eq!(lines[2].as_bytes()[28], b'P');
    }

    #[test]
    fn go_finds_the_hanging_queen_and_plays_it() {
        let mut console = console_with_depth(3);
        let (out, _) = run_script(
            &mut console,
            &["position q3k3/8/8/8/8/8/8/R3K3", "go 2", "fen", "side"],
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "ok");
        assert!(lines[1].starts_with("info depth 2 "));
        assert_eq!(lines[2], "bestmove a1a8");
        assert_eq!(lines[3], "R3k3/8/8/8/8/8/8/4K3");
        assert_eq!(lines[4], "side black");
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let mut console = console_with_depth(2);
        let (out, quit) = run_script(
            &mut console,
            &[
                "position rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
                "move e7e5",
                "move e2e5",
                "move zz",
                "setstate 000",
                "perft",
                "engine stockfish",
                "dance",
                "quit",
                "state",
            ],
        );
        let lines: Vec<&str> = out.lines().collect();

        assert!(quit);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.starts_with("error: ")));
        assert_eq!(
            console.session().state_string(),
            format!("RNBQKBNRPPPPPPPP{}pppppppprnbqkbnr", "0".repeat(32))
        );
    }

    #[test]
    fn perft_moves_and_eval_commands() {
        let mut console = console_with_depth(2);
        let (out, _) = run_script(&mut console, &["perft 2", "moves", "eval", "side b", "moves"]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "nodes 400 captures 0");
        assert!(lines[1].starts_with("moves 20: b1a3 b1c3 "));
        assert_eq!(lines[2], "eval 0");
        assert_eq!(lines[3], "ok");
        assert!(lines[4].starts_with("moves 20: "));
    }

    #[test]
    fn go_without_moves_prints_null_move() {
        let mut console = console_with_depth(2);
        let (out, _) = run_script(&mut console, &["position 8/8/8/8/8/8/8/8", "go"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.last().copied(), Some("bestmove 0000"));
    }

    #[test]
    fn engine_switch_and_board_rendering() {
        let mut console = console_with_depth(2).with_engine(Box::new(RandomEngine::seeded(9)));
        let (out, _) = run_script(&mut console, &["go", "board", "engine random", "engine"]);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines.iter().any(|l| l.starts_with("bestmove ")));
        assert!(lines.iter().any(|l| *l == "  a b c d e f g h"));
        assert!(lines.contains(&"side black"));
        assert_eq!(lines[lines.len() - 2], "engine random");
        assert_eq!(lines[lines.len() - 1], "engine random");
    }
}
