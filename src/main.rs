use std::error::Error;

use negamax_chess::console::console_top::{run_stdio_loop, ConsoleConfig, EngineChoice};
use negamax_chess::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use negamax_chess::moves::attack_tables::init_attack_tables;
use negamax_chess::search::negamax::SearchConfig;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_str(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let depth = parse_arg_u8("--depth", DEFAULT_SEARCH_DEPTH);
    let engine = match parse_arg_str("--engine") {
        Some(name) => name.parse::<EngineChoice>()?,
        None => EngineChoice::default(),
    };

    let tables = init_attack_tables();
    log::info!(
        "attack tables ready: {} bishop and {} rook entries",
        tables.bishop_table().len(),
        tables.rook_table().len()
    );
    log::info!("engine {engine}, depth {depth}");

    run_stdio_loop(ConsoleConfig {
        search: SearchConfig { depth },
        engine,
    })?;
    Ok(())
}
