use crate::game_state::chess_types::*;

/// The 64-character board-state string, square-index order (a1 first).
pub fn generate_state_string(board: &BoardState) -> String {
    board.cells().iter().map(|&cell| char::from(cell)).collect()
}

/// Compressed FEN board field, rank 8 first.
pub fn generate_board_field(board: &BoardState) -> String {
    let mut out = String::with_capacity(71);

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(char::from(piece.to_cell()));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_board_field, generate_state_string};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_board_field;

    const POSITIONS: [&str; 4] = [
        STARTING_POSITION_FEN,
        "8/8/8/8/8/8/8/8",
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    ];

    #[test]
    fn starting_state_string() {
        let board = parse_board_field(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(
            generate_state_string(&board),
            "RNBQKBNRPPPPPPPP00000000000000000000000000000000pppppppprnbqkbnr"
        );
    }

    #[test]
    fn state_string_and_board_field_round_trip() {
        for fen in POSITIONS {
            let board = parse_board_field(fen).expect("FEN should parse");
            assert_eq!(generate_board_field(&board), fen);

            let state = generate_state_string(&board);
            assert_eq!(state.len(), 64);
            assert_eq!(
                BoardState::from_state_string(&state).expect("state should parse"),
                board
            );
        }
    }
}
