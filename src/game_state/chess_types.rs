/// Core value types shared by the board, move generation and search.
///
/// A board cell or external piece tag is decoded into a `PieceInfo` exactly once,
/// at the boundary. Everything downstream works on `PieceInfo` and never looks
/// at the raw character or tag again.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`, a1 = 0, h8 = 63).
pub type Square = u8;

/// 64-bit set of squares; bit `i` refers to square `i`.
pub type Bitboard = u64;

pub const EMPTY_CELL: u8 = b'0';

/// Tag offset the host adds to a White tag to mark the piece as Black.
pub const DARK_TAG_OFFSET: u16 = 128;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Negamax perspective: +1 for White, -1 for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn from_sign(sign: i32) -> Self {
        if sign >= 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Host player numbering: 0 plays White, anything else plays Black.
    #[inline]
    pub const fn from_player_index(player: usize) -> Self {
        if player == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Rank (0-based) pawns of this color start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }
}

/// Piece kind (color is carried separately in `PieceInfo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_letter(self) -> u8 {
        match self {
            PieceKind::Pawn => b'p',
            PieceKind::Knight => b'n',
            PieceKind::Bishop => b'b',
            PieceKind::Rook => b'r',
            PieceKind::Queen => b'q',
            PieceKind::King => b'k',
        }
    }

    #[inline]
    pub const fn from_fen_letter(letter: u8) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            b'p' => Some(PieceKind::Pawn),
            b'n' => Some(PieceKind::Knight),
            b'b' => Some(PieceKind::Bishop),
            b'r' => Some(PieceKind::Rook),
            b'q' => Some(PieceKind::Queen),
            b'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Decoded piece: what it is and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceInfo {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceInfo {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color, Color::Light)
    }

    /// Decode one board cell. `0` and unknown bytes decode to `None`.
    #[inline]
    pub const fn from_cell(cell: u8) -> Option<Self> {
        let Some(kind) = PieceKind::from_fen_letter(cell) else {
            return None;
        };
        let color = if cell.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self { kind, color })
    }

    /// Encode as a board cell (uppercase for White).
    #[inline]
    pub const fn to_cell(self) -> u8 {
        let letter = self.kind.fen_letter();
        match self.color {
            Color::Light => letter.to_ascii_uppercase(),
            Color::Dark => letter,
        }
    }

    /// Decode the host's packed tag (White 1..=6, Black 129..=134).
    pub fn from_game_tag(tag: u16) -> Option<Self> {
        let (color, base) = if tag >= DARK_TAG_OFFSET {
            (Color::Dark, tag - DARK_TAG_OFFSET)
        } else {
            (Color::Light, tag)
        };
        let kind = match base {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => return None,
        };
        Some(Self { kind, color })
    }

    pub fn to_game_tag(self) -> u16 {
        let base = self.kind.index() as u16 + 1;
        match self.color {
            Color::Light => base,
            Color::Dark => base + DARK_TAG_OFFSET,
        }
    }
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_bit(square: Square) -> Bitboard {
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_round_trip_for_every_piece() {
        for cell in *b"PNBRQKpnbrqk" {
            let info = PieceInfo::from_cell(cell).expect("piece letter should decode");
            assert_eq!(info.to_cell(), cell);
            assert_eq!(info.is_white(), cell.is_ascii_uppercase());
        }
        assert_eq!(PieceInfo::from_cell(EMPTY_CELL), None);
        assert_eq!(PieceInfo::from_cell(b'x'), None);
    }

    #[test]
    fn game_tags_decode_and_encode() {
        let white_knight = PieceInfo::from_game_tag(2).expect("tag 2 is a white knight");
        assert_eq!(white_knight, PieceInfo::new(PieceKind::Knight, Color::Light));

        let black_king = PieceInfo::from_game_tag(134).expect("tag 134 is a black king");
        assert_eq!(black_king, PieceInfo::new(PieceKind::King, Color::Dark));

        for tag in (1..=6).chain(129..=134) {
            let info = PieceInfo::from_game_tag(tag).expect("valid tag");
            assert_eq!(info.to_game_tag(), tag);
        }

        assert_eq!(PieceInfo::from_game_tag(0), None);
        assert_eq!(PieceInfo::from_game_tag(7), None);
        assert_eq!(PieceInfo::from_game_tag(128), None);
    }

    #[test]
    fn color_sign_matches_negamax_convention() {
        assert_eq!(Color::Light.sign(), 1);
        assert_eq!(Color::Dark.sign(), -1);
        assert_eq!(Color::from_sign(-1), Color::Dark);
        assert_eq!(Color::from_player_index(0), Color::Light);
        assert_eq!(Color::from_player_index(1), Color::Dark);
    }
}
