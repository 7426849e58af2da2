use std::str::FromStr;

use super::attack_tables::palace;
use super::error::FenError;
use super::{Board, Color, Piece, Square, HEIGHT, MOVENUM_LIMIT, RULE50_PLY_LIMIT, WIDTH};

/// The standard opening position.
pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Accepts `w`, `r` or `b` for the side to move (Red if the field is
    /// missing) and `E`/`H` as aliases for elephant and horse. Each side must
    /// have exactly one king, standing in its palace.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts.first().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != HEIGHT {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut king_count = [0usize; 2];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = HEIGHT - 1 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|&d| d > 0) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= WIDTH {
                    return Err(FenError::WrongFileCount {
                        rank,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::Red
                } else {
                    Color::Black
                };
                if piece == Piece::King {
                    king_count[color.index()] += 1;
                }
                board.set_piece(Square(rank, file), color, piece);
                file += 1;
            }
            if file != WIDTH {
                return Err(FenError::WrongFileCount { rank, files: file });
            }
        }

        for color in Color::BOTH {
            let found = king_count[color.index()];
            if found != 1 {
                return Err(FenError::KingCount {
                    color: color.to_string(),
                    found,
                });
            }
            let in_palace = board
                .king_square(color)
                .is_some_and(|sq| palace(color).contains(sq));
            if !in_palace {
                return Err(FenError::KingOutsidePalace {
                    color: color.to_string(),
                });
            }
        }

        board.to_move = match parts.get(1).copied().unwrap_or("w") {
            "w" | "r" => Color::Red,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Fields 2 and 3 are placeholders kept for chess-FEN compatibility.
        if let Some(halfmove) = parts.get(4) {
            board.rule50_ply = parse_counter(halfmove, RULE50_PLY_LIMIT)?;
        }
        if let Some(fullmove) = parts.get(5) {
            board.movenum = parse_counter(fullmove, MOVENUM_LIMIT)?.max(1);
        }
        board.gameply = 2 * (board.movenum - 1) + u32::from(board.to_move == Color::Black);

        board.hash = board.calc_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace this board with the position in `fen`.
    ///
    /// On error the board is left exactly as it was.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(HEIGHT);
        for rank in (0..HEIGHT).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..WIDTH {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.to_move {
            Color::Red => "w",
            Color::Black => "b",
        };
        format!(
            "{} {} - - {} {}",
            rows.join("/"),
            active,
            self.rule50_ply,
            self.movenum
        )
    }
}

fn parse_counter(field: &str, limit: u32) -> Result<u32, FenError> {
    field
        .parse()
        .ok()
        .filter(|&n| n <= limit)
        .ok_or_else(|| FenError::InvalidCounter {
            found: field.to_string(),
        })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
