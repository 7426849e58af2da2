//! Move text formats.
//!
//! ICCS is the coordinate form used by engine protocols: origin and
//! destination squares, e.g. `h2e2`. WXF is the piece-relative form used
//! in game records, e.g. `C2.5` (cannon on file 2 moves sideways to file 5).
//!
//! # Examples
//! ```
//! use xiangqi_engine::board::Board;
//!
//! let board = Board::new();
//! let mv = board.parse_iccs("h2e2").unwrap();
//! assert_eq!(board.move_to_wxf(mv), "C2.5");
//! assert_eq!(board.parse_wxf("C2.5").unwrap(), mv);
//! ```

use std::cmp::Ordering;

use super::error::MoveParseError;
use super::{Board, Color, Move, Piece, Square, WIDTH};

/// WXF file number (1..=9) counted from the mover's right-hand side.
fn wxf_file(color: Color, file: usize) -> usize {
    match color {
        Color::Red => WIDTH - file,
        Color::Black => file + 1,
    }
}

fn digit(n: usize) -> char {
    char::from_digit(n as u32, 10).unwrap_or('?')
}

/// Order two ranks from `color`'s point of view: `Greater` means `a` is
/// further forward than `b`.
fn compare_forward(color: Color, a: usize, b: usize) -> Ordering {
    match color {
        Color::Red => a.cmp(&b),
        Color::Black => b.cmp(&a),
    }
}

impl Board {
    /// Parse a move in ICCS coordinates (`h2e2`, `H2-E2`).
    ///
    /// Returns the matching legal move for the side to move.
    pub fn parse_iccs(&self, text: &str) -> Result<Move, MoveParseError> {
        let cleaned: String = text.trim().chars().filter(|&c| c != '-').collect();
        if !cleaned.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        }
        if cleaned.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: cleaned.len() });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = cleaned[0..2].parse().map_err(|_| invalid())?;
        let to: Square = cleaned[2..4].parse().map_err(|_| invalid())?;

        self.legal_moves()
            .find(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Format a move for the side to move in WXF notation.
    ///
    /// `mv` must start on a square holding one of the mover's pieces;
    /// otherwise the ICCS form is returned.
    #[must_use]
    pub fn move_to_wxf(&self, mv: Move) -> String {
        let from = mv.from();
        let to = mv.to();
        let Some((color, piece)) = self.piece_at(from) else {
            return mv.to_string();
        };

        let mut text = String::with_capacity(4);
        text.push(piece.to_wxf_char());
        text.push(self.wxf_origin(color, piece, from));

        let action = compare_forward(color, to.rank(), from.rank());
        let target = match action {
            Ordering::Equal => {
                text.push('.');
                wxf_file(color, to.file())
            }
            Ordering::Greater | Ordering::Less => {
                text.push(if action == Ordering::Greater { '+' } else { '-' });
                if piece.moves_straight() {
                    to.rank().abs_diff(from.rank())
                } else {
                    wxf_file(color, to.file())
                }
            }
        };
        text.push(digit(target));
        text
    }

    /// Origin field: the file number, or a front/rear marker when other
    /// pieces of the same kind share the file.
    fn wxf_origin(&self, color: Color, piece: Piece, from: Square) -> char {
        let mut tandem: Vec<usize> = self
            .pieces_of(color, piece)
            .iter()
            .map(Square::from_index)
            .filter(|sq| sq.file() == from.file())
            .map(Square::rank)
            .collect();
        if tandem.len() < 2 {
            return digit(wxf_file(color, from.file()));
        }

        // front first
        tandem.sort_by(|&a, &b| compare_forward(color, b, a));
        match tandem.iter().position(|&rank| rank == from.rank()) {
            Some(0) => '+',
            Some(i) if i + 1 == tandem.len() => '-',
            _ => '.',
        }
    }

    /// Parse a move in WXF notation (`C2.5`, `H8+7`, `R+.4`).
    ///
    /// `N`/`B` are accepted for horse/elephant and `=` for the sideways
    /// action.
    pub fn parse_wxf(&self, text: &str) -> Result<Move, MoveParseError> {
        let normalized: String = text
            .trim()
            .chars()
            .enumerate()
            .map(|(i, c)| match (i, c.to_ascii_uppercase()) {
                (0, 'N') => 'H',
                (0, 'B') => 'E',
                (_, '=') => '.',
                (_, c) => c,
            })
            .collect();
        let len = normalized.chars().count();
        if len != 4 {
            return Err(MoveParseError::InvalidLength { len });
        }
        let is_piece_letter = normalized
            .chars()
            .next()
            .is_some_and(|c| "KAEHRCP".contains(c));
        if !is_piece_letter {
            return Err(MoveParseError::InvalidWxf {
                notation: text.to_string(),
            });
        }

        self.legal_moves()
            .iter()
            .copied()
            .find(|&mv| self.move_to_wxf(mv) == normalized)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a move in either ICCS or WXF notation.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.trim().chars().filter(|&c| c != '-').collect();
        let looks_like_iccs = chars.len() == 4
            && chars[0].is_ascii_alphabetic()
            && chars[1].is_ascii_digit()
            && chars[2].is_ascii_alphabetic()
            && chars[3].is_ascii_digit();
        if looks_like_iccs {
            self.parse_iccs(text)
        } else {
            self.parse_wxf(text)
        }
    }

    /// Parse a move in either notation and play it.
    pub fn do_textmove(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.do_move_assume_legal(mv);
        Ok(mv)
    }
}
