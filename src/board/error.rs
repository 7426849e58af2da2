//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has no placement field
    Empty,
    /// Placement field does not have exactly 10 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 9 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w', 'r' or 'b')
    InvalidSideToMove { found: String },
    /// A side does not have exactly one king
    KingCount { color: String, found: usize },
    /// A king stands outside its palace
    KingOutsidePalace { color: String },
    /// Halfmove clock or move number is not a number or is out of range
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string is empty"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN must describe 10 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 9")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w', 'r' or 'b'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::KingOutsidePalace { color } => {
                write!(f, "{color} king is outside its palace")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (ICCS and WXF are 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
    /// WXF text could not be understood
    InvalidWxf { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveParseError::InvalidWxf { notation } => {
                write!(f, "Invalid WXF move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-9)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-8)
    FileOutOfBounds { file: usize },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-9)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_rank_count() {
        let err = FenError::WrongRankCount { found: 8 };
        assert!(err.to_string().contains('8'));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'q' };
        assert!(err.to_string().contains("'q'"));
    }

    #[test]
    fn test_fen_error_king_count() {
        let err = FenError::KingCount {
            color: "Black".to_string(),
            found: 0,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveParseError::IllegalMove {
            notation: "h2h9".to_string(),
        };
        assert!(err.to_string().contains("h2h9"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 10 };
        assert!(err.to_string().contains("10"));
        let err = SquareError::FileOutOfBounds { file: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
