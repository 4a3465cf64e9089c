//! Text notation for boards.
//!
//! Compact form is three rows of three cells separated by `/`, e.g.
//! `"XO./.X./..."`. Parsing also accepts `x`/`o`, `-` or `_` for empty
//! squares, and ignores whitespace, `|` and `/`, so a pasted grid works too.

use super::{Board, Player, Square};
use crate::error::{RulesError, RulesErrorKind};
use std::str::FromStr;

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

impl Board {
    /// Canonical compact notation, e.g. `"XO./.X./..."`.
    pub fn notation(&self) -> String {
        self.squares()
            .chunks(3)
            .map(|row| row.iter().map(|&s| symbol(s)).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut n = 0;
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                c => {
                    return Err(RulesError::new(RulesErrorKind::InvalidPosition(format!(
                        "unexpected character {:?}",
                        c
                    ))));
                }
            };
            if n == 9 {
                return Err(RulesError::new(RulesErrorKind::InvalidPosition(
                    "more than nine squares".to_string(),
                )));
            }
            squares[n] = square;
            n += 1;
        }
        if n < 9 {
            return Err(RulesError::new(RulesErrorKind::InvalidPosition(format!(
                "expected nine squares, found {}",
                n
            ))));
        }
        Board::from_squares(squares)
    }
}

impl TryFrom<String> for Board {
    type Error = RulesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares().chunks(3).enumerate() {
            let cells: Vec<String> = row.iter().map(|&s| symbol(s).to_string()).collect();
            write!(f, "{}", cells.join("|"))?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.notation(), "XO./.X./..O");
        assert_eq!(board.notation().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_accepts_grid_layout() {
        let board: Board = "x|o|-\n_|x|.\n.|.|o".parse().unwrap();
        assert_eq!(board.notation(), "XO./.X./..O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO./.X./..".parse::<Board>().is_err());
        assert!("XO./.X./...X".parse::<Board>().is_err());
        assert!("XQ./.X./...".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_counts() {
        // O cannot be ahead of X.
        let err = "OO./.X./...".parse::<Board>().unwrap_err();
        assert!(matches!(err.kind, RulesErrorKind::InvalidPosition(_)));
        // X cannot be two marks ahead.
        assert!("XX./X../...".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_serde_uses_notation() {
        let board: Board = "X../.O./...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"X../.O./...\"");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>("\"OO./.../...\"").is_err());
    }
}
