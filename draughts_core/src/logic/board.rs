use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

pub const BOARD_SIZE: usize = 8;
const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Starts on rows 0-1 and moves first.
    Light,
    /// Starts on rows 6-7.
    Dark,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Row delta of a forward step for a man of this color.
    pub const fn forward(self) -> i8 {
        match self {
            Self::Light => 1,
            Self::Dark => -1,
        }
    }

    pub const fn promotion_row(self) -> usize {
        match self {
            Self::Light => BOARD_SIZE - 1,
            Self::Dark => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    Queen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::Man,
        }
    }

    pub const fn queen(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::Queen,
        }
    }

    pub const fn is_queen(self) -> bool {
        matches!(self.kind, PieceKind::Queen)
    }

    #[must_use]
    pub const fn promoted(self) -> Self {
        Self::queen(self.color)
    }

    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::Man) => 'l',
            (Color::Light, PieceKind::Queen) => 'L',
            (Color::Dark, PieceKind::Man) => 'd',
            (Color::Dark, PieceKind::Queen) => 'D',
        }
    }
}

/// A square on the board. Only constructible inside the 8x8 bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Dark squares of the board; the only ones pieces may stand on.
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// One diagonal (or arbitrary) step, `None` when it leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SQUARES).filter_map(|sq| Self::new(sq / BOARD_SIZE, sq % BOARD_SIZE))
    }

    const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }
}

/// Wire shape of a [`Cell`]; bounds are checked on the way in.
#[derive(Serialize, Deserialize)]
struct RawCell {
    row: u8,
    col: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = BoardError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        let (row, col) = (usize::from(raw.row), usize::from(raw.col));
        Self::new(row, col).ok_or(BoardError::OutOfBounds { row, col })
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell {0} is not a playable square")]
    NonPlayableSquare(Cell),
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    grid: [Option<Piece>; SQUARES],
}

/// Wire shape of a [`Board`]. Every piece is re-placed through
/// [`Board::place`] when read back.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    #[serde(with = "BigArray")]
    grid: [Option<Piece>; SQUARES],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Self::empty();
        for (cell, piece) in Cell::all().zip(raw.grid) {
            if let Some(piece) = piece {
                board.place(cell, piece)?;
            }
        }
        Ok(board)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self { grid: board.grid }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: two rows of men per side on the playable squares.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [None; SQUARES],
        }
    }

    fn setup_initial_position(&mut self) {
        for cell in Cell::all().filter(|c| c.is_playable()) {
            let color = match cell.row() {
                0 | 1 => Color::Light,
                6 | 7 => Color::Dark,
                _ => continue,
            };
            self.put(cell, Piece::man(color));
        }
    }

    #[must_use]
    pub fn get_piece(&self, cell: Cell) -> Option<Piece> {
        self.grid.get(cell.index()).copied().flatten()
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get_piece(cell).is_none()
    }

    /// Places a piece, refusing squares outside the playable parity.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Result<(), BoardError> {
        if !cell.is_playable() {
            return Err(BoardError::NonPlayableSquare(cell));
        }
        self.put(cell, piece);
        Ok(())
    }

    pub(crate) fn put(&mut self, cell: Cell, piece: Piece) {
        if let Some(slot) = self.grid.get_mut(cell.index()) {
            *slot = Some(piece);
        }
    }

    pub fn clear_cell(&mut self, cell: Cell) {
        if let Some(slot) = self.grid.get_mut(cell.index()) {
            *slot = None;
        }
    }

    /// Pieces of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| {
            self.get_piece(cell)
                .filter(|p| p.color == color)
                .map(|p| (cell, p))
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    pub fn has_any_queen(&self) -> bool {
        self.grid.iter().flatten().any(|p| p.is_queen())
    }

    /// One line per row, row 0 first: `l`/`d` men, `L`/`D` queens, `.` empty.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(SQUARES + BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = Cell::new(row, col)
                    .and_then(|cell| self.get_piece(cell))
                    .map_or('.', Piece::symbol);
                out.push(symbol);
            }
            if row + 1 < BOARD_SIZE {
                out.push('\n');
            }
        }
        out
    }

    /// Parses the format written by [`Board::to_diagram`]. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardError::RowLength { row, len });
            }
            for (col, symbol) in line.chars().enumerate() {
                let piece = match symbol {
                    '.' => continue,
                    'l' => Piece::man(Color::Light),
                    'L' => Piece::queen(Color::Light),
                    'd' => Piece::man(Color::Dark),
                    'D' => Piece::queen(Color::Dark),
                    other => return Err(BoardError::UnknownSymbol(other)),
                };
                if let Some(cell) = Cell::new(row, col) {
                    board.place(cell, piece)?;
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        assert_eq!(board.count(Color::Light), 8);
        assert_eq!(board.count(Color::Dark), 8);
        assert!(!board.has_any_queen());

        for (c, piece) in board.pieces(Color::Light) {
            assert!(c.is_playable());
            assert!(c.row() < 2);
            assert_eq!(piece.kind, PieceKind::Man);
        }
        for (c, _) in board.pieces(Color::Dark) {
            assert!(c.is_playable());
            assert!(c.row() > 5);
        }
    }

    #[test]
    fn test_diagram_generation() {
        let board = Board::new();
        assert_eq!(
            board.to_diagram(),
            ".l.l.l.l\nl.l.l.l.\n........\n........\n........\n........\n.d.d.d.d\nd.d.d.d."
        );
    }

    #[test]
    fn test_from_diagram_reads_queens() {
        let board = Board::from_diagram(
            "
            ........
            ..L.....
            ........
            ........
            ........
            ........
            ...d....
            ........
            ",
        )
        .unwrap();
        assert_eq!(board.get_piece(cell(1, 2)), Some(Piece::queen(Color::Light)));
        assert_eq!(board.get_piece(cell(6, 3)), Some(Piece::man(Color::Dark)));
        assert_eq!(board.count(Color::Light), 1);
    }

    #[test]
    fn test_from_diagram_rejects_light_squares() {
        let result = Board::from_diagram(
            "l.......\n........\n........\n........\n........\n........\n........\n........",
        );
        assert_eq!(result, Err(BoardError::NonPlayableSquare(cell(0, 0))));
    }

    #[test]
    fn test_serde_keeps_valid_boards() {
        let json = serde_json::to_string(&Board::new()).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), Board::new());

        let json = serde_json::to_string(&cell(3, 4)).unwrap();
        assert_eq!(json, r#"{"row":3,"col":4}"#);
        assert_eq!(serde_json::from_str::<Cell>(&json).unwrap(), cell(3, 4));
    }

    #[test]
    fn test_serde_rejects_off_board_cell() {
        assert!(serde_json::from_str::<Cell>(r#"{"row":200,"col":3}"#).is_err());
        assert!(serde_json::from_str::<Cell>(r#"{"row":3,"col":8}"#).is_err());
    }

    #[test]
    fn test_serde_rejects_piece_on_light_square() {
        let mut value = serde_json::to_value(Board::empty()).unwrap();
        value["grid"][0] = serde_json::to_value(Piece::man(Color::Light)).unwrap();
        assert!(serde_json::from_value::<Board>(value).is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(cell(0, 0).offset(-1, 1), None);
        assert_eq!(cell(7, 7).offset(1, 1), None);
        assert_eq!(cell(3, 4).offset(1, -1), Some(cell(4, 3)));
        assert!(Cell::new(8, 0).is_none());
    }
}
