/// Cursor position tracking
///
/// Stores the location (line/column) a completion request was made at,
/// 0-indexed for LSP compatibility. Columns count characters, matching
/// what completion hosts report for cursor locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
