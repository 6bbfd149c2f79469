/// The error type for the bounds-checked [`Board`](crate::Board) accessors.
///
/// Returned only on direct misuse with coordinates outside the board; the
/// search engine itself never produces it because it only constructs
/// in-range coordinates.
#[derive(Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinates ({}, {}) are outside the {}x{} board",
            self.row, self.col, self.size, self.size
        )
    }
}
