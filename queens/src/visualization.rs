use crate::Placement;

/// Renders placements on an `n`×`n` board as a box-drawn grid.
///
/// Occupied cells get a queen glyph; empty cells show the usual
/// light/dark checkerboard shading.
pub fn visualize_placements(n: usize, placements: &[Placement]) -> String {
    let mut result = String::from("╭");
    for _ in 0..n {
        result += "──";
    }
    result += "╮\n";
    for row in 0..n {
        result += "│";
        for col in 0..n {
            if placements.iter().any(|p| p.row == row && p.col == col) {
                result += "♛ ";
            } else if (row + col) % 2 == 0 {
                result += "  ";
            } else {
                result += "· ";
            }
        }
        result += "│\n";
    }
    result += "╰";
    for _ in 0..n {
        result += "──";
    }
    result += "╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_queens_and_checkerboard() {
        let rendered = visualize_placements(2, &[Placement::new(0, 0)]);
        assert_eq!(rendered, "╭────╮\n│♛ · │\n│·   │\n╰────╯");
    }
}
