/// A worklist entry: the coordinates of a cell carrying a clue, plus the clue
/// value itself so deduction passes never re-read it from the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ClueCell {
    pub x: usize,
    pub y: usize,
    pub value: u8,
}

impl ClueCell {
    pub fn new(x: usize, y: usize, value: u8) -> Self {
        Self { x, y, value }
    }
}

impl std::fmt::Debug for ClueCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@({},{})", self.value, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_representation() {
        assert_eq!(format!("{:?}", ClueCell::new(2, 5, 7)), "7@(2,5)");
    }
}
