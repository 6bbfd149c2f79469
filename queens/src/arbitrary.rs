/// A board size small enough that exhaustive backtracking stays fast.
#[derive(Clone, Copy, Debug)]
pub struct SmallBoardSize(pub usize);

impl quickcheck::Arbitrary for SmallBoardSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(usize::arbitrary(g) % 12 + 1)
    }
}
