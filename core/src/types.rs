/// Single coordinate axis used for the grid side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional 1-indexed coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;

    /// Maps 1-indexed grid coordinates into 0-indexed array coordinates, if they fit inside `side`.
    fn to_nd_index(self, side: Coord) -> Option<Self::Output>;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self, side: Coord) -> Option<Self::Output> {
        let (x, y) = self;
        if (1..=side).contains(&x) && (1..=side).contains(&y) {
            Some([usize::from(x - 1), usize::from(y - 1)])
        } else {
            None
        }
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, dropping results that would not fit in [`Coord`].
fn apply_delta(coords: Coord2, delta: (i8, i8)) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?))
}

/// Iterates the Moore neighbourhood of a cell.
///
/// No grid bounds are applied here: callers either probe with queries that treat out-of-bounds cells as empty, or
/// filter when they consume the coordinates.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn neighbors_of_inner_cell_are_all_eight() {
        let neighbors: Vec<_> = NeighborIter::new((3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(3, 3)));
        assert!(neighbors.contains(&(2, 2)));
        assert!(neighbors.contains(&(4, 4)));
    }

    #[test]
    fn neighbors_never_wrap_the_axis() {
        let neighbors: Vec<_> = NeighborIter::new((0, Coord::MAX)).collect();

        assert_eq!(neighbors, [(0, Coord::MAX - 1), (1, Coord::MAX - 1), (1, Coord::MAX)]);
    }

    #[test]
    fn nd_index_is_one_based_and_bounded() {
        assert_eq!((1, 1).to_nd_index(5), Some([0, 0]));
        assert_eq!((5, 2).to_nd_index(5), Some([4, 1]));
        assert_eq!((0, 2).to_nd_index(5), None);
        assert_eq!((6, 2).to_nd_index(5), None);
    }
}
