//! Pure grid geometry: 3x3 neighborhood clipping and distance ranking.

/// Enumerates the in-bounds coordinates of the 3x3 neighborhood centered on
/// `(x, y)`, including the center itself. Yields 4 coordinates at a corner,
/// 6 on an edge, 9 in the interior. Iteration order is column-major
/// (x-1..=x+1 outer, y-1..=y+1 inner) and fixed.
pub fn neighborhood(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (x, y) = (x as isize, y as isize);
    (-1..=1)
        .flat_map(move |dx| (-1..=1).map(move |dy| (x + dx, y + dy)))
        .filter(move |&(sx, sy)| {
            sx >= 0 && sy >= 0 && (sx as usize) < width && (sy as usize) < height
        })
        .map(|(sx, sy)| (sx as usize, sy as usize))
}

/// Squared Euclidean distance between two coordinates. Used to rank worklist
/// entries by proximity to the most recent branch point; the square root is
/// never needed for ordering.
pub fn squared_distance(a: (usize, usize), b: (usize, usize)) -> i64 {
    let dx = a.0 as i64 - b.0 as i64;
    let dy = a.1 as i64 - b.1 as i64;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_interior() {
        let coords: Vec<_> = neighborhood(1, 1, 3, 3).collect();
        assert_eq!(coords.len(), 9);
        assert!(coords.contains(&(0, 0)));
        assert!(coords.contains(&(1, 1)));
        assert!(coords.contains(&(2, 2)));
    }

    #[test]
    fn test_neighborhood_corner() {
        let coords: Vec<_> = neighborhood(0, 0, 3, 3).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        let coords: Vec<_> = neighborhood(2, 2, 3, 3).collect();
        assert_eq!(coords, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_neighborhood_edge() {
        let coords: Vec<_> = neighborhood(1, 0, 3, 3).collect();
        assert_eq!(coords.len(), 6);
        assert!(!coords.contains(&(2, 2)));
    }

    #[test]
    fn test_neighborhood_single_cell_grid() {
        let coords: Vec<_> = neighborhood(0, 0, 1, 1).collect();
        assert_eq!(coords, vec![(0, 0)]);
    }

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance((0, 0), (0, 0)), 0);
        assert_eq!(squared_distance((0, 0), (3, 4)), 25);
        assert_eq!(squared_distance((5, 1), (2, 1)), 9);
    }
}
