use super::{grid::Grid, piece::Piece};

/// Checks whether `piece`, translated by `(offset_x, offset_y)`, would overlap
/// a wall, the floor, or a settled block.
///
/// A block collides when its column is outside `0..W`, when its row is at or
/// below the floor, or when it lands on an occupied cell. Blocks above the
/// visible top (`y < 0`) never touch settled cells but still hit side walls.
#[must_use]
pub fn collides(piece: &Piece, grid: &Grid, offset_x: i32, offset_y: i32) -> bool {
    piece
        .shifted(offset_x, offset_y)
        .occupied_positions()
        .any(|(x, y)| !grid.is_inside(x, y) || (y >= 0 && grid.is_occupied(x, y)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::core::{PiecePosition, ShapeKind};

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_spawn_on_empty_grid_is_free() {
        for kind in ShapeKind::ALL {
            assert!(!collides(&Piece::new(kind), &Grid::EMPTY, 0, 0), "{kind:?}");
        }
    }

    #[test]
    fn test_side_walls() {
        let piece = Piece::at(ShapeKind::I, PiecePosition::new(0, 5));
        assert!(!collides(&piece, &Grid::EMPTY, 0, 0));
        assert!(collides(&piece, &Grid::EMPTY, -1, 0));
        assert!(!collides(&piece, &Grid::EMPTY, 6, 0));
        assert!(collides(&piece, &Grid::EMPTY, 7, 0));
    }

    #[test]
    fn test_floor() {
        let piece = Piece::at(ShapeKind::O, PiecePosition::new(4, 18));
        assert!(!collides(&piece, &Grid::EMPTY, 0, 0));
        assert!(collides(&piece, &Grid::EMPTY, 0, 1));
    }

    #[test]
    fn test_settled_blocks() {
        let grid = grid(
            "
            ..........
            ....ZZ....
            ",
        );
        let piece = Piece::at(ShapeKind::O, PiecePosition::new(4, 17));
        assert!(!collides(&piece, &grid, 0, 0));
        assert!(collides(&piece, &grid, 0, 1));
        assert!(!collides(&piece, &grid, 2, 1));
        assert!(collides(&piece, &grid, 1, 1));
    }

    #[test]
    fn test_above_top_ignores_cells_but_not_walls() {
        let mut grid = Grid::EMPTY;
        grid.set_cell(0, 0, ShapeKind::T);
        // Vertical I reaching one row above the grid, right above the settled cell.
        let piece = Piece::at(ShapeKind::I, PiecePosition::new(-1, 0)).rotated_right();
        assert_eq!(piece.occupied_positions().next(), Some((0, -1)));
        assert!(collides(&piece, &grid, 0, 0));
        let raised = piece.shifted(0, -3);
        assert!(!collides(&raised, &grid, 0, 0));
        assert!(collides(&raised, &grid, -1, 0));
    }

    proptest! {
        #[test]
        fn prop_collision_matches_block_scan(
            kind in prop::sample::select(ShapeKind::ALL.to_vec()),
            rotations in 0usize..4,
            x in -4i32..12,
            y in -4i32..22,
            filled in prop::collection::vec((0i32..10, 0i32..20), 0..40),
        ) {
            let mut grid = Grid::EMPTY;
            for &(fx, fy) in &filled {
                grid.set_cell(fx, fy, ShapeKind::S);
            }
            let mut piece = Piece::at(kind, PiecePosition::new(x, y));
            for _ in 0..rotations {
                piece = piece.rotated_right();
            }
            let expected = piece.occupied_positions().any(|(bx, by)| {
                !(0..10).contains(&bx) || by >= 20 || filled.contains(&(bx, by))
            });
            prop_assert_eq!(collides(&piece, &grid, 0, 0), expected);
        }
    }
}
