//! Tests for level layout, dealing and star thresholds

#[cfg(test)]
mod tests {
    use jigsolitaire::PuzzleError;
    use jigsolitaire::game::level::{Level, LevelKind, stars_for_time};
    use jigsolitaire::io::configuration::PUZZLE_ID_STRIDE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests levels start at one
    // Verified by accepting level zero
    #[test]
    fn test_level_zero_rejected() {
        assert!(matches!(
            Level::new(0),
            Err(PuzzleError::InvalidParameter {
                parameter: "level",
                ..
            })
        ));
        assert_eq!(Level::new(1).map(Level::number).ok(), Some(1));
    }

    // Tests every fifth level is hard
    // Verified by using a remainder of one
    #[test]
    fn test_level_kinds() {
        for (number, kind) in [
            (1, LevelKind::Standard),
            (4, LevelKind::Standard),
            (5, LevelKind::Hard),
            (6, LevelKind::Standard),
            (10, LevelKind::Hard),
        ] {
            let level = Level::new(number).expect("valid level");
            assert_eq!(level.kind(), kind, "level {number}");
        }
    }

    // Tests grid size and puzzle count per kind
    // Verified by swapping the hard and standard grids
    #[test]
    fn test_level_layout() {
        let standard = Level::new(3).expect("valid level");
        assert_eq!(standard.grid_size(), 3);
        assert_eq!(standard.puzzle_count(), 1);

        let hard = Level::new(15).expect("valid level");
        assert_eq!(hard.grid_size(), 4);
        assert_eq!(hard.puzzle_count(), 3);
    }

    // Tests dealt boards carry their puzzle index and offset ids
    // Verified by dealing every board with index zero
    #[test]
    fn test_deal_hard_level() {
        let level = Level::new(5).expect("valid level");
        let mut rng = StdRng::seed_from_u64(8);
        let boards = level.deal(&mut rng).expect("deal");

        assert_eq!(boards.len(), 3);
        for (index, board) in boards.iter().enumerate() {
            assert_eq!(board.grid_size(), 4);
            assert!(board.is_consistent());
            for tile in board.tiles() {
                assert_eq!(tile.puzzle_index, Some(index));
                assert_eq!(tile.id, tile.correct_pos + index * PUZZLE_ID_STRIDE);
            }
        }
    }

    // Tests star bands at each threshold
    // Verified by using inclusive upper bounds
    #[test]
    fn test_stars_for_time() {
        assert_eq!(stars_for_time(0), 3);
        assert_eq!(stars_for_time(9), 3);
        assert_eq!(stars_for_time(10), 2);
        assert_eq!(stars_for_time(19), 2);
        assert_eq!(stars_for_time(25), 2);
        assert_eq!(stars_for_time(29), 2);
        assert_eq!(stars_for_time(30), 1);
        assert_eq!(stars_for_time(600), 1);
    }
}
