//! Tests for rigid group discovery and board neighbor lookup

#[cfg(test)]
mod tests {
    use jigsolitaire::board::groups::{adjacent_in_solution, same_relative_position};
    use jigsolitaire::{Board, PuzzleError, Tile};

    fn board_with(grid_size: usize, current: &[usize]) -> Board {
        let tiles = current
            .iter()
            .enumerate()
            .map(|(id, &pos)| Tile {
                current_pos: pos,
                ..Tile::new(id, id, None)
            })
            .collect();
        Board::new(grid_size, tiles).expect("valid board")
    }

    // Tests solution adjacency uses Manhattan distance one
    // Verified by accepting diagonal neighbors
    #[test]
    fn test_adjacent_in_solution() {
        let a = Tile::new(0, 0, None);
        let right = Tile::new(1, 1, None);
        let below = Tile::new(3, 3, None);
        let diagonal = Tile::new(4, 4, None);
        let wrapped = Tile::new(2, 2, None);

        assert!(adjacent_in_solution(&a, &right, 3));
        assert!(adjacent_in_solution(&a, &below, 3));
        assert!(!adjacent_in_solution(&a, &diagonal, 3));
        assert!(!adjacent_in_solution(&right, &below, 3));
        assert!(!adjacent_in_solution(&wrapped, &below, 3));
    }

    // Tests relative offset comparison is signed
    // Verified by comparing absolute offsets
    #[test]
    fn test_same_relative_position() {
        let a = Tile {
            current_pos: 4,
            ..Tile::new(0, 0, None)
        };
        let b = Tile {
            current_pos: 5,
            ..Tile::new(1, 1, None)
        };
        let flipped = Tile {
            current_pos: 3,
            ..Tile::new(1, 1, None)
        };

        assert!(same_relative_position(&a, &b));
        assert!(!same_relative_position(&a, &flipped));
    }

    // Tests neighbor order and corner bounds
    // Verified by stepping with modulo arithmetic
    #[test]
    fn test_board_neighbors() {
        let board = Board::solved(3, None).expect("solved board");

        assert_eq!(board.board_neighbors(4), vec![1, 5, 7, 3]);
        assert_eq!(board.board_neighbors(0), vec![1, 3]);
        assert_eq!(board.board_neighbors(2), vec![5, 1]);
        assert_eq!(board.board_neighbors(8), vec![5, 7]);
        assert!(board.board_neighbors(9).is_empty());
    }

    // Tests a solved board forms one group in breadth-first order
    // Verified by pushing the anchor last
    #[test]
    fn test_solved_board_single_group() {
        let board = Board::solved(3, None).expect("solved board");
        let group = board.find_group(4).expect("valid anchor");

        assert_eq!(group.len(), 9);
        assert_eq!(group.first(), Some(&4));
        assert_eq!(group.get(..5), Some(&[4, 1, 5, 7, 3][..]));
        assert_eq!(board.all_groups().len(), 1);
    }

    // Tests swapped neighbors fall out of the solved cluster
    // Verified by ignoring the relative offset check
    #[test]
    fn test_swapped_pair_splits_groups() {
        let board = board_with(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(board.find_group(0).expect("valid anchor"), vec![0]);
        assert_eq!(board.find_group(1).expect("valid anchor"), vec![1]);
        assert_eq!(board.find_group(8).expect("valid anchor").len(), 7);
        assert_eq!(board.all_groups().len(), 3);
    }

    // Tests tiles split across a row boundary are not neighbors
    // Verified by treating position + 1 as the right neighbor unconditionally
    #[test]
    fn test_no_row_wraparound() {
        // Tiles 0 and 1 keep their solved offset but sit at slots 2 and 3
        let board = board_with(3, &[2, 3, 0, 1, 4, 5, 6, 7, 8]);

        assert_eq!(board.find_group(0).expect("valid anchor"), vec![0]);
        assert_eq!(board.find_group(1).expect("valid anchor"), vec![1]);
    }

    // Tests groups never cross sub-puzzle boundaries
    // Verified by removing the puzzle index filter
    #[test]
    fn test_groups_filtered_by_puzzle() {
        let tiles = vec![
            Tile::new(0, 0, Some(0)),
            Tile::new(1, 1, Some(0)),
            Tile::new(2, 2, Some(0)),
            Tile::new(3, 3, Some(1)),
        ];
        let board = Board::new(2, tiles).expect("valid board");

        let mut group = board.find_group(0).expect("valid anchor");
        group.sort_unstable();
        assert_eq!(group, vec![0, 1, 2]);
        assert_eq!(board.find_group(3).expect("valid anchor"), vec![3]);
        assert_eq!(board.all_groups().len(), 2);
    }

    // Tests invalid anchors are reported
    // Verified by returning an empty group
    #[test]
    fn test_find_group_invalid_anchor() {
        let board = Board::solved(2, None).expect("solved board");

        assert!(matches!(
            board.find_group(4),
            Err(PuzzleError::InvalidTileIndex { index: 4, .. })
        ));
    }

    // Tests all_groups partitions every tile exactly once
    // Verified by skipping the assigned check
    #[test]
    fn test_all_groups_partition() {
        let board = board_with(3, &[3, 4, 2, 0, 1, 5, 8, 7, 6]);
        let groups = board.all_groups();

        let mut members: Vec<usize> = groups.iter().flatten().copied().collect();
        members.sort_unstable();
        assert_eq!(members, (0..9).collect::<Vec<_>>());
    }
}
