//! Tests for level completion records

#[cfg(test)]
mod tests {
    use jigsolitaire::game::level::Level;
    use jigsolitaire::game::records::{LevelRecords, collection_levels, collection_of};

    fn level(number: u32) -> Level {
        Level::new(number).expect("valid level")
    }

    // Tests best time and stars survive slower runs
    // Verified by overwriting the record on every save
    #[test]
    fn test_save_keeps_best() {
        let level = Level::new(1).expect("valid level");
        let mut records = LevelRecords::new();

        let first = records.save(level, 5);
        assert_eq!(first.stars, 3);
        assert_eq!(first.best_time, 5);
        assert_eq!(first.completions, 1);

        let second = records.save(level, 25);
        assert_eq!(second.stars, 3);
        assert_eq!(second.best_time, 5);
        assert_eq!(second.completions, 2);

        assert_eq!(records.get(level), Some(&second));
    }

    // Tests totals across levels
    // Verified by summing the latest stars instead of the best
    #[test]
    fn test_totals_and_order() {
        let one = Level::new(1).expect("valid level");
        let two = Level::new(2).expect("valid level");
        let mut records = LevelRecords::new();

        records.save(two, 40);
        records.save(one, 12);
        records.save(one, 45);

        assert_eq!(records.total_stars(), 3);
        assert_eq!(records.completed_levels(), 2);
        let order: Vec<u32> = records.iter().map(|record| record.level.number()).collect();
        assert_eq!(order, vec![1, 2]);
    }

    // Tests unknown levels have no record
    // Verified by inserting a default record on lookup
    #[test]
    fn test_missing_record() {
        let records = LevelRecords::default();

        assert!(records.get(Level::new(3).expect("valid level")).is_none());
        assert_eq!(records.total_stars(), 0);
    }

    // Tests play counters skip replays that improve nothing
    // Verified by adding time on every save
    #[test]
    fn test_counters() {
        let mut records = LevelRecords::new();

        records.save(level(1), 5);
        records.save(level(1), 25);
        assert_eq!(records.total_puzzles_solved(), 1);
        assert_eq!(records.total_time_played(), 5);

        records.save(level(1), 3);
        records.save(level(2), 40);
        assert_eq!(records.total_puzzles_solved(), 2);
        assert_eq!(records.total_time_played(), 48);

        records.add_play_time(2);
        assert_eq!(records.total_time_played(), 50);
    }

    // Tests range queries only see completed levels inside the range
    // Verified by treating the range end as exclusive
    #[test]
    fn test_range_queries() {
        let mut records = LevelRecords::new();
        records.save(level(1), 5);
        records.save(level(2), 15);
        records.save(level(7), 40);

        assert_eq!(records.completed_in_range(1..=6), 2);
        assert_eq!(records.stars_in_range(1..=6), 5);
        assert_eq!(records.completed_in_range(3..=6), 0);
        assert_eq!(records.stars_in_range(1..=7), 6);
        assert_eq!(records.completed_in_range(7..=12), 1);
    }

    // Tests levels map onto collections of six
    // Verified by numbering levels from zero
    #[test]
    fn test_collection_bounds() {
        assert_eq!(collection_of(level(1)), 0);
        assert_eq!(collection_of(level(6)), 0);
        assert_eq!(collection_of(level(7)), 1);
        assert_eq!(collection_of(level(18)), 2);
        assert_eq!(collection_levels(0), 1..=6);
        assert_eq!(collection_levels(2), 13..=18);
    }

    // Tests the first three collections start open and later ones stay locked
    // Verified by unlocking from the total completion count
    #[test]
    fn test_initial_collections() {
        let mut records = LevelRecords::new();
        for number in 1..=6 {
            records.save(level(number), 5);
        }

        assert!(records.is_collection_unlocked(0));
        assert!(records.is_collection_unlocked(2));
        assert!(!records.is_collection_unlocked(3));
        assert_eq!(records.unlocked_collections().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    // Tests four completions in a collection unlock the next one
    // Verified by requiring the whole collection
    #[test]
    fn test_collection_unlock() {
        let mut records = LevelRecords::new();
        for number in 13..=15 {
            records.save(level(number), 12);
        }
        assert!(!records.is_collection_unlocked(3));

        // A replay of a completed level adds nothing
        records.save(level(13), 4);
        assert!(!records.is_collection_unlocked(3));

        records.save(level(18), 30);
        assert!(records.is_collection_unlocked(3));
        assert!(!records.is_collection_unlocked(4));
        assert_eq!(
            records.unlocked_collections().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }
}
