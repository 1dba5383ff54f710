//! Tests for the progress manager

#[cfg(test)]
mod tests {
    use jigsolitaire::io::progress::ProgressManager;

    // Tests hidden managers still count work
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_counts() {
        let progress = ProgressManager::hidden(5);

        progress.advance("first");
        progress.advance("second");

        assert_eq!(progress.position(), 2);
        assert_eq!(progress.length(), Some(5));
        progress.finish();
    }

    // Tests visibility selection keeps the total
    // Verified by dropping the length for hidden bars
    #[test]
    fn test_with_visibility() {
        let hidden = ProgressManager::with_visibility("games", 3, false);
        let visible = ProgressManager::with_visibility("games", 3, true);

        assert_eq!(hidden.length(), Some(3));
        assert_eq!(visible.length(), Some(3));
        visible.advance("done");
        assert_eq!(visible.position(), 1);
        visible.finish();
    }
}
