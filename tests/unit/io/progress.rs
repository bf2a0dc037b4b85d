//! Tests for batch progress counting

#[cfg(test)]
mod tests {
    use duotile::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests rendered and skipped files are counted separately
    // Verified by counting skips as renders
    #[test]
    fn test_counts() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        manager.start_file(Path::new("a.png"));
        manager.complete_file(Path::new("a.png"), Duration::from_millis(12));
        manager.skip_file(Path::new("b.png"));
        manager.start_file(Path::new("c.png"));
        manager.complete_file(Path::new("c.png"), Duration::from_millis(3));
        manager.finish();

        assert_eq!(manager.rendered(), 2);
        assert_eq!(manager.skipped(), 1);
    }

    // Tests a fresh manager starts empty
    // Verified by seeding counters with one
    #[test]
    fn test_default_empty() {
        let manager = ProgressManager::default();
        assert_eq!(manager.rendered(), 0);
        assert_eq!(manager.skipped(), 0);
        manager.finish();
    }
}
