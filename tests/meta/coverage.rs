//! Keeps `tests/unit` an exact mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Entry points and module lists carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                found.insert(format!("{relative}/"));
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn listing(root: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let result = rust_files(Path::new(root), Path::new(root), &mut found);
        assert!(result.is_ok(), "Failed to scan {root}: {result:?}");
        found
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = listing(UNIT);
        let missing: Vec<String> = listing(SRC)
            .into_iter()
            .filter(|path| !is_exempt(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = listing(SRC);
        let orphaned: Vec<String> = listing(UNIT)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - {UNIT}/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let empty: Vec<String> = listing("tests")
            .into_iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
