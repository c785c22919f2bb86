#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't require separate test files
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    #[test]
    fn test_every_src_file_has_unit_tests() {
        let src_paths = collect_relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!src_paths.is_empty(), "Failed to read {SRC_DIR}");

        let missing: Vec<String> = src_paths
            .difference(&test_paths)
            .filter(|path| !is_exempt(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_src_counterpart() {
        let src_paths = collect_relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = test_paths
            .difference(&src_paths)
            .filter(|path| !path.ends_with("mod.rs"))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, tests_dir, &mut files_without_tests) {
            assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(base, base, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    // Harness roots such as tests/unit.rs only declare the sibling module tree
    fn is_harness_root(path: &Path, base_dir: &Path) -> bool {
        path.parent() == Some(base_dir) && path.with_extension("").is_dir()
    }

    fn check_test_files(
        dir: &Path,
        base_dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                check_test_files(&path, base_dir, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            if path.file_name().and_then(|name| name.to_str()) == Some("mod.rs")
                || is_harness_root(&path, base_dir)
            {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }
}
