//! Property tests for path-prep
//!
//! These tests verify the invariants of filename truncation, sanitization,
//! and overwrite resolution across a wide range of inputs, including
//! multi-byte stems and pre-existing collisions.

use path_prep::*;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Define local generators for filename scenarios
mod test_generators {
    use proptest::prelude::*;

    pub struct NameGenerators;

    impl NameGenerators {
        /// Generate stems mixing ASCII with multi-byte characters, no dots
        pub fn stem() -> impl Strategy<Value = String> {
            proptest::collection::vec(
                prop_oneof![
                    4 => proptest::char::range('a', 'z'),
                    2 => proptest::char::range('0', '9'),
                    1 => Just('é'),
                    1 => Just('文'),
                    1 => Just('\u{1F31F}'),
                    1 => Just('_'),
                    1 => Just('-'),
                ],
                1..80,
            )
            .prop_map(|chars| chars.into_iter().collect())
        }

        /// Generate a single dot-prefixed suffix
        pub fn suffix_part() -> impl Strategy<Value = String> {
            "[a-z0-9]{1,6}".prop_map(|s| format!(".{s}"))
        }

        /// Generate a suffix run of zero to three suffixes
        pub fn suffix_run() -> impl Strategy<Value = String> {
            proptest::collection::vec(Self::suffix_part(), 0..=3).prop_map(|parts| parts.concat())
        }

        /// Generate a complete filename
        pub fn filename() -> impl Strategy<Value = (String, String)> {
            (Self::stem(), Self::suffix_run())
        }

        /// Generate ASCII-only filenames that are safe to create on disk
        pub fn disk_safe_filename() -> impl Strategy<Value = String> {
            ("[a-z][a-z0-9_-]{0,12}", "[a-z]{1,4}").prop_map(|(stem, ext)| format!("{stem}.{ext}"))
        }

        /// Generate text that may contain OS-reserved characters
        pub fn dirty_text() -> impl Strategy<Value = String> {
            proptest::collection::vec(
                prop_oneof![
                    4 => proptest::char::range('a', 'z'),
                    3 => proptest::sample::select(
                        &['\\', '/', '*', '?', ':', '"', '<', '>', '|'][..],
                    ),
                    1 => Just(' '),
                    1 => Just('é'),
                ],
                0..40,
            )
            .prop_map(|chars| chars.into_iter().collect())
        }

        pub fn byte_budget() -> impl Strategy<Value = usize> {
            16usize..300
        }

        pub fn overwrite_mode() -> impl Strategy<Value = super::OverwriteMode> {
            prop_oneof![
                Just(super::OverwriteMode::Always),
                Just(super::OverwriteMode::Never),
                Just(super::OverwriteMode::Prompt),
                Just(super::OverwriteMode::Rename),
            ]
        }
    }
}

use test_generators::NameGenerators;

const RESERVED: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: filenames already within the budget are returned unchanged
    #[test]
    fn truncation_is_identity_within_budget(
        (stem, run) in NameGenerators::filename(),
        budget in NameGenerators::byte_budget()
    ) {
        let name = format!("{stem}{run}");
        prop_assume!(name.len() <= budget);

        let result = truncate_filename(&name, budget).unwrap();
        prop_assert_eq!(result, PathBuf::from(name));
    }

    /// Property: truncated filenames fit the budget and keep the suffix run
    #[test]
    fn truncation_fits_budget_and_preserves_suffix_run(
        (stem, run) in NameGenerators::filename(),
        budget in NameGenerators::byte_budget()
    ) {
        let name = format!("{stem}{run}");
        prop_assume!(name.len() > budget);
        prop_assume!(run.len() < budget);

        let result = truncate_filename(&name, budget).unwrap();
        let result_name = result.file_name().unwrap().to_str().unwrap().to_string();

        prop_assert!(
            result_name.len() <= budget,
            "result '{}' is {} bytes, budget {}",
            result_name, result_name.len(), budget
        );
        prop_assert!(
            result_name.ends_with(&run),
            "suffix run '{}' lost in '{}'",
            run, result_name
        );

        // The produced stem is a whole-character prefix of the original stem
        let result_stem = result_name.strip_suffix(&run).unwrap();
        prop_assert!(
            stem.starts_with(result_stem),
            "stem '{}' is not a prefix of '{}'",
            result_stem, stem
        );
    }

    /// Property: a suffix run that alone exceeds the budget is a hard failure
    #[test]
    fn truncation_fails_when_suffix_run_exceeds_budget(
        stem in NameGenerators::stem(),
        budget in 8usize..32
    ) {
        let run = format!(".{}", "x".repeat(budget));
        let name = format!("{stem}{run}");

        let result = truncate_filename(&name, budget);
        prop_assert!(
            matches!(result, Err(PathError::TruncationImpossible { .. })),
            "expected TruncationImpossible, got {:?}",
            result
        );
    }

    /// Property: truncation keeps the parent directory untouched
    #[test]
    fn truncation_preserves_parent(
        (stem, run) in NameGenerators::filename(),
        budget in NameGenerators::byte_budget()
    ) {
        let parent = PathBuf::from("some/deep/dir");
        let path = parent.join(format!("{stem}{run}"));
        prop_assume!(run.len() < budget);

        let result = truncate_filename(&path, budget).unwrap();
        prop_assert_eq!(result.parent().unwrap(), parent.as_path());
    }

    /// Property: sanitized text never contains a reserved character
    #[test]
    fn sanitization_removes_reserved_chars(
        text in NameGenerators::dirty_text()
    ) {
        let sanitized = sanitize_filename(&text);
        prop_assert!(
            !sanitized.chars().any(|c| RESERVED.contains(&c)),
            "reserved character survived in '{}'",
            sanitized
        );
    }

    /// Property: sanitization is idempotent
    /// sanitize(sanitize(text)) == sanitize(text)
    #[test]
    fn sanitization_is_idempotent(
        text in NameGenerators::dirty_text()
    ) {
        let once = sanitize_filename(&text);
        let twice = sanitize_filename(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: sanitization preserves character count with a one-char replacement
    #[test]
    fn sanitization_preserves_length(
        text in NameGenerators::dirty_text()
    ) {
        let sanitized = sanitize_filename(&text);
        prop_assert_eq!(sanitized.chars().count(), text.chars().count());
    }

    /// Property: every overwrite mode reports NotFound for a missing path
    #[test]
    fn missing_paths_are_not_found_for_every_mode(
        mode in NameGenerators::overwrite_mode(),
        name in NameGenerators::disk_safe_filename()
    ) {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join(name);
        let mut yes = |_: &Path| true;

        let decided = overwrite_existing_path_with(&missing, mode, &mut yes);
        prop_assert!(
            matches!(decided, Err(PathError::NotFound { .. })),
            "expected NotFound from decide in {} mode, got {:?}",
            mode, decided
        );
        let resolved = resolve_output_path_with(&missing, mode, &mut yes);
        prop_assert!(
            matches!(resolved, Err(PathError::NotFound { .. })),
            "expected NotFound from resolve in {} mode, got {:?}",
            mode, resolved
        );
    }

    /// Property: safe_path on a missing path is the identity
    #[test]
    fn safe_path_is_identity_for_missing_paths(
        name in NameGenerators::disk_safe_filename()
    ) {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join(name);
        prop_assert_eq!(safe_path(&missing), missing);
    }

    /// Property: with N numbered collisions present, safe_path picks N+1
    #[test]
    fn safe_path_skips_existing_collisions(
        name in NameGenerators::disk_safe_filename(),
        collisions in 0usize..6
    ) {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join(&name);
        std::fs::write(&original, b"data").unwrap();

        let run = suffix(&original);
        let stem = name.strip_suffix(run.as_str()).unwrap();
        for n in 1..=collisions {
            std::fs::write(dir.path().join(format!("{stem}.{n}{run}")), b"data").unwrap();
        }

        let expected = dir.path().join(format!("{stem}.{}{run}", collisions + 1));
        prop_assert_eq!(safe_path(&original), expected);
    }

    /// Property: the renamed candidate never exists and shares stem and suffix
    #[test]
    fn rename_mode_produces_fresh_usable_paths(
        name in NameGenerators::disk_safe_filename()
    ) {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join(&name);
        std::fs::write(&original, b"data").unwrap();

        let mut deny = |_: &Path| false;
        let resolved = resolve_output_path_with(&original, OverwriteMode::Rename, &mut deny)
            .unwrap()
            .expect("rename mode always yields a target");

        prop_assert!(!resolved.exists());
        prop_assert_eq!(resolved.parent().unwrap(), dir.path());
        prop_assert_eq!(suffix(&resolved), suffix(&original));
    }
}

/// Policy table tests for overwrite decisions over existing paths
mod policy_table {
    use super::*;

    fn existing_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("target.txt");
        std::fs::write(&path, b"data").unwrap();
        path
    }

    #[test]
    fn always_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = existing_file(&dir);
        let mut unused = |_: &Path| unreachable!();
        assert!(overwrite_existing_path_with(&path, OverwriteMode::Always, &mut unused).unwrap());
        assert_eq!(
            resolve_output_path_with(&path, OverwriteMode::Always, &mut unused).unwrap(),
            Some(path)
        );
    }

    #[test]
    fn never_skips() {
        let dir = TempDir::new().unwrap();
        let path = existing_file(&dir);
        let mut unused = |_: &Path| unreachable!();
        assert!(!overwrite_existing_path_with(&path, OverwriteMode::Never, &mut unused).unwrap());
        assert_eq!(
            resolve_output_path_with(&path, OverwriteMode::Never, &mut unused).unwrap(),
            None
        );
    }

    #[test]
    fn prompt_follows_the_answer() {
        let dir = TempDir::new().unwrap();
        let path = existing_file(&dir);

        let mut yes = |_: &Path| true;
        assert!(overwrite_existing_path_with(&path, OverwriteMode::Prompt, &mut yes).unwrap());
        assert_eq!(
            resolve_output_path_with(&path, OverwriteMode::Prompt, &mut yes).unwrap(),
            Some(path.clone())
        );

        let mut no = |_: &Path| false;
        assert!(!overwrite_existing_path_with(&path, OverwriteMode::Prompt, &mut no).unwrap());
        assert_eq!(
            resolve_output_path_with(&path, OverwriteMode::Prompt, &mut no).unwrap(),
            None
        );
    }

    #[test]
    fn rename_diverts_without_prompting() {
        let dir = TempDir::new().unwrap();
        let path = existing_file(&dir);
        let mut unused = |_: &Path| unreachable!();
        assert!(!overwrite_existing_path_with(&path, OverwriteMode::Rename, &mut unused).unwrap());
        assert_eq!(
            resolve_output_path_with(&path, OverwriteMode::Rename, &mut unused).unwrap(),
            Some(dir.path().join("target.1.txt"))
        );
    }
}
