//! Discovery and output-mapping integration tests over real directory trees.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;
use stamp_core::{
    ensure_parent_dir, resolve, OutputMapper, OutputMode, ResolveError, TemplateSuffix,
};

// ---------------------------------------------------------------------------
// 1. Suffix classification
// ---------------------------------------------------------------------------

#[rstest]
#[case("a.txt.twig", true)]
#[case("a.twig", true)]
#[case("a.Twig", false)]
#[case("a.twig.bak", false)]
#[case("a.yaml", false)]
#[case("twig", false)]
fn single_file_resolves_iff_suffix_matches(#[case] name: &str, #[case] accepted: bool) {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let file = temp.child(name);
    file.write_str("{{ name }}").expect("write");

    let result = resolve(file.path(), &TemplateSuffix::default());
    if accepted {
        let set = result.expect("should resolve");
        assert_eq!(set.root(), temp.path());
        assert_eq!(set.templates(), &[file.path().to_path_buf()]);
    } else {
        let err = result.expect_err("should be rejected");
        assert!(matches!(err, ResolveError::WrongExtension { .. }), "got: {err}");
    }
}

// ---------------------------------------------------------------------------
// 2. Directory discovery
// ---------------------------------------------------------------------------

#[test]
fn directory_root_is_the_directory_and_order_is_sorted() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("a/b").create_dir_all().expect("mkdir");
    for name in ["b.twig", "a/z.twig", "a/b/c.twig", "c.txt", "a/readme.md"] {
        temp.child(name).write_str("x").expect("write");
    }

    let set = resolve(temp.path(), &TemplateSuffix::default()).expect("resolve");
    assert_eq!(set.root(), temp.path());
    let keys: Vec<String> = set
        .templates()
        .iter()
        .map(|t| set.key(t).expect("key"))
        .collect();
    assert_eq!(keys, vec!["a/b/c.twig", "a/z.twig", "b.twig"]);
}

#[test]
fn empty_directory_is_empty_template_set() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("empty").create_dir_all().expect("mkdir");

    let err = resolve(&temp.path().join("empty"), &TemplateSuffix::default()).unwrap_err();
    assert!(matches!(err, ResolveError::EmptyTemplateSet { .. }), "got: {err}");
}

#[test]
fn resolution_writes_nothing() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("a.txt.twig").write_str("x").expect("write");

    resolve(temp.path(), &TemplateSuffix::default()).expect("resolve");
    temp.child("a.txt").assert(predicate::path::missing());
}

#[test]
#[cfg(unix)]
fn symlinked_file_in_tree_is_discovered_under_its_link_name() {
    use std::os::unix::fs::symlink;

    let outside = assert_fs::TempDir::new().expect("tempdir");
    let real = outside.child("shared.txt");
    real.write_str("{{ name }}").expect("write");
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("a.twig").write_str("x").expect("write");
    symlink(real.path(), temp.child("linked.twig").path()).expect("symlink");

    let set = resolve(temp.path(), &TemplateSuffix::default()).expect("resolve");
    let keys: Vec<String> = set
        .templates()
        .iter()
        .map(|t| set.key(t).expect("key"))
        .collect();
    assert_eq!(keys, vec!["a.twig", "linked.twig"]);
}

#[test]
#[cfg(unix)]
fn symlinked_directory_is_not_descended() {
    use std::os::unix::fs::symlink;

    let outside = assert_fs::TempDir::new().expect("tempdir");
    outside.child("hidden.twig").write_str("x").expect("write");
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("a.twig").write_str("x").expect("write");
    symlink(outside.path(), temp.child("linked").path()).expect("symlink");

    let set = resolve(temp.path(), &TemplateSuffix::default()).expect("resolve");
    assert_eq!(set.templates(), &[temp.child("a.twig").path().to_path_buf()]);
}

#[test]
#[cfg(unix)]
fn dangling_symlink_is_skipped() {
    use std::os::unix::fs::symlink;

    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("a.twig").write_str("x").expect("write");
    symlink(temp.child("gone.txt").path(), temp.child("dangling.twig").path())
        .expect("symlink");

    let set = resolve(temp.path(), &TemplateSuffix::default()).expect("resolve");
    assert_eq!(set.len(), 1);
    assert_eq!(set.templates(), &[temp.child("a.twig").path().to_path_buf()]);
}

// ---------------------------------------------------------------------------
// 3. Output mapping
// ---------------------------------------------------------------------------

#[rstest]
#[case::mirror(None)]
#[case::directory(Some("out"))]
fn mapping_strips_suffix_and_keeps_subdirectories(#[case] directory: Option<&str>) {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let templates = temp.child("templates");
    templates.child("subdir").create_dir_all().expect("mkdir");
    templates.child("a.txt.twig").write_str("a").expect("write");
    templates.child("subdir/p.txt.twig").write_str("p").expect("write");

    let mode = OutputMode::from_options(None, directory.map(|d| temp.path().join(d)))
        .expect("mode");
    let base = match directory {
        Some(d) => temp.path().join(d),
        None => templates.path().to_path_buf(),
    };

    let set = resolve(templates.path(), &TemplateSuffix::default()).expect("resolve");
    let mapper = OutputMapper::new(&set, &mode).expect("mapper");
    let outputs: Vec<_> = set
        .templates()
        .iter()
        .map(|t| mapper.output_path(t).expect("map"))
        .collect();
    assert_eq!(outputs, vec![base.join("a.txt"), base.join("subdir").join("p.txt")]);
}

#[test]
fn ensure_parent_dir_creates_nested_output_directories() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let output = temp.path().join("out").join("subdir").join("p.txt");

    ensure_parent_dir(&output).expect("mkdir");
    temp.child("out/subdir").assert(predicate::path::is_dir());
    temp.child("out/subdir/p.txt").assert(predicate::path::missing());
}
