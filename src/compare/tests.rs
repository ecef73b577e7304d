use super::*;
use crate::constants::DEFAULT_CONTEXT;
use std::fs;
use tempfile::TempDir;

/// helper to create template/ and client/ roots inside one temp dir
fn setup_trees() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let client = temp_dir.path().join("client");
    fs::create_dir_all(&template).unwrap();
    fs::create_dir_all(&client).unwrap();
    (temp_dir, template, client)
}

/// helper to create a file with content, making parent directories
fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn compare(template: &Path, client: &Path, ignores: &IgnoreConfig) -> Comparison {
    compare_directories(template, client, ignores, DEFAULT_CONTEXT).unwrap()
}

fn no_ignores() -> IgnoreConfig {
    IgnoreConfig::build(true, "", "")
}

fn default_ignores() -> IgnoreConfig {
    IgnoreConfig::build(false, "", "")
}

#[test]
fn identical_trees_are_congruent() {
    let (_temp_dir, template, client) = setup_trees();
    for root in [&template, &client] {
        create_file(&root.join("a.txt"), "alpha\n");
        create_file(&root.join("sub/b.txt"), "beta\n");
    }

    let comparison = compare(&template, &client, &no_ignores());

    assert!(comparison.identical, "matching trees should be congruent");
    assert!(comparison.diffs.is_empty(), "no diff blocks expected");
}

#[test]
fn differing_file_produces_a_diff_block() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join("a.txt"), "foo\n");
    create_file(&client.join("a.txt"), "bar\n");

    let comparison = compare(&template, &client, &no_ignores());

    assert!(!comparison.identical);
    assert_eq!(comparison.diffs.len(), 1);

    let block = &comparison.diffs[0];
    assert_eq!(block.path, PathBuf::from("a.txt"));

    // from label is the client path, to label is the template path
    let mut lines = block.text.lines();
    assert_eq!(
        lines.next(),
        Some(format!("--- {}", client.join("a.txt").display()).as_str())
    );
    assert_eq!(
        lines.next(),
        Some(format!("+++ {}", template.join("a.txt").display()).as_str())
    );

    // applying the hunk to the client content yields the template content
    assert!(block.text.contains("-bar"));
    assert!(block.text.contains("+foo"));
}

#[test]
fn ignored_file_names_are_not_compared() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join("README.md"), "canonical readme\n");
    create_file(&client.join("README.md"), "drifted readme\n");
    create_file(&template.join("kept.txt"), "same\n");
    create_file(&client.join("kept.txt"), "same\n");

    let comparison = compare(&template, &client, &default_ignores());

    assert!(
        comparison.identical,
        "README.md differs but is ignored by default"
    );
}

#[test]
fn ignored_directories_contribute_no_files() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join(".git/config"), "[core]\n");
    create_file(&client.join(".git/config"), "[remote]\n");
    create_file(&template.join("a.txt"), "same\n");
    create_file(&client.join("a.txt"), "same\n");

    let comparison = compare(&template, &client, &default_ignores());

    assert!(comparison.identical, ".git contents never enter the file sets");
}

#[test]
fn disjoint_trees_are_trivially_congruent() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join("only_template.txt"), "t\n");
    create_file(&client.join("only_client.txt"), "c\n");

    let comparison = compare(&template, &client, &no_ignores());

    assert!(comparison.identical, "no common files is a success");
    assert!(comparison.diffs.is_empty());
}

#[test]
fn extra_ignore_files_extend_the_defaults() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join("generated.rs"), "fn a() {}\n");
    create_file(&client.join("generated.rs"), "fn b() {}\n");

    let ignores = IgnoreConfig::build(false, "generated.rs", "");
    let comparison = compare(&template, &client, &ignores);

    assert!(comparison.identical);
}

#[test]
fn diff_blocks_follow_traversal_order() {
    let (_temp_dir, template, client) = setup_trees();
    for name in ["b.txt", "a.txt", "c.txt"] {
        create_file(&template.join(name), "template\n");
        create_file(&client.join(name), "client\n");
    }

    let comparison = compare(&template, &client, &no_ignores());

    let order: Vec<&Path> = comparison.diffs.iter().map(|d| d.path.as_path()).collect();
    assert_eq!(
        order,
        vec![Path::new("a.txt"), Path::new("b.txt"), Path::new("c.txt")],
        "blocks should come out in sorted path order"
    );
}

#[test]
fn missing_template_directory_is_an_error() {
    let (_temp_dir, _template, client) = setup_trees();
    let absent = client.join("does-not-exist");
    let result = compare_directories(&absent, &client, &no_ignores(), DEFAULT_CONTEXT);
    assert!(result.is_err());
}

#[test]
fn missing_client_directory_is_an_error() {
    let (_temp_dir, template, client) = setup_trees();
    let absent = client.join("does-not-exist");
    let result = compare_directories(&template, &absent, &no_ignores(), DEFAULT_CONTEXT);
    assert!(result.is_err());
}

#[test]
fn unreadable_common_file_is_an_error() {
    let (_temp_dir, template, client) = setup_trees();
    create_file(&template.join("data.bin"), "text\n");
    // invalid utf-8 on the client side must surface, not be skipped
    fs::write(client.join("data.bin"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let result = compare_directories(&template, &client, &no_ignores(), DEFAULT_CONTEXT);
    assert!(result.is_err(), "unreadable content aborts the run");
}
