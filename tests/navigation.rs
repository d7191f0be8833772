//! Integration tests for following `todo:` links across real files.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use todomd::io::todo_io::load_todo_file;
use todomd::ops::navigation::{
    MAX_NAV_DEPTH, NavEntry, NavError, NavStack, navigate_to_link, resolve_link_target,
};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn resolves_relative_and_absolute_targets() {
    assert_eq!(
        resolve_link_target(Path::new("/a/b/main.md"), "../x.md"),
        PathBuf::from("/a/x.md")
    );
    assert_eq!(
        resolve_link_target(Path::new("/a/b/main.md"), "/abs.md"),
        PathBuf::from("/abs.md")
    );
    assert_eq!(
        resolve_link_target(Path::new("/a/b/main.md"), "./sub/../y.md"),
        PathBuf::from("/a/b/y.md")
    );
}

#[test]
fn follows_link_into_subdirectory_and_back() {
    let tmp = TempDir::new().unwrap();
    let main = write_file(
        tmp.path(),
        "main.md",
        "- [ ] one\n- [ ] todo: projects/garden.md\n",
    );
    write_file(tmp.path(), "projects/garden.md", "- [ ] Plant tomatoes\n");

    let current = load_todo_file(&main).unwrap();
    let mut nav = NavStack::new();
    let target = current.get_todo(1);
    let garden = navigate_to_link(&mut nav, &current, 1, target.link_target().unwrap()).unwrap();

    assert_eq!(garden.path, tmp.path().join("projects").join("garden.md"));
    assert_eq!(garden.get_todo(0).text, "Plant tomatoes");
    assert_eq!(
        nav.entries(),
        &[NavEntry {
            path: main.clone(),
            cursor: 1
        }]
    );

    let back = nav.pop().unwrap();
    assert_eq!(back.path, main);
    assert_eq!(back.cursor, 1);
    assert!(nav.is_empty());
}

#[test]
fn self_link_leaves_stack_untouched() {
    let tmp = TempDir::new().unwrap();
    let main = write_file(tmp.path(), "main.md", "- [ ] todo:./main.md\n");
    let current = load_todo_file(&main).unwrap();
    let mut nav = NavStack::from_paths([tmp.path().join("parent.md")]);

    let err = navigate_to_link(&mut nav, &current, 0, "./main.md").unwrap_err();
    assert!(matches!(err, NavError::SelfLink { .. }));
    assert_eq!(err.to_string(), "cannot link to current file");
    assert_eq!(nav.depth(), 1);
}

#[test]
fn missing_target_leaves_stack_untouched() {
    let tmp = TempDir::new().unwrap();
    let main = write_file(tmp.path(), "main.md", "- [ ] todo:nowhere.md\n");
    let current = load_todo_file(&main).unwrap();
    let mut nav = NavStack::new();

    let err = navigate_to_link(&mut nav, &current, 0, "nowhere.md").unwrap_err();
    assert!(matches!(err, NavError::NotFound { .. }));
    assert!(nav.is_empty());
}

#[test]
fn depth_caps_at_fifty() {
    let tmp = TempDir::new().unwrap();
    let a = write_file(tmp.path(), "a.md", "- [ ] todo:b.md\n");
    write_file(tmp.path(), "b.md", "- [ ] todo:a.md\n");

    let mut nav = NavStack::new();
    let mut current = load_todo_file(&a).unwrap();
    for _ in 0..MAX_NAV_DEPTH {
        let item = current.get_todo(0);
        current = navigate_to_link(&mut nav, &current, 0, item.link_target().unwrap()).unwrap();
    }
    assert_eq!(nav.depth(), 50);

    let item = current.get_todo(0);
    let err = navigate_to_link(&mut nav, &current, 0, item.link_target().unwrap()).unwrap_err();
    assert!(matches!(err, NavError::MaxDepthExceeded { max: 50 }));
    assert_eq!(err.to_string(), "maximum navigation depth (50) reached");
    assert_eq!(nav.depth(), 50);
}

#[test]
fn return_paths_seed_the_stack_oldest_first() {
    let nav = NavStack::from_paths(["/notes/root.md", "/notes/mid.md"]);
    assert_eq!(nav.depth(), 2);
    let entries = nav.entries();
    assert_eq!(entries[0].path, PathBuf::from("/notes/root.md"));
    assert_eq!(entries[1].path, PathBuf::from("/notes/mid.md"));
    assert!(entries.iter().all(|e| e.cursor == 0));
}
