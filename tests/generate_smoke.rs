//! End-to-end generation tests over real temporary directory trees.

use std::fs;
use std::path::Path;

use folder_index::INDEX_NAME;
use folder_index::generate_cmd;
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::write(path, "").expect("failed to create fixture file");
}

fn read_index(dir: &Path) -> String {
    fs::read_to_string(dir.join(INDEX_NAME)).expect("index file should exist")
}

#[test]
fn writes_index_into_every_directory() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    let b = a.join("b");
    fs::create_dir_all(&b).unwrap();

    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    assert!(temp.path().join(INDEX_NAME).exists(), "root index missing");
    assert!(a.join(INDEX_NAME).exists(), "a/ index missing");
    assert!(b.join(INDEX_NAME).exists(), "a/b/ index missing");

    let root_html = read_index(temp.path());
    assert!(
        root_html.contains(r#"<a href="a/_index.html">A</a>"#),
        "root index should link to the subdirectory index"
    );
}

#[test]
fn lists_only_whitelisted_extensions() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a.html"));
    touch(&temp.path().join("b.pdf"));
    touch(&temp.path().join("c.txt"));
    fs::create_dir(temp.path().join("sub")).unwrap();

    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    let html = read_index(temp.path());
    assert!(html.contains(r#"<a href="a.html">A.html</a>"#));
    assert!(html.contains(r#"<a href="b.pdf">B.pdf</a>"#));
    assert!(html.contains(r#"<a href="sub/_index.html">Sub</a>"#));
    assert!(!html.contains("c.txt"), "unlisted extension must be absent");
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn heading_interpolates_the_directory_path() {
    let temp = TempDir::new().unwrap();
    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    let html = read_index(temp.path());
    assert!(html.contains(&format!(
        "<h1>Content of the directory {}</h1>",
        temp.path().display()
    )));
}

#[test]
fn second_run_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a.html"));
    let sub = temp.path().join("sub");
    fs::create_dir(&sub).unwrap();
    touch(&sub.join("deep.pdf"));

    generate_cmd::run(temp.path().to_path_buf()).unwrap();
    let first_root = read_index(temp.path());
    let first_sub = read_index(&sub);

    generate_cmd::run(temp.path().to_path_buf()).unwrap();
    assert_eq!(first_root, read_index(temp.path()), "root index must be stable");
    assert_eq!(first_sub, read_index(&sub), "sub index must be stable");
}

#[test]
fn own_index_is_excluded_from_the_listing() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a.html"));

    generate_cmd::run(temp.path().to_path_buf()).unwrap();
    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    // _index.html carries a listed extension, so only the reserved-name
    // filter keeps it out of its own listing.
    let html = read_index(temp.path());
    assert!(!html.contains(&format!(r#"<a href="{INDEX_NAME}">"#)));
    assert_eq!(html.matches("<li>").count(), 1, "only a.html is listed");
}

#[test]
fn directory_wins_label_collision() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("foo.html"));
    fs::create_dir(temp.path().join("Foo.html")).unwrap();

    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    let html = read_index(temp.path());
    assert!(
        html.contains(r#"<a href="Foo.html/_index.html">Foo.html</a>"#),
        "label must resolve to the subdirectory index"
    );
    assert!(!html.contains(r#"href="foo.html""#), "file link must be gone");
    assert_eq!(html.matches("<li>").count(), 1, "exactly one entry survives");
}

#[test]
fn empty_directory_gets_a_wellformed_index() {
    let temp = TempDir::new().unwrap();

    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    let html = read_index(temp.path());
    assert_eq!(html.matches("<li>").count(), 0);
    assert!(html.contains("<ul>\n\n</ul>"));
    assert!(html.ends_with("</html>\n"));
}

#[cfg(unix)]
#[test]
fn file_symlinks_are_listed_and_broken_ones_skipped() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("real.html"));
    symlink(temp.path().join("real.html"), temp.path().join("link.html")).unwrap();
    symlink(temp.path().join("gone.html"), temp.path().join("dead.html")).unwrap();

    generate_cmd::run(temp.path().to_path_buf()).unwrap();

    let html = read_index(temp.path());
    assert!(html.contains(r#"<a href="link.html">Link.html</a>"#));
    assert!(!html.contains("dead.html"), "broken symlink must be absent");
}
