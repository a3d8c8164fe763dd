use std::os::unix::fs::PermissionsExt;

use kilo::file_io;
use kilo::text::Document;
use tempfile::TempDir;

#[test]
fn load_strips_lf_and_crlf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.txt");
    std::fs::write(&path, "unix\nwindows\r\nlast").unwrap();
    let lines = file_io::load(&path).unwrap();
    assert_eq!(lines, vec![b"unix".to_vec(), b"windows".to_vec(), b"last".to_vec()]);
}

#[test]
fn load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let lines = file_io::load(&dir.path().join("nope.txt")).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn load_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(file_io::load(dir.path()).is_err());
}

#[test]
fn save_creates_file_with_0644() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");
    let written = file_io::save(&path, b"abc\n").unwrap();
    assert_eq!(written, 4);
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    // The umask can only clear bits.
    assert_eq!(mode & 0o777 & !0o644, 0);
    assert_eq!(std::fs::read(&path).unwrap(), b"abc\n");
}

#[test]
fn save_shrinks_longer_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.txt");
    std::fs::write(&path, "a much longer previous content\n").unwrap();
    file_io::save(&path, b"short\n").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"short\n");
}

#[test]
fn document_survives_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    let doc = Document::from_lines(["fn main() {", "\tprintln!();", "", "}"], 4);

    let blob = file_io::serialize(doc.rows());
    file_io::save(&path, &blob).unwrap();
    let reloaded = Document::from_lines(file_io::load(&path).unwrap(), 4);

    assert_eq!(reloaded.len(), 4);
    for (a, b) in doc.rows().iter().zip(reloaded.rows()) {
        assert_eq!(a.raw(), b.raw());
    }
    assert!(!reloaded.is_dirty());
}

#[test]
fn empty_document_saves_as_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    let blob = file_io::serialize(Document::new(4).rows());
    assert_eq!(file_io::save(&path, &blob).unwrap(), 0);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}
