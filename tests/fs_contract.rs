use std::fs;
use std::io;
use std::os::unix::fs::symlink;

use tempfile::tempdir;

use phpfuncs::fs_op::{probe_is_file, Collapsed};
use phpfuncs::{
    basename, byte_count_iec, copy, delete, dirname, disk_free_space, file_exists, filesize,
    filetype, is_dir, is_file, is_link, mkdir, FsOpError,
};

#[test]
fn humanizer_matches_reference_strings() {
    assert_eq!(byte_count_iec(0), "0 B");
    assert_eq!(byte_count_iec(1023), "1023 B");
    assert_eq!(byte_count_iec(1024), "1.0 KiB");
    assert_eq!(byte_count_iec(1536), "1.5 KiB");
    assert_eq!(byte_count_iec(1024u64.pow(4)), "1.0 TiB");
}

#[test]
fn copy_regular_file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let src = tmp.path().join("in.dat");
    let dst = tmp.path().join("out.dat");
    let data = b"0123456789".repeat(1000);
    fs::write(&src, &data)?;

    let n = copy(&src, &dst)?;
    assert_eq!(n, data.len() as u64);
    assert_eq!(fs::read(&dst)?, data);
    assert_eq!(filesize(&dst)?, n);
    Ok(())
}

#[test]
fn copy_through_symlink_copies_target() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let src = tmp.path().join("real.txt");
    fs::write(&src, b"linked")?;
    let link = tmp.path().join("link.txt");
    symlink(&src, &link)?;

    let dst = tmp.path().join("copy.txt");
    assert_eq!(copy(&link, &dst)?, 6);
    assert!(!is_link(&dst));
    assert_eq!(fs::read(&dst)?, b"linked");
    Ok(())
}

#[test]
fn copy_directory_fails_without_creating_destination() {
    let tmp = tempdir().unwrap();
    let dst = tmp.path().join("dst");
    let err = copy(tmp.path(), &dst).unwrap_err();
    assert!(matches!(err, FsOpError::NotRegularFile(_)));
    assert!(err.to_string().ends_with("is not a regular file"));
    assert!(!file_exists(&dst));
}

#[test]
fn predicates_never_error() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("missing");
    assert!(!is_file(&missing));
    assert!(!is_dir(&missing));
    assert!(!is_link(&missing));

    let Collapsed { value, fault } = probe_is_file(&missing);
    assert!(!value);
    assert_eq!(fault.map(|e| e.kind()), Some(io::ErrorKind::NotFound));
}

#[test]
fn create_list_and_delete_tree() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("box");
    mkdir(&dir, 0o755)?;
    fs::write(dir.join("one"), b"1")?;
    fs::write(dir.join("two"), b"22")?;

    let listing = dirname(&dir)?;
    let names: Vec<_> = listing.iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, ["one", "two"]);
    assert_eq!(basename(&listing[1].path.to_string_lossy()), "two");

    assert!(delete(&dir).is_err(), "non-empty directory must not be removed");
    delete(dir.join("one"))?;
    delete(dir.join("two"))?;
    delete(&dir)?;
    assert!(!file_exists(&dir));
    Ok(())
}

#[test]
fn sniffing_and_disk_space() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let html = tmp.path().join("index");
    fs::write(&html, b"<!DOCTYPE html>\n<html></html>")?;
    assert_eq!(filetype(&html)?, "text/html; charset=utf-8");

    let pdf = tmp.path().join("doc");
    fs::write(&pdf, b"%PDF-1.4\n%\xE2\xE3\xCF\xD3")?;
    assert_eq!(filetype(&pdf)?, "application/pdf");

    assert!(!disk_free_space(tmp.path()).free.is_empty());
    assert!(disk_free_space(tmp.path().join("nope")).free.is_empty());
    Ok(())
}
