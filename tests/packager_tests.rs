use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use addon_packager::packager::{Error, Packager, Settings, SettingsBuilder};

const ADDON_NAME: &str = "TCPServer_For_Softimage.xsiaddon";

fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

struct Fixture {
    _td: tempfile::TempDir,
    release_dir: PathBuf,
    changelog: PathBuf,
    addon_root: PathBuf,
}

fn fixture() -> Fixture {
    let td = tempdir().unwrap();
    let root = td.path();

    let release_dir = root.join("releases").join("repository");
    let changelog = root.join("releases").join("Changes.html");
    let addon_root = root.join("Addons");

    write_file(&changelog, b"<html><body>1.0.0</body></html>");

    let addon = addon_root.join(ADDON_NAME);
    write_file(
        &addon.join("Application").join("Plugins").join("TCPServer.py"),
        b"print('server')\n",
    );
    write_file(
        &addon.join("Application").join("Plugins").join("TCPServer_Types.py"),
        b"TYPES = {}\n",
    );
    write_file(&addon.join("ReadMe.txt"), b"TCP server addon\n");

    Fixture {
        _td: td,
        release_dir,
        changelog,
        addon_root,
    }
}

fn settings(fx: &Fixture) -> Settings {
    SettingsBuilder::new()
        .release_dir(&fx.release_dir)
        .changelog_path(&fx.changelog)
        .addon_root(&fx.addon_root)
        .addon_name(ADDON_NAME)
        .build()
        .unwrap()
}

fn release_entries(release_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(release_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn run_replaces_stale_release_contents_with_changelog_and_archive() {
    let fx = fixture();

    // Stale artifacts from a previous release
    write_file(&fx.release_dir.join("old.zip"), b"stale");
    write_file(&fx.release_dir.join("leftover").join("notes.txt"), b"stale");

    let artifact = Packager::new(settings(&fx)).package().await.unwrap();

    assert_eq!(
        release_entries(&fx.release_dir),
        vec![
            "Changes.html".to_string(),
            "TCPServer_For_Softimage.zip".to_string()
        ]
    );
    assert_eq!(
        fs::read(fx.release_dir.join("Changes.html")).unwrap(),
        fs::read(&fx.changelog).unwrap()
    );
    assert_eq!(
        artifact.path,
        fx.release_dir.join("TCPServer_For_Softimage.zip")
    );
    assert!(artifact.size > 0);
    assert_eq!(artifact.checksum.len(), 64);
}

#[tokio::test]
async fn archive_preserves_relative_paths_under_the_addon_folder() {
    let fx = fixture();

    let artifact = Packager::new(settings(&fx)).package().await.unwrap();

    let file = fs::File::open(&artifact.path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let mut entry = archive
        .by_name("TCPServer_For_Softimage.xsiaddon/Application/Plugins/TCPServer.py")
        .unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "print('server')\n");
    drop(entry);

    let names: Vec<&str> = archive.file_names().collect();
    assert!(names
        .iter()
        .any(|n| *n == "TCPServer_For_Softimage.xsiaddon/ReadMe.txt"));
    assert!(names
        .iter()
        .all(|n| n.starts_with("TCPServer_For_Softimage.xsiaddon")));
}

#[tokio::test]
async fn repeat_runs_produce_byte_identical_archives() {
    let fx = fixture();
    let packager = Packager::new(settings(&fx));

    let first = packager.package().await.unwrap();
    let first_bytes = fs::read(&first.path).unwrap();

    let second = packager.package().await.unwrap();
    let second_bytes = fs::read(&second.path).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.checksum, second.checksum);
}

#[tokio::test]
async fn missing_release_dir_is_created_by_the_clean_step() {
    let fx = fixture();
    assert!(!fx.release_dir.exists());

    Packager::new(settings(&fx)).package().await.unwrap();

    assert_eq!(
        release_entries(&fx.release_dir),
        vec![
            "Changes.html".to_string(),
            "TCPServer_For_Softimage.zip".to_string()
        ]
    );
}

#[tokio::test]
async fn missing_changelog_aborts_before_any_archive_is_written() {
    let fx = fixture();
    fs::remove_file(&fx.changelog).unwrap();

    let err = Packager::new(settings(&fx)).package().await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!fx
        .release_dir
        .join("TCPServer_For_Softimage.zip")
        .exists());
}

#[tokio::test]
async fn missing_addon_folder_leaves_no_archive_behind() {
    let fx = fixture();
    fs::remove_dir_all(fx.addon_root.join(ADDON_NAME)).unwrap();

    let err = Packager::new(settings(&fx)).package().await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!fx
        .release_dir
        .join("TCPServer_For_Softimage.zip")
        .exists());
    // The changelog was staged before the failure; no rollback is performed.
    assert_eq!(
        release_entries(&fx.release_dir),
        vec!["Changes.html".to_string()]
    );
}

#[tokio::test]
async fn changelog_copy_overwrites_a_same_named_stale_file() {
    let fx = fixture();
    write_file(&fx.release_dir.join("Changes.html"), b"outdated");

    Packager::new(settings(&fx)).package().await.unwrap();

    assert_eq!(
        fs::read(fx.release_dir.join("Changes.html")).unwrap(),
        fs::read(&fx.changelog).unwrap()
    );
}
