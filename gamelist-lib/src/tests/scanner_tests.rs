use std::fs;

use super::*;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<gameList/>").unwrap();
}

#[test]
fn test_finds_every_gamelist_with_its_system() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("snes/gamelist.xml"));
    touch(&root.join("megadrive/gamelist.xml"));
    touch(&root.join("nested/deeper/n64/gamelist.xml"));
    touch(&root.join("snes/other.xml"));
    touch(&root.join("psx/Gamelist.xml.bak"));

    let found = find_gamelists(root);
    let systems: Vec<&str> = found.iter().map(|l| l.system.as_str()).collect();
    assert_eq!(systems, vec!["megadrive", "n64", "snes"]);
    assert_eq!(found[2].path, root.join("snes/gamelist.xml"));
}

#[test]
fn test_empty_tree_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_gamelists(dir.path()).is_empty());
}

#[test]
fn test_missing_root_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_gamelists(&dir.path().join("does-not-exist")).is_empty());
}

#[test]
fn test_directory_named_like_marker_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("snes/gamelist.xml")).unwrap();
    assert!(find_gamelists(dir.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_gamelist_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store/snes.xml");
    touch(&store);
    let root = dir.path().join("roms");
    fs::create_dir_all(root.join("snes")).unwrap();
    std::os::unix::fs::symlink(&store, root.join("snes/gamelist.xml")).unwrap();

    let found = find_gamelists(&root);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].system, "snes");
    assert_eq!(found[0].path, root.join("snes/gamelist.xml"));
}
