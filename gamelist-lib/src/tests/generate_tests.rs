use std::fs;

use super::*;

fn rom_dir() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let roms = dir.path().join("gb");
    fs::create_dir_all(roms.join("subfolder")).unwrap();
    for file in ["Tetris (World).gb", "Kirby's Dream Land (USA, Europe).GB", "readme.txt"] {
        fs::write(roms.join(file), b"").unwrap();
    }
    fs::write(roms.join("subfolder/Hidden (USA).gb"), b"").unwrap();
    (dir, roms)
}

#[test]
fn test_one_game_per_file() {
    let (_dir, roms) = rom_dir();
    let gamelist = generate_from_directory(&roms, None).unwrap();

    assert_eq!(gamelist.system, "gb");
    assert_eq!(gamelist.path, roms.join("gamelist.xml"));
    let names: Vec<&str> = gamelist.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Kirby's Dream Land (USA, Europe)", "Tetris (World)", "readme"]
    );
    assert_eq!(gamelist.games[1].path, "./Tetris (World).gb");
}

#[test]
fn test_extension_filter() {
    let (_dir, roms) = rom_dir();
    for ext in ["gb", ".gb", "GB"] {
        let gamelist = generate_from_directory(&roms, Some(ext)).unwrap();
        assert_eq!(gamelist.len(), 2, "extension {ext}");
    }
}

#[test]
fn test_existing_gamelist_is_skipped() {
    let (_dir, roms) = rom_dir();
    fs::write(roms.join("gamelist.xml"), "<gameList/>").unwrap();
    let gamelist = generate_from_directory(&roms, None).unwrap();
    assert!(gamelist.games.iter().all(|g| g.path != "./gamelist.xml"));
}

#[test]
fn test_not_a_directory() {
    let (_dir, roms) = rom_dir();
    let err = generate_from_directory(&roms.join("Tetris (World).gb"), None).unwrap_err();
    assert!(matches!(err, LibError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn test_symlinked_rom_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("zelda.bin"), b"").unwrap();
    let roms = dir.path().join("snes");
    fs::create_dir_all(&roms).unwrap();
    std::os::unix::fs::symlink(store.join("zelda.bin"), roms.join("Zelda.sfc")).unwrap();

    let gamelist = generate_from_directory(&roms, Some("sfc")).unwrap();
    assert_eq!(gamelist.len(), 1);
    assert_eq!(gamelist.games[0].path, "./Zelda.sfc");
    assert_eq!(gamelist.games[0].name, "Zelda");
}
