use std::io::Write;

use cubeturn_core::{Color, ColorScheme, NetStyle};
use pretty_assertions::assert_eq;

use crate::*;

fn write_prefs(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_prefs() {
    let prefs = Preferences::default();
    assert_eq!(prefs.color_scheme, ColorScheme::default());
    assert_eq!(prefs.net, NetStyle::default());
    assert_eq!(prefs.scramble, ScramblePreferences::default());
}

#[test]
fn test_user_file_overrides_defaults() {
    let file = write_prefs(
        "
color_scheme:
  up: yellow
  down: white
net:
  blank_lines: false
",
    );
    let prefs = Preferences::try_load(Some(file.path())).unwrap();
    assert_eq!(prefs.color_scheme.up, Color::Yellow);
    assert_eq!(prefs.color_scheme.down, Color::White);
    assert_eq!(prefs.color_scheme.front, Color::Green);
    assert!(!prefs.net.blank_lines);
    assert_eq!(prefs.net.face_separator, "  ");
    assert_eq!(prefs.scramble.length, 25);
}

#[test]
fn test_bad_prefs() {
    let duplicate = write_prefs("color_scheme:\n  up: red\n");
    Preferences::try_load(Some(duplicate.path())).expect_err("two red faces");
    assert_eq!(
        Preferences::load(Some(duplicate.path())),
        Preferences::default()
    );

    let unknown = write_prefs("color_scheme:\n  up: purple\n");
    Preferences::try_load(Some(unknown.path())).expect_err("unknown color");

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    Preferences::try_load(Some(missing.as_path())).expect_err("missing file");
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = Preferences::default();
    prefs.scramble.length = 12;
    prefs.net.ansi_colors = true;
    prefs.save(&path).unwrap();

    assert_eq!(Preferences::try_load(Some(path.as_path())).unwrap(), prefs);
}
