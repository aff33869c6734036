use std::path::Path;

use dirbrowse::app::{App, Command, Settings};
use dirbrowse::fs_op::{EditorLauncher, MemFs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct NoEditor;

impl EditorLauncher for NoEditor {
    fn open(&mut self, _editor_command: &str, _path: &Path) {}
}

fn flat_dir(n: usize) -> MemFs {
    (0..n).fold(MemFs::new().dir("/d"), |fs, i| fs.file(format!("/d/f{:02}", i), 1))
}

fn settings(rows: usize) -> Settings {
    Settings {
        max_visible_rows: rows,
        ..Settings::default()
    }
}

#[test]
fn twenty_moves_down_slide_the_window_once() {
    let mut app = App::new("/d", settings(20), flat_dir(25)).unwrap();
    for _ in 0..20 {
        app.apply(Command::MoveDown, &mut NoEditor);
    }
    assert_eq!(app.nav().selected, 20);
    assert_eq!(app.nav().offset, 1);
}

#[test]
fn boundaries_are_noops() {
    let mut app = App::new("/d", settings(4), flat_dir(6)).unwrap();
    app.apply(Command::MoveUp, &mut NoEditor);
    assert_eq!((app.nav().selected, app.nav().offset), (0, 0));

    for _ in 0..5 {
        app.apply(Command::MoveDown, &mut NoEditor);
    }
    let before = app.nav().clone();
    assert_eq!(before.selected, 5);
    app.apply(Command::MoveDown, &mut NoEditor);
    assert_eq!(app.nav(), &before);
}

#[test]
fn listing_of_exactly_visible_rows_never_scrolls() {
    let mut app = App::new("/d", settings(5), flat_dir(5)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let cmd = if rng.random_bool(0.5) {
            Command::MoveDown
        } else {
            Command::MoveUp
        };
        app.apply(cmd, &mut NoEditor);
        assert_eq!(app.nav().offset, 0);
    }
}

#[test]
fn selection_stays_in_window_for_random_walks() {
    let fs = (0..30)
        .fold(MemFs::new().dir("/r/empty").dir("/r/small"), |fs, i| {
            fs.file(format!("/r/big{:02}", i), 1)
        })
        .file("/r/small/a", 1)
        .file("/r/small/b", 1)
        .dir("/r/deep/inner");

    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = rng.random_range(1..8);
        let mut app = App::new("/r", settings(rows), fs.clone()).unwrap();
        for _ in 0..300 {
            let cmd = match rng.random_range(0..10) {
                0..=3 => Command::MoveDown,
                4..=6 => Command::MoveUp,
                7 => Command::Confirm,
                8 => Command::Ascend,
                _ => Command::JumpToPrevious,
            };
            app.apply(cmd, &mut NoEditor);
            let nav = app.nav();
            assert!(
                nav.selection_visible(app.listing().len()),
                "seed {} broke the window: {:?} over {} entries",
                seed,
                nav,
                app.listing().len()
            );
            if !app.is_running() {
                break;
            }
        }
    }
}

#[test]
fn descend_resets_cursor_and_remembers_origin() {
    let fs = MemFs::new()
        .file("/top/readme", 1)
        .file("/top/sub/1", 1)
        .file("/top/sub/2", 1)
        .file("/top/sub/3", 1)
        .file("/top/sub/4", 1)
        .file("/top/sub/5", 1);
    let mut app = App::new("/top", settings(20), fs).unwrap();
    app.apply(Command::MoveDown, &mut NoEditor);
    app.apply(Command::Descend("sub".to_string()), &mut NoEditor);

    assert_eq!(app.current_path(), Path::new("/top/sub"));
    assert_eq!(app.listing().len(), 5);
    assert_eq!((app.nav().selected, app.nav().offset), (0, 0));
    assert_eq!(app.previous_path(), Path::new("/top"));
}

#[test]
fn double_jump_round_trips() {
    // B is /b, A is /b/a: descending from B into A leaves "in A, came from B".
    let fs = MemFs::new().file("/b/a/x", 1).file("/b/y", 1);
    let mut app = App::new("/b", settings(20), fs).unwrap();
    app.apply(Command::Descend("a".to_string()), &mut NoEditor);
    assert_eq!(app.current_path(), Path::new("/b/a"));
    assert_eq!(app.previous_path(), Path::new("/b"));
    let listing_in_a = app.listing().clone();

    app.apply(Command::JumpToPrevious, &mut NoEditor);
    assert_eq!(app.current_path(), Path::new("/b"));
    assert_eq!(app.previous_path(), Path::new("/b/a"));
    assert_eq!((app.nav().selected, app.nav().offset), (0, 0));

    app.apply(Command::JumpToPrevious, &mut NoEditor);
    assert_eq!(app.current_path(), Path::new("/b/a"));
    assert_eq!(app.previous_path(), Path::new("/b"));
    assert_eq!(app.listing(), &listing_in_a);
}
