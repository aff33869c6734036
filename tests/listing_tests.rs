use std::path::Path;

use assert_fs::prelude::*;
use dirbrowse::app::{App, Command, DisplayClass, ExtensionBucket, Settings};
use dirbrowse::fs_op::{DirectoryLister, EditorLauncher, ListOptions, LocalFs, MemFs};

struct NoEditor;

impl EditorLauncher for NoEditor {
    fn open(&mut self, _editor_command: &str, _path: &Path) {}
}

#[test]
fn directories_first_preserves_input_order() {
    // 22 files with the directories b, a, z interleaved.
    let mut fs = MemFs::new().dir("/s");
    for i in 0..22 {
        if i == 3 {
            fs = fs.dir("/s/b");
        }
        if i == 10 {
            fs = fs.dir("/s/a");
        }
        fs = fs.file(format!("/s/file{:02}", i), i);
    }
    fs = fs.dir("/s/z");

    let settings = Settings {
        max_visible_rows: 20,
        directories_first: true,
        ..Settings::default()
    };
    let app = App::new("/s", settings, fs).unwrap();
    let names: Vec<&str> = app.listing().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 25);
    assert_eq!(&names[..3], &["b", "a", "z"]);
    let expected: Vec<String> = (0..22).map(|i| format!("file{:02}", i)).collect();
    assert_eq!(&names[3..], expected.iter().map(String::as_str).collect::<Vec<_>>().as_slice());

    let vm = app.view_model();
    assert_eq!(vm.rows.len(), 20);
    assert_eq!(vm.header, "0/5  /s");
}

#[test]
fn directories_last_when_disabled() {
    let fs = MemFs::new().dir("/s/d1").file("/s/f", 1).dir("/s/d2");
    let settings = Settings {
        directories_first: false,
        ..Settings::default()
    };
    let app = App::new("/s", settings, fs).unwrap();
    let names: Vec<&str> = app.listing().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["f", "d1", "d2"]);
}

#[test]
fn extension_colors_can_be_switched_off() {
    let fs = MemFs::new().file("/s/main.cpp", 1);
    let on = DirectoryLister::new(fs.clone(), ListOptions::default());
    let off = DirectoryLister::new(
        fs,
        ListOptions {
            extension_colors: false,
            ..ListOptions::default()
        },
    );
    assert_eq!(
        on.list(Path::new("/s")).unwrap()[0].display_class,
        DisplayClass::Extension(ExtensionBucket::CSource)
    );
    assert_eq!(off.list(Path::new("/s")).unwrap()[0].display_class, DisplayClass::Default);
}

#[test]
fn descend_on_real_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("top.txt").write_str("t").unwrap();
    for i in 0..5 {
        temp.child(format!("sub/entry{}.txt", i)).write_str("x").unwrap();
    }
    let root = temp.path().to_path_buf();

    let mut app = App::new(root.clone(), Settings::default(), LocalFs::new()).unwrap();
    app.apply(Command::MoveDown, &mut NoEditor);
    app.apply(Command::Descend("sub".to_string()), &mut NoEditor);

    assert_eq!(app.current_path(), root.join("sub"));
    assert_eq!(app.listing().len(), 5);
    assert_eq!((app.nav().selected, app.nav().offset), (0, 0));
    assert_eq!(app.previous_path(), root.as_path());

    app.apply(Command::Ascend, &mut NoEditor);
    assert_eq!(app.current_path(), root.as_path());
    assert_eq!(app.previous_path(), root.join("sub"));

    temp.close().unwrap();
}
