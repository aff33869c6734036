use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::settings::Settings;
use super::types::{Command, FileKind, FileRecord};
use crate::errors;
use crate::fs_op::{DirectoryLister, DirectoryListing, EditorLauncher, FileSystem, ListError, LocalFs};

// submodules live in `src/app/core/`
pub mod navigation;
pub mod viewport;

use self::navigation::NavigationState;
use self::viewport::ViewModel;

/// Browser controller: owns the navigation state and the current listing
/// and is the only thing that mutates them.
pub struct App<F = LocalFs> {
    nav: NavigationState,
    listing: DirectoryListing,
    settings: Settings,
    lister: DirectoryLister<F>,
    /// Indicator for the last failed command, cleared by the next command.
    status: Option<String>,
    /// File handed to the editor by `Confirm`, if any.
    opened: Option<PathBuf>,
}

impl<F: FileSystem> App<F> {
    /// Create a browser rooted at `start`. The initial listing must succeed.
    pub fn new(start: impl Into<PathBuf>, settings: Settings, fs: F) -> Result<Self, ListError> {
        let start = start.into();
        let lister = DirectoryLister::new(fs, settings.list_options());
        let listing = lister.list(&start)?;
        Ok(App {
            nav: NavigationState::new(start, settings.visible_rows()),
            listing,
            settings,
            lister,
            status: None,
            opened: None,
        })
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn listing(&self) -> &DirectoryListing {
        &self.listing
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_path(&self) -> &Path {
        &self.nav.current_path
    }

    pub fn previous_path(&self) -> &Path {
        &self.nav.previous_path
    }

    pub fn is_running(&self) -> bool {
        self.nav.running
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn opened_file(&self) -> Option<&Path> {
        self.opened.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&FileRecord> {
        self.listing.get(self.nav.selected)
    }

    /// Apply one command. Failures are recovered here: state is left as it
    /// was and a short indicator is stored for the next frame.
    pub fn apply(&mut self, command: Command, launcher: &mut dyn EditorLauncher) {
        debug!("command {:?} in {}", command, self.nav.current_path.display());
        self.status = None;
        match command {
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::Ascend => {
                let res = self.ascend();
                self.record(res);
            }
            Command::Descend(name) => {
                let res = self.descend(&name);
                self.record(res);
            }
            Command::JumpToPrevious => {
                let res = self.jump_to_previous();
                self.record(res);
            }
            Command::Confirm => self.confirm(launcher),
            Command::Exit => self.nav.stop(),
        }
    }

    pub fn move_up(&mut self) {
        self.nav.move_up();
    }

    pub fn move_down(&mut self) {
        self.nav.move_down(self.listing.len());
    }

    /// Go to the parent directory. A no-op at the filesystem root.
    pub fn ascend(&mut self) -> Result<(), ListError> {
        let parent = match self.nav.current_path.parent() {
            Some(p) => p.to_path_buf(),
            None => {
                debug!("already at root, not ascending");
                return Ok(());
            }
        };
        self.change_dir(parent)
    }

    /// Enter subdirectory `name` of the current directory. Only directory
    /// entries of the current listing qualify, so hidden names, `..` and
    /// nested paths are refused.
    pub fn descend(&mut self, name: &str) -> Result<(), ListError> {
        let target = self.nav.current_path.join(name);
        match self.listing.find(name) {
            Some(entry) if entry.is_dir() => self.change_dir(target),
            Some(_) => Err(ListError::NotADirectory(target)),
            None => Err(ListError::NotAccessible {
                path: target,
                source: io::ErrorKind::NotFound.into(),
            }),
        }
    }

    /// Go back to the directory left last; the current one becomes the new
    /// previous directory, so two jumps in a row return to the start.
    pub fn jump_to_previous(&mut self) -> Result<(), ListError> {
        let target = self.nav.previous_path.clone();
        self.change_dir(target)
    }

    /// Act on the selected entry: enter directories, open everything else in
    /// the editor. Opening a file ends the browsing loop.
    pub fn confirm(&mut self, launcher: &mut dyn EditorLauncher) {
        let (name, kind) = match self.selected_entry() {
            Some(e) => (e.name.clone(), e.kind),
            None => return,
        };
        match kind {
            FileKind::Directory => {
                let res = self.descend(&name);
                self.record(res);
            }
            FileKind::Symlink => {
                let target = self.nav.current_path.join(&name);
                match self.change_dir(target.clone()) {
                    Ok(()) => {}
                    Err(ListError::NotADirectory(_)) => self.open_file(target, launcher),
                    Err(e) => self.record(Err(e)),
                }
            }
            FileKind::RegularFile | FileKind::Other => {
                let path = self.nav.current_path.join(&name);
                self.open_file(path, launcher);
            }
        }
    }

    pub fn exit(&mut self) {
        self.nav.stop();
    }

    /// Project the current state for rendering.
    pub fn view_model(&self) -> ViewModel {
        let mut vm = viewport::project(&self.nav, &self.listing);
        vm.status = self.status.clone();
        vm
    }

    // The listing is read before anything is touched, so a failure leaves
    // path, listing and cursor exactly as they were.
    fn change_dir(&mut self, target: PathBuf) -> Result<(), ListError> {
        let listing = self.lister.list(&target)?;
        debug!("entering {} ({} entries)", target.display(), listing.len());
        self.listing = listing;
        self.nav.enter_directory(target);
        Ok(())
    }

    fn open_file(&mut self, path: PathBuf, launcher: &mut dyn EditorLauncher) {
        let editor = self.settings.editor_command.trim();
        if editor.is_empty() {
            warn!("no editor configured, not opening {}", path.display());
            self.status = Some("no editor configured".to_string());
            return;
        }
        launcher.open(editor, &path);
        self.opened = Some(path);
        self.nav.stop();
    }

    fn record(&mut self, res: Result<(), ListError>) {
        if let Err(e) = res {
            warn!("directory change failed: {}", e);
            self.status = Some(errors::render_list_error(&e));
        }
    }
}
