pub mod core;
pub mod settings;
pub mod types;

pub use self::core::navigation::NavigationState;
pub use self::core::viewport::{ViewModel, ViewRow};
pub use self::core::App;
pub use settings::Settings;
pub use types::{Command, DisplayClass, ExtensionBucket, FileKind, FileRecord};
