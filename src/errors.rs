use crate::fs_op::ListError;

/// Render a `ListError` as the short, single-line indicator shown in the
/// header after a failed directory change.
pub fn render_list_error(err: &ListError) -> String {
    let name = err
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| err.path().display().to_string());
    match err {
        ListError::NotAccessible { source, .. } => match source.kind() {
            std::io::ErrorKind::PermissionDenied => format!("{}: permission denied", name),
            std::io::ErrorKind::NotFound => format!("{}: not found", name),
            _ => format!("{}: cannot read", name),
        },
        ListError::NotADirectory(_) => format!("{}: not a directory", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn renders_short_messages() {
        let e = ListError::NotAccessible {
            path: PathBuf::from("/root/secret"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(render_list_error(&e), "secret: permission denied");

        let e = ListError::NotADirectory(PathBuf::from("/etc/passwd"));
        assert_eq!(render_list_error(&e), "passwd: not a directory");

        let e = ListError::NotAccessible {
            path: PathBuf::from("/"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(render_list_error(&e), "/: cannot read");
    }
}
