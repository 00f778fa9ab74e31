use crate::constant::QUERY_FILE_EXTENSIONS;
use crate::messages::{ResponseMessage, Side};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0} is not valid UTF-8 text")]
    NotText(PathBuf),
}

/// Read a query file into a string
pub fn read_query(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| LoadError::NotText(path.to_path_buf()))
}

/// Ask the user for a query file on a worker thread and send back its content.
///
/// Nothing is sent if the dialog is cancelled.
pub fn spawn_open_dialog(side: Side, start_dir: PathBuf, sender: Sender<ResponseMessage>) {
    thread::spawn(move || {
        let dialog = rfd::FileDialog::new()
            .set_title(format!("Open {}", side.label()))
            .add_filter("SQL", QUERY_FILE_EXTENSIONS);
        let dialog = if start_dir.is_dir() {
            dialog.set_directory(&start_dir)
        } else {
            dialog
        };

        let Some(path) = dialog.pick_file() else {
            tracing::debug!("Open dialog for {:?} cancelled", side);
            return;
        };

        let result = read_query(&path);
        if let Err(e) = sender.send(ResponseMessage::QueryLoaded { side, path, result }) {
            tracing::error!("Failed to send loaded query: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_file(name: &str, bytes: &[u8]) -> (PathBuf, PathBuf) {
        let test_dir = std::env::temp_dir().join(format!("test_loader_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join(name);
        fs::write(&path, bytes).unwrap();
        (path, test_dir)
    }

    fn cleanup_test_dir(test_dir: &Path) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    fn reads_query_verbatim() {
        let (path, test_dir) = temp_file("q.sql", b"SELECT 1\r\nFROM t\n");
        assert_eq!(read_query(&path).unwrap(), "SELECT 1\r\nFROM t\n");
        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn binary_file_is_rejected() {
        let (path, test_dir) = temp_file("q.sql", &[0xff, 0xfe, 0x00]);
        assert!(matches!(read_query(&path), Err(LoadError::NotText(_))));
        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing_{}.sql", Uuid::new_v4()));
        assert!(matches!(read_query(&path), Err(LoadError::Io(_))));
    }
}
