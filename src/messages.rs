use crate::loader::LoadError;
use std::path::PathBuf;

/// Which of the two query inputs an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Original => "Original query",
            Side::Modified => "Modified query",
        }
    }
}

/// Response messages from background operations
pub enum ResponseMessage {
    QueryLoaded {
        side: Side,
        path: PathBuf,
        result: Result<String, LoadError>,
    },
}
