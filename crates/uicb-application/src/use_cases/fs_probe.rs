//! Existence checks that follow symlinks and treat any error as "absent"

use std::path::Path;

use tokio::fs;

pub(crate) async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|meta| meta.is_dir())
}

pub(crate) async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|meta| meta.is_file())
}
