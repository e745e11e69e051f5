use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::PageSession;

/// Writes snapshots of pages whose structure did not match expectations.
///
/// Failures here are logged and swallowed; a missing screenshot must never
/// cost the run its data.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    dir: PathBuf,
}

impl Diagnostics {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Capture the session's current page as `debug_{name}.{ext}`.
    pub fn capture<S: PageSession + ?Sized>(&self, session: &S, name: &str) -> Option<PathBuf> {
        let capture = match session.capture() {
            Ok(capture) => capture,
            Err(e) => {
                warn!("Could not capture page for {}: {}", name, e);
                return None;
            }
        };

        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!("Could not create debug directory {}: {}", self.dir.display(), e);
            return None;
        }

        let file_name = format!("debug_{}.{}", name, capture.extension);
        let path = self.dir.join(file_name);
        match fs::write(&path, &capture.bytes) {
            Ok(()) => {
                info!("Saved page capture to {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not write page capture {}: {}", path.display(), e);
                None
            }
        }
    }
}
