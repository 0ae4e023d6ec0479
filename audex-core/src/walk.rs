use std::path::Path;

use walkdir::WalkDir;

use crate::error::Error;
use crate::session::Session;

impl Session<'_> {
    /// Extract every video found anywhere under `dir`.
    ///
    /// A path that is not a directory is logged and counted as invalid.
    pub fn walk_dir(&mut self, dir: &Path) -> Result<(), Error> {
        if !dir.is_dir() {
            tracing::error!("{} is not a valid directory!", dir.display());
            self.summary.invalid += 1;
            return Ok(());
        }

        let out = self.output_dir();
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Error accessing entry under {}: {}", dir.display(), e);
                    continue;
                }
            };
            // Symlinked files count, symlinked directories are not descended.
            let path = entry.path();
            if entry.file_type().is_dir() || !path.is_file() {
                continue;
            }
            if self.classify(path) {
                self.extract_to(path, &out)?;
            }
        }
        Ok(())
    }
}
