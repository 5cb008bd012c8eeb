use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::SessionStore;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store's backing file to `dest_file`, optionally as a `.zip`.
    ///
    /// Returns the path actually written.
    pub fn backup(
        store: &dyn SessionStore,
        dest_file: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = store.location();

        // 1️⃣ Check store file exists
        if !src.exists() {
            return Err(AppError::StorageUnavailable(format!(
                "store file not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest_file.with_extension("zip")
        } else {
            dest_file.to_path_buf()
        };

        // 3️⃣ Ask before overwriting
        ensure_writable(&final_path, force)?;

        // 4️⃣ Copy or compress
        if compress {
            compress_backup(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Internal log
        if let Err(e) = store.log(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

/// Write `src` as the single entry of a deflated zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "work_time".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
