use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::store::SessionStore;
use crate::ui::messages::warning;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored session, in insertion order.
    ///
    /// Returns the number of exported rows. An existing target is only
    /// replaced with `force` or after confirmation; declining yields
    /// `AppError::ExportCancelled`.
    pub fn export(
        store: &dyn SessionStore,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let records = store.list_all()?;

        if records.is_empty() {
            warning("No sessions recorded yet: the export only contains the header.");
        }

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let out = BufWriter::new(File::create(file)?);
        match format {
            ExportFormat::Csv => write_csv(out, &records)?,
            ExportFormat::Json => write_json(out, &records)?,
        }

        let label = format.as_str().to_uppercase();
        notify_export_success(&label, records.len(), file);

        if let Err(e) = store.log(
            "export",
            &file.display().to_string(),
            &format!("{} session(s) exported as {}", records.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(records.len())
    }
}
