use super::loader::FetchError;
use super::worklist_entry::sample_rows;
use super::WorklistEntry;

/// Rows, loading flag and last error shown by the worklist table.
#[derive(Debug, Clone)]
pub struct WorklistState {
    rows: Vec<WorklistEntry>,
    loading: bool,
    error: Option<String>,
}

impl Default for WorklistState {
    fn default() -> Self {
        Self {
            rows: sample_rows(),
            loading: false,
            error: None,
        }
    }
}

impl WorklistState {
    pub fn rows(&self) -> &[WorklistEntry] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // No guard against an in-flight fetch: whichever response lands last wins.
    pub fn begin_fetch(&mut self) {
        self.set_loading(true);
        self.error = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_rows(&mut self, rows: Vec<WorklistEntry>) {
        self.rows = rows;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<WorklistEntry>, FetchError>) {
        match result {
            Ok(rows) => self.set_rows(rows),
            Err(err) => self.set_error(err.to_string()),
        }
        self.set_loading(false);
    }
}
