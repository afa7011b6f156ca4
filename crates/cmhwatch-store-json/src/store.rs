//! [`JsonFileStore`]: the JSON-file implementation of [`SubmissionStore`].

use std::{
  ffi::OsString,
  future::Future,
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use cmhwatch_core::{
  clock::{Clock, SystemClock},
  submission::{NewSubmission, Submission, SubmissionStore},
};
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Submissions kept as a pretty-printed JSON array in a single file.
///
/// Records already in the file are carried over verbatim on every append,
/// even if they do not match the current [`Submission`] shape.
///
/// Cloning is cheap; clones share the same write lock.
#[derive(Clone)]
pub struct JsonFileStore {
  path:  Arc<PathBuf>,
  clock: Arc<dyn Clock>,
  lock:  Arc<Mutex<()>>,
}

impl JsonFileStore {
  /// A store writing to `path`, timestamped by the system clock. The file
  /// is created on first append.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self::with_clock(path, Arc::new(SystemClock))
  }

  pub fn with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
    Self {
      path: Arc::new(path.into()),
      clock,
      lock: Arc::new(Mutex::new(())),
    }
  }

  pub fn path(&self) -> &Path { &self.path }

  /// Every stored submission, oldest first.
  ///
  /// Records that do not have the [`Submission`] shape (written by older
  /// intake versions, or by hand) stay in the file but are skipped here.
  pub async fn list(&self) -> Result<Vec<Submission>> {
    let _guard = self.lock.lock().await;
    let records = self.read_records().await?;
    let submissions = records
      .into_iter()
      .enumerate()
      .filter_map(|(index, record)| {
        serde_json::from_value::<Submission>(record)
          .inspect_err(|e| {
            tracing::warn!(
              index,
              error = %e,
              path = %self.path.display(),
              "skipping unreadable submission record"
            );
          })
          .ok()
      })
      .collect();
    Ok(submissions)
  }

  async fn append_record(&self, input: NewSubmission) -> Result<Submission> {
    let _guard = self.lock.lock().await;

    let mut records = self.read_records().await?;
    let submission = Submission::new(Uuid::new_v4(), self.clock.now(), input);
    records.push(serde_json::to_value(&submission)?);
    self.write_records(&records).await?;

    tracing::info!(
      id = %submission.id,
      total = records.len(),
      path = %self.path.display(),
      "submission stored"
    );
    Ok(submission)
  }

  /// Missing or blank file → no records.
  async fn read_records(&self) -> Result<Vec<Value>> {
    let raw = match tokio::fs::read_to_string(self.path.as_path()).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(source) => return Err(self.io_error(source)),
    };
    if raw.trim().is_empty() {
      return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(&raw)? {
      Value::Array(records) => Ok(records),
      _ => Err(Error::NotAnArray(self.path.to_path_buf())),
    }
  }

  async fn write_records(&self, records: &[Value]) -> Result<()> {
    let body = serde_json::to_string_pretty(records)?;

    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty())
    {
      tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| self.io_error(e))?;
    }

    let tmp = temp_path(&self.path);
    tokio::fs::write(&tmp, body)
      .await
      .map_err(|e| self.io_error(e))?;
    tokio::fs::rename(&tmp, self.path.as_path())
      .await
      .map_err(|e| self.io_error(e))?;
    Ok(())
  }

  fn io_error(&self, source: std::io::Error) -> Error {
    Error::Io {
      path: self.path.to_path_buf(),
      source,
    }
  }
}

impl SubmissionStore for JsonFileStore {
  type Error = Error;

  fn append(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<Submission>> + Send + '_ {
    self.append_record(input)
  }
}

/// `submissions.json` → `submissions.json.tmp`, in the same directory so the
/// rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
  let mut name = path
    .file_name()
    .map(OsString::from)
    .unwrap_or_else(|| OsString::from("submissions.json"));
  name.push(".tmp");
  path.with_file_name(name)
}
