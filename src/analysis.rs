//! Simulated timetable upload and analysis pipeline.
//!
//! There is no real network or inference here: the pipeline is two fixed
//! delays run as an explicit tokio task, reporting stage transitions over a
//! channel the UI polls each frame. Unlike the flow it simulates, the task is
//! cancellable.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::models::timetable::{ClassItem, sample_timetable};

/// Simulated network upload delay.
pub const UPLOAD_DELAY: Duration = Duration::from_millis(1000);
/// Simulated inference delay.
pub const ANALYZE_DELAY: Duration = Duration::from_millis(1500);

/// Stage of the upload/confirmation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Previewing,
    Uploading,
    Analyzing,
    Confirming,
}

impl UploadPhase {
    /// Whether a pipeline task is in flight.
    pub fn is_processing(&self) -> bool {
        matches!(self, UploadPhase::Uploading | UploadPhase::Analyzing)
    }
}

/// Kind of the chosen file, judged from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Other,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" => FileKind::Image,
            "pdf" => FileKind::Pdf,
            _ => FileKind::Other,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, FileKind::Image)
    }
}

/// File chosen for upload, with preview bytes when it is a readable image.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub kind: FileKind,
    /// Raw bytes for the image preview. `None` for non-images and for images
    /// that could not be read; those fall back to the name/size card.
    pub preview: Option<Vec<u8>>,
}

impl SelectedFile {
    /// Inspect `path` and read preview bytes for image files.
    pub fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(&path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("timetable")
            .to_string();
        let kind = FileKind::from_path(&path);
        let preview = if kind.is_image() {
            std::fs::read(&path).ok()
        } else {
            None
        };

        Ok(Self {
            path,
            name,
            size_bytes: metadata.len(),
            kind,
            preview,
        })
    }

    /// Human-readable size ("12.3 KB").
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Progress messages from the pipeline task.
#[derive(Debug, Clone)]
pub enum AnalysisProgress {
    Uploading,
    Analyzing,
    /// The extraction result: the fixed mock class table.
    Completed(Vec<ClassItem>),
}

/// Handle to a running upload/analysis task.
pub struct AnalysisPipeline {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<AnalysisProgress>,
}

impl AnalysisPipeline {
    /// Start the pipeline with the standard simulation delays.
    pub fn spawn(rt: &tokio::runtime::Runtime, file_name: &str) -> Self {
        info!("Starting timetable analysis for {file_name}");
        Self::spawn_with_delays(rt, UPLOAD_DELAY, ANALYZE_DELAY)
    }

    /// Start the pipeline with explicit delays (tests use short ones).
    pub fn spawn_with_delays(rt: &tokio::runtime::Runtime, upload_delay: Duration, analyze_delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = rt.spawn(async move {
            let _ = tx.send(AnalysisProgress::Uploading);
            tokio::time::sleep(upload_delay).await;

            let _ = tx.send(AnalysisProgress::Analyzing);
            tokio::time::sleep(analyze_delay).await;

            let classes = sample_timetable();
            info!("Analysis complete: {} classes extracted", classes.len());
            let _ = tx.send(AnalysisProgress::Completed(classes));
        });

        Self { handle, rx }
    }

    /// Poll for the next progress message without blocking.
    pub fn try_recv(&self) -> Option<AnalysisProgress> {
        self.rx.try_recv().ok()
    }

    /// Abort the task. Any not-yet-delivered result is dropped.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timetable::ClassSelection;

    fn test_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap()
    }

    fn drain(pipeline: &AnalysisPipeline) -> Vec<AnalysisProgress> {
        let mut messages = Vec::new();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while std::time::Instant::now() < deadline {
            match pipeline.rx.recv_timeout(Duration::from_millis(50)) {
                Ok(msg) => {
                    let done = matches!(msg, AnalysisProgress::Completed(_));
                    messages.push(msg);
                    if done {
                        break;
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        messages
    }

    #[test]
    fn test_pipeline_stage_order() {
        let rt = test_runtime();
        let pipeline = AnalysisPipeline::spawn_with_delays(&rt, Duration::from_millis(1), Duration::from_millis(1));

        let messages = drain(&pipeline);
        assert_eq!(messages.len(), 3);
        assert!(matches!(messages[0], AnalysisProgress::Uploading));
        assert!(matches!(messages[1], AnalysisProgress::Analyzing));
        assert!(matches!(messages[2], AnalysisProgress::Completed(_)));
    }

    #[test]
    fn test_pipeline_result_selects_everything() {
        let rt = test_runtime();
        let pipeline = AnalysisPipeline::spawn_with_delays(&rt, Duration::from_millis(1), Duration::from_millis(1));

        let messages = drain(&pipeline);
        let classes = match messages.last() {
            Some(AnalysisProgress::Completed(classes)) => classes,
            other => panic!("expected completion, got {other:?}"),
        };

        let selection = ClassSelection::select_all(classes);
        assert_eq!(selection.len(), 8);
        assert!(classes.iter().all(|c| selection.is_selected(&c.id)));
    }

    #[test]
    fn test_cancel_drops_result() {
        let rt = test_runtime();
        let pipeline = AnalysisPipeline::spawn_with_delays(&rt, Duration::from_secs(30), Duration::from_secs(30));

        pipeline.cancel();

        // The task may have sent Uploading before the abort landed, but it
        // must never complete.
        let messages = drain(&pipeline);
        assert!(!messages.iter().any(|m| matches!(m, AnalysisProgress::Completed(_))));
    }

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("schedule.PNG")), FileKind::Image);
        assert_eq!(FileKind::from_path(Path::new("schedule.pdf")), FileKind::Pdf);
        assert_eq!(FileKind::from_path(Path::new("schedule.txt")), FileKind::Other);
        assert_eq!(FileKind::from_path(Path::new("schedule")), FileKind::Other);
    }
}
