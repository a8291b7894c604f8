//! Upload widget state: selection, preview, and request lifecycle

use crate::constants::MAX_FILE_SIZE;
use crate::error::SelectError;
use crate::types::{Phase, Preview, SelectedFile};
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct UploadAnalyzer {
    selected: Option<SelectedFile>,
    preview: Option<Preview>,
    preview_generation: u64,
    phase: Phase,
    select_error: Option<SelectError>,
}

/// Reject anything that is not an image or is over the upload limit.
pub fn validate(mime: &str, size: u64) -> Result<(), SelectError> {
    if !mime.starts_with("image/") {
        return Err(SelectError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    if size > MAX_FILE_SIZE {
        return Err(SelectError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

impl UploadAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `file` the current selection.
    ///
    /// Returns the preview generation the caller should decode for. A rejected
    /// file leaves the previous selection untouched.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<u64, SelectError> {
        if let Err(e) = validate(&file.mime, file.size) {
            warn!(name = %file.name, error = %e, "File rejected");
            self.select_error = Some(e.clone());
            return Err(e);
        }

        info!(name = %file.name, mime = %file.mime, size = file.size, "File selected");
        self.selected = Some(file);
        self.select_error = None;
        self.preview = None;
        self.preview_generation += 1;
        Ok(self.preview_generation)
    }

    /// Record a failure that happened before a `SelectedFile` could be built.
    pub fn reject(&mut self, error: SelectError) {
        warn!(error = %error, "File rejected");
        self.select_error = Some(error);
    }

    /// Store a decoded preview. Stale generations are dropped.
    pub fn accept_preview(&mut self, generation: u64, image: egui::ColorImage) -> bool {
        if generation != self.preview_generation || self.selected.is_none() {
            debug!(generation, current = self.preview_generation, "Dropping stale preview");
            return false;
        }
        self.preview = Some(Preview { generation, image });
        true
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    /// Enter the loading phase and hand back the file to upload, or `None` if
    /// there is nothing to submit.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if !self.can_submit() {
            return None;
        }
        self.select_error = None;
        self.phase = Phase::Loading;
        self.selected.clone()
    }

    /// Leave the loading phase with `phase` (a `Done` or `Failed`).
    pub fn finish(&mut self, phase: Phase) {
        if !self.is_loading() {
            warn!("Ignoring analysis result with no request in flight");
            return;
        }
        self.phase = phase;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn select_error(&self) -> Option<&SelectError> {
        self.select_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{demo_result, resolve};
    use crate::error::AnalysisError;
    use crate::types::AnalysisOutcome;

    fn image(name: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0; size])
    }

    fn pixel() -> egui::ColorImage {
        egui::ColorImage::new([1, 1], egui::Color32::WHITE)
    }

    #[test]
    fn non_image_never_enables_submit() {
        let mut analyzer = UploadAnalyzer::new();
        let file = SelectedFile::new("notes.txt", "text/plain", b"hello".to_vec());
        assert!(matches!(
            analyzer.select_file(file),
            Err(SelectError::NotAnImage { .. })
        ));
        assert!(!analyzer.can_submit());
        assert!(analyzer.select_error().is_some());
        assert!(analyzer.begin_submit().is_none());
    }

    #[test]
    fn oversized_image_never_enables_submit() {
        let mut analyzer = UploadAnalyzer::new();
        let result = analyzer.select_file(image("big.png", MAX_FILE_SIZE as usize + 1));
        assert!(matches!(result, Err(SelectError::TooLarge { .. })));
        assert!(!analyzer.can_submit());
    }

    #[test]
    fn limit_is_inclusive() {
        assert!(validate("image/jpeg", MAX_FILE_SIZE).is_ok());
        assert!(validate("image/jpeg", MAX_FILE_SIZE + 1).is_err());
    }

    #[test]
    fn rejected_file_keeps_previous_selection() {
        let mut analyzer = UploadAnalyzer::new();
        analyzer.select_file(image("good.png", 10)).unwrap();
        let _ = analyzer.select_file(SelectedFile::new("x.pdf", "application/pdf", vec![1]));
        assert_eq!(analyzer.selected().map(|f| f.name.as_str()), Some("good.png"));
        assert!(analyzer.can_submit());
    }

    #[test]
    fn valid_image_enables_submit_and_clears_error() {
        let mut analyzer = UploadAnalyzer::new();
        let _ = analyzer.select_file(SelectedFile::new("x.txt", "text/plain", vec![1]));
        analyzer.select_file(image("photo.png", 10)).unwrap();
        assert!(analyzer.can_submit());
        assert!(analyzer.select_error().is_none());
    }

    #[test]
    fn new_selection_replaces_preview() {
        let mut analyzer = UploadAnalyzer::new();
        let first = analyzer.select_file(image("one.png", 10)).unwrap();
        assert!(analyzer.accept_preview(first, pixel()));
        assert_eq!(analyzer.preview().map(|p| p.generation), Some(first));

        let second = analyzer.select_file(image("two.png", 10)).unwrap();
        assert!(analyzer.preview().is_none());

        // A late decode of the first file must not show up.
        assert!(!analyzer.accept_preview(first, pixel()));
        assert!(analyzer.preview().is_none());

        assert!(analyzer.accept_preview(second, pixel()));
        assert_eq!(analyzer.preview().map(|p| p.generation), Some(second));
    }

    #[test]
    fn submit_without_file_is_noop() {
        let mut analyzer = UploadAnalyzer::new();
        assert!(analyzer.begin_submit().is_none());
        assert_eq!(analyzer.phase(), &Phase::Idle);
    }

    #[test]
    fn loading_blocks_resubmission() {
        let mut analyzer = UploadAnalyzer::new();
        analyzer.select_file(image("photo.png", 10)).unwrap();
        let file = analyzer.begin_submit().unwrap();
        assert_eq!(file.name, "photo.png");
        assert!(analyzer.is_loading());
        assert!(analyzer.begin_submit().is_none());

        analyzer.finish(resolve(Err(AnalysisError::Status(500)), true));
        assert!(!analyzer.is_loading());
        assert!(analyzer.can_submit());
        match analyzer.phase() {
            Phase::Done(AnalysisOutcome::Demo { result, .. }) => {
                assert_eq!(result, &demo_result())
            }
            other => panic!("expected demo outcome, got {other:?}"),
        }
    }

    #[test]
    fn submit_clears_previous_result() {
        let mut analyzer = UploadAnalyzer::new();
        analyzer.select_file(image("photo.png", 10)).unwrap();
        analyzer.begin_submit();
        analyzer.finish(Phase::Failed(AnalysisError::Status(502)));
        assert!(matches!(analyzer.phase(), Phase::Failed(_)));

        analyzer.begin_submit();
        assert_eq!(analyzer.phase(), &Phase::Loading);
    }

    #[test]
    fn finish_without_request_is_ignored() {
        let mut analyzer = UploadAnalyzer::new();
        analyzer.finish(Phase::Failed(AnalysisError::Status(500)));
        assert_eq!(analyzer.phase(), &Phase::Idle);
    }
}
