use crate::error::{UploadError, ValidationError};
use std::rc::Rc;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient per-page upload state. Owns the current selection, the last
/// validation error and the outcome of the latest submission.
#[derive(Debug)]
pub struct UploadSession<F> {
    selected: Option<Rc<F>>,
    validation_error: Option<ValidationError>,
    state: SubmissionState,
    result_image: Option<String>,
    epoch: u64,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selected: None,
            validation_error: None,
            state: SubmissionState::Idle,
            result_image: None,
            epoch: 0,
        }
    }
}

impl<F> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Rc<F>> {
        self.selected.as_ref()
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn result_image(&self) -> Option<&str> {
        self.result_image.as_deref()
    }

    /// Bumped on every selection change; lets late preview decodes detect
    /// that they were superseded.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn accept(&mut self, file: F) -> Rc<F> {
        let file = Rc::new(file);
        self.selected = Some(Rc::clone(&file));
        self.validation_error = None;
        self.epoch += 1;
        file
    }

    pub fn reject(&mut self, err: ValidationError) {
        self.selected = None;
        self.validation_error = Some(err);
        self.epoch += 1;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.validation_error = None;
        self.epoch += 1;
    }

    /// Moves to `Submitting` and hands out the file to upload.
    pub fn begin_submit(&mut self) -> Result<Rc<F>, UploadError> {
        if self.state == SubmissionState::Submitting {
            return Err(UploadError::Busy);
        }
        let file = self
            .selected
            .clone()
            .ok_or(ValidationError::NoFileSelected)?;

        log::debug!("submission {} -> {}", self.state, SubmissionState::Submitting);
        self.state = SubmissionState::Submitting;
        self.result_image = None;
        Ok(file)
    }

    pub fn complete(&mut self, image: String) -> bool {
        if self.state != SubmissionState::Submitting {
            log::warn!("ignoring result while {}", self.state);
            return false;
        }
        self.state = SubmissionState::Succeeded;
        self.result_image = Some(image);
        true
    }

    pub fn fail(&mut self) -> bool {
        if self.state != SubmissionState::Submitting {
            log::warn!("ignoring failure while {}", self.state);
            return false;
        }
        self.state = SubmissionState::Failed;
        self.result_image = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_idle() {
        let session = UploadSession::<&str>::new();
        assert!(session.selected().is_none());
        assert!(session.validation_error().is_none());
        assert_eq!(session.state(), SubmissionState::Idle);
        assert!(session.result_image().is_none());
    }

    #[test]
    fn reject_clears_selection_and_accept_clears_error() {
        let mut session = UploadSession::new();
        session.accept("a.png");
        session.reject(ValidationError::TooLarge(u64::MAX));
        assert!(session.selected().is_none());
        assert_eq!(session.validation_error(), Some(&ValidationError::TooLarge(u64::MAX)));

        session.accept("b.png");
        assert_eq!(session.selected().map(|f| **f), Some("b.png"));
        assert!(session.validation_error().is_none());
    }

    #[test]
    fn every_selection_change_bumps_epoch() {
        let mut session = UploadSession::new();
        let start = session.epoch();
        session.accept("a.png");
        session.reject(ValidationError::UnsupportedType("text/plain".into()));
        session.clear_selection();
        assert_eq!(session.epoch(), start + 3);
    }

    #[test]
    fn begin_submit_without_file_keeps_state() {
        let mut session = UploadSession::<&str>::new();
        assert_eq!(
            session.begin_submit().unwrap_err(),
            UploadError::Validation(ValidationError::NoFileSelected)
        );
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn submission_passes_through_submitting() {
        let mut session = UploadSession::new();
        session.accept("a.png");

        assert!(!session.complete("data:x".into()));
        assert_eq!(session.state(), SubmissionState::Idle);

        session.begin_submit().unwrap();
        assert_eq!(session.state(), SubmissionState::Submitting);
        assert_eq!(session.begin_submit().unwrap_err(), UploadError::Busy);

        assert!(session.complete("data:x".into()));
        assert_eq!(session.state(), SubmissionState::Succeeded);
        assert_eq!(session.result_image(), Some("data:x"));

        // Re-entrant from a terminal state; the previous result is dropped.
        session.begin_submit().unwrap();
        assert!(session.result_image().is_none());
        assert!(session.fail());
        assert_eq!(session.state(), SubmissionState::Failed);
        assert!(!session.fail());
    }

    #[test]
    fn selection_does_not_touch_submission_state() {
        let mut session = UploadSession::new();
        session.accept("a.png");
        session.begin_submit().unwrap();
        session.reject(ValidationError::UnsupportedType(String::new()));
        assert_eq!(session.state(), SubmissionState::Submitting);
    }
}
