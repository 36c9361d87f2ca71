use crate::GenerateResponse;
use crate::error::{PreviewError, TransportError, UploadError, ValidationError};
use crate::session::{SubmissionState, UploadSession};
use crate::validation::validate_selection;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

/// A user-selected file as seen by the controller.
#[async_trait(?Send)]
pub trait ImageFile {
    fn name(&self) -> String;
    /// Declared media type, possibly empty.
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
    /// Decodes the file locally into a displayable data URL.
    async fn read_data_url(&self) -> Result<String, PreviewError>;
}

#[async_trait(?Send)]
pub trait PosterClient {
    type File: ImageFile;

    /// Uploads `file` as the `image` multipart field and decodes the JSON reply.
    async fn generate(&self, file: &Self::File) -> Result<GenerateResponse, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    pub data_url: String,
}

/// Rendering surface driven by the controller.
pub trait UploadView {
    fn render_preview(&self, preview: Preview);
    fn hide_preview(&self);
    /// Replaces whatever error is currently shown.
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    /// Disables the trigger, swaps its label and shows the busy indicator.
    fn set_submitting(&self, submitting: bool);
    fn render_result(&self, image: &str);
    fn hide_result(&self);
}

struct Inner<V, C: PosterClient> {
    session: RefCell<UploadSession<C::File>>,
    view: V,
    client: C,
}

/// Drives one page's upload workflow. Clones share the same session.
pub struct UploadController<V, C: PosterClient> {
    inner: Rc<Inner<V, C>>,
}

impl<V, C: PosterClient> Clone for UploadController<V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

// Restores the trigger on drop, so no exit path out of `submit` skips it.
// A submission still marked in flight at that point was abandoned (panic or
// dropped future) and is recorded as failed.
struct BusyGuard<'a, V: UploadView, F> {
    view: &'a V,
    session: &'a RefCell<UploadSession<F>>,
}

impl<'a, V: UploadView, F> BusyGuard<'a, V, F> {
    fn engage(view: &'a V, session: &'a RefCell<UploadSession<F>>) -> Self {
        view.set_submitting(true);
        Self { view, session }
    }
}

impl<V: UploadView, F> Drop for BusyGuard<'_, V, F> {
    fn drop(&mut self) {
        if let Ok(mut session) = self.session.try_borrow_mut() {
            if session.state() == SubmissionState::Submitting {
                log::warn!("submission abandoned before a reply was recorded");
                session.fail();
            }
        }
        self.view.set_submitting(false);
    }
}

impl<V: UploadView, C: PosterClient> UploadController<V, C> {
    pub fn new(view: V, client: C) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(UploadSession::new()),
                view,
                client,
            }),
        }
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    pub fn client(&self) -> &C {
        &self.inner.client
    }

    /// Read-only access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&UploadSession<C::File>) -> R) -> R {
        f(&self.inner.session.borrow())
    }

    /// Validates `file` and, if accepted, decodes and shows its preview.
    ///
    /// Validation completes before the first suspension point; only the
    /// preview decode is awaited.
    pub async fn select_file(&self, file: C::File) -> Result<(), ValidationError> {
        let view = &self.inner.view;
        let file_name = file.name();

        if let Err(err) = validate_selection(&file.media_type(), file.size()) {
            log::warn!("rejected {}: {:?}", file_name, err);
            self.inner.session.borrow_mut().reject(err.clone());
            view.hide_preview();
            view.show_error(&err.to_string());
            return Err(err);
        }

        let (file, epoch) = {
            let mut session = self.inner.session.borrow_mut();
            let file = session.accept(file);
            (file, session.epoch())
        };
        view.hide_error();

        match file.read_data_url().await {
            Ok(data_url) => {
                if self.inner.session.borrow().epoch() == epoch {
                    view.render_preview(Preview {
                        file_name,
                        data_url,
                    });
                } else {
                    log::debug!("discarding superseded preview of {}", file_name);
                }
            }
            Err(err) => log::error!("preview of {} failed: {}", file_name, err),
        }

        Ok(())
    }

    /// The picker was dismissed without a file.
    pub fn clear_selection(&self) {
        self.inner.session.borrow_mut().clear_selection();
        self.inner.view.hide_preview();
    }

    /// Uploads the current selection and renders the outcome.
    ///
    /// Returns the data reference of the generated poster.
    pub async fn submit(&self) -> Result<String, UploadError> {
        let view = &self.inner.view;

        let begun = self.inner.session.borrow_mut().begin_submit();
        let file = match begun {
            Ok(file) => file,
            Err(UploadError::Busy) => {
                log::warn!("submit ignored, a request is already in flight");
                return Err(UploadError::Busy);
            }
            Err(err) => {
                view.show_error(&err.to_string());
                return Err(err);
            }
        };

        let _busy = BusyGuard::engage(view, &self.inner.session);
        view.hide_error();
        view.hide_result();

        log::info!("generating poster from {} ({} bytes)", file.name(), file.size());
        let outcome = match self.inner.client.generate(&file).await {
            Ok(response) => response.into_result(),
            Err(err) => {
                log::error!("poster request failed: {}", err);
                Err(UploadError::from(err))
            }
        };

        match outcome {
            Ok(image) => {
                self.inner.session.borrow_mut().complete(image.clone());
                view.render_result(&image);
                Ok(image)
            }
            Err(err) => {
                self.inner.session.borrow_mut().fail();
                log::warn!("poster generation failed: {:?}", err);
                view.show_error(&err.to_string());
                Err(err)
            }
        }
    }
}
