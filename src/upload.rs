use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    classifier::Classifier,
    error::ClassifyError,
    file::{SelectedFile, first_image},
    response::ClassificationResponse,
    view::{ResultFields, ResultsDisplay, ResultsView},
};

/// Represents the current state of the upload flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    /// No request is outstanding.
    Idle,
    /// The latest upload is waiting for its classification.
    Analyzing,
}

impl UploadState {
    /// Returns the state as a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Analyzing => "analyzing",
        }
    }
}

/// How a single upload ended.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The response was rendered into the view.
    Classified(ClassificationResponse),
    /// The failure was rendered into the view.
    Failed(ClassifyError),
    /// A newer upload started before this one finished; its result was dropped.
    Superseded { seq: u64 },
}

struct UploadInner<D> {
    state: UploadState,
    view: ResultsView,
    display: D,
    latest_seq: u64,
}

/// Drives the upload-and-classify flow for one results region.
///
/// Each accepted upload is tagged with a sequence number. Previews and
/// classification results belonging to anything but the latest upload are
/// discarded, so a slow response can never overwrite a newer one.
pub struct UploadController<C: Classifier, D: ResultsDisplay> {
    classifier: C,
    inner: Arc<Mutex<UploadInner<D>>>,
}

impl<C: Classifier, D: ResultsDisplay> UploadController<C, D> {
    /// Creates a controller with a hidden, empty results region.
    pub fn new(classifier: C, display: D) -> Self {
        Self {
            classifier,
            inner: Arc::new(Mutex::new(UploadInner {
                state: UploadState::Idle,
                view: ResultsView::default(),
                display,
                latest_seq: 0,
            })),
        }
    }

    /// Returns the current state of the flow.
    pub fn state(&self) -> UploadState {
        self.lock().state
    }

    /// Returns a snapshot of the results view.
    pub fn view(&self) -> ResultsView {
        self.lock().view.clone()
    }

    /// Handles a file selection from the picker or a drop.
    ///
    /// Only the first file is considered; when it is not an image nothing
    /// happens and `None` is returned. Otherwise the preview and the
    /// classification run concurrently and each renders as soon as it is
    /// ready.
    pub async fn upload(&self, files: &[SelectedFile]) -> Option<UploadOutcome> {
        let Some(file) = first_image(files) else {
            log::debug!("Ignoring selection without a leading image file");
            return None;
        };

        let seq = self.begin();

        let preview = async { self.apply_preview(seq, file.to_data_url()) };
        let classify = async {
            let result = self.classifier.classify(file).await;
            self.apply_result(seq, result)
        };

        let (_, outcome) = tokio::join!(preview, classify);
        Some(outcome)
    }

    fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.latest_seq += 1;
        inner.state = UploadState::Analyzing;
        inner.view.fields = ResultFields::analyzing();

        let UploadInner { view, display, .. } = &mut *inner;
        display.render(view);

        log::debug!("Scheduled upload #{}", inner.latest_seq);
        inner.latest_seq
    }

    fn apply_preview(&self, seq: u64, data_url: String) -> bool {
        let mut inner = self.lock();
        if seq != inner.latest_seq {
            log::debug!("Dropping preview of superseded upload #{seq}");
            return false;
        }

        let UploadInner { view, display, .. } = &mut *inner;
        view.preview = Some(data_url);
        view.visible = true;
        display.render(view);
        display.reveal();
        true
    }

    fn apply_result(
        &self,
        seq: u64,
        result: Result<ClassificationResponse, ClassifyError>,
    ) -> UploadOutcome {
        let mut inner = self.lock();
        if seq != inner.latest_seq {
            log::debug!("Dropping result of superseded upload #{seq}");
            return UploadOutcome::Superseded { seq };
        }

        let UploadInner {
            state,
            view,
            display,
            ..
        } = &mut *inner;
        *state = UploadState::Idle;

        let outcome = match result {
            Ok(response) => {
                view.fields = ResultFields::from_response(&response);
                UploadOutcome::Classified(response)
            }
            Err(err) => {
                log::error!("Upload #{seq} failed: {err}");
                view.fields = ResultFields::from_error(&err);
                UploadOutcome::Failed(err)
            }
        };
        display.render(view);
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, UploadInner<D>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
