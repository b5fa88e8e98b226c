//! Client side of a plant identification service.
//!
//! The crate has two independent parts:
//!
//! * the upload flow: an image picked or dropped by the user is previewed,
//!   posted to the `/upload-image/` endpoint and the response is mapped onto
//!   a [`ResultsView`] (see [`UploadController`]);
//! * a [`FactCarousel`] that rotates through a fixed set of panels on a timer
//!   or on explicit selection.
//!
//! Neither part knows about a concrete display. They publish their state
//! through [`ResultsDisplay`] and [`CarouselDisplay`].

pub mod carousel;
pub mod classifier;
pub mod dropzone;
pub mod error;
pub mod file;
pub mod response;
pub mod upload;
pub mod view;

pub use carousel::{CarouselDisplay, DEFAULT_ROTATE_INTERVAL, FactCarousel, run_rotation};
pub use classifier::{Classifier, ClientConfig, HttpClassifier};
pub use dropzone::{DropAction, DropEvent, DropZone};
pub use error::{CarouselError, ClassifyError};
pub use file::SelectedFile;
pub use response::{ClassificationResponse, PlantInfo, Prediction};
pub use upload::{UploadController, UploadOutcome, UploadState};
pub use view::{DetailPanel, ResultFields, ResultsDisplay, ResultsView};
