use crate::file::SelectedFile;

/// Input events the drop target reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropEvent {
    DragEnter,
    DragOver,
    DragLeave,
    /// Files released over the drop target.
    Drop(Vec<SelectedFile>),
    /// The drop target was clicked; the hidden picker should open.
    Click,
    /// The hidden file input reported a new selection.
    Change(Vec<SelectedFile>),
}

/// What the caller has to do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropAction {
    None,
    /// Open the native file picker.
    OpenPicker,
    /// Hand these files to the upload flow.
    Submit(Vec<SelectedFile>),
}

/// Drop target with its hover highlight.
#[derive(Clone, Debug, Default)]
pub struct DropZone {
    highlighted: bool,
}

impl DropZone {
    /// A drop target with no drag hovering over it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently hovering over the target.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Updates the highlight and tells the caller what to do next.
    ///
    /// Empty selections never produce a [`DropAction::Submit`].
    pub fn handle(&mut self, event: DropEvent) -> DropAction {
        match event {
            DropEvent::DragEnter | DropEvent::DragOver => {
                self.highlighted = true;
                DropAction::None
            }
            DropEvent::DragLeave => {
                self.highlighted = false;
                DropAction::None
            }
            DropEvent::Drop(files) => {
                self.highlighted = false;
                submit(files)
            }
            DropEvent::Click => DropAction::OpenPicker,
            DropEvent::Change(files) => submit(files),
        }
    }
}

fn submit(files: Vec<SelectedFile>) -> DropAction {
    if files.is_empty() {
        DropAction::None
    } else {
        DropAction::Submit(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_follows_drag() {
        let mut zone = DropZone::new();
        assert!(!zone.is_highlighted());

        assert_eq!(zone.handle(DropEvent::DragEnter), DropAction::None);
        assert!(zone.is_highlighted());
        zone.handle(DropEvent::DragOver);
        assert!(zone.is_highlighted());
        zone.handle(DropEvent::DragLeave);
        assert!(!zone.is_highlighted());
    }

    #[test]
    fn test_drop_clears_highlight_and_submits() {
        let mut zone = DropZone::new();
        zone.handle(DropEvent::DragEnter);

        let files = vec![SelectedFile::new("leaf.png", "image/png", vec![1])];
        assert_eq!(
            zone.handle(DropEvent::Drop(files.clone())),
            DropAction::Submit(files)
        );
        assert!(!zone.is_highlighted());
    }

    #[test]
    fn test_click_and_empty_change() {
        let mut zone = DropZone::new();
        assert_eq!(zone.handle(DropEvent::Click), DropAction::OpenPicker);
        assert_eq!(zone.handle(DropEvent::Change(vec![])), DropAction::None);
        assert_eq!(zone.handle(DropEvent::Drop(vec![])), DropAction::None);
    }
}
