use crate::models::Draft;

/// The "add" dialog: open flag, the draft being typed, and the last error
/// the server reported for it.
#[derive(Debug, Clone, Default)]
pub struct CreateDialog<D: Draft> {
    open: bool,
    draft: D,
    error: Option<String>,
}

impl<D: Draft> CreateDialog<D> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing keeps the draft so reopening resumes it.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Submit stays disabled while busy or while the name is empty.
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && self.draft.is_submittable()
    }

    /// Successful creation: close and start the next draft from scratch.
    pub(crate) fn finish(&mut self) {
        self.open = false;
        self.draft = D::default();
        self.error = None;
    }
}

/// The "edit" dialog. Its content is the controller's selected record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateDialog {
    open: bool,
}

impl UpdateDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fields, ProjectDraft};

    #[test]
    fn test_empty_name_disables_submit() {
        let mut dialog = CreateDialog::<ProjectDraft>::default();
        assert!(!dialog.can_submit(false));

        dialog.draft_mut().set_field(0, "Apollo".to_string());
        assert!(dialog.can_submit(false));
        assert!(!dialog.can_submit(true));
    }

    #[test]
    fn test_close_keeps_draft_and_finish_resets() {
        let mut dialog = CreateDialog::<ProjectDraft>::default();
        dialog.open();
        dialog.draft_mut().name = "Apollo".to_string();
        dialog.set_error("duplicate name".to_string());

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft().name, "Apollo");
        assert_eq!(dialog.error(), Some("duplicate name"));

        dialog.finish();
        assert_eq!(dialog.draft().name, "");
        assert_eq!(dialog.error(), None);
    }
}
