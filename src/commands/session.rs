//! Interface-facing session: routes drop-zone and picker events to the intake and
//! decides, per the configured `SubmitTrigger`, when a selection is submitted.

use tokio::task::JoinHandle;

use crate::api::AnalysisApi;
use crate::error::AppError;
use crate::models::file::{DragEvent, PickerEvent};
use crate::models::settings::SubmitTrigger;
use crate::models::upload::SubmissionReport;
use crate::services::file_intake::{FileIntake, IntakeView};
use crate::services::upload_coordinator::{Notifier, UploadCoordinator};

/// Handle to a submission running in the background.
pub type Submission = JoinHandle<crate::error::Result<SubmissionReport>>;

pub struct Session<A, N> {
    intake: FileIntake,
    coordinator: UploadCoordinator<A, N>,
    trigger: SubmitTrigger,
}

impl<A, N> Session<A, N>
where
    A: AnalysisApi + 'static,
    N: Notifier + 'static,
{
    pub fn new(coordinator: UploadCoordinator<A, N>, trigger: SubmitTrigger) -> Self {
        Self {
            intake: FileIntake::new(),
            coordinator,
            trigger,
        }
    }

    pub fn intake(&self) -> &FileIntake {
        &self.intake
    }

    pub fn view(&self) -> IntakeView {
        self.intake.view()
    }

    pub fn drag_over(&mut self, event: &mut DragEvent) {
        self.intake.on_drag_over(event);
    }

    pub fn drag_leave(&mut self, event: &mut DragEvent) {
        self.intake.on_drag_leave(event);
    }

    /// Handle a drop. Submits only when the trigger is `Always` and a video was accepted.
    pub fn drop_files(&mut self, event: &mut DragEvent) -> Option<Submission> {
        if !self.intake.on_drop(event) {
            return None;
        }
        match self.trigger {
            SubmitTrigger::Always => self.submit_selected(),
            SubmitTrigger::PickerOnly | SubmitTrigger::Explicit => None,
        }
    }

    /// Handle a picker result. Submits unless the trigger is `Explicit`.
    pub fn pick_files(&mut self, event: PickerEvent) -> Option<Submission> {
        self.intake.on_file_picked(event)?;
        match self.trigger {
            SubmitTrigger::PickerOnly | SubmitTrigger::Always => self.submit_selected(),
            SubmitTrigger::Explicit => None,
        }
    }

    /// Explicit upload action for whatever is currently selected.
    pub fn upload_selected(&self) -> crate::error::Result<Submission> {
        self.submit_selected()
            .ok_or_else(|| AppError::Internal("No file selected".into()))
    }

    /// Clear the selection. Submissions already started keep running.
    pub fn clear(&mut self) {
        self.intake.clear();
    }

    fn submit_selected(&self) -> Option<Submission> {
        let file = self.intake.selected()?.clone();
        log::info!("Submitting '{}' ({} bytes)", file.name, file.size);
        Some(self.coordinator.spawn_submit(file))
    }
}
