use crate::domain::AducResult;
use crate::ports::WorkflowData;

/// Lifecycle contract an update agent host drives for one update type.
pub trait ContentHandler {
    fn download(&self, workflow: &dyn WorkflowData) -> AducResult;

    fn install(&self, workflow: &dyn WorkflowData) -> AducResult;

    fn apply(&self, workflow: &dyn WorkflowData) -> AducResult;

    fn cancel(&self, workflow: &dyn WorkflowData) -> AducResult;

    fn is_installed(&self, workflow: &dyn WorkflowData) -> AducResult;
}
