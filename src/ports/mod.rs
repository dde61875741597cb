mod content_handler;
mod downloader;
mod process_launcher;
mod workflow_data;

pub use content_handler::ContentHandler;
pub use downloader::Downloader;
pub use process_launcher::ProcessLauncher;
pub use workflow_data::WorkflowData;
