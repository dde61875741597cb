pub mod child_process;
pub mod http_downloader;
pub mod state_files_json;

pub use child_process::ChildProcessLauncher;
pub use http_downloader::{HttpDownloader, RetryPolicy};
pub use state_files_json::JsonStateFiles;
