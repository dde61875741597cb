mod fake_downloader;
mod recording_launcher;

pub use fake_downloader::{DownloadCall, FakeDownloader};
pub use recording_launcher::{LaunchCall, RecordingLauncher};
