//! Lifecycle results reported back to the update agent host.

use std::fmt;

/// Coarse outcome of a lifecycle call.
///
/// Discriminants match the values the host agent uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResultCode {
    Failure = 0,
    Success = 1,
    DownloadSuccess = 500,
    InstallSuccess = 600,
    ApplySuccess = 700,
    CancelSuccess = 800,
    IsInstalledInstalled = 900,
    IsInstalledNotInstalled = 901,
}

impl ResultCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Everything except `Failure` counts as a successful outcome.
    pub fn is_success(self) -> bool {
        self != ResultCode::Failure
    }
}

/// Extended result codes raised by this handler.
///
/// Layout: facility (4 bits) | component (8 bits) | value (20 bits).
pub mod erc {
    const FACILITY_CONTENT_HANDLER: i32 = 0x3;
    const COMPONENT_PVCONTROL: i32 = 0x05;

    const fn make(value: i32) -> i32 {
        (FACILITY_CONTENT_HANDLER << 28) | (COMPONENT_PVCONTROL << 20) | (value & 0xF_FFFF)
    }

    pub const DOWNLOAD_UNKNOWN_UPDATE_VERSION: i32 = make(1);
    pub const DOWNLOAD_WRONG_UPDATE_VERSION: i32 = make(2);
    pub const DOWNLOAD_WRONG_FILECOUNT: i32 = make(3);
    pub const DOWNLOAD_BAD_FILE_ENTITY: i32 = make(4);
    pub const INSTALL_CANNOT_OPEN_WORKFOLDER: i32 = make(5);
    pub const INSTALL_BAD_FILE_ENTITY: i32 = make(6);
    pub const APPLY_CANNOT_READ_INSTALLED_INFO: i32 = make(7);
    pub const DOWNLOAD_TRANSPORT_FAILURE: i32 = make(8);
    pub const DOWNLOAD_HASH_MISMATCH: i32 = make(9);
}

/// Result of a lifecycle call: a result code plus a domain-specific reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AducResult {
    pub result_code: ResultCode,
    pub extended_result_code: i32,
}

impl AducResult {
    pub fn new(result_code: ResultCode) -> Self {
        Self { result_code, extended_result_code: 0 }
    }

    pub fn failure(extended_result_code: i32) -> Self {
        Self { result_code: ResultCode::Failure, extended_result_code }
    }

    pub fn is_success(&self) -> bool {
        self.result_code.is_success()
    }
}

impl From<ResultCode> for AducResult {
    fn from(result_code: ResultCode) -> Self {
        Self::new(result_code)
    }
}

impl fmt::Display for AducResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (erc: {:#x})", self.result_code, self.extended_result_code)
    }
}
