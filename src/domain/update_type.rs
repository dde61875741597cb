use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Update type handled by this crate.
pub const PVCONTROL_UPDATE_TYPE_NAME: &str = "microsoft/pvcontrol";

/// The only update type version this handler understands.
pub const PVCONTROL_UPDATE_TYPE_VERSION: u32 = 1;

/// A declared update type, e.g. `microsoft/pvcontrol:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateType {
    name: String,
    version: u32,
}

impl UpdateType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl FromStr for UpdateType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidUpdateType(s.to_string());

        let (name, version) = s.rsplit_once(':').ok_or_else(invalid)?;
        if name.trim().is_empty() {
            return Err(invalid());
        }
        // `u32::from_str` accepts a leading '+', which the manifest format does not.
        if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let version = version.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { name: name.to_string(), version })
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_name_and_version() {
        let parsed: UpdateType = "microsoft/pvcontrol:1".parse().unwrap();
        assert_eq!(parsed.name(), PVCONTROL_UPDATE_TYPE_NAME);
        assert_eq!(parsed.version(), PVCONTROL_UPDATE_TYPE_VERSION);
        assert_eq!(parsed.to_string(), "microsoft/pvcontrol:1");
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in
            ["", "microsoft/pvcontrol", "microsoft/pvcontrol:", ":1", "a:b", "a:+1", "a:-1", "a:99999999999"]
        {
            assert!(input.parse::<UpdateType>().is_err(), "'{}' should not parse", input);
        }
    }

    #[test]
    fn last_colon_separates_version() {
        let parsed: UpdateType = "vendor:sub/type:12".parse().unwrap();
        assert_eq!(parsed.name(), "vendor:sub/type");
        assert_eq!(parsed.version(), 12);
    }

    proptest! {
        #[test]
        fn any_name_and_version_parse_back(name in "[a-z]{1,8}/[a-z-]{1,12}", version in 0u32..10_000) {
            let parsed: UpdateType = format!("{}:{}", name, version).parse().unwrap();
            prop_assert_eq!(parsed.name(), name.as_str());
            prop_assert_eq!(parsed.version(), version);
        }
    }
}
