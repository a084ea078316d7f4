//! Publishing destinations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PLATFORM_TOKEN_ENV_SUFFIX;
use crate::LinkedGptError;

/// A supported publishing destination.
///
/// Closed set: adding a platform means adding a variant here, and every
/// dispatcher that matches on it stops compiling until it handles the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    #[serde(alias = "linkedin", alias = "LINKEDIN")]
    LinkedIn,
    #[serde(alias = "twitter", alias = "TWITTER")]
    Twitter,
    #[serde(alias = "facebook", alias = "FACEBOOK")]
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::Facebook];

    /// Tag as stored in `scheduled_posts.platforms` and sent by the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
        }
    }

    /// Environment variable holding this platform's publish token.
    pub fn token_env_var(&self) -> String {
        format!("{}{}", self.as_str().to_uppercase(), PLATFORM_TOKEN_ENV_SUFFIX)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LinkedGptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(Self::LinkedIn),
            "twitter" => Ok(Self::Twitter),
            "facebook" => Ok(Self::Facebook),
            _ => Err(LinkedGptError::UnsupportedPlatform(s.to_string())),
        }
    }
}
