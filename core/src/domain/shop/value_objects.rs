use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

/// Languages a shop can carry review instructions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
        }
    }

    /// Where the page sends the user once a review has been copied.
    pub fn share_target(&self) -> ShareTarget {
        match self {
            Language::En => ShareTarget {
                platform: "Google Maps".to_string(),
                app_url: None,
                web_url: "https://www.google.com/maps".to_string(),
            },
            Language::Cn => ShareTarget {
                platform: "Xiaohongshu".to_string(),
                app_url: Some("xhs://".to_string()),
                web_url: "https://www.xiaohongshu.com".to_string(),
            },
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "cn" => Ok(Language::Cn),
            _ => Err(CoreError::UnsupportedLanguage),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareTarget {
    pub platform: String,
    /// Deep link tried first; `web_url` is the fallback.
    pub app_url: Option<String>,
    pub web_url: String,
}
