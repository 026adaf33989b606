use crate::config::PayloadFormat;
use serde::{de::Error as _, Deserialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    Named {
        name: String,
    },
    /// `assets` is never empty.
    Tagged {
        tag_name: String,
        assets: Vec<Asset>,
    },
}

impl Release {
    /// Tag name or release title, whichever the variant carries
    pub fn descriptor(&self) -> &str {
        match self {
            Release::Named { name } => name,
            Release::Tagged { tag_name, .. } => tag_name,
        }
    }
}

impl Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub browser_download_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawRelease {
    name: Option<String>,
    tag_name: Option<String>,
    #[serde(default)]
    assets: Vec<Asset>,
}

impl RawRelease {
    pub(super) fn select(self, format: PayloadFormat) -> Result<Release, serde_json::Error> {
        match format {
            PayloadFormat::Name => self.named(),
            PayloadFormat::Asset => self.tagged(),
            PayloadFormat::Auto if self.tag_name.is_some() && !self.assets.is_empty() => {
                self.tagged()
            }
            PayloadFormat::Auto if self.name.is_some() => self.named(),
            PayloadFormat::Auto if self.tag_name.is_some() => self.tagged(),
            PayloadFormat::Auto => Err(serde_json::Error::custom(
                "release has neither `name` nor `tag_name`",
            )),
        }
    }

    fn named(self) -> Result<Release, serde_json::Error> {
        let name = self
            .name
            .ok_or_else(|| serde_json::Error::missing_field("release.name"))?;

        Ok(Release::Named { name })
    }

    fn tagged(self) -> Result<Release, serde_json::Error> {
        let tag_name = self
            .tag_name
            .ok_or_else(|| serde_json::Error::missing_field("release.tag_name"))?;

        if self.assets.is_empty() {
            return Err(serde_json::Error::custom(format!(
                "release {} has no assets",
                tag_name
            )));
        }

        Ok(Release::Tagged {
            tag_name,
            assets: self.assets,
        })
    }
}
