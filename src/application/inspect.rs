//! Inspect a single tag

use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::Config;

/// Everything worth knowing about one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReport {
    pub tag: Tag,
    pub depth: usize,
    pub root: Tag,
    /// Root first, the tag itself last
    pub ancestors: Vec<Tag>,
}

impl TagReport {
    pub fn new(tag: Tag) -> Self {
        TagReport {
            depth: tag.depth(),
            root: tag.root(),
            ancestors: tag.ancestors().collect(),
            tag,
        }
    }
}

/// Service for single-tag queries
pub struct InspectService {
    config: Config,
}

impl InspectService {
    pub fn new(config: Config) -> Self {
        InspectService { config }
    }

    /// Parse `text` according to the config
    pub fn parse(&self, text: &str) -> Result<Tag> {
        let tag = self.config.read_tag(text)?;
        tracing::debug!(input = text, tag = %tag, depth = tag.depth(), "parsed tag");
        Ok(tag)
    }

    pub fn inspect(&self, text: &str) -> Result<TagReport> {
        Ok(TagReport::new(self.parse(text)?))
    }

    /// Ancestor at `level`; npos when out of range
    pub fn parent(&self, text: &str, level: usize) -> Result<Tag> {
        let tag = self.parse(text)?;
        let parent = tag.parent(level);
        if parent.is_npos() {
            tracing::debug!(tag = %tag, level, "ancestor level out of range");
        }
        Ok(parent)
    }

    /// Prefix of `count` segments, clamped to the depth
    pub fn sub_tag(&self, text: &str, count: usize) -> Result<Tag> {
        Ok(self.parse(text)?.sub_tag(count))
    }
}
