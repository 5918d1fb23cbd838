//! Relate two tags

use crate::domain::{Tag, TagHelper};
use crate::error::{Result, TagpathError};
use crate::infrastructure::Config;

/// Every relation between a pair of tags
///
/// `None` answers mean the relation is undefined because one side is npos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub left: Tag,
    pub right: Tag,
    pub parent: Option<bool>,
    pub child: Option<bool>,
    pub sibling: Option<bool>,
    pub common: Option<Tag>,
}

impl Relation {
    pub fn between(left: Tag, right: Tag) -> Self {
        Relation {
            parent: TagHelper::is_parent_of(&left, &right),
            child: TagHelper::is_child_of(&left, &right),
            sibling: left.is_sibling(&right),
            common: TagHelper::common_parent(&left, &right),
            left,
            right,
        }
    }
}

/// Service for pairwise tag queries
pub struct RelateService {
    config: Config,
}

impl RelateService {
    pub fn new(config: Config) -> Self {
        RelateService { config }
    }

    pub fn relate(&self, left: &str, right: &str) -> Result<Relation> {
        let relation = Relation::between(self.config.read_tag(left)?, self.config.read_tag(right)?);
        tracing::debug!(
            left = %relation.left,
            right = %relation.right,
            parent = ?relation.parent,
            child = ?relation.child,
            sibling = ?relation.sibling,
            "related tags"
        );
        Ok(relation)
    }

    /// Longest shared prefix, or `NoCommonParent`
    pub fn common_parent(&self, left: &str, right: &str) -> Result<Tag> {
        let left = self.config.read_tag(left)?;
        let right = self.config.read_tag(right)?;

        TagHelper::common_parent(&left, &right)
            .ok_or_else(|| TagpathError::NoCommonParent(left.to_string(), right.to_string()))
    }
}
