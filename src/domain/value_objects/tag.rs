//! Tag value objects
//!
//! Tags are the attributes a propagation pass writes onto feature nodes.
//! Each tag is three-valued: `Unset` means the pass never touched the node,
//! which is not the same thing as an explicit `False`.

use serde::{Deserialize, Serialize};

/// Attribute written by a propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Feature is part of the active configuration
    Selected,
    /// Feature is mandatory according to the model
    Mandatory,
    /// Feature belongs to the minimal model of the corpus
    Minimal,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Selected, Tag::Mandatory, Tag::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Selected => "selected",
            Tag::Mandatory => "mandatory",
            Tag::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluated state of one tag on one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagValue {
    #[default]
    Unset,
    False,
    True,
}

impl TagValue {
    pub fn is_true(&self) -> bool {
        matches!(self, TagValue::True)
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, TagValue::Unset)
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        if value {
            TagValue::True
        } else {
            TagValue::False
        }
    }
}

/// The three tags of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TagSet {
    #[serde(default, skip_serializing_if = "is_unset")]
    pub selected: TagValue,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub mandatory: TagValue,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub minimal: TagValue,
}

fn is_unset(value: &TagValue) -> bool {
    !value.is_set()
}

impl TagSet {
    pub fn get(&self, tag: Tag) -> TagValue {
        match tag {
            Tag::Selected => self.selected,
            Tag::Mandatory => self.mandatory,
            Tag::Minimal => self.minimal,
        }
    }

    pub fn set(&mut self, tag: Tag, value: TagValue) {
        match tag {
            Tag::Selected => self.selected = value,
            Tag::Mandatory => self.mandatory = value,
            Tag::Minimal => self.minimal = value,
        }
    }

    /// Shorthand for `get(tag).is_true()`
    pub fn has(&self, tag: Tag) -> bool {
        self.get(tag).is_true()
    }

    /// Tags whose value is `True`, in declaration order
    pub fn present(&self) -> Vec<Tag> {
        Tag::ALL.into_iter().filter(|t| self.has(*t)).collect()
    }
}
