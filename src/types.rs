use crate::document::Node;
use crate::error::{HansardError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum House {
    Representatives,
    Senate,
}

impl House {
    /// Letter used for the house in permanent URLs.
    pub fn letter(self) -> &'static str {
        match self {
            House::Representatives => "r",
            House::Senate => "s",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            House::Representatives => "representatives",
            House::Senate => "senate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateKind {
    Debate,
    Subdebate1,
    Subdebate2,
}

impl DebateKind {
    pub fn from_tag(name: &str) -> Result<Self> {
        match name {
            "debate" => Ok(Self::Debate),
            "subdebate.1" => Ok(Self::Subdebate1),
            "subdebate.2" => Ok(Self::Subdebate2),
            other => Err(HansardError::unexpected_tag(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debate => "debate",
            Self::Subdebate1 => "subdebate.1",
            Self::Subdebate2 => "subdebate.2",
        }
    }
}

/// A content node chosen to become a page, with the headings in force where
/// it appeared.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub node: Node<'a>,
    pub title: String,
    pub subtitle: String,
}

impl Page<'_> {
    pub fn full_title(&self) -> String {
        crate::debate::join_titles(&self.title, &self.subtitle)
    }
}

/// One slot in a day's page numbering.
#[derive(Debug, Clone)]
pub enum PageEntry<'a> {
    Page(Page<'a>),
    /// Counted for numbering, never rendered.
    Placeholder,
}

impl<'a> PageEntry<'a> {
    pub fn as_page(&self) -> Option<&Page<'a>> {
        match self {
            PageEntry::Page(page) => Some(page),
            PageEntry::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PageEntry::Placeholder)
    }
}

pub type PageSequence<'a> = Vec<PageEntry<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Page,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based position, placeholders included.
    pub index: usize,
    pub kind: SlotKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

pub fn page_records(entries: &[PageEntry<'_>]) -> Vec<PageRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            PageEntry::Page(page) => PageRecord {
                index: i + 1,
                kind: SlotKind::Page,
                tag: Some(page.node.name().to_string()),
                title: Some(page.title.clone()),
                subtitle: Some(page.subtitle.clone()),
            },
            PageEntry::Placeholder => PageRecord {
                index: i + 1,
                kind: SlotKind::Placeholder,
                tag: None,
                title: None,
                subtitle: None,
            },
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub house: House,
    pub date: String,
    pub permanent_url: String,
    pub in_proof: bool,
    pub slot_count: usize,
    pub page_count: usize,
    pub pages: Vec<PageRecord>,
}
