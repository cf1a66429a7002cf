use crate::config::HansardConfig;
use crate::document::{Document, Node};
use crate::error::{HansardError, Result};
use crate::logging::{LogLevel, Logger};
use crate::pages::flatten;
use crate::types::{page_records, DaySummary, House, PageEntry, PageSequence};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    SessionHeader,
    Transcript,
    AnswersToQuestions,
}

impl Section {
    fn from_tag(name: &str) -> Result<Self> {
        match name {
            "session.header" => Ok(Self::SessionHeader),
            "chamber.xscript" | "maincomm.xscript" => Ok(Self::Transcript),
            "answers.to.questions" => Ok(Self::AnswersToQuestions),
            other => Err(HansardError::unexpected_tag(other)),
        }
    }
}

/// One sitting day of a house, read from its transcript document.
pub struct HansardDay<'a> {
    document: &'a Document,
    config: &'a HansardConfig,
    logger: &'a dyn Logger,
}

impl<'a> HansardDay<'a> {
    pub fn new(document: &'a Document, config: &'a HansardConfig, logger: &'a dyn Logger) -> Self {
        Self {
            document,
            config,
            logger,
        }
    }

    fn tag_text(&self, name: &str) -> Result<&'a str> {
        self.document
            .at(name)
            .map(|node| node.inner_html())
            .ok_or_else(|| HansardError::MissingElement(name.to_string()))
    }

    fn hansard(&self) -> Result<Node<'a>> {
        self.document
            .at("hansard")
            .ok_or_else(|| HansardError::MissingElement("hansard".to_string()))
    }

    pub fn house(&self) -> Result<House> {
        match self.tag_text("chamber")? {
            "SENATE" => Ok(House::Senate),
            "REPS" => Ok(House::Representatives),
            other => Err(HansardError::UnexpectedStructure(format!(
                "Unexpected value '{other}' for contents of <chamber> tag"
            ))),
        }
    }

    pub fn sitting_date(&self) -> Result<NaiveDate> {
        let value = self.tag_text("date")?.trim();
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| {
            HansardError::InvalidDate {
                value: value.to_string(),
                source,
            }
        })
    }

    pub fn permanent_url(&self) -> Result<String> {
        Ok(format!(
            "{}{}/{}/0000",
            self.config.permanent_url_base,
            self.house()?.letter(),
            self.sitting_date()?.format(DATE_FORMAT)
        ))
    }

    /// Values other than "0" and "1" are logged and read as not in proof.
    pub fn is_in_proof(&self) -> Result<bool> {
        let proof = self.tag_text("proof")?;
        if proof != "1" && proof != "0" {
            self.logger.log(
                LogLevel::Error,
                &format!("Unexpected value '{proof}' inside tag <proof>"),
            );
        }
        Ok(proof == "1")
    }

    /// Page slots for the whole day. The first slot is always the
    /// placeholder for the old "Official Hansard" cover page.
    pub fn pages(&self) -> Result<PageSequence<'a>> {
        let mut pages = vec![PageEntry::Placeholder];

        for section in self.hansard()?.children() {
            match Section::from_tag(section.name())? {
                Section::SessionHeader => {}
                Section::Transcript => {
                    for child in section.children() {
                        match child.name() {
                            "business.start" | "adjournment" => pages.push(PageEntry::Placeholder),
                            "debate" => pages.extend(flatten(child)?),
                            other => return Err(HansardError::unexpected_tag(other)),
                        }
                    }
                }
                Section::AnswersToQuestions => {
                    // Walked for validation only; these never had slots of their own.
                    for child in section.children() {
                        match child.name() {
                            "debate" => {
                                flatten(child)?;
                            }
                            other => return Err(HansardError::unexpected_tag(other)),
                        }
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Top-level debates of the chamber and main committee transcripts.
    pub fn debates(&self) -> Result<Vec<Node<'a>>> {
        let mut debates = Vec::new();
        for section in self.hansard()?.children() {
            if Section::from_tag(section.name())? == Section::Transcript {
                debates.extend(section.children().filter(|c| c.name() == "debate"));
            }
        }
        Ok(debates)
    }

    pub fn summary(&self) -> Result<DaySummary> {
        let pages = self.pages()?;
        let records = page_records(&pages);
        Ok(DaySummary {
            house: self.house()?,
            date: self.sitting_date()?.format(DATE_FORMAT).to_string(),
            permanent_url: self.permanent_url()?,
            in_proof: self.is_in_proof()?,
            slot_count: pages.len(),
            page_count: pages.iter().filter(|entry| !entry.is_placeholder()).count(),
            pages: records,
        })
    }
}
