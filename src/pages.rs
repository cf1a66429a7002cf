//! Flattening of a debate tree into page slots.
//!
//! Every child of a debate either becomes a page, reserves a placeholder
//! slot, is skipped, or is recursed into. The slot count must line up with
//! the legacy page numbering, so an unknown tag stops the walk outright.

use crate::debate::{join_titles, subtitle, title};
use crate::document::Node;
use crate::error::{HansardError, Result};
use crate::types::{Page, PageEntry, PageSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Info,
    Speech,
    Division,
    Question,
    Answer,
    Procedural,
    Subdebate,
}

impl ChildKind {
    fn from_tag(name: &str) -> Result<Self> {
        match name {
            "debateinfo" | "subdebateinfo" => Ok(Self::Info),
            "speech" => Ok(Self::Speech),
            "division" => Ok(Self::Division),
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            "motionnospeech" | "para" | "motion" | "interjection" | "quote" => {
                Ok(Self::Procedural)
            }
            "subdebate.1" | "subdebate.2" => Ok(Self::Subdebate),
            other => Err(HansardError::unexpected_tag(other)),
        }
    }
}

/// Scan state for the direct children of one debate. Each debate, nested or
/// not, starts from a fresh value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TraversalState {
    /// The previous child was a question or answer.
    seen_question: bool,
    /// The previous child was procedural text.
    in_procedural_run: bool,
}

impl TraversalState {
    fn after_question() -> Self {
        Self {
            seen_question: true,
            in_procedural_run: false,
        }
    }

    fn after_procedural() -> Self {
        Self {
            seen_question: false,
            in_procedural_run: true,
        }
    }
}

/// Flatten `debate` (a `debate`, `subdebate.1` or `subdebate.2`) into its
/// page slots, sub-debates spliced in where they occur.
pub fn flatten(debate: Node<'_>) -> Result<PageSequence<'_>> {
    let mut pages = Vec::new();
    flatten_into(debate, &mut pages)?;
    Ok(pages)
}

fn flatten_into<'a>(debate: Node<'a>, pages: &mut PageSequence<'a>) -> Result<()> {
    let title = title(debate)?;
    let subtitle = subtitle(debate)?;
    let mut state = TraversalState::default();

    for child in debate.children() {
        state = match ChildKind::from_tag(child.name())? {
            ChildKind::Info => TraversalState::default(),
            ChildKind::Speech => {
                push_page(pages, child, &title, &subtitle);
                TraversalState::default()
            }
            ChildKind::Division => {
                tracing::trace!("[Hansard] placeholder: <division>");
                pages.push(PageEntry::Placeholder);
                TraversalState::default()
            }
            ChildKind::Question => {
                if !state.seen_question {
                    push_page(pages, child, &title, &subtitle);
                }
                TraversalState::after_question()
            }
            // Answers always follow their question, which already holds the slot.
            ChildKind::Answer => TraversalState::after_question(),
            ChildKind::Procedural => {
                if !state.in_procedural_run {
                    tracing::trace!("[Hansard] placeholder: procedural text <{}>", child.name());
                    pages.push(PageEntry::Placeholder);
                }
                TraversalState::after_procedural()
            }
            ChildKind::Subdebate => {
                flatten_into(child, pages)?;
                TraversalState::default()
            }
        };
    }

    Ok(())
}

fn push_page<'a>(pages: &mut PageSequence<'a>, node: Node<'a>, title: &str, subtitle: &str) {
    tracing::trace!(
        "[Hansard] page: <{}> > {}",
        node.name(),
        join_titles(title, subtitle)
    );
    pages.push(PageEntry::Page(Page {
        node,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }));
}
