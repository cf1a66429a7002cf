//! Title and subtitle derivation for debates and sub-debates.

use crate::document::Node;
use crate::error::{HansardError, Result};
use crate::text::strip_markup;
use crate::types::DebateKind;

const SEPARATOR: &str = "; ";

/// Stripped text of the first `<title>` under `node`.
pub fn title_tag_value(node: Node<'_>) -> Result<String> {
    let title = node
        .at("title")
        .ok_or_else(|| HansardError::MissingElement("title".to_string()))?;
    Ok(strip_markup(title.inner_html()))
}

fn enclosing<'a>(node: Node<'a>, expected: DebateKind) -> Result<Node<'a>> {
    node.parent()
        .filter(|parent| parent.name() == expected.as_str())
        .ok_or_else(|| {
            HansardError::UnexpectedStructure(format!(
                "Tag <{}> is not nested in <{}>",
                node.name(),
                expected.as_str()
            ))
        })
}

/// The top-level debate whose title applies to `debate`.
fn titled_debate(debate: Node<'_>) -> Result<Node<'_>> {
    match DebateKind::from_tag(debate.name())? {
        DebateKind::Debate => Ok(debate),
        DebateKind::Subdebate1 => enclosing(debate, DebateKind::Debate),
        DebateKind::Subdebate2 => {
            let parent = enclosing(debate, DebateKind::Subdebate1)?;
            enclosing(parent, DebateKind::Debate)
        }
    }
}

/// Title of the enclosing top-level debate, followed by every cognate title
/// in document order.
pub fn title(debate: Node<'_>) -> Result<String> {
    let top = titled_debate(debate)?;
    let mut titles = vec![title_tag_value(top)?];
    for cognate in top.search("cognateinfo") {
        titles.extend(
            cognate
                .search("title")
                .into_iter()
                .map(|t| strip_markup(t.inner_html())),
        );
    }
    Ok(titles.join(SEPARATOR))
}

pub fn subtitle(debate: Node<'_>) -> Result<String> {
    match DebateKind::from_tag(debate.name())? {
        DebateKind::Debate => Ok(String::new()),
        DebateKind::Subdebate1 => title_tag_value(debate),
        DebateKind::Subdebate2 => {
            let parent = enclosing(debate, DebateKind::Subdebate1)?;
            Ok(format!(
                "{}{SEPARATOR}{}",
                title_tag_value(parent)?,
                title_tag_value(debate)?
            ))
        }
    }
}

pub fn full_title(debate: Node<'_>) -> Result<String> {
    Ok(join_titles(&title(debate)?, &subtitle(debate)?))
}

pub(crate) fn join_titles(title: &str, subtitle: &str) -> String {
    if subtitle.is_empty() {
        title.to_string()
    } else {
        format!("{title}{SEPARATOR}{subtitle}")
    }
}
