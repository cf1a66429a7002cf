mod common;

use common::{debate_xml, subdebate_xml};
use hansard::pages::flatten;
use hansard::types::PageEntry;
use hansard::{Document, HansardError};

/// 'P' for a page, '_' for a placeholder.
fn shape(entries: &[PageEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| if entry.is_placeholder() { '_' } else { 'P' })
        .collect()
}

fn flatten_shape(body: &str) -> String {
    let doc = Document::parse(debate_xml("BILLS", body)).expect("document should parse");
    let pages = flatten(doc.at("debate").unwrap()).expect("debate should flatten");
    shape(&pages)
}

#[test]
fn keeps_position_of_divisions() {
    assert_eq!(flatten_shape("<speech/><division/><speech/>"), "P_P");
}

#[test]
fn collapses_procedural_runs_into_one_slot() {
    assert_eq!(flatten_shape("<para/><para/><motion/><speech/>"), "_P");
    assert_eq!(
        flatten_shape("<motionnospeech/><interjection/><quote/>"),
        "_"
    );
}

#[test]
fn procedural_runs_restart_after_other_content() {
    assert_eq!(flatten_shape("<para/><speech/><para/>"), "_P_");
    assert_eq!(flatten_shape("<para/><division/><para/>"), "___");
    assert_eq!(flatten_shape("<para/><question/><para/>"), "_P_");
}

#[test]
fn info_children_reset_runs_without_a_slot() {
    assert_eq!(flatten_shape("<para/><debateinfo/><para/>"), "__");
}

#[test]
fn answers_never_take_a_slot() {
    assert_eq!(flatten_shape("<question/><answer/>"), "P");
    assert_eq!(flatten_shape("<answer/>"), "");
}

#[test]
fn consecutive_question_exchanges_share_one_page() {
    assert_eq!(
        flatten_shape("<question/><answer/><question/><answer/>"),
        "P"
    );
    assert_eq!(
        flatten_shape("<question/><answer/><speech/><question/><answer/>"),
        "PPP"
    );
}

#[test]
fn question_pages_point_at_the_question_node() {
    let doc = Document::parse(debate_xml("QUESTIONS", "<question/><answer/>"))
        .expect("document should parse");
    let pages = flatten(doc.at("debate").unwrap()).unwrap();
    let page = pages[0].as_page().expect("first entry should be a page");
    assert_eq!(page.node.name(), "question");
    assert!(page.node.same_node(&doc.at("question").unwrap()));
}

#[test]
fn splices_subdebates_in_place() {
    let sub = subdebate_xml(1, "Second Reading", "<speech/><division/>");
    let doc = Document::parse(debate_xml("BILLS", &format!("<speech/>{sub}<speech/>")))
        .expect("document should parse");
    let pages = flatten(doc.at("debate").unwrap()).unwrap();
    assert_eq!(shape(&pages), "PP_P");

    let first = pages[0].as_page().unwrap();
    assert_eq!(first.title, "BILLS");
    assert_eq!(first.subtitle, "");
    let nested = pages[1].as_page().unwrap();
    assert_eq!(nested.title, "BILLS");
    assert_eq!(nested.subtitle, "Second Reading");
    assert_eq!(nested.full_title(), "BILLS; Second Reading");
    let last = pages[3].as_page().unwrap();
    assert_eq!(last.subtitle, "");
}

#[test]
fn subdebates_start_with_fresh_state() {
    // Neither the parent's procedural run nor the subdebate's question leaks across.
    let sub = subdebate_xml(1, "Second Reading", "<para/><question/>");
    let body = format!("<para/>{sub}<question/>");
    assert_eq!(flatten_shape(&body), "__PP");
}

#[test]
fn nested_second_level_subdebates_carry_both_subtitles() {
    let sub2 = subdebate_xml(2, "Consideration in Detail", "<speech/>");
    let sub1 = subdebate_xml(1, "Second Reading", &sub2);
    let doc = Document::parse(debate_xml("BILLS", &sub1)).expect("document should parse");
    let pages = flatten(doc.at("debate").unwrap()).unwrap();
    assert_eq!(pages.len(), 1);
    let page = pages[0].as_page().unwrap();
    assert_eq!(page.subtitle, "Second Reading; Consideration in Detail");
}

#[test]
fn fails_on_unknown_child_tags() {
    let doc = Document::parse(debate_xml("BILLS", "<speech/><petition/>"))
        .expect("document should parse");
    let err = flatten(doc.at("debate").unwrap()).unwrap_err();
    assert!(matches!(err, HansardError::UnexpectedStructure(_)));
    assert!(err.to_string().contains("petition"));
}

#[test]
fn fails_on_unknown_tags_inside_subdebates() {
    let sub = subdebate_xml(1, "Second Reading", "<speech/><table/>");
    let doc = Document::parse(debate_xml("BILLS", &sub)).expect("document should parse");
    assert!(flatten(doc.at("debate").unwrap()).is_err());
}

#[test]
fn fails_on_nesting_deeper_than_two_levels() {
    let sub3 = subdebate_xml(2, "Too Deep", "<speech/>");
    let sub2 = subdebate_xml(2, "Consideration in Detail", &sub3);
    let sub1 = subdebate_xml(1, "Second Reading", &sub2);
    let doc = Document::parse(debate_xml("BILLS", &sub1)).expect("document should parse");
    let err = flatten(doc.at("debate").unwrap()).unwrap_err();
    assert!(matches!(err, HansardError::UnexpectedStructure(_)));
}

#[test]
fn only_debates_can_be_flattened() {
    let doc = Document::parse("<speech/>").expect("document should parse");
    assert!(matches!(
        flatten(doc.at("speech").unwrap()),
        Err(HansardError::UnexpectedStructure(_))
    ));
}
