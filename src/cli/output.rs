//! Output formatting utilities

use crate::application::{Relation, TagReport};
use crate::domain::Tag;

/// Render a tag, spelling out the sentinel
pub fn format_tag(tag: &Tag) -> String {
    if tag.is_npos() {
        "npos".to_string()
    } else {
        tag.to_string()
    }
}

/// Render a relation answer
pub fn format_answer(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "true",
        Some(false) => "false",
        None => "undefined",
    }
}

pub fn format_report(report: &TagReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("tag:    {}\n", format_tag(&report.tag)));
    output.push_str(&format!("depth:  {}\n", report.depth));
    output.push_str(&format!("root:   {}\n", format_tag(&report.root)));

    for (level, ancestor) in report.ancestors.iter().enumerate() {
        output.push_str(&format!("  [{}] {}\n", level, ancestor));
    }

    output
}

pub fn format_relation(relation: &Relation) -> String {
    let common = match &relation.common {
        Some(tag) => format_tag(tag),
        None => "none".to_string(),
    };

    format!(
        "parent:  {}\nchild:   {}\nsibling: {}\ncommon:  {}\n",
        format_answer(relation.parent),
        format_answer(relation.child),
        format_answer(relation.sibling),
        common
    )
}

/// One token per line; empty tokens show as `""`
pub fn format_tokens(tokens: &[&str]) -> String {
    let mut output = String::new();
    for token in tokens {
        if token.is_empty() {
            output.push_str("\"\"\n");
        } else {
            output.push_str(&format!("{}\n", token));
        }
    }
    output
}
