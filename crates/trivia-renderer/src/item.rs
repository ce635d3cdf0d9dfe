//! Per-item markup.
//!
//! Each block carries a "Show Answer" label and a hidden answer span that
//! share the item's zero-based index: `label{i}` calls `showAnswer(i)`, which
//! the page template implements by revealing `ans{i}`.

use std::fmt::Write;

use trivia_document::Item;

use crate::answer::format_answer;
use crate::escape::TextPolicy;
use crate::multimedia::format_multimedia;

/// Render one item at reveal index `index`.
pub fn render_item(index: usize, item: &Item, policy: TextPolicy) -> String {
    let question = policy.apply(item.question_text());
    let answer = format_answer(&item.answer);
    let answer = policy.apply(&answer);
    let multimedia = if item.multimedia.is_empty() {
        String::new()
    } else {
        format_multimedia(&item.multimedia, policy)
    };

    let mut out = String::with_capacity(256 + question.len() + answer.len() + multimedia.len());
    write!(
        out,
        "\n<div class=\"item\">\n<div class=\"question\">{question}</div>\n{multimedia}\n\
         <div class=\"answer\"><span class=\"label\" id=\"label{index}\" onClick=\"showAnswer({index})\">Show Answer</span>\
         <span style=\"display: none;\" id=\"ans{index}\">{answer}</span></div>\n</div>"
    )
    .unwrap();
    out
}

/// Render items in order, concatenating their blocks.
pub fn render_items(items: &[Item], policy: TextPolicy) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            tracing::debug!(index, "rendering item");
            render_item(index, item, policy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trivia_document::Answer;

    fn literal(question: Option<&str>, answer: &str) -> Item {
        Item {
            question: question.map(str::to_owned),
            answer: Answer::Literal(answer.to_owned()),
            multimedia: Vec::new(),
        }
    }

    #[test]
    fn test_render_item_markup() {
        let html = render_item(0, &literal(Some("2+2?"), "4"), TextPolicy::Verbatim);
        assert_eq!(
            html,
            "\n<div class=\"item\">\n<div class=\"question\">2+2?</div>\n\n\
             <div class=\"answer\"><span class=\"label\" id=\"label0\" onClick=\"showAnswer(0)\">Show Answer</span>\
             <span style=\"display: none;\" id=\"ans0\">4</span></div>\n</div>"
        );
    }

    #[test]
    fn test_missing_question_renders_empty() {
        let html = render_item(3, &literal(None, "yes"), TextPolicy::Verbatim);
        assert!(html.contains("<div class=\"question\"></div>"));
        assert!(html.contains("id=\"label3\" onClick=\"showAnswer(3)\""));
        assert!(html.contains("id=\"ans3\">yes</span>"));
    }

    #[test]
    fn test_reveal_indexes_follow_document_order() {
        let items = vec![
            literal(Some("a"), "1"),
            literal(Some("b"), "2"),
            literal(Some("c"), "3"),
        ];
        let html = render_items(&items, TextPolicy::Verbatim);

        assert_eq!(html.matches("<div class=\"item\">").count(), 3);
        let positions: Vec<usize> = (0..3)
            .map(|i| html.find(&format!("showAnswer({i})")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.find("id=\"ans0\">1<").unwrap() < html.find("id=\"ans1\">2<").unwrap());
    }

    #[test]
    fn test_no_multimedia_container_without_media() {
        let html = render_item(0, &literal(Some("q"), "a"), TextPolicy::Verbatim);
        assert!(!html.contains("mmcontainer"));
    }

    #[test]
    fn test_escaped_policy_escapes_question_and_answer() {
        let html = render_item(0, &literal(Some("1 < 2?"), "<yes>"), TextPolicy::Escaped);
        assert!(html.contains("<div class=\"question\">1 &lt; 2?</div>"));
        assert!(html.contains("id=\"ans0\">&lt;yes&gt;</span>"));
    }

    #[test]
    fn test_empty_items_render_nothing() {
        assert_eq!(render_items(&[], TextPolicy::Verbatim), "");
    }
}
