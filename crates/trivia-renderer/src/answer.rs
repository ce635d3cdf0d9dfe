//! Answer formatting.

use trivia_document::Answer;

/// Format an answer as display text.
///
/// List variants are joined with `", "` behind a prefix naming how many of
/// them are required. Literal answers are returned unchanged.
pub fn format_answer(answer: &Answer) -> String {
    match answer {
        Answer::Literal(text) => text.clone(),
        Answer::RegexMatch(pattern) => format!("Matches regular expression {pattern}"),
        Answer::Choice(label) => format!("Answer choice {label}"),
        Answer::Conjunction(items) => format!("(all of) {}", items.join(", ")),
        Answer::Disjunction(items) => format!("(any of) {}", items.join(", ")),
        Answer::ThresholdOf { n, of } => format!("({n} of) {}", of.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_literal_has_no_prefix() {
        assert_eq!(format_answer(&Answer::Literal("4".to_owned())), "4");
    }

    #[test]
    fn test_regex() {
        assert_eq!(
            format_answer(&Answer::RegexMatch("^cat.*".to_owned())),
            "Matches regular expression ^cat.*"
        );
    }

    #[test]
    fn test_choice() {
        assert_eq!(
            format_answer(&Answer::Choice("B".to_owned())),
            "Answer choice B"
        );
    }

    #[test]
    fn test_all_of() {
        assert_eq!(
            format_answer(&Answer::Conjunction(strings(&["x", "y"]))),
            "(all of) x, y"
        );
    }

    #[test]
    fn test_any_of() {
        assert_eq!(
            format_answer(&Answer::Disjunction(strings(&["x", "y"]))),
            "(any of) x, y"
        );
    }

    #[test]
    fn test_n_of() {
        assert_eq!(
            format_answer(&Answer::ThresholdOf {
                n: 2,
                of: strings(&["x", "y", "z"])
            }),
            "(2 of) x, y, z"
        );
    }

    #[test]
    fn test_single_element_list_has_no_separator() {
        assert_eq!(
            format_answer(&Answer::Disjunction(strings(&["only"]))),
            "(any of) only"
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        assert_eq!(
            format_answer(&Answer::Choice("<b>C</b>".to_owned())),
            "Answer choice <b>C</b>"
        );
    }
}
