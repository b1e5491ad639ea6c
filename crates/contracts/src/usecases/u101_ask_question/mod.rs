pub mod request;
pub mod response;

pub use request::AskRequest;
pub use response::AskResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn display_name() -> &'static str {
        "Students"
    }

    fn endpoint() -> &'static str {
        "/ask"
    }

    fn description() -> &'static str {
        "Ask the teaching assistant a question about the course"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(AskQuestion::full_name(), "u101_ask_question");
        assert_eq!(AskQuestion::endpoint(), "/ask");
    }

    #[test]
    fn test_description_is_set() {
        assert!(!AskQuestion::description().is_empty());
    }
}
