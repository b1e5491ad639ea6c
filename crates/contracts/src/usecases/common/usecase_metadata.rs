/// Identification of a use case: the endpoint it talks to and how it is shown in the UI
pub trait UseCaseMetadata {
    /// Index of the use case (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "ask_question")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Backend path, relative to the API base (e.g. "/ask")
    fn endpoint() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u101_ask_question"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
