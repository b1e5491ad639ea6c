use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let req = AskRequest {
            question: "What is a monad?".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"question":"What is a monad?"}"#
        );
    }
}
