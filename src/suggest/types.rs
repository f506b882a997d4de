//! Wire types for the `skills` query.

use serde::{Deserialize, Serialize};

use super::client::SuggestError;

/// GraphQL document sent for every suggestion request
pub(crate) const SKILLS_QUERY: &str =
    "query skills($example: String) { skills(where: {name: {_like: $example}}) { id name } }";

/// One skill record returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

/// POST body for the `skills` query
#[derive(Debug, Serialize)]
pub(crate) struct SkillsRequest<'a> {
    query: &'static str,
    variables: SkillsVariables<'a>,
}

#[derive(Debug, Serialize)]
struct SkillsVariables<'a> {
    example: &'a str,
}

impl<'a> SkillsRequest<'a> {
    pub(crate) fn new(example: &'a str) -> Self {
        Self {
            query: SKILLS_QUERY,
            variables: SkillsVariables { example },
        }
    }
}

/// Response envelope for the `skills` query
///
/// GraphQL reports failures inside a 200 response, so both `data` and
/// `errors` may be present in any combination.
#[derive(Debug, Deserialize)]
pub(crate) struct SkillsEnvelope {
    data: Option<SkillsData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct SkillsData {
    skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl SkillsEnvelope {
    /// Extract the skill list
    ///
    /// An `errors` array or a missing `data` object makes the whole
    /// response a failure; partial results are not surfaced.
    pub(crate) fn into_skills(self) -> Result<Vec<Skill>, SuggestError> {
        if let Some(first) = self.errors.first() {
            return Err(SuggestError::GraphQl(first.message.clone()));
        }

        match self.data {
            Some(data) => Ok(data.skills),
            None => Err(SuggestError::Parse(
                "response has no data object".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SkillsRequest::new("ja%")).unwrap();

        assert_eq!(body["variables"]["example"], "ja%");
        let query = body["query"].as_str().unwrap();
        assert!(query.starts_with("query skills($example: String)"));
        assert!(query.contains("_like: $example"));
        assert!(query.contains("id name"));
    }

    #[test]
    fn test_envelope_decodes_skills() {
        let json = r#"{"data": {"skills": [
            {"id": "1", "name": "Java"},
            {"id": "2", "name": "JavaScript"}
        ]}}"#;

        let envelope: SkillsEnvelope = serde_json::from_str(json).unwrap();
        let skills = envelope.into_skills().unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].id, "1");
        assert_eq!(skills[0].name, "Java");
        assert_eq!(skills[1].id, "2");
        assert_eq!(skills[1].name, "JavaScript");
    }

    #[test]
    fn test_envelope_decodes_empty_list() {
        let json = r#"{"data": {"skills": []}}"#;

        let envelope: SkillsEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.into_skills().unwrap(), vec![]);
    }

    #[test]
    fn test_envelope_errors_array_is_a_failure() {
        let json = r#"{"data": null, "errors": [{"message": "field 'skills' not found"}]}"#;

        let envelope: SkillsEnvelope = serde_json::from_str(json).unwrap();
        let err = envelope.into_skills().unwrap_err();

        match err {
            SuggestError::GraphQl(message) => {
                assert!(message.contains("field 'skills' not found"));
            }
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_errors_win_over_data() {
        // Hasura can return partial data next to errors; the response
        // still counts as failed
        let json = r#"{
            "data": {"skills": [{"id": "1", "name": "Java"}]},
            "errors": [{"message": "timeout"}]
        }"#;

        let envelope: SkillsEnvelope = serde_json::from_str(json).unwrap();

        assert!(matches!(
            envelope.into_skills(),
            Err(SuggestError::GraphQl(_))
        ));
    }

    #[test]
    fn test_envelope_missing_data_is_a_failure() {
        let json = r#"{}"#;

        let envelope: SkillsEnvelope = serde_json::from_str(json).unwrap();

        assert!(matches!(
            envelope.into_skills(),
            Err(SuggestError::Parse(_))
        ));
    }
}
