//! The caller-supplied description of a paper.
//!
//! `PaperQuery` is a plain value: the rating engine never fetches, caches or
//! mutates it. When the fields arrive as loosely typed JSON,
//! [`PaperQuery::from_json_value`] checks every field before anything is
//! rated.

use thiserror::Error;

/// The fields of a paper that a rating engine inspects.
///
/// # Examples
/// ```
/// use paper_rater_core::PaperQuery;
///
/// let paper = PaperQuery::new(
///     "Green Learning for Vision",
///     "cs.CV cs.LG",
///     "We propose a lightweight model.",
///     Some("Accepted to ICASSP".to_owned()),
/// );
/// assert_eq!(paper.title, "Green Learning for Vision");
/// assert_eq!(paper.comment.as_deref(), Some("Accepted to ICASSP"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperQuery {
    /// Paper title.
    pub title: String,
    /// Free text listing subject codes, e.g. `"cs.CV cs.LG"`.
    pub subjects: String,
    /// Paper abstract.
    #[cfg_attr(feature = "serde", serde(rename = "abstract"))]
    pub abstract_text: String,
    /// Venue or reviewer comment, when the source provides one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: Option<String>,
}

/// Errors returned when a paper description fails boundary validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaperQueryError {
    /// A field was missing or had the wrong shape.
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the problem.
        reason: &'static str,
    },
}

impl PaperQuery {
    /// Construct a query from owned or borrowed strings.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subjects: impl Into<String>,
        abstract_text: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subjects: subjects.into(),
            abstract_text: abstract_text.into(),
            comment,
        }
    }

    /// Validate a JSON object and build a query from it.
    ///
    /// `title`, `abstract` and `subjects` are required. `subjects` may be a
    /// string or an array of strings, which is joined with `", "`. `comment`
    /// may be a string, `null` or absent.
    ///
    /// # Errors
    /// Returns [`PaperQueryError::InvalidInput`] naming the first field that
    /// is missing or not a string.
    ///
    /// # Examples
    /// ```
    /// use paper_rater_core::{PaperQuery, PaperQueryError};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "title": "A title",
    ///     "abstract": "An abstract",
    ///     "subjects": ["cs.CV", "cs.LG"],
    ///     "comment": null,
    /// });
    /// let paper = PaperQuery::from_json_value(&value).expect("valid paper");
    /// assert_eq!(paper.subjects, "cs.CV, cs.LG");
    ///
    /// let bad = json!({ "title": 42, "abstract": "", "subjects": "" });
    /// assert!(matches!(
    ///     PaperQuery::from_json_value(&bad),
    ///     Err(PaperQueryError::InvalidInput { field: "title", .. })
    /// ));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, PaperQueryError> {
        let object = value.as_object().ok_or(PaperQueryError::InvalidInput {
            field: "paper",
            reason: "expected a JSON object",
        })?;
        let title = required_string(object, "title")?;
        let abstract_text = required_string(object, "abstract")?;
        let subjects = subjects_field(object)?;
        let comment = optional_string(object, "comment")?;
        Ok(Self {
            title,
            subjects,
            abstract_text,
            comment,
        })
    }
}

#[cfg(feature = "serde")]
type JsonObject = serde_json::Map<String, serde_json::Value>;

#[cfg(feature = "serde")]
fn required_string(object: &JsonObject, field: &'static str) -> Result<String, PaperQueryError> {
    match object.get(field) {
        Some(serde_json::Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(PaperQueryError::InvalidInput {
            field,
            reason: "expected a string",
        }),
        None => Err(PaperQueryError::InvalidInput {
            field,
            reason: "field is required",
        }),
    }
}

#[cfg(feature = "serde")]
pub(crate) fn optional_string(
    object: &JsonObject,
    field: &'static str,
) -> Result<Option<String>, PaperQueryError> {
    match object.get(field) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(PaperQueryError::InvalidInput {
            field,
            reason: "expected a string or null",
        }),
    }
}

#[cfg(feature = "serde")]
fn subjects_field(object: &JsonObject) -> Result<String, PaperQueryError> {
    const FIELD: &str = "subjects";
    let Some(serde_json::Value::Array(items)) = object.get(FIELD) else {
        return required_string(object, FIELD);
    };
    let codes = items
        .iter()
        .map(|item| {
            item.as_str().ok_or(PaperQueryError::InvalidInput {
                field: FIELD,
                reason: "expected every subject to be a string",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.join(", "))
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn accepts_string_subjects_and_missing_comment() {
        let value = json!({"title": "t", "abstract": "a", "subjects": "cs.CV cs.LG"});
        let paper = PaperQuery::from_json_value(&value).expect("valid paper");
        assert_eq!(paper.subjects, "cs.CV cs.LG");
        assert!(paper.comment.is_none());
    }

    #[rstest]
    #[case(json!({"abstract": "a", "subjects": ""}), "title")]
    #[case(json!({"title": "t", "subjects": ""}), "abstract")]
    #[case(json!({"title": "t", "abstract": "a"}), "subjects")]
    #[case(json!({"title": "t", "abstract": ["a"], "subjects": ""}), "abstract")]
    #[case(json!({"title": "t", "abstract": "a", "subjects": 3}), "subjects")]
    #[case(json!({"title": "t", "abstract": "a", "subjects": ["cs.LG", 1]}), "subjects")]
    #[case(json!({"title": "t", "abstract": "a", "subjects": "", "comment": 7}), "comment")]
    #[case(json!(["not", "an", "object"]), "paper")]
    fn rejects_malformed_fields(#[case] value: serde_json::Value, #[case] expected: &str) {
        let err = PaperQuery::from_json_value(&value).expect_err("malformed paper");
        let PaperQueryError::InvalidInput { field, .. } = err;
        assert_eq!(field, expected);
    }

    #[rstest]
    fn deserialises_abstract_under_its_json_name() {
        let paper: PaperQuery = serde_json::from_value(
            json!({"title": "t", "abstract": "body", "subjects": "cs.AI"}),
        )
        .expect("deserialise paper");
        assert_eq!(paper.abstract_text, "body");
        assert_eq!(paper.comment, None);
    }
}
