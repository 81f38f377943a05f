use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Entry of the category listing. Fields the board does not use are ignored when decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// A category with its whole clue pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueRecord>,
}

/// Read-only access to a remote quiz service.
///
/// Implementations run on a single-threaded event loop, the returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait QuizSource {
    /// List up to `count` categories
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>>;

    /// Fetch one category with all of its clues
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_ignoring_extra_fields() {
        let json = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at", "clues_count": 5}
        ]"#;

        let listing: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].id, 11531);
        assert_eq!(listing[1].title, "let's \"ch\"at");
    }

    #[test]
    fn decodes_category_detail() {
        let json = r#"{
            "id": 2,
            "title": "baseball",
            "clues_count": 2,
            "clues": [
                {"id": 1, "answer": "Babe Ruth", "question": "The Bambino", "value": 200, "category_id": 2},
                {"id": 2, "answer": "Cy Young", "question": "Award named for him", "value": 400, "category_id": 2}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.title, "baseball");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[1].answer, "Cy Young");
        assert_eq!(detail.clues[0].question, "The Bambino");
    }
}
