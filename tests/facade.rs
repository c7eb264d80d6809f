//! Rating through the facade crate with its default features.
#![expect(clippy::expect_used, reason = "tests should fail fast on invalid fixtures")]
#![expect(clippy::float_cmp, reason = "ratings are compared against exact literals")]

use paper_rater::{PaperRecord, PaperScorer, Rater, RatingTables};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn rates_a_crawled_record_with_stock_tables() {
    let rater = Rater::with_defaults().expect("stock tables compile");
    let record = PaperRecord::from_json_value(&json!({
        "title": "Deep Learning for Speech",
        "abstract": "We study biology applications",
        "subjects": "cs.LG",
        "comment": "NeurIPS",
        "paper id": "2401.00001",
    }))
    .expect("valid record");

    let result = rater.rate_paper(&record.query);
    let scored = record.into_scored(result);

    assert_eq!(scored.rating, -3.5);
    assert_eq!(scored.paper_id.as_deref(), Some("2401.00001"));
}

#[rstest]
fn table_files_beyond_the_weight_limit_are_rejected() {
    let json = r#"{ "subjects": [{ "weight": 2e6, "keywords": ["cs.CV"] }] }"#;
    let err = RatingTables::from_json_str(json).expect_err("oversized weight");
    assert!(err.to_string().contains("parse rating tables"));
}
