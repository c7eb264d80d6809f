//! Rating-table configuration for the three rating dimensions.
//!
//! The tables are the only tunable surface of the rater. They ship with a
//! stock configuration and can be replaced wholesale or per dimension from a
//! JSON document such as:
//!
//! ```json
//! {
//!   "phrases": [{ "weight": 1, "keywords": [["Green Learning"]] }],
//!   "subjects": [{ "weight": 1, "keywords": ["cs.CV"] }],
//!   "conferences": [{ "weight": 0.5, "keywords": ["CVPR"] }]
//! }
//! ```
//!
//! Dimensions omitted from the document keep their stock table.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::{Deserialize, Serialize};

use crate::table::{Bucket, FlatTable, GroupedTable, RatingTable};
use crate::ConfigError;

/// The three tables consulted when rating a paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTables {
    /// Phrases matched as whole words in the title and abstract; every
    /// matched group adds its weight.
    #[serde(default = "stock_phrases")]
    pub phrases: GroupedTable,
    /// Subject codes matched in the subject list; only the best weight counts.
    #[serde(default = "stock_subjects")]
    pub subjects: FlatTable,
    /// Venue names matched in the comment; only the best weight counts.
    #[serde(default = "stock_conferences")]
    pub conferences: FlatTable,
}

impl Default for RatingTables {
    fn default() -> Self {
        Self {
            phrases: stock_phrases(),
            subjects: stock_subjects(),
            conferences: stock_conferences(),
        }
    }
}

impl RatingTables {
    /// Parse tables from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// a table fails validation.
    ///
    /// # Examples
    /// ```
    /// use paper_rater_scorer::RatingTables;
    ///
    /// let tables = RatingTables::from_json_str(
    ///     r#"{ "conferences": [{ "weight": 2, "keywords": ["CVPR"] }] }"#,
    /// )
    /// .expect("valid tables");
    /// assert_eq!(tables.conferences.keyword_count(), 1);
    /// assert_eq!(tables.subjects, RatingTables::default().subjects);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Read tables from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::ParseFile`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = read_utf8_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render the tables as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError::Serialise`] if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialise { source })
    }
}

fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("configuration path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|&word| word.to_owned()).collect()
}

fn groups(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups.iter().map(|group| keywords(group)).collect()
}

/// Stock phrase table; every matched group adds its weight.
fn stock_phrases() -> GroupedTable {
    RatingTable::from_sorted(vec![
        Bucket {
            weight: -2.0,
            keywords: groups(&[&["Chemistry"], &["Biology"], &["Deep Learning"]]),
        },
        Bucket {
            weight: -1.0,
            keywords: groups(&[&["Social"], &["speech"]]),
        },
        Bucket {
            weight: 1.0,
            keywords: groups(&[&["Green Learning"]]),
        },
    ])
}

/// Stock subject table; see <https://arxiv.org/category_taxonomy>.
///
/// `cs.LG` sits in both buckets, so it is reported twice and rates 1.
fn stock_subjects() -> FlatTable {
    RatingTable::from_sorted(vec![
        Bucket {
            weight: 0.5,
            keywords: keywords(&["cs.AI", "cs.LG"]),
        },
        Bucket {
            weight: 1.0,
            keywords: keywords(&[
                "cs.MA", "cs.CV", "eess.IV", "cs.AR", "cs.GR", "cs.IT", "cs.LG", "cs.MM",
            ]),
        },
    ])
}

/// Stock conference table.
fn stock_conferences() -> FlatTable {
    RatingTable::from_sorted(vec![
        Bucket {
            weight: 0.5,
            keywords: keywords(&[
                "AAAI",
                "ECCV",
                "EMNLP",
                "ICASSP",
                "ICCV",
                "ICLR",
                "Interspeech",
                "NeurIPS",
                "NIPS",
                "WACV",
                "ICML",
                "CVPR",
            ]),
        },
        Bucket {
            weight: 1.0,
            keywords: keywords(&["APSIPA"]),
        },
    ])
}
