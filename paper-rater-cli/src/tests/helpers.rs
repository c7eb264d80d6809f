//! Test helpers for writing paper and table files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Table file that rates only the `cs.CV` subject.
pub(super) const VISION_TABLES: &str = r#"{
    "phrases": [],
    "subjects": [{ "weight": 2, "keywords": ["cs.CV"] }],
    "conferences": []
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory for papers and table files.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Three crawled papers: one on-topic, one penalised, one unmatched.
pub(super) fn sample_papers() -> String {
    serde_json::json!([
        {
            "paper id": "2401.00001",
            "abstract url": "https://arxiv.org/abs/2401.00001",
            "title": "Deep Learning for Speech",
            "abstract": "We study biology applications",
            "subjects": "cs.LG",
            "comment": "NeurIPS"
        },
        {
            "paper id": "2401.00002",
            "title": "Green Learning for Image Compression",
            "abstract": "A lightweight codec.",
            "subjects": ["eess.IV", "cs.CV"],
            "comment": "Accepted by APSIPA"
        },
        {
            "paper id": "2401.00003",
            "title": "Robotics path planning",
            "abstract": "novel algorithm",
            "subjects": "cs.RO",
            "comment": null
        }
    ])
    .to_string()
}
