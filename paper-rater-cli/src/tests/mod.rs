//! Shared test harness modules for the paper-rater CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(clippy::expect_used, reason = "tests should fail fast on broken setup")]

use super::*;

mod helpers;
