//! Stable, machine-matchable error codes.
//!
//! Every user-facing error message carries its code in brackets so scripts
//! and tests can match on the code instead of the prose.

pub const PARSE_INVALID_VALUE: &str = "BLOTOPT_PARSE_001";
pub const PARSE_MISSING_LABEL: &str = "BLOTOPT_PARSE_002";
pub const PARSE_MISSING_VALUES: &str = "BLOTOPT_PARSE_003";
pub const PARSE_DUPLICATE_LABEL: &str = "BLOTOPT_PARSE_004";
pub const PARSE_TOO_MANY_ROWS: &str = "BLOTOPT_PARSE_005";
pub const PARSE_TOO_MANY_VALUES: &str = "BLOTOPT_PARSE_006";

pub const SEARCH_NO_ROWS: &str = "BLOTOPT_SEARCH_001";
pub const SEARCH_EMPTY_ROW: &str = "BLOTOPT_SEARCH_002";
pub const SEARCH_CANDIDATE_LIMIT: &str = "BLOTOPT_SEARCH_003";
pub const SEARCH_INVALID_CONFIG: &str = "BLOTOPT_SEARCH_004";
pub const SEARCH_INTERNAL: &str = "BLOTOPT_SEARCH_005";
