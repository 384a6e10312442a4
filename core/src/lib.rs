//! Blot Opt: a search engine for regrouping replicate readings.
//!
//! Given a small set of labeled numeric rows whose replicate readings may
//! have been recorded in arbitrary, misaligned order, this crate finds the
//! rearrangement of each row's non-zero values into column groups that
//! minimizes total dispersion: the sum, across rows, of the sample standard
//! deviation of percentage-normalized values. The search is exhaustive and
//! deterministic; equivalent column groupings are scored exactly once.
//!
//! # Quick Start
//!
//! ```
//! use blot_opt::{parse_rows, search, SearchConfig};
//!
//! let rows = parse_rows("A, 1.0, 2.0\nB, 2.0, 4.0\n")?;
//! let ranking = search(&rows, &SearchConfig::default())?;
//!
//! let best = ranking.best().expect("at least one grouping");
//! assert_eq!(best.sum_sd, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arrange;
mod capabilities;
mod combine;
mod config;
pub mod error_codes;
mod output;
mod progress;
mod rank;
mod row;
mod score;
mod search;

pub use arrange::{Arrangements, arrangement_count, total_candidates};
pub use capabilities::{EngineFeatures, engine_features};
pub use combine::{CanonicalKey, Column};
pub use config::{ConfigError, LimitBehavior, SearchConfig, SearchConfigBuilder};
pub use output::json::{RankingRow, ranking_to_rows, serialize_ranking};
pub use progress::{CancelToken, NoProgress, ProgressCounter, ProgressObserver};
pub use rank::Ranking;
pub use row::{MAX_ROWS, MAX_VALUES_PER_ROW, Row, RowParseError, RowSet, parse_rows};
pub use score::ScoredCombination;
pub use search::{SearchError, SearchPlan, search};
