//! The A* search and the structures it is built from.
//!
//! [`AStarEngine`] drives a [`PriorityFrontier`] of open candidates and a [`VisitedSet`] of
//! finalized Nodes. Both are created fresh for every search.

mod a_star;
pub use self::a_star::{a_star_search, AStarEngine};

mod frontier;
pub use self::frontier::{FrontierEntry, PriorityFrontier};

mod visited;
pub use self::visited::{VisitedRecord, VisitedSet};

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::SearchError;

mod result;
pub use self::result::SearchResult;
