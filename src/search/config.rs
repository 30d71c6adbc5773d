use std::time::Duration;

/// Options for configuring an [`AStarEngine`](super::AStarEngine)
///
/// Default options:
/// ```
/// # use road_pathfinding::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		size_hint: 0,
/// 		max_expansions: None,
/// 		time_limit: None,
/// 		check_heuristic: false,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The number of Nodes a search is expected to touch (defaults to `0`).
	///
	/// Used to pre-allocate the Frontier and the VisitedSet. Searches on large Graphs spend a
	/// noticeable amount of time growing those, so setting this to a rough guess helps.
	pub size_hint: usize,
	/// `Some(n)`: abort with [`SearchError::ExpansionLimit`](super::SearchError::ExpansionLimit)
	/// once more than `n` entries were popped from the Frontier.
	///
	/// `None` (default): no limit.
	pub max_expansions: Option<usize>,
	/// `Some(d)`: abort with [`SearchError::DeadlineExceeded`](super::SearchError::DeadlineExceeded)
	/// once the search ran for `d`. Checked once per popped entry.
	///
	/// `None` (default): no limit.
	pub time_limit: Option<Duration>,
	/// `true`: a negative or NaN estimate from the Heuristic aborts the search with
	/// [`SearchError::MalformedHeuristic`](super::SearchError::MalformedHeuristic).
	///
	/// `false` (default): estimates are trusted. Debug builds still assert on them.
	pub check_heuristic: bool,
}

impl SearchConfig {
	/// No limits, no checks. Same as `Default::default()`.
	pub const UNBOUNDED: SearchConfig = SearchConfig {
		size_hint: 0,
		max_expansions: None,
		time_limit: None,
		check_heuristic: false,
	};

	/// The default config with the given `size_hint`
	pub fn with_size_hint(size_hint: usize) -> SearchConfig {
		SearchConfig {
			size_hint,
			..Default::default()
		}
	}

	/// The default config, aborting after `limit` Frontier pops
	pub fn with_expansion_limit(limit: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(limit),
			..Default::default()
		}
	}

	/// The default config, aborting after `limit` has passed
	pub fn with_time_limit(limit: Duration) -> SearchConfig {
		SearchConfig {
			time_limit: Some(limit),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::UNBOUNDED
	}
}
