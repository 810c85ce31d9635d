use crate::RequestId;

/// Search options carried by every find request and directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindOptions {
	/// Continue the current session instead of starting a fresh one.
	pub find_next: bool,
	/// Search direction; `false` walks matches and frames backwards.
	pub forward: bool,
	pub match_case: bool,
	/// Ask the frame to search again even if its text did not change.
	pub force: bool,
}

impl Default for FindOptions {
	fn default() -> Self {
		Self {
			find_next: false,
			forward: true,
			match_case: false,
			force: false,
		}
	}
}

impl FindOptions {
	/// Options for a find-next step in the given direction.
	#[must_use]
	pub fn next(forward: bool) -> Self {
		Self {
			find_next: true,
			forward,
			..Self::default()
		}
	}
}

/// One logical search operation.
///
/// A request with `find_next == false` starts a new session; later find-next
/// requests with the same text continue it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindRequest {
	pub id: RequestId,
	pub search_text: String,
	pub options: FindOptions,
}

impl FindRequest {
	pub fn new(id: RequestId, search_text: impl Into<String>, options: FindOptions) -> Self {
		Self {
			id,
			search_text: search_text.into(),
			options,
		}
	}

	/// A forward request that starts a new session.
	pub fn initial(id: RequestId, search_text: impl Into<String>) -> Self {
		Self::new(id, search_text, FindOptions::default())
	}

	/// A find-next request continuing the session for `search_text`.
	pub fn find_next(id: RequestId, search_text: impl Into<String>, forward: bool) -> Self {
		Self::new(id, search_text, FindOptions::next(forward))
	}

	pub const fn is_find_next(&self) -> bool {
		self.options.find_next
	}
}

/// What a frame should do with its current selection when finding stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopFindAction {
	/// Clear the active match selection.
	#[default]
	ClearSelection,
	/// Leave the active match selected.
	KeepSelection,
	/// Activate the selected match (e.g. follow a link).
	ActivateSelection,
}

#[cfg(test)]
mod tests;
