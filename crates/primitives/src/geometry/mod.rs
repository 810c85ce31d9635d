/// Axis-aligned rectangle in document coordinates.
///
/// Frames report the bounds of their active match as a `Rect`; an empty rect
/// means "no selection update".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub width: u32,
	pub height: u32,
}

impl Rect {
	/// The zero-sized rectangle at the origin.
	pub const EMPTY: Rect = Rect {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self { x, y, width, height }
	}

	/// Returns true when the rectangle covers no area.
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}
}
