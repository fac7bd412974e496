//! Screen geometry for piles of overlapping cards.
//!
//! All values are in window pixels. Each card in a pile is drawn a little
//! lower than the one beneath it, so only a sliver of every card is visible
//! except the last, which is drawn at full height.

use crate::options::StackLayout;
use crate::pile::Pile;

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns whether the point lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

/// Dimensions of a card sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSize {
    /// Card width.
    pub w: i32,
    /// Card height.
    pub h: i32,
}

impl CardSize {
    /// Creates a new card size.
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Sizes cards so that `columns` of them fill `window_width`.
    ///
    /// Cards keep a 5:7 aspect ratio and are at least one pixel wide.
    ///
    /// ```
    /// use solrs::CardSize;
    ///
    /// let size = CardSize::for_window(800, 10);
    /// assert_eq!(size, CardSize::new(80, 112));
    /// ```
    #[must_use]
    pub fn for_window(window_width: i32, columns: usize) -> Self {
        let columns = to_i32(columns).max(1);
        let w = (window_width / columns).max(1);
        Self { w, h: w * 7 / 5 }
    }

    /// Inset between a pile slot and the sprite drawn inside it.
    #[must_use]
    pub const fn margin(&self) -> i32 {
        self.h / 16
    }
}

pub(crate) fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Returns the vertical gap between successive cards of a pile.
///
/// The nominal gap is a quarter of the card height. When the pile would
/// overflow its rectangle the gap shrinks so the last card still fits.
/// The result is never less than 1.
///
/// Callers should not rely on the value for an empty pile.
#[must_use]
pub fn resolve_offset(pile: &Pile, card_height: i32) -> i32 {
    let count = to_i32(pile.len());
    let mut offset = card_height / 4;

    if card_height + (offset - 1) * count > pile.rect().h {
        offset = (pile.rect().h - card_height) / (count - 1).max(1);
        log::trace!("compressed pile of {count} cards to offset {offset}");
    }

    offset.max(1)
}

/// Resolved vertical spacing for one pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOffsets {
    /// Gap below each face-down card.
    pub facedown: i32,
    /// Gap below each face-up card.
    pub faceup: i32,
    /// Number of face-down cards at the bottom of the pile.
    pub facedown_len: usize,
    /// Total number of cards in the pile.
    pub len: usize,
}

impl StackOffsets {
    /// Resolves spacing for a pile under the given layout.
    ///
    /// With [`StackLayout::Tiered`] the face-down prefix is packed at a
    /// sixteenth of the card height and only the face-up suffix is
    /// compressed to fit the pile rectangle.
    #[must_use]
    pub fn resolve(pile: &Pile, card_size: CardSize, layout: StackLayout) -> Self {
        let len = pile.len();

        match layout {
            StackLayout::Uniform => {
                let offset = resolve_offset(pile, card_size.h);
                Self {
                    facedown: offset,
                    faceup: offset,
                    facedown_len: 0,
                    len,
                }
            }
            StackLayout::Tiered => {
                let facedown_len = pile.facedown_len();
                let facedown = (card_size.h / 16).max(1);
                let mut faceup = card_size.h / 4;

                let base = facedown * to_i32(facedown_len);
                let faceup_gaps = to_i32(len) - to_i32(facedown_len) - 1;
                let extent = base + faceup * faceup_gaps.max(0) + card_size.h;

                if extent > pile.rect().h {
                    faceup = (pile.rect().h - base - card_size.h) / faceup_gaps.max(1);
                    log::trace!("compressed face-up run of {len} cards to offset {faceup}");
                }

                Self {
                    facedown,
                    faceup: faceup.max(1),
                    facedown_len,
                    len,
                }
            }
        }
    }

    /// Returns the y position of card `index`, relative to the pile's top.
    #[must_use]
    pub fn card_y(&self, index: usize) -> i32 {
        if index < self.facedown_len {
            return self.facedown * to_i32(index);
        }
        self.facedown * to_i32(self.facedown_len)
            + self.faceup * to_i32(index - self.facedown_len)
    }

    /// Returns the index of the card under `rel_y`, measured from the
    /// pile's top.
    ///
    /// A point below the last sliver but still within the full height of
    /// the last card hits the last card.
    #[must_use]
    pub fn index_at(&self, rel_y: i32, card_height: i32) -> Option<usize> {
        if self.len == 0 || rel_y < 0 {
            return None;
        }

        let last = self.len - 1;
        let base = self.facedown * to_i32(self.facedown_len);
        let index = if rel_y < base {
            (rel_y / self.facedown) as usize
        } else {
            self.facedown_len + ((rel_y - base) / self.faceup) as usize
        };

        if index <= last {
            Some(index)
        } else if rel_y <= self.card_y(last) + card_height {
            Some(last)
        } else {
            None
        }
    }

    /// Returns the on-screen rectangle for card `index` of a pile drawn
    /// at `pile_rect`.
    #[must_use]
    pub fn card_rect(&self, pile_rect: Rect, index: usize, card_size: CardSize) -> Rect {
        let margin = card_size.margin();
        Rect::new(
            pile_rect.x + margin,
            pile_rect.y + self.card_y(index) + margin,
            card_size.w - 2 * margin,
            card_size.h - 2 * margin,
        )
    }
}

/// Returns the index of the card under a y coordinate relative to the
/// pile's top, or `None` when the point misses every card.
///
/// An empty pile never has a card under the pointer.
#[must_use]
pub fn card_index_at(
    pile: &Pile,
    rel_y: i32,
    card_size: CardSize,
    layout: StackLayout,
) -> Option<usize> {
    if pile.is_empty() {
        return None;
    }
    StackOffsets::resolve(pile, card_size, layout).index_at(rel_y, card_size.h)
}

/// Returns the column under `x` for piles laid out `card_width` apart.
///
/// The result is clamped to `0..num_piles`. A non-positive width is
/// treated as one pixel.
#[must_use]
pub fn pile_index_at(x: i32, card_width: i32, num_piles: usize) -> usize {
    let column = (x / card_width.max(1)).max(0) as usize;
    column.min(num_piles.saturating_sub(1))
}
