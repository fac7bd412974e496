//! Stacking geometry tests.

use solrs::{
    Card, CardSize, Pile, Point, Rect, StackLayout, StackOffsets, Suit, card_index_at,
    pile_index_at, resolve_offset,
};

fn faceup_pile(len: usize, height: i32) -> Pile {
    let mut pile = Pile::from_cards(vec![Card::new(Suit::Spades, 5); len]);
    pile.set_rect(Rect::new(0, 0, 100, height));
    pile
}

fn tiered_pile(facedown: usize, faceup: usize, height: i32) -> Pile {
    let mut cards = vec![Card::face_down(Suit::Clubs, 9); facedown];
    cards.extend(vec![Card::new(Suit::Hearts, 9); faceup]);
    let mut pile = Pile::from_cards(cards);
    pile.set_rect(Rect::new(0, 0, 100, height));
    pile
}

#[test]
fn offset_is_a_quarter_card_when_there_is_room() {
    let pile = faceup_pile(3, 600);
    assert_eq!(resolve_offset(&pile, 140), 35);
}

#[test]
fn offset_compresses_to_fit_rect() {
    let pile = faceup_pile(20, 600);
    assert_eq!(resolve_offset(&pile, 140), 24);
}

#[test]
fn offset_is_always_positive() {
    for len in 1..=104 {
        for height in [0, 10, 100, 600, 2000] {
            for card_height in [1, 4, 16, 140, 900] {
                let pile = faceup_pile(len, height);
                assert!(
                    resolve_offset(&pile, card_height) >= 1,
                    "len {len}, height {height}, card {card_height}"
                );

                let tiered = tiered_pile(len / 2, len - len / 2, height);
                let size = CardSize::new(100, card_height);
                let offsets = StackOffsets::resolve(&tiered, size, StackLayout::Tiered);
                assert!(offsets.facedown >= 1);
                assert!(offsets.faceup >= 1);
            }
        }
    }
}

#[test]
fn card_index_follows_slivers_then_last_card() {
    let pile = faceup_pile(3, 600);
    let size = CardSize::new(100, 140);
    let at = |y| card_index_at(&pile, y, size, StackLayout::Uniform);

    assert_eq!(at(0), Some(0));
    assert_eq!(at(34), Some(0));
    assert_eq!(at(35), Some(1));
    assert_eq!(at(70), Some(2));
    assert_eq!(at(100), Some(2));
    assert_eq!(at(210), Some(2));
    assert_eq!(at(211), None);
    assert_eq!(at(-1), None);
}

#[test]
fn empty_pile_has_no_card_under_pointer() {
    let pile = faceup_pile(0, 600);
    assert_eq!(
        card_index_at(&pile, 10, CardSize::new(100, 140), StackLayout::Uniform),
        None
    );
}

#[test]
fn tiered_layout_packs_face_down_cards() {
    let pile = tiered_pile(3, 2, 600);
    let size = CardSize::new(100, 160);
    let offsets = StackOffsets::resolve(&pile, size, StackLayout::Tiered);

    assert_eq!(offsets.facedown, 10);
    assert_eq!(offsets.faceup, 40);
    assert_eq!(offsets.facedown_len, 3);
    let ys: Vec<i32> = (0..5).map(|index| offsets.card_y(index)).collect();
    assert_eq!(ys, [0, 10, 20, 30, 70]);

    let at = |y| card_index_at(&pile, y, size, StackLayout::Tiered);
    assert_eq!(at(25), Some(2));
    assert_eq!(at(30), Some(3));
    assert_eq!(at(69), Some(3));
    assert_eq!(at(70), Some(4));
    assert_eq!(at(230), Some(4));
    assert_eq!(at(231), None);
}

#[test]
fn tiered_layout_compresses_only_face_up_cards() {
    let pile = tiered_pile(2, 20, 400);
    let offsets = StackOffsets::resolve(&pile, CardSize::new(100, 160), StackLayout::Tiered);

    assert_eq!(offsets.facedown, 10);
    assert_eq!(offsets.faceup, 11);
    assert!(offsets.card_y(21) + 160 <= 400);
}

#[test]
fn card_rects_are_inset_by_margin() {
    let mut pile = faceup_pile(2, 600);
    pile.set_rect(Rect::new(200, 50, 95, 600));
    let size = CardSize::new(100, 160);
    let offsets = StackOffsets::resolve(&pile, size, StackLayout::Uniform);

    assert_eq!(offsets.card_rect(pile.rect(), 1, size), Rect::new(210, 100, 80, 140));
}

#[test]
fn pile_index_is_clamped() {
    assert_eq!(pile_index_at(250, 100, 10), 2);
    assert_eq!(pile_index_at(-130, 100, 10), 0);
    assert_eq!(pile_index_at(5000, 100, 10), 9);
    assert_eq!(pile_index_at(5, 0, 10), 5);
    assert_eq!(pile_index_at(5, 1, 0), 0);
}

#[test]
fn card_size_tracks_window_width() {
    assert_eq!(CardSize::for_window(800, 10), CardSize::new(80, 112));
    assert_eq!(CardSize::for_window(5, 10), CardSize::new(1, 1));
    assert_eq!(CardSize::for_window(800, 0), CardSize::new(800, 1120));
}

#[test]
fn rect_contains_is_half_open() {
    let rect = Rect::new(10, 10, 20, 20);
    assert!(rect.contains(Point::new(10, 10)));
    assert!(rect.contains(Point::new(29, 29)));
    assert!(!rect.contains(Point::new(30, 10)));
    assert!(!rect.contains(Point::new(9, 15)));
}
