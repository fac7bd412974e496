//! Move legality and transfer tests.

use solrs::{
    Card, KING, Pile, RuleSet, Suit, SuitMatch, can_pick_up, can_place, can_place_on_cell,
    can_place_on_foundation, find_complete_run, move_run,
};

const fn up(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

const fn down(suit: Suit, rank: u8) -> Card {
    Card::face_down(suit, rank)
}

fn pile(cards: &[Card]) -> Pile {
    Pile::from_cards(cards.to_vec())
}

fn spades_run(from: u8, to: u8) -> Vec<Card> {
    (to..=from).rev().map(|rank| up(Suit::Spades, rank)).collect()
}

#[test]
fn suit_break_blocks_every_run_through_it() {
    let rules = RuleSet::spider();
    let pile = pile(&[
        down(Suit::Clubs, 11),
        up(Suit::Spades, 5),
        up(Suit::Spades, 4),
        up(Suit::Hearts, 3),
    ]);

    assert!(!can_pick_up(&pile, 1, &rules));
    assert!(!can_pick_up(&pile, 2, &rules));
    assert!(can_pick_up(&pile, 3, &rules));
}

#[test]
fn face_down_and_out_of_range_cards_cannot_be_lifted() {
    let rules = RuleSet::spider();
    let pile = pile(&[down(Suit::Spades, 6), up(Suit::Spades, 5)]);

    assert!(!can_pick_up(&pile, 0, &rules));
    assert!(can_pick_up(&pile, 1, &rules));
    assert!(!can_pick_up(&pile, 2, &rules));
    assert!(!can_pick_up(&Pile::new(), 0, &rules));
}

#[test]
fn runs_must_descend_by_exactly_one() {
    let rules = RuleSet::spider();
    let gap = pile(&[up(Suit::Spades, 9), up(Suit::Spades, 7)]);
    let ascending = pile(&[up(Suit::Spades, 7), up(Suit::Spades, 8)]);
    let run = pile(&spades_run(9, 5));

    assert!(!can_pick_up(&gap, 0, &rules));
    assert!(!can_pick_up(&ascending, 0, &rules));
    assert!(can_pick_up(&run, 0, &rules));
}

#[test]
fn suit_match_variants_on_pickup() {
    let mixed_black = pile(&[up(Suit::Spades, 5), up(Suit::Clubs, 4)]);
    let spade_heart = pile(&[up(Suit::Spades, 5), up(Suit::Hearts, 4)]);
    let heart_diamond = pile(&[up(Suit::Hearts, 5), up(Suit::Diamonds, 4)]);

    let by = |suit_match| RuleSet {
        enforce_suit_on_pickup: true,
        enforce_suit_on_place: false,
        suit_match,
    };

    assert!(!can_pick_up(&mixed_black, 0, &by(SuitMatch::Suit)));
    assert!(can_pick_up(&mixed_black, 0, &by(SuitMatch::Color)));
    assert!(can_pick_up(&heart_diamond, 0, &by(SuitMatch::Color)));
    assert!(!can_pick_up(&spade_heart, 0, &by(SuitMatch::Color)));

    assert!(can_pick_up(&spade_heart, 0, &by(SuitMatch::Triad)));
    assert!(!can_pick_up(&heart_diamond, 0, &by(SuitMatch::Triad)));

    assert!(can_pick_up(&spade_heart, 0, &by(SuitMatch::AlternatingColor)));
    assert!(!can_pick_up(&mixed_black, 0, &by(SuitMatch::AlternatingColor)));

    let relaxed = RuleSet {
        enforce_suit_on_pickup: false,
        ..RuleSet::spider()
    };
    assert!(can_pick_up(&spade_heart, 0, &relaxed));
}

#[test]
fn empty_destination_accepts_any_run() {
    let rules = RuleSet::spider();
    let held = pile(&[up(Suit::Clubs, 5)]);

    assert!(can_place(&held, &Pile::new(), &rules));
    assert!(can_place(&pile(&[up(Suit::Clubs, 13)]), &Pile::new(), &rules));
}

#[test]
fn placement_follows_destination_rank() {
    let rules = RuleSet::spider();
    let destination = pile(&[up(Suit::Hearts, 7)]);

    assert!(can_place(&pile(&[up(Suit::Spades, 6)]), &destination, &rules));
    assert!(!can_place(&pile(&[up(Suit::Spades, 5)]), &destination, &rules));
    assert!(!can_place(&pile(&[up(Suit::Spades, 8)]), &destination, &rules));
    assert!(!can_place(&Pile::new(), &destination, &rules));
}

#[test]
fn placement_checks_suit_only_when_enforced() {
    let destination = pile(&[up(Suit::Spades, 7)]);
    let held = pile(&[up(Suit::Hearts, 6), up(Suit::Hearts, 5)]);

    assert!(can_place(&held, &destination, &RuleSet::spider()));

    let strict = RuleSet {
        enforce_suit_on_place: true,
        ..RuleSet::spider()
    };
    assert!(!can_place(&held, &destination, &strict));
    assert!(can_place(&held, &destination, &RuleSet::freecell()));
}

#[test]
fn cells_hold_one_card() {
    let single = pile(&[up(Suit::Clubs, 9)]);
    let pair = pile(&[up(Suit::Clubs, 9), up(Suit::Hearts, 8)]);

    assert!(can_place_on_cell(&single, &Pile::new()));
    assert!(!can_place_on_cell(&pair, &Pile::new()));
    assert!(!can_place_on_cell(&single, &pile(&[up(Suit::Spades, 2)])));
}

#[test]
fn foundations_build_up_by_suit_from_ace() {
    let ace = pile(&[up(Suit::Hearts, 1)]);
    let two = pile(&[up(Suit::Hearts, 2)]);
    let wrong_two = pile(&[up(Suit::Spades, 2)]);

    assert!(can_place_on_foundation(&ace, &Pile::new()));
    assert!(!can_place_on_foundation(&two, &Pile::new()));
    assert!(can_place_on_foundation(&two, &ace));
    assert!(!can_place_on_foundation(&wrong_two, &ace));
    assert!(!can_place_on_foundation(&pile(&[up(Suit::Hearts, 2), up(Suit::Hearts, 3)]), &ace));
}

#[test]
fn complete_run_found_above_hidden_cards() {
    let mut cards = vec![down(Suit::Diamonds, 4)];
    cards.extend(spades_run(KING, 1));
    let pile = pile(&cards);

    assert_eq!(find_complete_run(&pile), Some(1..14));
}

#[test]
fn incomplete_or_mixed_runs_are_not_complete() {
    let short = pile(&spades_run(KING, 2));
    assert_eq!(find_complete_run(&short), None);

    let mut mixed = spades_run(KING, 1);
    mixed[6] = up(Suit::Hearts, mixed[6].rank);
    assert_eq!(find_complete_run(&pile(&mixed)), None);

    let mut hidden = spades_run(KING, 1);
    hidden[12].conceal();
    assert_eq!(find_complete_run(&pile(&hidden)), None);
}

#[test]
fn lowest_king_wins_when_two_runs_are_complete() {
    let mut cards = spades_run(KING, 1);
    cards.extend(spades_run(KING, 1));

    assert_eq!(find_complete_run(&pile(&cards)), Some(0..13));
}

#[test]
fn move_run_conserves_cards_and_order() {
    let mut source = pile(&[
        down(Suit::Clubs, 2),
        up(Suit::Spades, 9),
        up(Suit::Spades, 8),
    ]);
    let mut destination = pile(&[up(Suit::Hearts, 10)]);
    let before = source.len() + destination.len();

    assert_eq!(move_run(&mut source, &mut destination, 1), 2);
    assert_eq!(source.len(), 1);
    assert_eq!(source.len() + destination.len(), before);
    assert_eq!(
        destination.cards(),
        &[
            up(Suit::Hearts, 10),
            up(Suit::Spades, 9),
            up(Suit::Spades, 8)
        ]
    );
}

#[test]
fn move_run_past_the_end_moves_nothing() {
    let mut source = pile(&[up(Suit::Spades, 9)]);
    let mut destination = Pile::new();

    assert_eq!(move_run(&mut source, &mut destination, 1), 0);
    assert_eq!(move_run(&mut source, &mut destination, 5), 0);
    assert_eq!(source.len(), 1);
    assert!(destination.is_empty());
}

#[test]
fn snap_back_restores_exact_order() {
    let original = pile(&[
        down(Suit::Clubs, 2),
        up(Suit::Spades, 9),
        up(Suit::Spades, 8),
        up(Suit::Spades, 7),
    ]);
    let mut source = original.clone();
    let mut held = Pile::new();

    move_run(&mut source, &mut held, 1);
    move_run(&mut held, &mut source, 0);

    assert_eq!(source, original);
    assert!(held.is_empty());
}

#[test]
fn suits_split_into_red_and_black() {
    let red: Vec<Suit> = Suit::ALL.into_iter().filter(|suit| suit.is_red()).collect();
    assert_eq!(red, [Suit::Hearts, Suit::Diamonds]);

    let pile = pile(&[up(Suit::Clubs, 9)]);
    assert_eq!(pile.get(0), Some(&up(Suit::Clubs, 9)));
    assert_eq!(pile.get(1), None);
}
