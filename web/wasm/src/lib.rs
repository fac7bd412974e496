use solrs::{
    Card, DrawItem, GameOptions, GameState, MoveOutcome, Pile, PileId, Point, Rect, Suit, SuitSet,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, variant: &str) -> Result<WasmGame, JsValue> {
        let game = GameState::new(options_for(variant)?, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, seed: u32, variant: &str) -> Result<(), JsValue> {
        let (width, height) = self.game.window();
        self.game = GameState::new(options_for(variant)?, seed as u64).map_err(js_err)?;
        self.game.resize(width, height);
        Ok(())
    }

    pub fn redeal(&mut self) {
        self.game.redeal();
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.game.resize(width, height);
    }

    pub fn press(&mut self, x: i32, y: i32) -> bool {
        self.game.press(Point::new(x, y))
    }

    pub fn drag(&mut self, x: i32, y: i32) {
        self.game.drag(Point::new(x, y));
    }

    pub fn release(&mut self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let outcome = JsOutcome::from(self.game.release(Point::new(x, y)));
        to_js_value(&outcome)
    }

    pub fn deal(&mut self) -> Result<u32, JsValue> {
        self.game
            .try_deal_next_set()
            .map(|left| left as u32)
            .map_err(js_err)
    }

    pub fn move_cards(
        &mut self,
        from_kind: &str,
        from: u32,
        index: u32,
        to_kind: &str,
        to: u32,
    ) -> Result<u32, JsValue> {
        let from = pile_id(from_kind, from)?;
        let to = pile_id(to_kind, to)?;
        self.game
            .move_cards(from, index as usize, to)
            .map(|moved| moved as u32)
            .map_err(js_err)
    }

    pub fn draw_list(&self) -> Result<JsValue, JsValue> {
        let items: Vec<JsDrawItem> = self
            .game
            .draw_list()
            .into_iter()
            .map(JsDrawItem::from)
            .collect();
        to_js_value(&items)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            tableau: self.game.tableau.iter().map(pile_to_js).collect(),
            cells: self.game.cells.iter().map(pile_to_js).collect(),
            foundations: self.game.foundations.iter().map(pile_to_js).collect(),
            held: pile_to_js(self.game.held()),
            origin: self.game.origin().map(JsPileId::from),
            stock_remaining: self.game.stock_remaining() as u32,
            completed_runs: self.game.completed_runs() as u32,
            won: self.game.is_won(),
        };

        to_js_value(&snapshot)
    }
}

fn options_for(variant: &str) -> Result<GameOptions, JsValue> {
    match variant {
        "spider1" => Ok(GameOptions::spider(SuitSet::One)),
        "spider2" => Ok(GameOptions::spider(SuitSet::Two)),
        "spider" | "spider4" => Ok(GameOptions::spider(SuitSet::Four)),
        "freecell" => Ok(GameOptions::freecell()),
        _ => Err(JsValue::from_str("unknown variant")),
    }
}

fn pile_id(kind: &str, index: u32) -> Result<PileId, JsValue> {
    let index = index as usize;
    match kind {
        "Tableau" => Ok(PileId::Tableau(index)),
        "Cell" => Ok(PileId::Cell(index)),
        "Foundation" => Ok(PileId::Foundation(index)),
        _ => Err(JsValue::from_str("unknown pile kind")),
    }
}

#[derive(Serialize)]
struct Snapshot {
    tableau: Vec<Vec<JsCard>>,
    cells: Vec<Vec<JsCard>>,
    foundations: Vec<Vec<JsCard>>,
    held: Vec<JsCard>,
    origin: Option<JsPileId>,
    stock_remaining: u32,
    completed_runs: u32,
    won: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    face_up: bool,
}

#[derive(Serialize)]
struct JsPileId {
    kind: &'static str,
    index: u32,
}

impl From<PileId> for JsPileId {
    fn from(id: PileId) -> Self {
        let (kind, index) = match id {
            PileId::Tableau(index) => ("Tableau", index),
            PileId::Cell(index) => ("Cell", index),
            PileId::Foundation(index) => ("Foundation", index),
        };
        Self {
            kind,
            index: index as u32,
        }
    }
}

#[derive(Serialize)]
struct JsRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl From<Rect> for JsRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }
}

#[derive(Serialize)]
struct JsDrawItem {
    pile: Option<JsPileId>,
    index: u32,
    card: JsCard,
    rect: JsRect,
}

impl From<DrawItem> for JsDrawItem {
    fn from(item: DrawItem) -> Self {
        Self {
            pile: item.pile.map(JsPileId::from),
            index: item.index as u32,
            card: card_to_js(item.card),
            rect: JsRect::from(item.rect),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    outcome: &'static str,
    from: Option<JsPileId>,
    to: Option<JsPileId>,
    cards: u32,
}

impl From<MoveOutcome> for JsOutcome {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Idle => Self {
                outcome: "Idle",
                from: None,
                to: None,
                cards: 0,
            },
            MoveOutcome::Placed { from, to, cards } => Self {
                outcome: "Placed",
                from: Some(from.into()),
                to: Some(to.into()),
                cards: cards as u32,
            },
            MoveOutcome::SnappedBack { to } => Self {
                outcome: "SnappedBack",
                from: None,
                to: Some(to.into()),
                cards: 0,
            },
        }
    }
}

fn pile_to_js(pile: &Pile) -> Vec<JsCard> {
    pile.cards().iter().copied().map(card_to_js).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        face_up: card.is_face_up(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
