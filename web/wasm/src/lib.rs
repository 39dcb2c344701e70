use doudizhu::{Card, Game, GameOptions, GameState, Play, PlayOutcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start().map_err(js_err)
    }

    /// Toggles a card such as `"♠10"` or `"jk"` in the current selection.
    pub fn select(&mut self, card: &str) -> Result<bool, JsValue> {
        let card = parse_card(card)?;
        self.game.select(card).map_err(js_err)
    }

    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
    }

    pub fn play_selected(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.game.play_selected().map_err(js_err)?;
        to_js_value(&JsPlayOutcome::from(outcome))
    }

    /// Plays space-separated cards, e.g. `"♠3 ♥3"`.
    pub fn play(&mut self, cards: &str) -> Result<JsValue, JsValue> {
        let cards = cards
            .split_whitespace()
            .map(parse_card)
            .collect::<Result<Vec<_>, _>>()?;
        let outcome = self.game.play(&cards).map_err(js_err)?;
        to_js_value(&JsPlayOutcome::from(outcome))
    }

    pub fn pass(&mut self) -> Result<bool, JsValue> {
        self.game
            .pass()
            .map(|outcome| outcome.trick_over)
            .map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;
        let snapshot = Snapshot {
            state: state_to_str(game.state()),
            current_player: game.current_player() as u32,
            last_player: game.last_player().map(|player| player as u32),
            last_played: game.last_played().map(JsPlay::from),
            hands: game
                .hands
                .iter()
                .map(|hand| cards_to_js(hand.cards()))
                .collect(),
            selected: cards_to_js(game.selected()),
            bonus: cards_to_js(game.bonus_cards()),
            winner: game.winner().map(|player| player as u32),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current_player: u32,
    last_player: Option<u32>,
    last_played: Option<JsPlay>,
    hands: Vec<Vec<JsCard>>,
    selected: Vec<JsCard>,
    bonus: Vec<JsCard>,
    winner: Option<u32>,
}

#[derive(Serialize)]
struct JsCard {
    text: String,
    suit: Option<char>,
    rank: String,
    strength: u8,
}

#[derive(Serialize)]
struct JsPlay {
    player: u32,
    cards: Vec<JsCard>,
    kind: &'static str,
    value: u8,
    length: u32,
}

impl From<&Play> for JsPlay {
    fn from(play: &Play) -> Self {
        Self {
            player: play.player as u32,
            cards: cards_to_js(&play.cards),
            kind: play.combination.kind.name(),
            value: play.combination.value.strength(),
            length: play.combination.length as u32,
        }
    }
}

#[derive(Serialize)]
struct JsPlayOutcome {
    play: JsPlay,
    cards_left: u32,
    next_player: u32,
    winner: Option<u32>,
}

impl From<PlayOutcome> for JsPlayOutcome {
    fn from(outcome: PlayOutcome) -> Self {
        Self {
            play: JsPlay::from(&outcome.play),
            cards_left: outcome.cards_left as u32,
            next_player: outcome.next_player as u32,
            winner: outcome.winner.map(|player| player as u32),
        }
    }
}

fn card_to_js(card: &Card) -> JsCard {
    JsCard {
        text: card.to_string(),
        suit: card.suit.map(|suit| suit.symbol()),
        rank: card.rank.to_string(),
        strength: card.rank.strength(),
    }
}

fn cards_to_js(cards: &[Card]) -> Vec<JsCard> {
    cards.iter().map(card_to_js).collect()
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingToStart => "WaitingToStart",
        GameState::InProgress => "InProgress",
        GameState::Finished { .. } => "Finished",
    }
}

fn parse_card(text: &str) -> Result<Card, JsValue> {
    text.parse::<Card>()
        .map_err(|err| JsValue::from_str(&format!("{text}: {err}")))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
