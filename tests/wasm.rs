//! Browser tests for the JavaScript-facing game API.

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use reversi_rules::wasm::ReversiGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_accepts_undefined_config() {
    let game = ReversiGame::new(JsValue::UNDEFINED).unwrap();

    assert_eq!(game.current_player(), 1);
    assert_eq!(game.winner(), 0);
    assert!(game.render().starts_with("  a b c d e f g h\n"));
}

#[wasm_bindgen_test]
fn new_game_reads_legacy_directions() {
    let config = Object::new();
    Reflect::set(&config, &"directions".into(), &"legacy".into()).unwrap();
    let mut game = ReversiGame::new(config.into()).unwrap();

    // f5 only captures leftwards.
    assert!(game.play("f5").is_err());
    assert!(game.play("c4").is_ok());
}

#[wasm_bindgen_test]
fn new_game_rejects_unknown_directions() {
    let config = Object::new();
    Reflect::set(&config, &"directions".into(), &"sideways".into()).unwrap();

    assert!(ReversiGame::new(config.into()).is_err());
}

#[wasm_bindgen_test]
fn play_returns_placed_and_captured() {
    let mut game = ReversiGame::new(JsValue::UNDEFINED).unwrap();
    let outcome = game.play("c4").unwrap();

    let placed = get(&outcome, "placed");
    assert_eq!(get(&placed, "row").as_f64(), Some(3.0));
    assert_eq!(get(&placed, "col").as_f64(), Some(2.0));

    let captured = js_sys::Array::from(&get(&outcome, "captured"));
    assert_eq!(captured.length(), 1);
    assert_eq!(game.current_player(), 2);
}

#[wasm_bindgen_test]
fn state_reports_counts() {
    let mut game = ReversiGame::new(JsValue::UNDEFINED).unwrap();
    game.play("d3").unwrap();
    let state = game.state().unwrap();

    assert_eq!(get(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(get(&state, "white_count").as_f64(), Some(1.0));
    assert_eq!(get(&state, "current_player").as_string().as_deref(), Some("white"));
}
