use wasm_bindgen::prelude::*;

mod game;
use game::CoinDash;

hopper_web::export_game!(CoinDash, "coin-dash");
