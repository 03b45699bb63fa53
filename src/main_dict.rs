// Copyright (C) 2020-2026 Andy Kurnia.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use clap::Parser;
use flexi_logger::Logger;
use std::sync::Arc;
use tokio::net::TcpListener;
use wordgrid::{alphabet, board, error, game_config, lexicon, move_picker, placement};

#[derive(Parser, Debug)]
#[command(name = "dict", about = "Serve word lookups and move search over HTTP")]
struct Args {
    /// Word list or .kwg file
    #[arg(default_value = "words.txt")]
    lexicon: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[derive(Clone)]
struct AppState {
    lexicon: Arc<lexicon::Lexicon<'static>>,
    game_config: Arc<game_config::GameConfig<'static>>,
    // the word list file as loaded, absent for a .kwg lexicon.
    words: Option<Arc<str>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateWordResponse {
    word: String,
    is_valid: bool,
}

#[derive(serde::Serialize)]
struct ArrangementsResponse {
    letters: String,
    words: Vec<String>,
}

#[derive(serde::Deserialize)]
struct BestMoveRequest {
    board: Vec<String>,
    rack: String,
}

#[derive(serde::Serialize)]
struct MoveResponse {
    word: String,
    row: i8,
    col: i8,
    direction: placement::Direction,
    score: i16,
}

#[derive(serde::Serialize)]
struct BestMoveResponse {
    #[serde(rename = "move")]
    best: Option<MoveResponse>,
}

type ApiError = (StatusCode, String);

async fn validate_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Json<ValidateWordResponse> {
    let is_valid = state.lexicon.contains(&word);
    log::debug!("validate {:?}: {}", word, is_valid);
    Json(ValidateWordResponse { word, is_valid })
}

async fn arrangements(
    State(state): State<AppState>,
    Path(letters): Path<String>,
) -> Result<Json<ArrangementsResponse>, ApiError> {
    let alphabet = state.lexicon.alphabet();
    let rack = alphabet.parse_rack(&letters).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("invalid letters {:?}", letters),
        )
    })?;
    let words = state
        .lexicon
        .arrangements(&rack)
        .iter()
        .map(|word| alphabet.fmt_word(word))
        .collect();
    Ok(Json(ArrangementsResponse { letters, words }))
}

async fn words(State(state): State<AppState>) -> Result<String, ApiError> {
    match &state.words {
        Some(words) => Ok(words.to_string()),
        None => Err((
            StatusCode::NOT_FOUND,
            "lexicon was not loaded from a word list".into(),
        )),
    }
}

// A board of row strings and a rack no longer than a real rack.
fn parse_position(
    game_config: &game_config::GameConfig,
    request: &BestMoveRequest,
) -> Result<(board::Board, Vec<u8>), ApiError> {
    let alphabet = game_config.alphabet();
    let board = board::Board::from_rows(
        alphabet,
        game_config.board_layout().dim(),
        &request.board,
    )
    .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    let rack = alphabet.parse_rack(&request.rack).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("invalid rack {:?}", request.rack),
        )
    })?;
    if rack.len() > game_config.rack_size() as usize {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "rack {:?} has more than {} tiles",
                request.rack,
                game_config.rack_size()
            ),
        ));
    }
    Ok((board, rack))
}

async fn best_move(
    State(state): State<AppState>,
    Json(request): Json<BestMoveRequest>,
) -> Result<Json<BestMoveResponse>, ApiError> {
    let alphabet = state.game_config.alphabet();
    let (board, rack) = parse_position(&state.game_config, &request)?;
    let best = tokio::task::spawn_blocking(move || {
        move_picker::find_best_move(&state.game_config, &board, &rack, &state.lexicon)
    })
    .await
    .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    Ok(Json(BestMoveResponse {
        best: best.map(|m| MoveResponse {
            word: alphabet.fmt_word(&m.word),
            row: m.placement.row(),
            col: m.placement.col(),
            direction: m.placement.direction(),
            score: m.score,
        }),
    }))
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/validate-word/{word}", get(validate_word))
        .route("/api/arrangements/{letters}", get(arrangements))
        .route("/api/words", get(words))
        .route("/api/best-move", post(best_move))
        .with_state(state)
}

fn load_state(path: &str) -> error::Returns<AppState> {
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    let (lexicon, words) = if path.ends_with(".kwg") {
        (lexicon::Lexicon::load(alphabet, path)?, None)
    } else {
        let text = std::fs::read_to_string(path)?;
        let lexicon = lexicon::Lexicon::from_text(alphabet, &text)?;
        log::info!("loaded {} words from {}", lexicon.len(), path);
        (lexicon, Some(Arc::from(text)))
    };
    Ok(AppState {
        lexicon: Arc::new(lexicon),
        game_config: Arc::new(game_config::make_english_game_config(
            game_config::GameMode::SingleBot,
        )),
        words,
    })
}

#[tokio::main]
async fn main() -> error::Returns<()> {
    let args = Args::parse();
    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;
    let state = load_state(&args.lexicon)?;
    let listener = TcpListener::bind(("0.0.0.0", args.port)).await?;
    log::info!("dictionary service listening on port {}", args.port);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rack: &str) -> BestMoveRequest {
        BestMoveRequest {
            board: vec![".".repeat(15); 15],
            rack: rack.into(),
        }
    }

    #[test]
    fn serves_on_port_5000_by_default() {
        let args = Args::try_parse_from(["dict"]).unwrap();
        assert_eq!(args.port, 5000);
        assert_eq!(args.lexicon, "words.txt");
    }

    #[test]
    fn position_needs_a_real_rack() {
        let game_config = game_config::make_english_game_config(game_config::GameMode::SingleBot);
        let (board, rack) = parse_position(&game_config, &request("CAT_DOG")).unwrap();
        assert!(board.is_empty());
        assert_eq!(rack.len(), 7);
        assert_eq!(
            parse_position(&game_config, &request("CATDOGSX")).err().map(|e| e.0),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            parse_position(&game_config, &request("C4T")).err().map(|e| e.0),
            Some(StatusCode::BAD_REQUEST)
        );
        let mut short_board = request("CAT");
        short_board.board.pop();
        assert!(parse_position(&game_config, &short_board).is_err());
    }

    #[tokio::test]
    async fn oversized_rack_is_refused_before_search() {
        let state = AppState {
            lexicon: Arc::new(
                lexicon::Lexicon::from_words(&alphabet::ENGLISH_ALPHABET, ["AT", "CAT"]).unwrap(),
            ),
            game_config: Arc::new(game_config::make_english_game_config(
                game_config::GameMode::SingleBot,
            )),
            words: None,
        };
        let err = best_move(State(state.clone()), Json(request("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAT")))
            .await
            .err()
            .unwrap();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        let found = best_move(State(state), Json(request("CATQQQQ"))).await.unwrap();
        let best = found.0.best.unwrap();
        assert_eq!((best.word.as_str(), best.score), ("CAT", 10));
    }
}
