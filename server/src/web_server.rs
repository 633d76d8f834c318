use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use engine::{Board, CELL_COUNT, Outcome, SIDE, log};

use crate::server_config::ServerConfig;
use crate::session::{SessionManager, TurnReport};

#[derive(Clone)]
pub struct WebServerState {
    pub session_manager: SessionManager,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub session_id: String,
    pub board: Vec<Vec<String>>,
    pub game_over: bool,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub session_id: String,
    pub cell: i64,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub board: Vec<Vec<String>>,
    pub game_over: bool,
    pub result: String,
    pub agent_move: Option<usize>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

/// Board rows as display symbols: "X", "O", or "".
pub fn board_to_symbols(board: &Board) -> Vec<Vec<String>> {
    (0..SIDE)
        .map(|row| {
            (0..SIDE)
                .map(|col| board.get(row * SIDE + col).symbol().to_string())
                .collect()
        })
        .collect()
}

fn describe_turn(report: &TurnReport) -> String {
    if report.human_outcome.is_terminal() {
        return match report.human_outcome {
            Outcome::Win { .. } => "Game over! You win.".to_string(),
            Outcome::Draw { .. } => "Game over! It's a draw.".to_string(),
            _ => "Game over! (Human move ended the game)".to_string(),
        };
    }
    match report.agent_move {
        Some((_, Outcome::Win { .. })) => "Game over! The agent wins.".to_string(),
        Some((_, Outcome::Draw { .. })) => "Game over! It's a draw.".to_string(),
        _ => String::new(),
    }
}

pub async fn run_web_server(
    config: ServerConfig,
    session_manager: SessionManager,
) -> Result<(), String> {
    let state = WebServerState { session_manager };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/reset", post(reset_handler))
        .route("/move", post(move_handler))
        .fallback_service(ServeDir::new(&config.static_files_path))
        .layer(cors)
        .with_state(state);

    let addr = config.listen_addr();
    log!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn reset_handler(
    State(state): State<WebServerState>,
    Json(request): Json<ResetRequest>,
) -> Json<ResetResponse> {
    let session_id = request
        .session_id
        .unwrap_or_else(SessionManager::new_session_id);
    let game = state.session_manager.reset(&session_id).await;

    Json(ResetResponse {
        session_id,
        board: board_to_symbols(&game.board),
        game_over: game.terminal,
    })
}

async fn move_handler(
    State(state): State<WebServerState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    if request.cell < 0 || request.cell >= CELL_COUNT as i64 {
        return Err(bad_request(
            "Cell number must be between 0 and 8.".to_string(),
        ));
    }

    let report = state
        .session_manager
        .play_turn(&request.session_id, request.cell as usize)
        .await
        .map_err(bad_request)?;

    Ok(Json(MoveResponse {
        board: board_to_symbols(&report.state.board),
        game_over: report.state.terminal,
        result: describe_turn(&report),
        agent_move: report.agent_move.map(|(cell, _)| cell),
    }))
}
