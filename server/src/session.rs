use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use engine::{CELL_COUNT, Evaluator, GameState, Mark, Outcome, RewardScheme, log, select_move};
use rand::Rng;
use rand::distr::Alphanumeric;
use tokio::sync::Mutex;

/// What one human turn produced: the human's outcome and, when the game was
/// still open, the agent's reply.
#[derive(Clone, Debug)]
pub struct TurnReport {
    pub state: GameState,
    pub human_outcome: Outcome,
    pub agent_move: Option<(usize, Outcome)>,
}

struct Session {
    state: GameState,
    last_activity: Instant,
}

/// Owns all in-progress games, one independent `GameState` per session. The
/// human always plays X and moves first; the agent answers as O. Idle
/// sessions are dropped by the periodic cleanup task.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    agent: Arc<dyn Evaluator + Send + Sync>,
    rewards: RewardScheme,
}

impl SessionManager {
    pub fn new(agent: Arc<dyn Evaluator + Send + Sync>, rewards: RewardScheme) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            agent,
            rewards,
        }
    }

    pub fn new_session_id() -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(16)
            .map(char::from)
            .collect()
    }

    /// Starts (or restarts) the given session with a fresh game.
    pub async fn reset(&self, session_id: &str) -> GameState {
        let state = GameState::new();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            session_id.to_string(),
            Session {
                state: state.clone(),
                last_activity: Instant::now(),
            },
        );
        log!("[session:{}] Game reset", session_id);
        state
    }

    /// Drops every session idle for at least `timeout`; returns how many
    /// were removed. Finished games age out the same way as abandoned ones.
    pub async fn evict_inactive(&self, timeout: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_activity.elapsed() < timeout);
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Applies the human move and, if the game is still open, the agent's
    /// reply. Bad input is rejected before the engine sees it, so a rejected
    /// turn never ends the episode.
    pub async fn play_turn(&self, session_id: &str, cell: usize) -> Result<TurnReport, String> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| format!("Unknown session {}", session_id))?;
        session.last_activity = Instant::now();
        let state = &mut session.state;

        if state.terminal {
            return Err("Game is already over".to_string());
        }
        if cell >= CELL_COUNT {
            return Err("Cell number must be between 0 and 8".to_string());
        }
        if state.board.get(cell) != Mark::Empty {
            return Err("Cell already taken".to_string());
        }

        let human_outcome = state.step(cell, &self.rewards);
        if human_outcome.is_terminal() {
            log!(
                "[session:{}] Human move {} ended the game: {:?}",
                session_id,
                cell,
                human_outcome
            );
            return Ok(TurnReport {
                state: state.clone(),
                human_outcome,
                agent_move: None,
            });
        }

        let agent_cell = select_move(&state.board, self.agent.as_ref())
            .ok_or_else(|| "No legal moves left for the agent".to_string())?;
        let agent_outcome = state.step(agent_cell, &self.rewards);
        log!(
            "[session:{}] Human played {}, agent answered {}",
            session_id,
            cell,
            agent_cell
        );

        Ok(TurnReport {
            state: state.clone(),
            human_outcome,
            agent_move: Some((agent_cell, agent_outcome)),
        })
    }
}
