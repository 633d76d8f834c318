mod heuristic;
mod mlp;

use std::sync::Arc;

use engine::{Evaluator, log};

pub use heuristic::ThreatHeuristic;
pub use mlp::Mlp;

/// Builds the agent's evaluator: a trained MLP when a model file is
/// configured, otherwise the hand-coded threat heuristic.
pub fn load_evaluator(
    model_path: Option<&str>,
) -> Result<Arc<dyn Evaluator + Send + Sync>, String> {
    match model_path {
        Some(path) => {
            let mlp = Mlp::load(path)?;
            log!("Loaded MLP value model from {}", path);
            Ok(Arc::new(mlp))
        }
        None => {
            log!("No model file configured, using the threat heuristic");
            Ok(Arc::new(ThreatHeuristic))
        }
    }
}
