use engine::{Board, CELL_COUNT, Evaluator};
use serde::Deserialize;

/// One dense layer: `weights[out][in]` plus one bias per output.
#[derive(Debug, Deserialize)]
pub struct Layer {
    pub weights: Vec<Vec<f32>>,
    pub biases: Vec<f32>,
}

/// Feed-forward value network over the flattened board encoding. Hidden
/// layers use ReLU, the output layer is linear, matching the network the
/// model weights were trained with (9-18-36-63-45-27-9 for the shipped
/// checkpoints). Inference only; training happens elsewhere.
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Reads layer weights from a JSON file: a list of `{weights, biases}`
    /// objects, first layer taking 9 inputs and last producing 9 scores.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read model file {}: {}", path, e))?;
        let layers: Vec<Layer> = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse model file {}: {}", path, e))?;
        Self::from_layers(layers)
    }

    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, String> {
        if layers.is_empty() {
            return Err("Model has no layers".to_string());
        }

        let mut input_size = CELL_COUNT;
        for (index, layer) in layers.iter().enumerate() {
            if layer.weights.len() != layer.biases.len() {
                return Err(format!(
                    "Layer {}: {} weight rows but {} biases",
                    index,
                    layer.weights.len(),
                    layer.biases.len()
                ));
            }
            for row in &layer.weights {
                if row.len() != input_size {
                    return Err(format!(
                        "Layer {}: expected {} inputs per row, got {}",
                        index,
                        input_size,
                        row.len()
                    ));
                }
            }
            input_size = layer.biases.len();
        }

        if input_size != CELL_COUNT {
            return Err(format!(
                "Final layer produces {} outputs, expected {}",
                input_size, CELL_COUNT
            ));
        }

        Ok(Self { layers })
    }

    fn forward(&self, input: [f32; CELL_COUNT]) -> [f32; CELL_COUNT] {
        let mut activations = input.to_vec();
        let last = self.layers.len() - 1;

        for (index, layer) in self.layers.iter().enumerate() {
            let mut next = Vec::with_capacity(layer.biases.len());
            for (row, bias) in layer.weights.iter().zip(&layer.biases) {
                let mut sum = *bias;
                for (weight, activation) in row.iter().zip(&activations) {
                    sum += weight * activation;
                }
                next.push(if index < last { sum.max(0.0) } else { sum });
            }
            activations = next;
        }

        let mut scores = [0.0; CELL_COUNT];
        scores.copy_from_slice(&activations);
        scores
    }
}

impl Evaluator for Mlp {
    fn evaluate(&self, board: &Board) -> [f32; CELL_COUNT] {
        self.forward(board.to_features())
    }
}
