use serde::{Deserialize, Serialize};

/// A daily writing prompt. `weight` biases selection; prompts the
/// content team wants surfaced more often carry a higher weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrompt {
    pub id: String,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// Pick up to `count` prompts, weighted, without repeats.
///
/// `rand01` supplies uniform values in `[0, 1)`; it is injected so
/// selection is deterministic under test. Asking for more prompts than
/// exist returns them all.
pub fn pick_weighted(
    prompts: &[DailyPrompt],
    count: usize,
    mut rand01: impl FnMut() -> f64,
) -> Vec<DailyPrompt> {
    let mut available: Vec<DailyPrompt> = prompts.to_vec();
    let mut selected = Vec::new();

    for _ in 0..count.min(prompts.len()) {
        let total_weight: f64 = available.iter().map(|prompt| prompt.weight).sum();
        let mut remaining = rand01() * total_weight;

        let mut index = 0;
        for (i, prompt) in available.iter().enumerate() {
            remaining -= prompt.weight;
            if remaining <= 0.0 {
                index = i;
                break;
            }
        }

        selected.push(available.remove(index));
    }

    selected
}
