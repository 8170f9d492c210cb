pub mod labels;
pub mod tflite;

use image::RgbImage;

pub use tflite::TfliteClassifier;

/// Side length of the square RGB input the model expects.
pub const INPUT_SIZE: u32 = 224;

/// A face is accepted only when the top score is strictly above this.
pub const MIN_CONFIDENCE: f32 = 0.80;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

impl Prediction {
    /// True when the model recognised `intern_id` with enough confidence.
    pub fn matches(&self, intern_id: &str) -> bool {
        self.label == intern_id && self.confidence > MIN_CONFIDENCE
    }
}

pub trait FaceClassifier: Send + Sync {
    fn classify(&self, image: &RgbImage) -> anyhow::Result<Prediction>;
}

/// Picks the highest score; the first index wins a tie.
pub fn top_prediction(scores: &[f32], labels: &[String]) -> anyhow::Result<Prediction> {
    anyhow::ensure!(
        scores.len() == labels.len(),
        "model produced {} scores for {} labels",
        scores.len(),
        labels.len()
    );

    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((idx, score));
        }
    }

    let (idx, confidence) = best.ok_or_else(|| anyhow::anyhow!("model produced no usable scores"))?;

    Ok(Prediction {
        label: labels[idx].clone(),
        confidence,
    })
}
