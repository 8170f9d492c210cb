use anyhow::Context;
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::Path;
use tract_core::prelude::*;

use super::{FaceClassifier, INPUT_SIZE, Prediction, labels, top_prediction};

/// TensorFlow Lite image classifier loaded once at startup.
pub struct TfliteClassifier {
    model: TypedRunnableModel<TypedModel>,
    labels: Vec<String>,
}

impl TfliteClassifier {
    pub fn load(model_path: &Path, labels_path: &Path) -> anyhow::Result<Self> {
        let labels = labels::load_labels(labels_path)?;

        let model = tract_tflite::tflite()
            .model_for_path(model_path)
            .with_context(|| format!("loading model {}", model_path.display()))?
            .into_optimized()?
            .into_runnable()?;

        tracing::info!(
            model = %model_path.display(),
            labels = labels.len(),
            "Classifier loaded"
        );

        Ok(Self { model, labels })
    }
}

impl FaceClassifier for TfliteClassifier {
    fn classify(&self, image: &RgbImage) -> anyhow::Result<Prediction> {
        let input = preprocess(image);
        let outputs = self.model.run(tvec!(input.into()))?;

        let scores: Vec<f32> = outputs[0].to_array_view::<f32>()?.iter().copied().collect();
        top_prediction(&scores, &self.labels)
    }
}

/// Resizes to the model input and scales pixels to `[0, 1]`, NHWC layout.
pub fn preprocess(image: &RgbImage) -> Tensor {
    let resized = imageops::resize(image, INPUT_SIZE, INPUT_SIZE, FilterType::CatmullRom);
    let side = INPUT_SIZE as usize;

    tract_ndarray::Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
    .into()
}
