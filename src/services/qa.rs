use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::t5;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::Tokenizer;

use super::{InferenceError, QaModel};

/// Task marker the model was fine-tuned with
const QUESTION_PREFIX: &str = "question: ";
/// Generation bound, matching the training sequence length
const MAX_ANSWER_TOKENS: usize = 64;
/// Fixed sampling seed; greedy decoding is deterministic anyway
const GENERATION_SEED: u64 = 299792458;

/// Generative health Q&A adapter
///
/// Wraps a fine-tuned T5 conditional-generation artifact exported to
/// `config.json` + `tokenizer.json` + `model.safetensors`. The decoder
/// keeps a KV cache between steps, so inference is serialized behind a
/// mutex; the loaded weights themselves are never mutated.
pub struct HealthQaBot {
    model: Mutex<t5::T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: t5::Config,
    device: Device,
}

impl HealthQaBot {
    /// Load tokenizer, config and weights from a local model directory
    pub fn load(model_dir: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let dir = model_dir.as_ref();
        let device = Device::Cpu;

        tracing::info!(model_dir = %dir.display(), "Loading health Q&A model");

        let config_contents = std::fs::read_to_string(dir.join("config.json"))
            .map_err(|e| InferenceError::ArtifactLoad(format!("config.json: {}", e)))?;
        let config: t5::Config = serde_json::from_str(&config_contents)
            .map_err(|e| InferenceError::ArtifactLoad(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(dir.join("tokenizer.json"))
            .map_err(|e| InferenceError::ArtifactLoad(format!("tokenizer: {}", e)))?;

        let weights_path = dir.join("model.safetensors");
        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| InferenceError::ArtifactLoad(format!("weights: {}", e)))?
        };

        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| InferenceError::ArtifactLoad(format!("model: {}", e)))?;

        tracing::info!("Health Q&A model loaded");

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
        })
    }

    /// Greedy decode bounded at `MAX_ANSWER_TOKENS` generated tokens
    fn generate(&self, input_text: &str) -> Result<String, InferenceError> {
        let encoding = self
            .tokenizer
            .encode(input_text, true)
            .map_err(|e| InferenceError::Tokenize(e.to_string()))?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| InferenceError::Inference(e.to_string()))?;

        let mut model = self
            .model
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        model.clear_kv_cache();

        let encoder_output = model
            .encode(&input_ids)
            .map_err(|e| InferenceError::Inference(e.to_string()))?;

        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let mut output_ids = vec![start_token];

        // No temperature: the processor falls back to argmax sampling
        let mut logits_processor = LogitsProcessor::new(GENERATION_SEED, None, None);

        for step in 0..MAX_ANSWER_TOKENS {
            // With the KV cache active only the newest token is fed back in
            let decoder_ids = if step == 0 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)
            } else {
                Tensor::new(&output_ids[output_ids.len() - 1..], &self.device)
            }
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| InferenceError::Inference(e.to_string()))?;

            let logits = model
                .decode(&decoder_ids, &encoder_output)
                .and_then(|l| l.squeeze(0))
                .map_err(|e| InferenceError::Inference(e.to_string()))?;

            let next_token = logits_processor
                .sample(&logits)
                .map_err(|e| InferenceError::Inference(e.to_string()))?;

            if next_token as usize == self.config.eos_token_id {
                break;
            }
            output_ids.push(next_token);
        }

        // Skip the decoder start token; suppress special tokens on decode
        let answer = self
            .tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| InferenceError::Inference(e.to_string()))?;

        Ok(answer.trim().to_string())
    }
}

impl QaModel for HealthQaBot {
    fn answer(&self, question: &str) -> Result<String, InferenceError> {
        let input_text = format!("{}{}", QUESTION_PREFIX, question);
        let answer = self.generate(&input_text)?;
        tracing::debug!(answer_chars = answer.len(), "Generated health answer");
        Ok(answer)
    }
}
