use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use sacristan_common::error::GenerationError;
use sacristan_common::generation::TextGenerator;

type Responder = Box<dyn Fn(&str, usize) -> Result<String, GenerationError> + Send + Sync>;

enum Script {
    Sequence(Mutex<VecDeque<Result<String, GenerationError>>>),
    Responder(Responder),
}

/// A [`TextGenerator`] with canned answers, for tests and offline runs.
///
/// Every prompt received is recorded and can be inspected afterwards.
pub struct ScriptedGenerator {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Answers with `responses` in order. Once they run out, every further call
    /// reports an incomplete generation.
    pub fn sequence(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self::with_script(Script::Sequence(Mutex::new(responses.into())))
    }

    /// Answers with `responder(prompt, call_index)`.
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(&str, usize) -> Result<String, GenerationError> + Send + Sync + 'static,
    {
        Self::with_script(Script::Responder(Box::new(responder)))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let call = match self.prompts.lock() {
            Ok(mut prompts) => {
                prompts.push(prompt.to_string());
                prompts.len() - 1
            }
            Err(_) => 0,
        };

        match &self.script {
            Script::Responder(responder) => responder(prompt, call),
            Script::Sequence(queue) => queue
                .lock()
                .ok()
                .and_then(|mut q| q.pop_front())
                .unwrap_or_else(|| {
                    Err(GenerationError::IncompleteGeneration("script exhausted".into()))
                }),
        }
    }
}
