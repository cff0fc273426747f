use std::process::Stdio;

use async_trait::async_trait;
use sacristan_common::error::GenerationError;
use sacristan_common::generation::TextGenerator;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::debug;

const REFUSAL_HINTS: [&str; 4] = ["recitation", "safety", "content policy", "blocked"];
const AUTH_HINTS: [&str; 5] = ["401", "403", "api key", "api_key", "unauthorized"];

/// Runs an external command per prompt: the prompt goes to its stdin, the
/// generated text is read from its stdout.
///
/// A non-zero exit is classified by the content of stderr.
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a command line on whitespace, e.g. `llm -m gemini-1.5-pro`.
    pub fn from_command_line(command_line: &str) -> anyhow::Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty generator command"))?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Writes the prompt and closes stdin. The exit status decides the outcome,
    /// so a child that stops reading early is not an error here.
    async fn feed(&self, stdin: Option<ChildStdin>, prompt: &str) {
        let Some(mut stdin) = stdin else {
            return;
        };
        if let Err(e) = stdin.write_all(prompt.as_bytes()).await {
            debug!(program = %self.program, error = %e, "generator closed stdin early");
        }
    }
}

#[async_trait]
impl TextGenerator for CommandGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GenerationError::Transient(format!("cannot start {}: {e}", self.program)))?;

        // Output is drained while the prompt is still being written, so a child
        // that answers before reading all of stdin cannot fill its pipes and stall.
        let stdin = child.stdin.take();
        let (_, output) = tokio::join!(self.feed(stdin, prompt), child.wait_with_output());
        let output =
            output.map_err(|e| GenerationError::Transient(format!("waiting for {}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(program = %self.program, status = ?output.status, bytes = stdout.len(), "generator exited");

        if !output.status.success() {
            return Err(classify_failure(&stderr));
        }
        if stdout.trim().is_empty() {
            return Err(GenerationError::IncompleteGeneration(format!(
                "{} produced no output",
                self.program
            )));
        }
        Ok(stdout)
    }
}

/// Maps the stderr of a failed run onto an outcome class.
pub fn classify_failure(stderr: &str) -> GenerationError {
    let lower = stderr.to_lowercase();
    let message = stderr.trim().to_string();
    if REFUSAL_HINTS.iter().any(|hint| lower.contains(hint)) {
        GenerationError::ContentPolicyRefusal(message)
    } else if AUTH_HINTS.iter().any(|hint| lower.contains(hint)) {
        GenerationError::Auth(message)
    } else {
        GenerationError::Transient(message)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sh(script: &str) -> CommandGenerator {
        CommandGenerator::new("sh", vec!["-c".into(), script.into()])
    }

    #[test]
    fn stderr_classification() {
        assert!(matches!(
            classify_failure("finishReason: RECITATION"),
            GenerationError::ContentPolicyRefusal(_)
        ));
        assert!(matches!(
            classify_failure("HTTP 403: API key not valid"),
            GenerationError::Auth(_)
        ));
        assert!(classify_failure("HTTP 503 overloaded").is_transient());
    }

    #[test]
    fn parses_command_lines() {
        let generator = CommandGenerator::from_command_line("llm -m gemini").unwrap();
        assert_eq!(generator.program(), "llm");
        assert_eq!(generator.args, vec!["-m", "gemini"]);
        assert!(CommandGenerator::from_command_line("   ").is_err());
    }

    #[tokio::test]
    async fn pipes_prompt_through_the_command() {
        let text = sh("cat").generate("Oremos.").await.unwrap();
        assert_eq!(text, "Oremos.");
    }

    #[tokio::test]
    async fn large_prompts_stream_through_without_stalling() {
        let prompt = "x".repeat(1 << 20);
        let text = tokio::time::timeout(Duration::from_secs(10), sh("cat").generate(&prompt))
            .await
            .expect("generator stalled on a large prompt")
            .unwrap();
        assert_eq!(text.len(), prompt.len());
    }

    #[tokio::test]
    async fn failed_exit_is_classified() {
        let err = sh("echo 'blocked: RECITATION' >&2; exit 1").generate("p").await.unwrap_err();
        assert!(err.is_reframable());
    }

    #[tokio::test]
    async fn empty_output_is_incomplete() {
        let err = sh("cat > /dev/null").generate("p").await.unwrap_err();
        assert!(matches!(err, GenerationError::IncompleteGeneration(_)));
    }

    #[tokio::test]
    async fn missing_program_is_transient() {
        let err = CommandGenerator::new("/nonexistent/sacristan-generator", vec![])
            .generate("p")
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }
}
