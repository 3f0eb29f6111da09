/// Voice provider trait and implementations (console + disabled stub).
use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

/// Fixed message shown when the speech capability is absent.
pub const MSG_VOICE_UNAVAILABLE: &str = "Voz no disponible en este entorno";

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("{MSG_VOICE_UNAVAILABLE}")]
    Unavailable,

    #[error("speech service error: {0}")]
    Service(String),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A blocking speech collaborator. Both calls are synchronous; any timeout
/// is imposed by the external service behind the implementation.
pub trait VoiceCapability {
    /// Capture one spoken command and return its transcript.
    fn transcribe(&mut self) -> Result<String, VoiceError>;

    /// Speak a reply back to the user.
    fn speak(&mut self, text: &str) -> Result<(), VoiceError>;

    fn is_available(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Console voice
// ---------------------------------------------------------------------------

/// Functioning implementation for a terminal host: the transcript is a line
/// read from stdin, speech is a line written to stdout.
pub struct ConsoleVoice;

impl VoiceCapability for ConsoleVoice {
    fn transcribe(&mut self) -> Result<String, VoiceError> {
        info!("[Voice] listening on stdin");
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| VoiceError::Service(e.to_string()))?;
        Ok(line.trim().to_string())
    }

    fn speak(&mut self, text: &str) -> Result<(), VoiceError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "🔊 {}", text).map_err(|e| VoiceError::Service(e.to_string()))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Disabled stub
// ---------------------------------------------------------------------------

/// Stub wired when no speech service exists. Every call returns the fixed
/// unavailable result; the feature is disabled, never crashed into.
pub struct NoVoice;

impl VoiceCapability for NoVoice {
    fn transcribe(&mut self) -> Result<String, VoiceError> {
        Err(VoiceError::Unavailable)
    }

    fn speak(&mut self, _text: &str) -> Result<(), VoiceError> {
        Err(VoiceError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Which provider to wire, decided once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceProviderKind {
    Console,
    Disabled,
}

pub fn create_voice(kind: VoiceProviderKind) -> Box<dyn VoiceCapability> {
    match kind {
        VoiceProviderKind::Console => Box::new(ConsoleVoice),
        VoiceProviderKind::Disabled => Box::new(NoVoice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_stub_reports_unavailable() {
        let mut voice = NoVoice;
        assert!(!voice.is_available());
        let err = voice.transcribe().unwrap_err();
        assert_eq!(err.to_string(), MSG_VOICE_UNAVAILABLE);
        assert!(voice.speak("hola").is_err());
    }

    #[test]
    fn factory_selects_the_stub() {
        let voice = create_voice(VoiceProviderKind::Disabled);
        assert!(!voice.is_available());
    }
}
