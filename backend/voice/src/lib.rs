//! Speech capability for Repricer.
//!
//! Voice is an optional external capability: commands may arrive as speech
//! and replies may be spoken back. The engine never talks to audio hardware;
//! it goes through `VoiceCapability`, and a host that has no speech service
//! wires the disabled stub instead of probing for failures at call time.

pub mod engine;

pub use engine::{
    create_voice, ConsoleVoice, NoVoice, VoiceCapability, VoiceError, VoiceProviderKind,
    MSG_VOICE_UNAVAILABLE,
};
