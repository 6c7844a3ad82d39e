//! Analysis provider implementations

pub mod groq;
pub mod openai;
pub mod selector;
pub mod synthetic;

#[cfg(test)]
pub mod tests;

pub use groq::GroqProvider;
pub use openai::OpenAiProvider;
pub use selector::select_provider;
pub use synthetic::SyntheticProvider;
