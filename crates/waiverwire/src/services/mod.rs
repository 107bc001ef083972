pub mod grok;

// Re-exports
pub use grok::GrokClient;
