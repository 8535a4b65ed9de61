//! Prompt construction for validator calls

pub mod template;

pub use template::ReviewPromptTemplate;
