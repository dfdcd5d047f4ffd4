//! Core logic: model-code expansion and the staging grid

pub mod expander;
pub mod staging;

pub use expander::{
    expand_text, expand_token, match_token, CodeMatch, GrammarMatcher, ModelCodePattern, Tokenizer,
};
pub use staging::{FormFields, FormReset, ModelTable, StagingGrid};
