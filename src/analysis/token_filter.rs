//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. They run in
//! the order they were added to a
//! [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer).
//!
//! # Examples
//!
//! ```
//! use doclex::analysis::token::Token;
//! use doclex::analysis::token_filter::Filter;
//! use doclex::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;

pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
