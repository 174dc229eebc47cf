//! Token counting module
//!
//! Counts tokens with the cl100k_base byte-pair encoding via tiktoken.
//! The encoder is loaded once on first use and shared for the process
//! lifetime. The vocabulary is fixed; there is no fallback estimator, so
//! a load failure is reported to the caller instead of degrading counts.

use once_cell::sync::Lazy;
use thiserror::Error;
use tiktoken_rs::{cl100k_base, CoreBPE};

static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("failed to load cl100k_base: {}", e)));

/// The cl100k_base encoding could not be initialized.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TokenizerError(String);

/// Count tokens in text using the cl100k_base encoding.
///
/// Pure with respect to the text: the same input always yields the same
/// count. Special-token markers in the text are encoded as ordinary bytes.
pub fn count_tokens(text: &str) -> Result<usize, TokenizerError> {
    if text.is_empty() {
        return Ok(0);
    }

    let bpe = CL100K_BPE
        .as_ref()
        .map_err(|e| TokenizerError(e.clone()))?;
    Ok(bpe.encode_ordinary(text).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens_empty() {
        assert_eq!(count_tokens("").unwrap(), 0);
    }

    #[test]
    fn test_count_tokens_ascii() {
        let tokens = count_tokens("Hello, world!").unwrap();
        assert!(tokens > 0 && tokens < 10);
    }

    #[test]
    fn test_count_tokens_code() {
        let text = r#"fn main() { println!("Hello"); }"#;
        let tokens = count_tokens(text).unwrap();
        assert!(tokens > 0);
    }

    #[test]
    fn test_count_tokens_cjk() {
        let tokens = count_tokens("你好世界").unwrap();
        assert!(tokens > 0);
    }

    #[test]
    fn test_count_is_deterministic() {
        let text = "def f(): pass";
        assert_eq!(count_tokens(text).unwrap(), count_tokens(text).unwrap());
    }

    #[test]
    fn test_longer_text_has_more_tokens() {
        let short = count_tokens("one two three").unwrap();
        let long = count_tokens("one two three four five six seven eight").unwrap();
        assert!(long > short);
    }

    #[test]
    fn test_special_token_text_counts_as_plain_bytes() {
        // Ordinary encoding must not reject or collapse marker-like text.
        let tokens = count_tokens("<|endoftext|>").unwrap();
        assert!(tokens > 1);
    }
}
