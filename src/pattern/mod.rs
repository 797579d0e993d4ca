mod compiled;
mod error;
mod lexer;
mod scoring;

pub use compiled::{CaptureResult, CompiledPattern, compile_pattern};
pub use error::{PatternError, PatternResult};
pub use lexer::{PLACEHOLDER_CAPTURE, ParamNames, TemplateToken, scan_placeholders, tokenize};
pub use scoring::{PatternScore, pattern_score};
