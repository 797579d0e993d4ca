use super::lexer::{PLACEHOLDER_CAPTURE, ParamNames, TemplateToken, scan_placeholders, tokenize};
use super::scoring::{PatternScore, pattern_score};
use super::{PatternError, PatternResult};
use regex::Regex;

/// Anchored matcher for one route template plus its placeholder names.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
    param_names: ParamNames,
    score: PatternScore,
}

/// Result of a successful match: the whole matched path and one captured
/// substring per placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureResult {
    pub whole: String,
    pub values: Vec<String>,
}

impl CompiledPattern {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn score(&self) -> PatternScore {
        self.score
    }

    #[tracing::instrument(level = "trace", skip(self), fields(template = %self.template))]
    pub fn captures(&self, path: &str) -> Option<CaptureResult> {
        let caps = self.regex.captures(path)?;
        let whole = caps.get(0)?.as_str().to_string();
        let values = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect();
        Some(CaptureResult { whole, values })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Compiles `/literal/:placeholder` syntax into a `^...$` matcher. Literal
/// runs are escaped; each placeholder becomes one capture group.
#[tracing::instrument(level = "trace", fields(template = %template))]
pub fn compile_pattern(template: &str) -> PatternResult<CompiledPattern> {
    let tokens = tokenize(template);
    let mut source = String::with_capacity(template.len() * 2 + 2);

    source.push('^');
    for token in &tokens {
        match token {
            TemplateToken::Literal(literal) => source.push_str(&regex::escape(literal)),
            TemplateToken::Placeholder(_) => source.push_str(PLACEHOLDER_CAPTURE),
        }
    }
    source.push('$');

    let regex = Regex::new(&source).map_err(|err| PatternError::InvalidRegex {
        template: template.to_string(),
        message: err.to_string(),
    })?;

    Ok(CompiledPattern {
        template: template.to_string(),
        regex,
        score: pattern_score(&tokens),
        param_names: scan_placeholders(template),
    })
}
