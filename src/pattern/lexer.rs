use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

pub type ParamNames = SmallVec<[String; 4]>;

/// Capture group substituted for each `:name` placeholder.
pub const PLACEHOLDER_CAPTURE: &str = "([^/]+)";

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r":([A-Za-z0-9_]+)").expect("placeholder token pattern should compile")
    })
}

/// Template split into literal runs and placeholder names, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

pub fn tokenize(template: &str) -> Vec<TemplateToken<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    for caps in placeholder_regex().captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            tokens.push(TemplateToken::Literal(&template[cursor..whole.start()]));
        }
        tokens.push(TemplateToken::Placeholder(name.as_str()));
        cursor = whole.end();
    }

    if cursor < template.len() {
        tokens.push(TemplateToken::Literal(&template[cursor..]));
    }

    tokens
}

/// Ordered placeholder names of a template. Duplicates are kept.
pub fn scan_placeholders(template: &str) -> ParamNames {
    tokenize(template)
        .into_iter()
        .filter_map(|token| match token {
            TemplateToken::Placeholder(name) => Some(name.to_string()),
            TemplateToken::Literal(_) => None,
        })
        .collect()
}
