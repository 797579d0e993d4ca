use super::lexer::TemplateToken;

/// Specificity of a template. Compares greater when more specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PatternScore {
    pub literal_segments: u16,
    pub literal_bytes: u16,
    /// Stored inverted so fewer placeholders compare greater.
    pub placeholder_penalty: i16,
}

pub fn pattern_score(tokens: &[TemplateToken<'_>]) -> PatternScore {
    let mut score = PatternScore::default();
    let mut segment_has_placeholder = false;
    let mut segment_has_literal = false;

    for token in tokens {
        match token {
            TemplateToken::Placeholder(_) => {
                score.placeholder_penalty = score.placeholder_penalty.saturating_sub(1);
                segment_has_placeholder = true;
            }
            TemplateToken::Literal(literal) => {
                for (idx, part) in literal.split('/').enumerate() {
                    if idx > 0 {
                        close_segment(
                            &mut score,
                            &mut segment_has_literal,
                            &mut segment_has_placeholder,
                        );
                    }
                    if !part.is_empty() {
                        segment_has_literal = true;
                        score.literal_bytes = score.literal_bytes.saturating_add(part.len() as u16);
                    }
                }
            }
        }
    }
    close_segment(&mut score, &mut segment_has_literal, &mut segment_has_placeholder);

    score
}

fn close_segment(score: &mut PatternScore, has_literal: &mut bool, has_placeholder: &mut bool) {
    if *has_literal && !*has_placeholder {
        score.literal_segments = score.literal_segments.saturating_add(1);
    }
    *has_literal = false;
    *has_placeholder = false;
}
