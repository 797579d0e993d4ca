use outlet_router::pattern::{PatternError, compile_pattern, scan_placeholders};

#[test]
fn pattern_compiler_when_template_is_literal_then_only_exact_path_matches() {
    let pattern = compile_pattern("/about/team").expect("literal template should compile");

    assert!(pattern.is_match("/about/team"));
    assert!(!pattern.is_match("/about/team/"));
    assert!(!pattern.is_match("/about"));
    assert!(!pattern.is_match("/company/about/team"));
    assert!(pattern.param_names().is_empty());
}

#[test]
fn pattern_compiler_when_placeholders_present_then_each_captures_one_segment() {
    let pattern = compile_pattern("/orgs/:org/repos/:repo").expect("template should compile");

    let caps = pattern
        .captures("/orgs/acme/repos/rocket")
        .expect("path should match");
    assert_eq!(pattern.param_names(), ["org", "repo"]);
    assert_eq!(caps.values, vec!["acme", "rocket"]);
    assert!(pattern.captures("/orgs/acme/repos/").is_none());
    assert!(pattern.captures("/orgs/acme/team/repos/rocket").is_none());
}

#[test]
fn pattern_compiler_when_placeholder_shares_segment_then_literal_suffix_is_kept() {
    let pattern = compile_pattern("/files/:name.txt").expect("template should compile");

    let caps = pattern.captures("/files/report.txt").expect("path should match");
    assert_eq!(caps.values, vec!["report"]);
    assert!(!pattern.is_match("/files/report.md"));
    assert!(!pattern.is_match("/files/reportxtxt"));
}

#[test]
fn pattern_compiler_when_template_has_regex_metacharacters_then_they_match_literally() {
    let pattern = compile_pattern("/a+b/(x)/:id").expect("template should compile");

    assert!(pattern.is_match("/a+b/(x)/1"));
    assert!(!pattern.is_match("/aab/x/1"));
}

#[test]
fn pattern_compiler_when_names_repeat_then_scan_keeps_order_and_duplicates() {
    let names = scan_placeholders("/:kind/:id/related/:kind");

    assert_eq!(names.as_slice(), ["kind", "id", "kind"]);
    assert!(scan_placeholders("/plain/path").is_empty());
}

#[test]
fn pattern_compiler_when_colon_has_no_name_then_it_is_literal() {
    let pattern = compile_pattern("/time/:/now").expect("template should compile");

    assert!(pattern.param_names().is_empty());
    assert!(pattern.is_match("/time/:/now"));
}

#[test]
fn pattern_compiler_when_templates_compared_then_literals_outrank_placeholders() {
    let literal = compile_pattern("/items/new").expect("template should compile");
    let placeholder = compile_pattern("/items/:id").expect("template should compile");
    let root = compile_pattern("/").expect("template should compile");

    assert!(literal.score() > placeholder.score());
    assert!(placeholder.score() > root.score());
}

#[test]
fn pattern_compiler_error_when_displayed_then_names_template() {
    let err = PatternError::InvalidRegex {
        template: "/broken".to_string(),
        message: "unbalanced".to_string(),
    };

    assert!(err.to_string().contains("/broken"));
}
