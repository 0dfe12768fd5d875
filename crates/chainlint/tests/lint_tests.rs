use chainlint::*;
use pretty_assertions::assert_eq;

// Helper to lint a single chain expression with the default linter
fn lint(src: &str) -> Report {
    Linter::new().lint_expr(src).expect("lint failed")
}

// Helper returning the rule names that fired, in order
fn fired(src: &str) -> Vec<String> {
    lint(src).diagnostics.into_iter().map(|d| d.rule).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Well-Ordered Chains
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_canonical_chain_is_clean() {
    let report = lint(
        "Modifier.size(40).offset(x, y).rotate(deg).shadow(4).clip(shape)\
         .background(color).border(stroke).padding(8).semantics(props)",
    );
    assert!(report.is_clean());
}

#[test]
fn test_single_modifier_is_clean() {
    assert!(lint("Modifier.padding(8)").is_clean());
}

#[test]
fn test_consecutive_same_category_is_clean() {
    assert!(lint("Modifier.padding(16).padding(8)").is_clean());
}

// ═══════════════════════════════════════════════════════════════════════
// Ordering Violations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_background_after_padding_warns() {
    let report = lint("Modifier.padding(8).background(color)");
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.diagnostics[0].rule, "ordering");
}

#[test]
fn test_layout_after_interaction_warns() {
    let report = lint("Modifier.clickable(handler).size(40)");
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.rule == "ordering" && d.message.contains("`size`")));
}

#[test]
fn test_ordering_message_names_both_calls() {
    let report = lint("Modifier.border(stroke).clip(shape)");
    let diag = &report.diagnostics[0];
    assert_eq!(diag.rule, "ordering");
    assert!(diag.message.contains("`clip` (clip)"));
    assert!(diag.message.contains("`border` (border)"));
}

// ═══════════════════════════════════════════════════════════════════════
// Duplicates and Conflicts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_one_shot() {
    assert_eq!(fired("Modifier.test_tag(a).test_tag(b)"), vec!["duplicate"]);
}

#[test]
fn test_shadowed_size_constraint() {
    let report = lint("Modifier.fill_max_width().width(40)");
    assert!(report.diagnostics.iter().any(|d| d.rule == "conflict"));
}

#[test]
fn test_repeated_background_is_allowed() {
    // Two backgrounds layer; not a duplicate
    assert!(lint("Modifier.background(a).background(b)").is_clean());
}

// ═══════════════════════════════════════════════════════════════════════
// Hints
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_touch_target_hint_severity() {
    let report = lint("Modifier.background(c).padding(8).clickable(f)");
    let hint = report
        .diagnostics
        .iter()
        .find(|d| d.rule == "touch-target")
        .expect("touch-target should fire");
    assert_eq!(hint.severity, Severity::Hint);
}

#[test]
fn test_unknown_modifier_hint() {
    let report = lint("Modifier.size(40).paddding(8)");
    assert_eq!(fired("Modifier.size(40).paddding(8)"), vec!["unknown-modifier"]);
    assert_eq!(report.count(Severity::Hint), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Reports
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_multiple_rules_fire_together() {
    // padding before clickable: ordering is clean (Padding < Interaction)
    // but touch-target hints, and the second size is duplicate + conflict-free
    let rules = fired("Modifier.padding(8).clickable(f).size(40).size(48)");
    assert!(rules.contains(&"ordering".to_string()));
    assert!(rules.contains(&"duplicate".to_string()));
    assert!(rules.contains(&"touch-target".to_string()));
}

#[test]
fn test_report_text_rendering() {
    let report = lint("Modifier.padding(8).background(c)");
    let text = report.to_string();
    assert!(text.contains("warning[ordering]"));
    assert!(text.contains("1 chain checked"));
}

#[test]
fn test_report_json_rendering() {
    let report = lint("Modifier.padding(8).background(c)");
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["chains"], 1);
    assert_eq!(value["diagnostics"][0]["rule"], "ordering");
}

#[test]
fn test_report_merge() {
    let linter = Linter::new();
    let mut total = Report::new();
    total.merge(linter.lint_expr("Modifier.padding(8).background(c)").unwrap());
    total.merge(linter.lint_expr("Modifier.size(40)").unwrap());

    assert_eq!(total.chains, 2);
    assert_eq!(total.diagnostics.len(), 1);
    assert_eq!(total.diagnostics[0].chain, 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Determinism
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_diagnostics_are_deterministic() {
    let src = "Modifier.clickable(f).padding(8).background(c).mystery()";
    let first = lint(src);
    let second = lint(src);
    assert_eq!(first.diagnostics, second.diagnostics);
}
