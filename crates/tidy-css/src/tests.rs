use crate::balance;
use crate::blocks;
use crate::comments;
use crate::correct;
use crate::corrections;
use crate::minify;
use crate::pipeline::{CssPipeline, PipelineOutcome};
use crate::validate;

// ========== Comment stripping ==========

#[test]
fn test_strip_single_comment() {
    assert_eq!(comments::strip_comments("a{/*x*/color:red;}"), "a{color:red;}");
}

#[test]
fn test_strip_multiple_comments_non_greedy() {
    assert_eq!(comments::strip_comments("/*a*/b/*c*/"), "b");
}

#[test]
fn test_strip_multiline_comment() {
    assert_eq!(comments::strip_comments("a /* multi\nline */ b"), "a  b");
}

#[test]
fn test_unterminated_comment_kept() {
    assert_eq!(comments::strip_comments("a{x:1;} /* open"), "a{x:1;} /* open");
}

// ========== Brace balance ==========

#[test]
fn test_balance_balanced() {
    let info = balance::analyze("a{x:1;} b{y:2;}");
    assert_eq!(info.missing_closing, 0);
    assert!(!info.has_extra_closing);
    assert!(info.is_balanced());
}

#[test]
fn test_balance_empty() {
    assert!(balance::analyze("").is_balanced());
}

#[test]
fn test_balance_missing_closing() {
    let info = balance::analyze("a{color:red");
    assert_eq!(info.missing_closing, 1);
    assert!(!info.has_extra_closing);
}

#[test]
fn test_balance_extra_closing() {
    let info = balance::analyze("a{color:red}}");
    assert_eq!(info.missing_closing, 0);
    assert!(info.has_extra_closing);
}

#[test]
fn test_balance_both_flags() {
    // Extra close first, unclosed open after: both reported
    let info = balance::analyze("}{");
    assert!(info.has_extra_closing);
    assert_eq!(info.missing_closing, 1);
}

#[test]
fn test_balance_clamped_depth_does_not_desync() {
    // The stray `}` must not swallow the later open brace
    let info = balance::analyze("}a{b{}");
    assert!(info.has_extra_closing);
    assert_eq!(info.missing_closing, 1);
}

// ========== Block extraction ==========

#[test]
fn test_blocks_flat() {
    assert_eq!(blocks::block_contents("a{x:1} b{y:2}"), vec!["x:1", "y:2"]);
}

#[test]
fn test_blocks_innermost_only() {
    // Nested rule blocks are not matched as a whole
    assert_eq!(blocks::block_contents("@media screen{a{color:red}}"), vec!["color:red"]);
}

#[test]
fn test_blocks_none() {
    assert!(blocks::block_contents("just a selector").is_empty());
}

#[test]
fn test_blocks_empty_block() {
    assert_eq!(blocks::block_contents("a{}"), vec![""]);
}

// ========== Correction table ==========

#[test]
fn test_correction_table() {
    let table = corrections::property_corrections();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get("colr"), Some(&"color"));
    assert_eq!(table.get("backgroung"), Some(&"background"));
    assert_eq!(table.get("color"), None);
}

// ========== Validation ==========

#[test]
fn test_validate_clean() {
    let report = validate::validate("a { color: red; }");
    assert!(report.is_valid());
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_validate_unmatched_bracket() {
    let report = validate::validate("a{color:red;");
    assert_eq!(report.errors, vec!["Unmatched bracket detected."]);
}

#[test]
fn test_validate_missing_semicolon_before_close() {
    let report = validate::validate("a{color:red}");
    assert_eq!(report.errors, vec!["Missing semicolon before } detected."]);
}

#[test]
fn test_validate_missing_semicolon_between_declarations() {
    assert!(validate::has_missing_semicolon("a{color:red\ndisplay:block;}"));
}

#[test]
fn test_validate_declaration_without_colon() {
    let report = validate::validate("a{color}");
    assert_eq!(report.errors, vec!["Invalid CSS property format detected."]);
}

#[test]
fn test_validate_empty_value() {
    let report = validate::validate("a{color:;}");
    assert_eq!(report.errors, vec!["Invalid CSS property format detected."]);
}

#[test]
fn test_validate_empty_property() {
    let report = validate::validate("a{:red;}");
    assert_eq!(report.errors, vec!["Invalid CSS property format detected."]);
}

#[test]
fn test_validate_multi_colon_value() {
    assert!(validate::validate("a{background:url(http://example.com/i.png);}").is_valid());
}

#[test]
fn test_validate_double_semicolon_filtered() {
    // Empty segments from `;;` are dropped before the property/value check
    assert!(validate::validate("a{color:red;;}").is_valid());
}

#[test]
fn test_validate_typo_is_warning_only() {
    let report = validate::validate("a{colr:red;}");
    assert!(report.is_valid());
    assert_eq!(report.warnings, vec![r#"Property typo found: "colr" -> "color""#]);
}

#[test]
fn test_validate_typo_every_occurrence() {
    let report = validate::validate("a{colr:red;} b{colr:blue;}");
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.warnings[0], report.warnings[1]);
}

#[test]
fn test_validate_all_checks_run() {
    // No short-circuit: stray close triggers both balance and semicolon
    // errors, typo warning still collected
    let report = validate::validate("a{colr:red}}");
    assert_eq!(
        report.errors,
        vec!["Unmatched bracket detected.", "Missing semicolon before } detected."]
    );
    assert_eq!(report.warnings.len(), 1);
}

// ========== Auto-correction ==========

#[test]
fn test_correct_semicolon_before_close() {
    let result = correct::auto_correct("a{color:red}");
    assert_eq!(result.text, "a{color:red;}");
    assert_eq!(result.fixes, vec!["Auto-corrected missing semicolon before }"]);
}

#[test]
fn test_correct_spelling_after_semicolon() {
    let result = correct::auto_correct("a{colr:red}");
    assert_eq!(result.text, "a{color:red;}");
    assert_eq!(
        result.fixes,
        vec![
            "Auto-corrected missing semicolon before }",
            "Corrected spelling: colr -> color",
        ]
    );
}

#[test]
fn test_correct_spelling_per_occurrence() {
    let result = correct::auto_correct("a{widht:1px;heigth:2px}");
    assert_eq!(result.text, "a{width:1px;height:2px;}");
    assert_eq!(
        result.fixes,
        vec![
            "Auto-corrected missing semicolon before }",
            "Corrected spelling: widht -> width",
            "Corrected spelling: heigth -> height",
        ]
    );
}

#[test]
fn test_correct_close_unclosed_block() {
    let result = correct::auto_correct("a{color:red;");
    assert_eq!(result.text, "a{color:red;}");
    assert_eq!(result.fixes, vec!["Auto-closed unclosed block at end of file"]);
}

#[test]
fn test_correct_close_multiple_blocks_single_log() {
    let result = correct::auto_correct("a{x:1;b{y:2;");
    assert_eq!(result.text, "a{x:1;b{y:2;}}");
    assert_eq!(result.fixes, vec!["Auto-closed unclosed block at end of file"]);
}

#[test]
fn test_correct_skips_close_when_stray_brace() {
    // Unsafe to guess which close is spurious
    let result = correct::auto_correct("a{color:red;}}");
    assert_eq!(result.text, "a{color:red;}}");
    assert!(result.fixes.is_empty());
}

#[test]
fn test_correct_noop_on_valid() {
    let result = correct::auto_correct("a{color:red;}");
    assert_eq!(result.text, "a{color:red;}");
    assert!(result.fixes.is_empty());
}

// ========== Minification ==========

#[test]
fn test_minify_basic() {
    assert_eq!(minify::minify("a { color : red ; }"), "a{color:red}");
}

#[test]
fn test_minify_newlines_and_blocks() {
    let css = "a {\n  color: red;\n}\n\nb { margin: 0; }";
    assert_eq!(minify::minify(css), "a{color:red}b{margin:0}");
}

#[test]
fn test_minify_combinators() {
    assert_eq!(minify::minify("a > b + c ~ d , e { x : y }"), "a>b+c~d,e{x:y}");
}

#[test]
fn test_minify_important_spacing() {
    assert_eq!(minify::minify("a{color:red !important;}"), "a{color:red!important}");
}

#[test]
fn test_minify_trailing_semicolon_single_pass() {
    // Only the `;` directly before `}` collapses
    assert_eq!(minify::minify("a{color:red;;}"), "a{color:red;}");
}

#[test]
fn test_minify_trims_ends() {
    assert_eq!(minify::minify("  a{x:y}  "), "a{x:y}");
}

#[test]
fn test_minify_idempotent() {
    let once = minify::minify("a {\n  color: red;\n  margin: 0 auto;\n}");
    assert_eq!(once, "a{color:red;margin:0 auto}");
    assert_eq!(minify::minify(&once), once);
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_empty_input() {
    let p = CssPipeline::default();
    assert_eq!(p.run(""), PipelineOutcome::EmptyInput);
    assert_eq!(p.run("   \n\t "), PipelineOutcome::EmptyInput);
}

#[test]
fn test_pipeline_valid_direct() {
    let p = CssPipeline::default();
    let outcome = p.run("a { color: red; }");
    assert_eq!(outcome, PipelineOutcome::Minified { output: "a{color:red}".into() });
}

#[test]
fn test_pipeline_round_trip() {
    // Valid input with no typos or missing semicolons minifies unchanged
    let input = "/* header */\na { color: red; }\n";
    let p = CssPipeline::default();
    let expected = minify::minify(&comments::strip_comments(input));
    assert_eq!(p.run(input), PipelineOutcome::Minified { output: expected.clone() });
    assert_eq!(expected, "a{color:red}");
}

#[test]
fn test_pipeline_comment_only_input() {
    let p = CssPipeline::default();
    assert_eq!(p.run("/* just a comment */"), PipelineOutcome::Minified { output: String::new() });
}

#[test]
fn test_pipeline_typo_survives_when_valid() {
    // Spelling fixes live in the corrector, which never runs on valid input
    let p = CssPipeline::default();
    let outcome = p.run("a{colr:red;}");
    assert_eq!(outcome, PipelineOutcome::Minified { output: "a{colr:red}".into() });
}

#[test]
fn test_pipeline_typo_corrected_when_invalid() {
    let p = CssPipeline::default();
    let outcome = p.run("a{colr:red}");
    assert_eq!(
        outcome,
        PipelineOutcome::CorrectedAndMinified {
            output: "a{color:red}".into(),
            fixes: vec![
                "Auto-corrected missing semicolon before }".into(),
                "Corrected spelling: colr -> color".into(),
            ],
        }
    );
}

#[test]
fn test_pipeline_closes_unclosed_block() {
    let p = CssPipeline::default();
    match p.run("a{color:red b{color:blue}") {
        PipelineOutcome::CorrectedAndMinified { output, fixes } => {
            assert_eq!(output, "a{color:red b{color:blue}}");
            assert!(fixes.iter().any(|f| f == "Auto-closed unclosed block at end of file"));
        }
        other => panic!("expected corrected outcome, got {other:?}"),
    }
}

#[test]
fn test_pipeline_rejects_stray_close() {
    let p = CssPipeline::default();
    assert_eq!(p.run("a{color:red}}"), PipelineOutcome::Rejected);
}

#[test]
fn test_pipeline_correction_disabled() {
    let p = CssPipeline::new(false);
    assert_eq!(p.run("a{color:red}"), PipelineOutcome::Rejected);
    assert_eq!(p.run("a{x:1;}"), PipelineOutcome::Minified { output: "a{x:1}".into() });
}

#[test]
fn test_pipeline_outcome_output_accessor() {
    let p = CssPipeline::default();
    assert_eq!(p.run("a{x:1;}").output(), Some("a{x:1}"));
    assert_eq!(p.run("a{color:red}}").output(), None);
    assert_eq!(p.run("").output(), None);
}

#[test]
fn test_pipeline_default_corrects() {
    assert!(CssPipeline::default().auto_correct);
}
