//! Integration tests for recomp-eval crate.
//!
//! This file exercises the full pipeline: parse a configuration string,
//! evaluate it against a registry, and check the resulting pattern and
//! option tree.

use recomp_decl::Registry;
use recomp_eval::{EvalError, Evaluated, Mode, cl_eval, eval_bounded, pattern_eval};
use recomp_parser::parse;
use recomp_syntax::Value;

fn registry() -> Registry {
    let mut registry = Registry::new();
    let declarations = [
        (
            "compressor",
            "lzss(coder: static coder = binary, threshold: int = 3)",
        ),
        (
            "compressor",
            "lcpcomp(strategy: static strategy, coder: static coder = binary)",
        ),
        ("compressor", "noop(mode: string = \"plain\")"),
        ("coder", "binary(bit_width: int = 8)"),
        ("coder", "huff"),
        ("strategy", "naive"),
        ("strategy", "plcppeaks"),
    ];
    for (ty, text) in declarations {
        registry.register_parsed(ty, text, "").unwrap();
    }
    registry
}

fn eval_text(text: &str, ty: &str, registry: &Registry) -> Result<Evaluated, EvalError> {
    cl_eval(parse(text).unwrap(), ty, registry, None)
}

fn pattern_text(text: &str, ty: &str, registry: &Registry) -> String {
    pattern_eval(parse(text).unwrap(), ty, registry)
        .unwrap()
        .to_string()
}

// ============================================================================
// Defaults and the Option Tree
// ============================================================================

#[test]
fn test_defaults_fill_everything() {
    let registry = registry();
    let result = eval_text("lzss", "compressor", &registry).unwrap();

    assert_eq!(result.pattern.unwrap().to_string(), "lzss(coder = binary)");

    let options = result.options;
    assert_eq!(options.as_str(), "lzss");
    assert_eq!(options.lookup("threshold").unwrap().as_int(), Some(3));
    assert_eq!(options.lookup("coder").unwrap().as_str(), "binary");
    assert_eq!(options.lookup("coder.bit_width").unwrap().as_uint(), Some(8));
}

#[test]
fn test_explicit_arguments_override_defaults() {
    let registry = registry();
    let result = eval_text(
        "lzss(coder = binary(bit_width = 16), threshold = 9)",
        "compressor",
        &registry,
    )
    .unwrap();

    assert_eq!(result.options.lookup("threshold").unwrap().as_int(), Some(9));
    assert_eq!(
        result.options.lookup("coder.bit_width").unwrap().as_uint(),
        Some(16),
    );
}

#[test]
fn test_last_binding_wins() {
    let registry = registry();
    let result = eval_text(
        "lzss(threshold = 1, threshold = 9)",
        "compressor",
        &registry,
    )
    .unwrap();
    assert_eq!(result.options.lookup("threshold").unwrap().as_int(), Some(9));
}

#[test]
fn test_string_parameter_stays_textual() {
    let registry = registry();

    let result = eval_text("noop", "compressor", &registry).unwrap();
    assert_eq!(result.options.lookup("mode").unwrap().as_str(), "plain");

    let result = eval_text("noop(mode = \"fast\")", "compressor", &registry).unwrap();
    assert_eq!(result.options.lookup("mode").unwrap().as_str(), "fast");
}

#[test]
fn test_nested_configuration() {
    let registry = registry();
    let result = eval_text(
        "lcpcomp(strategy = naive, coder = binary(bit_width = 16))",
        "compressor",
        &registry,
    )
    .unwrap();

    // Pattern arguments follow declaration order, not invocation order.
    assert_eq!(
        result.pattern.unwrap().to_string(),
        "lcpcomp(strategy = naive, coder = binary)",
    );
    assert_eq!(
        result.options.lookup("coder.bit_width").unwrap().as_uint(),
        Some(16),
    );
}

#[test]
fn test_option_tree_display() {
    let registry = registry();
    let result = eval_text("lzss", "compressor", &registry).unwrap();
    assert_eq!(
        result.options.to_string(),
        "lzss(coder = binary(bit_width = \"8\"), threshold = \"3\")",
    );
}

// ============================================================================
// Positional Binding
// ============================================================================

#[test]
fn test_positional_arguments_bind_in_declaration_order() {
    let registry = registry();
    let result = eval_text("lzss(huff, 5)", "compressor", &registry).unwrap();

    assert_eq!(result.pattern.unwrap().to_string(), "lzss(coder = huff)");
    assert_eq!(result.options.lookup("threshold").unwrap().as_int(), Some(5));
}

#[test]
fn test_positional_after_keyword_is_rejected() {
    let registry = registry();
    let err = eval_text("lzss(threshold = 1, huff)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::PositionalAfterKeyword { .. }));
}

#[test]
fn test_too_many_positional_arguments() {
    let registry = registry();
    let err = eval_text("lzss(huff, 1, 2)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::TooManyPositional { .. }));
}

#[test]
fn test_unknown_keyword_is_rejected() {
    let registry = registry();
    let err = eval_text("lzss(window = 3)", "compressor", &registry).unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnknownParameter { ref name, .. } if name == "window"
    ));
}

#[test]
fn test_type_annotation_outside_declaration_is_rejected() {
    let registry = registry();
    let err = eval_text("lzss(coder: static coder = huff)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::UnexpectedTypeAnnotation { .. }));
}

// ============================================================================
// Pattern Mode
// ============================================================================

#[test]
fn test_dynamic_variation_collapses_to_one_pattern() {
    let registry = registry();
    let a = pattern_text("lzss", "compressor", &registry);
    let b = pattern_text("lzss(threshold = 1)", "compressor", &registry);
    let c = pattern_text("lzss(threshold = 1000)", "compressor", &registry);
    assert_eq!(a, "lzss(coder = binary)");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_static_variation_changes_the_pattern() {
    let registry = registry();
    let a = pattern_text("lzss", "compressor", &registry);
    let b = pattern_text("lzss(coder = huff)", "compressor", &registry);
    assert_ne!(a, b);
    assert_eq!(b, "lzss(coder = huff)");
}

#[test]
fn test_pattern_mode_skips_missing_dynamic_values() {
    // `bit_width` has no default; pattern mode must not even ask for it.
    let mut registry = Registry::new();
    registry
        .register_parsed("coder", "binary(bit_width: int)", "")
        .unwrap();

    let pattern = pattern_eval(parse("binary").unwrap(), "coder", &registry).unwrap();
    assert_eq!(pattern.to_string(), "binary");
}

#[test]
fn test_primitive_reduces_to_empty_pattern() {
    let registry = registry();
    let pattern = pattern_eval(parse("\"text\"").unwrap(), "string", &registry).unwrap();
    assert_eq!(pattern, Default::default());
}

// ============================================================================
// Two-Phase Consistency
// ============================================================================

#[test]
fn test_second_phase_reproduces_first_phase_pattern() {
    let registry = registry();
    let configs = [
        "lzss",
        "lzss(coder = huff)",
        "lzss(coder = binary(bit_width = 16), threshold = 9)",
        "lcpcomp(strategy = plcppeaks)",
        "lcpcomp(strategy = naive, coder = binary)",
    ];
    for config in configs {
        let value = parse(config).unwrap();
        let pattern = pattern_eval(value.clone(), "compressor", &registry).unwrap();
        let result = cl_eval(value, "compressor", &registry, Some(pattern.to_ast())).unwrap();
        assert_eq!(result.pattern, Some(pattern), "inconsistent for {config:?}");
    }
}

#[test]
fn test_skeleton_fills_unspecified_static_parameters() {
    let registry = registry();
    let skeleton = parse("lzss(coder = huff)").unwrap();
    let result = cl_eval(parse("lzss").unwrap(), "compressor", &registry, Some(skeleton)).unwrap();

    // The skeleton replaces the declared default.
    assert_eq!(result.pattern.unwrap().to_string(), "lzss(coder = huff)");
    assert_eq!(result.options.lookup("coder").unwrap().as_str(), "huff");
}

#[test]
fn test_explicit_argument_wins_over_skeleton_value() {
    let registry = registry();
    let skeleton = parse("lzss(coder = binary)").unwrap();
    let result = cl_eval(
        parse("lzss(coder = binary(bit_width = 16))").unwrap(),
        "compressor",
        &registry,
        Some(skeleton),
    )
    .unwrap();

    // The skeleton's bare `binary` would have defaulted bit_width to 8.
    assert_eq!(
        result.options.lookup("coder.bit_width").unwrap().as_uint(),
        Some(16),
    );
}

// ============================================================================
// Skeleton Mismatches
// ============================================================================

#[test]
fn test_skeleton_name_mismatch() {
    let registry = registry();
    let skeleton = parse("lcpcomp(strategy = naive)").unwrap();
    let err = cl_eval(parse("lzss").unwrap(), "compressor", &registry, Some(skeleton)).unwrap_err();
    assert!(matches!(err, EvalError::SkeletonName { .. }));
}

#[test]
fn test_skeleton_keyword_mismatch() {
    let registry = registry();
    let skeleton = parse("lzss(strategy = huff)").unwrap();
    let err = cl_eval(parse("lzss").unwrap(), "compressor", &registry, Some(skeleton)).unwrap_err();
    assert!(matches!(
        err,
        EvalError::SkeletonKeyword { ref expected, ref found }
            if expected == "coder" && found == "strategy"
    ));
}

#[test]
fn test_skeleton_exhausted() {
    let registry = registry();
    // An entry is consumed per static parameter; a bare skeleton has none
    // to give.
    let skeleton = Value::bare("lzss");
    let err = cl_eval(parse("lzss").unwrap(), "compressor", &registry, Some(skeleton)).unwrap_err();
    assert!(matches!(
        err,
        EvalError::SkeletonExhausted { ref param } if param == "coder"
    ));
}

#[test]
fn test_skeleton_leftover() {
    let registry = registry();
    let skeleton = parse("lzss(coder = binary, extra = huff)").unwrap();
    let err = cl_eval(parse("lzss").unwrap(), "compressor", &registry, Some(skeleton)).unwrap_err();
    assert!(matches!(err, EvalError::SkeletonLeftover { count: 1, .. }));
}

// ============================================================================
// Evaluation Errors
// ============================================================================

#[test]
fn test_unknown_type() {
    let mut registry = Registry::new();
    registry
        .register_parsed("compressor", "odd(helper: static widget)", "")
        .unwrap();

    let err = eval_text("odd(helper = x)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::UnknownType { ref ty } if ty == "widget"));
}

#[test]
fn test_unknown_algorithm_at_top_level() {
    let registry = registry();
    let err = eval_text("doesnotexist", "compressor", &registry).unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnknownAlgorithm { ref ty, ref name }
            if ty == "compressor" && name == "doesnotexist"
    ));
}

#[test]
fn test_unknown_algorithm_in_sub_configuration() {
    let registry = registry();
    let err = eval_text("lzss(coder = doesnotexist)", "compressor", &registry).unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnknownAlgorithm { ref ty, .. } if ty == "coder"
    ));
}

#[test]
fn test_missing_required_value() {
    let registry = registry();
    // `strategy` has no default.
    let err = eval_text("lcpcomp", "compressor", &registry).unwrap_err();
    assert!(matches!(
        err,
        EvalError::MissingValue { ref param, .. } if param == "strategy"
    ));
}

#[test]
fn test_invocation_where_literal_expected() {
    let registry = registry();
    let err = eval_text("lzss(threshold = huff)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::ExpectedLiteral { ref ty, .. } if ty == "int"));
}

#[test]
fn test_literal_where_invocation_expected() {
    let registry = registry();
    let err = eval_text("lzss(coder = 3)", "compressor", &registry).unwrap_err();
    assert!(matches!(err, EvalError::ExpectedInvocation { ref ty, .. } if ty == "coder"));
}

#[test]
fn test_recursion_limit() {
    let registry = registry();
    let err = eval_bounded(
        parse("lzss").unwrap(),
        "compressor",
        &registry,
        Mode::Full,
        None,
        1,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::TooDeep { max_depth: 1 }));
}
