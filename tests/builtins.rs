use listkit::{
    evaluate,
    interpreter::{
        evaluator::{core::Context, function::construct::table_repeat},
        value::core::Value,
    },
};

/// Evaluates `src` with a fixed seed and returns the printed last value.
fn eval_last(src: &str) -> String {
    let mut context = Context::with_seed(2024);
    match evaluate(src, &mut context) {
        Ok(values) => values.last()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| panic!("Script produced no value: {src}")),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(eval_last(src), expected, "while evaluating {src}");
}

fn assert_failure(src: &str) {
    if evaluate(src, &mut Context::with_seed(2024)).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn range_counts_up_to_inclusive_bound() {
    assert_value("Range[5]", "{1, 2, 3, 4, 5}");
    assert_value("Range[2, 5]", "{2, 3, 4, 5}");
    assert_value("Range[1, 10, 3]", "{1, 4, 7, 10}");
    assert_value("Range[1, 9, 3]", "{1, 4, 7}");
    assert_value("Range[0, 1, 0.25]", "{0.0, 0.25, 0.5, 0.75, 1.0}");
    assert_value("Range[0]", "{}");
}

#[test]
fn real_range_never_passes_its_bound() {
    assert_value("Range[0, 2.99999999995, 1.0]", "{0.0, 1.0, 2.0}");
    assert_value("Range[0, 0.3, 0.1]", "{0.0, 0.1, 0.2, 0.3}");
    assert_value("Range[0.5, 2.1, 0.5]", "{0.5, 1.0, 1.5, 2.0}");
}

#[test]
fn range_is_empty_when_start_exceeds_end() {
    assert_value("Range[5, 1]", "{}");
    assert_value("Range[5, 1, -1]", "{}");
}

#[test]
fn range_rejects_steps_that_never_progress() {
    assert_failure("Range[1, 5, 0]");
    assert_failure("Range[1, 5, -1]");
    assert_failure("Range[3, 3, -1]");
    assert_failure("Range[1, \"x\"]");
}

#[test]
fn table_applies_builtin_over_iteration() {
    assert_value("Table[EulerPhi, {1, 5}]", "{1, 1, 2, 2, 4}");
    assert_value("Table[EulerPhi, {3}]", "{1, 1, 2}");
    assert_value("Table[EulerPhi, {10, 4, -3}]", "{4, 6, 2}");
    assert_value("Table[EulerPhi, {2, 11, 4}]", "{1, 2, 4}");
}

#[test]
fn table_with_zero_step_evaluates_once() {
    assert_value("Table[EulerPhi, {7, 100, 0}]", "{6}");
}

#[test]
fn table_rejects_steps_pointing_away() {
    assert_failure("Table[EulerPhi, {1, 5, -1}]");
    assert_failure("Table[EulerPhi, {5, 1, 1}]");
    assert_failure("Table[EulerPhi, {1, 2, 3, 4}]");
    assert_failure("Table[{1}, 3]");
}

#[test]
fn table_with_count_invokes_generator_each_time() {
    let values = evaluate("Table[RandomInteger, 50]", &mut Context::with_seed(9)).unwrap();
    let Value::List(draws) = &values[0] else {
        panic!("Table should return a list");
    };
    assert_eq!(draws.len(), 50);
    assert!(draws.iter().all(|d| matches!(d, Value::Integer(0 | 1))));
    assert!(draws.contains(&Value::Integer(0)) && draws.contains(&Value::Integer(1)));

    assert_value("Table[RandomInteger, 0]", "{}");
    assert_failure("Table[RandomInteger, -1]");
    assert_failure("Table[EulerPhi, 2]");
}

#[test]
fn table_repeat_stops_at_first_error() {
    let mut calls = 0;
    let result = table_repeat(5, || {
        calls += 1;
        if calls == 3 { Err(listkit::error::RuntimeError::Overflow) } else { Ok(calls) }
    });
    assert!(result.is_err());
    assert_eq!(calls, 3);
}

#[test]
fn subdivide_spaces_points_evenly() {
    assert_value("Subdivide[0, 10, 5]", "{0, 2, 4, 6, 8, 10}");
    assert_value("Subdivide[0, 1, 4]", "{0.0, 0.25, 0.5, 0.75, 1.0}");
    assert_value("Subdivide[10, 0, 2]", "{10, 5, 0}");
    assert_value("Subdivide[3, 3, 2]", "{3, 3, 3}");
}

#[test]
fn subdivide_rejects_degenerate_counts() {
    assert_failure("Subdivide[0, 10, 0]");
    assert_failure("Subdivide[0, 10, -2]");
    assert_failure("Subdivide[0, 10, 2.5]");
}

#[test]
fn character_range_accepts_characters_and_codes() {
    assert_value("CharacterRange[\"a\", \"e\"]", "{\"a\", \"b\", \"c\", \"d\", \"e\"}");
    assert_value("CharacterRange[97, 99]", "{\"a\", \"b\", \"c\"}");
    assert_value("CharacterRange[\"e\", \"a\"]", "{}");
    assert_failure("CharacterRange[\"ab\", \"c\"]");
    assert_failure("CharacterRange[-1, 3]");
    assert_failure("CharacterRange[{1}, 3]");
}

#[test]
fn drop_with_counts() {
    assert_value("Drop[{1, 2, 3, 4, 5}, 2]", "{3, 4, 5}");
    assert_value("Drop[{1, 2, 3, 4, 5}, -2]", "{1, 2, 3}");
    assert_value("Drop[{1, 2, 3, 4, 5}, 0]", "{1, 2, 3, 4, 5}");
    assert_value("Drop[{1, 2, 3}, 10]", "{}");
    assert_value("Drop[{1, 2, 3}, -10]", "{}");
}

#[test]
fn drop_with_index_specifications() {
    assert_value("Drop[Range[6], {3}]", "{1, 2, 4, 5, 6}");
    assert_value("Drop[Range[6], {2, 4}]", "{1, 5, 6}");
    assert_value("Drop[Range[6], {1, 6, 2}]", "{2, 4, 6}");
    assert_value("Drop[Range[10], {2, 8, 3}]", "{1, 3, 4, 6, 7, 9, 10}");
}

#[test]
fn drop_ignores_out_of_range_positions() {
    assert_value("Drop[{1, 2, 3}, {5}]", "{1, 2, 3}");
    assert_value("Drop[{1, 2, 3}, {0}]", "{1, 2, 3}");
    assert_value("Drop[{1, 2, 3}, {2, 9}]", "{1}");
    assert_value("Drop[{1, 2, 3}, {3, 1}]", "{1, 2, 3}");
}

#[test]
fn drop_rejects_malformed_specifications() {
    assert_failure("Drop[{1, 2, 3}, {1, 3, 0}]");
    assert_failure("Drop[{1, 2, 3}, {1, 2, 3, 4}]");
    assert_failure("Drop[{1, 2, 3}, {}]");
    assert_failure("Drop[{1, 2, 3}, \"a\"]");
    assert_failure("Drop[5, 1]");
}

#[test]
fn drop_leaves_input_untouched() {
    let source = Value::from(vec![1.into(), 2.into(), 3.into()]);
    let mut context = Context::with_seed(0);
    let dropped = context.call("Drop", &[source.clone(), 1.into()]).unwrap();

    assert_eq!(dropped.to_string(), "{2, 3}");
    assert_eq!(source.to_string(), "{1, 2, 3}");
}

#[test]
fn flatten_by_level() {
    assert_value("Flatten[{1, {2, {3, {4}}}}]", "{1, 2, {3, {4}}}");
    assert_value("Flatten[{1, {2, {3, {4}}}}, 2]", "{1, 2, 3, {4}}");
    assert_value("Flatten[{1, {2, {3, {4}}}}, 10]", "{1, 2, 3, 4}");
    assert_value("Flatten[{1, {2, {3, {4}}}}, 0]", "{1, {2, {3, {4}}}}");
    assert_value("Flatten[{{}, {1}, {}}]", "{1}");
    assert_failure("Flatten[{1}, -1]");
    assert_failure("Flatten[1]");
}

#[test]
fn partition_groups_and_keeps_remainder() {
    assert_value("Partition[Range[7], 3]", "{{1, 2, 3}, {4, 5, 6}, {7}}");
    assert_value("Partition[Range[6], 3]", "{{1, 2, 3}, {4, 5, 6}}");
    assert_value("Partition[{1, 2}]", "{{1}, {2}}");
    assert_value("Partition[{}, 2]", "{}");
    assert_failure("Partition[{1, 2}, 0]");
    assert_failure("Partition[{1, 2}, -1]");
}

#[test]
fn riffle_interleaves_and_cycles() {
    assert_value("Riffle[{1, 2, 3}, {10}]", "{1, 10, 2, 10, 3}");
    assert_value("Riffle[{1, 2, 3}, {10, 20}]", "{1, 10, 2, 20, 3}");
    assert_value("Riffle[{1, 2, 3, 4}, {10, 20}]", "{1, 10, 2, 20, 3, 10, 4}");
    assert_value("Riffle[{1}, {10}]", "{1}");
    assert_value("Riffle[{}, {10}]", "{}");
    assert_failure("Riffle[{1, 2, 3}, {}]");
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let a = evaluate("Shuffle[Range[30], 3]", &mut Context::with_seed(11)).unwrap();
    let b = evaluate("Shuffle[Range[30], 3]", &mut Context::with_seed(11)).unwrap();
    assert_eq!(a, b);

    assert_value("Shuffle[Range[4], 0]", "{1, 2, 3, 4}");
    assert_value("Shuffle[{}]", "{}");
    assert_failure("Shuffle[{1, 2}, -1]");
}

#[test]
fn random_choice_with_weights_skips_zero_weights() {
    for seed in 0..200 {
        let values = evaluate("RandomChoice[{\"a\", \"b\", \"c\"}, {0, 0, 1}]",
                              &mut Context::with_seed(seed)).unwrap();
        assert_eq!(values[0], Value::from("c"));
    }
}

#[test]
fn random_choice_with_count_samples_with_replacement() {
    let values = evaluate("RandomChoice[{1, 2, 3}, 40]", &mut Context::with_seed(3)).unwrap();
    let picks = values[0].as_list().unwrap();
    assert_eq!(picks.len(), 40);
    assert!(picks.iter().all(|p| matches!(p, Value::Integer(1..=3))));

    assert_value("RandomChoice[{1, 2, 3}, 0]", "{}");
    assert_value("RandomChoice[{7}]", "7");
}

#[test]
fn random_choice_accepts_weights_whose_sum_overflows() {
    for seed in 0..50 {
        let values = evaluate("RandomChoice[{1, 2, 3}, {0, 1e308, 1e308}]",
                              &mut Context::with_seed(seed)).unwrap();
        assert!(matches!(values[0], Value::Integer(2 | 3)));
    }
}

#[test]
fn random_choice_reports_bad_input() {
    assert_failure("RandomChoice[{1, 2, 3}, {1, 1}]");
    assert_failure("RandomChoice[{1, 2}, {0, 0}]");
    assert_failure("RandomChoice[{1, 2}, {1, -1}]");
    assert_failure("RandomChoice[{}]");
    assert_failure("RandomChoice[{1, 2}, -3]");
    assert_failure("RandomChoice[{1, 2}, \"x\"]");
}

#[test]
fn random_numbers_stay_in_bounds() {
    let mut context = Context::with_seed(5);
    for _ in 0..100 {
        let values = evaluate("RandomReal[]\nRandomReal[2, 3]\nRandomInteger[-2, 2]", &mut context).unwrap();
        let r = values[0].as_real().unwrap();
        assert!((0.0..1.0).contains(&r));
        let r = values[1].as_real().unwrap();
        assert!((2.0..3.0).contains(&r));
        let i = values[2].as_integer().unwrap();
        assert!((-2..=2).contains(&i));
    }
    assert_failure("RandomReal[3, 2]");
    assert_failure("RandomReal[-1e308, 1e308]");
    assert_failure("RandomInteger[3, 2]");
}

#[test]
fn random_real_accepts_wide_finite_bounds() {
    let mut context = Context::with_seed(8);
    for _ in 0..100 {
        let values = evaluate("RandomReal[1e308]\nRandomReal[-1e308, 0]", &mut context).unwrap();
        assert!((0.0..1e308).contains(&values[0].as_real().unwrap()));
        assert!((-1e308..0.0).contains(&values[1].as_real().unwrap()));
    }
}

#[test]
fn map_applies_down_to_level() {
    assert_value("Map[EulerPhi, {1, 9, 17}]", "{1, 6, 16}");
    assert_value("Map[EulerPhi, {9, {9}}]", "{6, {9}}");
    assert_value("Map[EulerPhi, {9, {9, {9}}}, 2]", "{6, {6, {9}}}");
    assert_value("Map[EulerPhi, {9}, 0]", "{9}");
    assert_value("Map[EulerPhi, Range[4]]", "{1, 1, 2, 2}");
}

#[test]
fn map_reports_failures() {
    assert_failure("Map[EulerPhi, {9, \"x\"}]");
    assert_failure("Map[NoSuchFunction, {1}]");
    assert_failure("Map[{1}, {1}]");
    assert_failure("Map[EulerPhi, {1}, -1]");
}

#[test]
fn map_in_place_keeps_input_on_error() {
    use listkit::interpreter::evaluator::function::map::map_in_place;

    let mut items = vec![Value::Integer(9), Value::from("x")];
    let mut context = Context::with_seed(0);
    let result = map_in_place(&mut |v| context.call("EulerPhi", &[v]), &mut items, 1);

    assert!(result.is_err());
    assert_eq!(items, vec![Value::Integer(9), Value::from("x")]);
}

#[test]
fn gcd_folds_pairwise() {
    assert_value("GCD[12, 18, 30]", "6");
    assert_value("GCD[7]", "7");
    assert_value("GCD[-7]", "-7");
    assert_value("GCD[-4, 6]", "2");
    assert_value("GCD[0, 5]", "5");
    assert_value("GCD[0, 0]", "0");
    assert_value("GCD[17, 5]", "1");
    assert_failure("GCD[]");
    assert_failure("GCD[1.5, 3]");
}

#[test]
fn euler_phi_known_values() {
    assert_value("EulerPhi[1]", "1");
    assert_value("EulerPhi[9]", "6");
    assert_value("EulerPhi[17]", "16");
    assert_value("EulerPhi[100]", "40");
    assert_value("EulerPhi[9.0]", "6");
}

#[test]
fn euler_phi_rejects_non_integers() {
    assert_failure("EulerPhi[2.5]");
    assert_failure("EulerPhi[\"9\"]");
    assert_failure("EulerPhi[0]");
    assert_failure("EulerPhi[-3]");
    assert_failure("EulerPhi[{9}]");
}

#[test]
fn delete_duplicates_keeps_first_occurrences() {
    assert_value("DeleteDuplicates[{3, 1, 3, {1}, {1}, \"a\", \"a\"}]", "{3, 1, {1}, \"a\"}");
    assert_value("DeleteDuplicates[{}]", "{}");
}

#[test]
fn calls_nest_and_share_the_context() {
    assert_value("Partition[Flatten[{{1, 2}, {3}}], 2]", "{{1, 2}, {3}}");
    assert_value("Drop[Riffle[Range[3], {0}], 1]", "{0, 2, 0, 3}");
    assert_value("Length", "Length");
}

#[test]
fn reader_errors_are_reported() {
    assert_failure("Drop[{1, 2}");
    assert_failure("Riffle[{1}, {2}] ]");
    assert_failure("{1 2}");
    assert_failure("GCD[99999999999999999999]");
    assert_failure("Range[3] # Range[4]");
}

#[test]
fn comments_and_newlines_are_skipped() {
    assert_value("(* totient *) EulerPhi[9]", "6");
    assert_value("Range[2]\n\nRange[3]", "{1, 2, 3}");
}

#[test]
fn arity_is_checked_before_dispatch() {
    assert_failure("Riffle[{1}]");
    assert_failure("Drop[{1}, 1, 2]");
    assert_failure("Subdivide[0, 1]");
}

#[test]
fn registry_lists_every_builtin() {
    use listkit::interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, is_builtin};

    assert_eq!(BUILTIN_FUNCTIONS.len(), 16);
    assert!(BUILTIN_FUNCTIONS.iter().all(|name| is_builtin(name)));
    assert!(!is_builtin("Reverse"));
}

#[test]
fn builtins_reject_every_unsupported_argument_count() {
    use listkit::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    let mut context = Context::with_seed(0);
    for name in BUILTIN_FUNCTIONS {
        for count in 0..=4 {
            let args = vec![Value::Integer(1); count];
            // Any outcome is fine as long as it is a value or an error.
            let _ = context.call(name, &args);
        }
    }
    assert!(matches!(context.call("RandomReal", &[1.into(), 2.into(), 3.into()]),
                     Err(listkit::error::RuntimeError::ArgumentCountMismatch { found: 3, .. })));
}
