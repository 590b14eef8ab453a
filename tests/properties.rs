use listkit::interpreter::{
    evaluator::{
        core::Context,
        function::{
            construct::range,
            drop::drop_positions,
            flatten::flatten,
            number_theory::{euler_phi, gcd, gcd_pair},
            partition::partition,
            random::{shuffle, weighted_choice},
            riffle::riffle,
        },
    },
    value::{core::Value, index::IndexSpec},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

fn nested_value() -> impl Strategy<Value = Value> {
    let leaf = (-100_i64..100).prop_map(Value::Integer);
    leaf.prop_recursive(4, 64, 5, |inner| {
        proptest::collection::vec(inner, 0..5).prop_map(Value::List)
    })
}

/// Any finite real, including values near `f64::MAX` of either sign.
fn finite_real() -> impl Strategy<Value = f64> {
    (any::<bool>(), 0.0_f64..f64::MAX).prop_map(|(negative, magnitude)| {
                                           if negative { -magnitude } else { magnitude }
                                       })
}

fn leaves(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::List(inner) => leaves(inner, out),
            other => out.push(other.clone()),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn flatten_past_the_depth_yields_every_leaf_in_order(
        items in proptest::collection::vec(nested_value(), 0..6),
    ) {
        let mut expected = Vec::new();
        leaves(&items, &mut expected);
        prop_assert_eq!(flatten(&items, 16), expected);
    }

    #[test]
    fn flatten_level_zero_is_identity(
        items in proptest::collection::vec(nested_value(), 0..6),
    ) {
        prop_assert_eq!(flatten(&items, 0), items);
    }

    #[test]
    fn partition_concatenates_back_to_input(
        data in proptest::collection::vec(0_i32..1000, 0..50),
        size in 1_usize..8,
    ) {
        let groups = partition(&data, size).unwrap();
        if let Some((last, init)) = groups.split_last() {
            prop_assert!(init.iter().all(|g| g.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
        prop_assert_eq!(groups.concat(), data);
    }

    #[test]
    fn drop_count_removes_exactly_n(
        data in proptest::collection::vec(0_i32..1000, 0..50),
        fraction in 0.0_f64..=1.0,
    ) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let n = ((data.len() as f64) * fraction).floor() as usize;
        let count = i64::try_from(n).unwrap();

        let front = drop_positions(&data, IndexSpec::Count(count));
        prop_assert_eq!(front.len() + n, data.len());
        prop_assert_eq!(&front[..], &data[n..]);

        let back = drop_positions(&data, IndexSpec::Count(-count));
        prop_assert_eq!(&back[..], &data[..data.len() - n]);
    }

    #[test]
    fn shuffle_is_permutation(
        seed in 0_u64..10000,
        passes in 0_usize..4,
        data in proptest::collection::vec(0_i32..1000, 0..50),
    ) {
        let mut shuffled = data.clone();
        let mut rng = SmallRng::seed_from_u64(seed);
        shuffle(&mut shuffled, passes, &mut rng);
        let mut sorted_orig = data;
        sorted_orig.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(sorted_orig, shuffled);
    }

    #[test]
    fn riffle_alternates_and_has_odd_length(
        first in proptest::collection::vec(0_i32..100, 1..20),
        second in proptest::collection::vec(100_i32..200, 1..5),
    ) {
        let riffled = riffle(&first, &second).unwrap();
        prop_assert_eq!(riffled.len(), 2 * first.len() - 1);
        let evens: Vec<i32> = riffled.iter().step_by(2).copied().collect();
        prop_assert_eq!(evens, first);
        for (k, v) in riffled.iter().skip(1).step_by(2).enumerate() {
            prop_assert_eq!(*v, second[k % second.len()]);
        }
    }

    #[test]
    fn weighted_choice_never_picks_zero_weight(
        seed in 0_u64..10000,
        weights in proptest::collection::vec(prop_oneof![Just(0.0), 0.1_f64..10.0], 1..20),
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0.0));
        let indices: Vec<usize> = (0..weights.len()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let picked = *weighted_choice(&indices, &weights, &mut rng).unwrap();
        prop_assert!(weights[picked] > 0.0);
    }

    #[test]
    fn weighted_choice_survives_weights_up_to_the_float_limit(
        seed in 0_u64..10000,
        weights in proptest::collection::vec(0.0_f64..f64::MAX, 1..20),
    ) {
        let indices: Vec<usize> = (0..weights.len()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        match weighted_choice(&indices, &weights, &mut rng) {
            Ok(&picked) => prop_assert!(weights[picked] > 0.0),
            Err(_) => prop_assert!(weights.iter().all(|&w| w == 0.0)),
        }
    }

    #[test]
    fn random_real_draws_inside_any_finite_bounds(
        seed in 0_u64..10000,
        lo in finite_real(),
        hi in finite_real(),
    ) {
        let mut context = Context::with_seed(seed);
        match context.call("RandomReal", &[Value::Real(lo), Value::Real(hi)]) {
            Ok(Value::Real(x)) => prop_assert!(lo <= x && x < hi),
            Ok(other) => prop_assert!(false, "RandomReal returned {other}"),
            Err(_) => prop_assert!(lo >= hi || !(hi - lo).is_finite()),
        }
    }

    #[test]
    fn real_range_stays_within_its_bounds(
        start in -100.0_f64..100.0,
        width in 0.0_f64..100.0,
        step in 0.01_f64..10.0,
    ) {
        let end = start + width;
        let points = range(&Value::Real(start), &Value::Real(end), &Value::Real(step)).unwrap();
        let points: Vec<f64> = points.iter().map(|p| p.as_real().unwrap()).collect();

        prop_assert_eq!(points[0], start);
        prop_assert!(points.iter().all(|&p| p <= end));
        prop_assert!(points.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(points[points.len() - 1] + step > end);
    }

    #[test]
    fn gcd_divides_every_input(
        values in proptest::collection::vec(1_i64..10_000, 2..6),
    ) {
        let g = gcd(&values).unwrap();
        prop_assert!(g > 0);
        prop_assert!(values.iter().all(|v| v % g == 0));
    }

    #[test]
    fn euler_phi_counts_coprimes(n in 1_i64..400) {
        let coprime = (1..=n).filter(|&k| gcd_pair(k, n) == 1).count();
        prop_assert_eq!(euler_phi(n).unwrap(), i64::try_from(coprime).unwrap());
    }
}
