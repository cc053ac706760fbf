use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

/// Check that `sampler` only returns values from `expected`, and all of them about equally often.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(expected: &[T], print: bool, mut sampler: impl FnMut() -> Option<T>) {
    assert!(
        expected.iter().all_unique(),
        "Got duplicate value in expected: {:?}",
        expected
    );

    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    let mut counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();
    for _ in 0..total_samples {
        let sample = sampler().expect("There are expected values, so the sampler must return one");
        match counts.get_mut(&sample) {
            None => panic!("Unexpected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    if print {
        for value in expected {
            println!("  value {:?} sampled {} times", value, counts[value]);
        }
    }

    // report values that were never sampled before checking the distribution
    for value in expected {
        assert!(counts[value] > 0, "Never sampled expected value {:?}", value);
    }

    for value in expected {
        let relative = counts[value] as f32 / samples_per_value as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "Value {:?} was over/under sampled, relative frequency {}",
            value,
            relative,
        );
    }
}
