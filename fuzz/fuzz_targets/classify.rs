#![no_main]
use libfuzzer_sys::fuzz_target;
use walkclass::runs::run_lengths;
use walkclass::{extract_runs, parse_steps, Classifier};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(steps) = parse_steps(text) {
            let lengths = run_lengths(&extract_runs(&steps));
            let result = Classifier::default().classify(&lengths).unwrap();
            assert!(result.discrete.log_likelihood_ratio.is_finite());
            assert!(result.continuous.log_likelihood_ratio.is_finite());
        }
    }
});
