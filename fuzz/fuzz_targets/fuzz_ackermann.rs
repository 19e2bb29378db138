#![no_main]

use libfuzzer_sys::fuzz_target;

use calcbench_core::ackermann::AckermannEvaluator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // m in 0..=3, n capped so A(3, n) stays small
    let m = u64::from(data[0] % 4);
    let n = u64::from(data[1] % if m == 3 { 5 } else { 64 });

    let mut evaluator = AckermannEvaluator::new();
    let value = evaluator.evaluate(m, n).expect("small inputs cannot overflow");
    let metrics = evaluator.metrics();

    assert!(metrics.is_consistent());
    assert!(metrics.total_calls >= 1 && metrics.max_depth >= 1);
    match m {
        0 => assert_eq!(value, n + 1),
        1 => assert_eq!(value, n + 2),
        2 => assert_eq!(value, 2 * n + 3),
        _ => assert_eq!(value, (1 << (n + 3)) - 3),
    }
});
