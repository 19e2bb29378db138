#![no_main]

use libfuzzer_sys::fuzz_target;

use calcbench_core::backend::{Backend, CalcError, CalcValue, ScriptedBackend};
use calcbench_core::operand::{parse_operand, to_natural};
use calcbench_core::Operation;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (a, b) = text.split_once('|').unwrap_or((text, "1"));

    // Parsing never panics and never yields a non-finite value
    let (Ok(a), Ok(b)) = (parse_operand(a), parse_operand(b)) else {
        return;
    };
    assert!(a.is_finite() && b.is_finite());

    let backend = ScriptedBackend::new();
    // Finite operands give a finite value or a typed overflow
    for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
        match backend.apply(op, a, b) {
            Ok(c) => assert!(matches!(c.value, CalcValue::Real(v) if v.is_finite())),
            Err(e) => assert_eq!(e, CalcError::Overflow),
        }
    }
    match backend.apply(Operation::Divide, a, b) {
        Err(CalcError::DivisionByZero) => assert!(b == 0.0),
        Err(CalcError::Overflow) | Ok(_) => assert!(b != 0.0),
        Err(e) => panic!("unexpected divide error: {e}"),
    }

    if let Ok(m) = to_natural(a) {
        assert_eq!(m as f64, a);
    }
});
