#![no_main]

use ei_runtime::dispatch;
use ei_runtime::{EvalContext, RuntimeValue};
use libfuzzer_sys::fuzz_target;

// Interpret the input as a tiny stack machine over the dispatcher. Any
// operand combination may come up; dispatch must answer with a value or an
// error, never a panic.
fuzz_target!(|data: &[u8]| {
    let mut ctx = EvalContext::seeded(0);
    let mut stack: Vec<RuntimeValue> = Vec::new();

    for &byte in data.iter().take(256) {
        let arg = (byte >> 4) as i64;
        let result = match byte & 0x0f {
            0 => Ok(dispatch::constant(arg)),
            1 => Ok(dispatch::constant(arg as f64 / 4.0)),
            2 => Ok(dispatch::constant(arg % 2 == 0)),
            op => {
                let Some(right) = stack.pop() else { continue };
                match op {
                    3 => dispatch::not(&right),
                    4 => dispatch::sample(&right),
                    5 => dispatch::flip(&right),
                    6 => dispatch::bernoulli(&right),
                    _ => {
                        let Some(left) = stack.pop() else { continue };
                        match op {
                            7 => dispatch::add(&left, &right),
                            8 => dispatch::subtract(&left, &right),
                            9 => dispatch::multiply(&left, &right),
                            10 => dispatch::divide(&left, &right),
                            11 => dispatch::and(&left, &right),
                            12 => dispatch::equal(&left, &right),
                            13 => dispatch::less_than(&left, &right),
                            14 => dispatch::normal(&left, &right),
                            _ => dispatch::observe(&mut ctx, &left, &right),
                        }
                    }
                }
            }
        };
        if let Ok(value) = result {
            // Keep supports small so the fuzzer stays fast.
            let support = match &value {
                RuntimeValue::Int(s) => s.len(),
                RuntimeValue::Float(s) => s.len(),
                _ => 0,
            };
            if support <= 64 {
                stack.push(value);
            }
        }
        if stack.len() > 8 {
            stack.remove(0);
        }
    }

    for value in &stack {
        let _ = value.to_string();
    }
});
