#![no_main]

use ei_runtime::{EvalContext, Expr};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let Ok(expr) = Expr::from_json(text) else { return };

    // Keep evaluation bounded: supports grow multiplicatively with tree size.
    if expr.size() > 64 {
        return;
    }

    let _ = expr.eval(&mut EvalContext::seeded(0));
});
