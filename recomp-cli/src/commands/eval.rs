//! The `recomp eval` command.
//!
//! Runs the full two-phase protocol: phase 1 computes the dispatch
//! pattern; phase 2 re-evaluates the same configuration with that pattern
//! as the fixed static skeleton to recover the runtime option tree.

use crate::{demo, output};
use recomp_diagnostic::emit;
use recomp_eval::{EvalError, cl_eval, pattern_eval};

pub fn run(ty: &str, config: &str, verbose: bool) -> Result<(), String> {
    let registry = demo::registry().map_err(|e| e.to_string())?;

    let value = recomp_parser::parse(config).map_err(|err| {
        emit(config, "<config>", &err.to_diagnostic());
        "parse error".to_string()
    })?;

    let report = |err: EvalError| {
        emit(config, "<config>", &err.to_diagnostic());
        "evaluation error".to_string()
    };

    let pattern = pattern_eval(value.clone(), ty, &registry).map_err(report)?;
    let evaluated = cl_eval(value, ty, &registry, Some(pattern.to_ast())).map_err(report)?;

    if verbose {
        output::info(&format!("selected variant: {}", pattern));
    }
    println!("pattern: {}", pattern);
    println!("options: {}", evaluated.options);
    Ok(())
}
