//! The `recomp pattern` command.

use crate::demo;
use recomp_diagnostic::emit;
use recomp_eval::pattern_eval;

pub fn run(ty: &str, config: &str) -> Result<(), String> {
    let registry = demo::registry().map_err(|e| e.to_string())?;

    let value = recomp_parser::parse(config).map_err(|err| {
        emit(config, "<config>", &err.to_diagnostic());
        "parse error".to_string()
    })?;

    match pattern_eval(value, ty, &registry) {
        Ok(pattern) => {
            println!("{}", pattern);
            Ok(())
        }
        Err(err) => {
            emit(config, "<config>", &err.to_diagnostic());
            Err("evaluation error".to_string())
        }
    }
}
