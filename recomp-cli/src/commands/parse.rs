//! The `recomp parse` command.

use recomp_diagnostic::emit;

pub fn run(config: &str, verbose: bool) -> Result<(), String> {
    match recomp_parser::parse(config) {
        Ok(value) => {
            if verbose {
                println!("{:#?}", value);
            }
            println!("{}", value);
            Ok(())
        }
        Err(err) => {
            emit(config, "<config>", &err.to_diagnostic());
            Err("parse error".to_string())
        }
    }
}
