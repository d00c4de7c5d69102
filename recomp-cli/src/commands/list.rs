//! The `recomp list` command.

use crate::demo;
use recomp_decl::Algorithm;

pub fn run(ty: Option<&str>) -> Result<(), String> {
    let registry = demo::registry().map_err(|e| e.to_string())?;

    match ty {
        Some(ty) => {
            let algorithms = registry
                .lookup(ty)
                .ok_or_else(|| format!("no algorithms registered under type `{ty}`"))?;
            print_family(ty, algorithms);
        }
        None => {
            let mut families: Vec<_> = registry.iter().collect();
            families.sort_by_key(|(ty, _)| *ty);
            for (i, (ty, algorithms)) in families.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_family(ty, algorithms);
            }
        }
    }
    Ok(())
}

fn print_family(ty: &str, algorithms: &[Algorithm]) {
    println!("[{ty}]");
    for algorithm in algorithms {
        println!("  {}", algorithm);
        if !algorithm.doc().is_empty() {
            println!("      {}", algorithm.doc());
        }
    }
}
