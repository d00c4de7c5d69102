//! The built-in demonstration registry.
//!
//! A small set of declarations modeled on the toolkit's stock compression
//! algorithms, so the language can be exercised without wiring up a real
//! pipeline factory.

use recomp_decl::{DeclError, Registry};

pub fn registry() -> Result<Registry, DeclError> {
    let mut registry = Registry::new();

    registry.register_parsed(
        "compressor",
        "lzss(coder: static coder = binary, threshold: int = 3)",
        "Lempel-Ziv-Storer-Szymanski factorization over an enhanced suffix array.",
    )?;
    registry.register_parsed(
        "compressor",
        "lcpcomp(coder: static coder = binary, strategy: static strategy = plcppeaks, \
         threshold: int = 5)",
        "Longest-common-prefix factorization compressor.",
    )?;
    registry.register_parsed(
        "compressor",
        "esp(coder: static coder = huff)",
        "Edit-sensitive parsing grammar compressor.",
    )?;

    registry.register_parsed(
        "coder",
        "binary(bit_width: int = 8)",
        "Fixed-width binary coder.",
    )?;
    registry.register_parsed("coder", "huff", "Canonical Huffman coder.")?;

    registry.register_parsed(
        "strategy",
        "plcppeaks",
        "Factor selection over the peaks of the permuted LCP array.",
    )?;
    registry.register_parsed(
        "strategy",
        "naive",
        "Scan the LCP array once, greedily taking every factor above the threshold.",
    )?;

    Ok(registry)
}
