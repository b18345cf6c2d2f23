use std::error::Error;

// Emits VERGEN_GIT_SHA, VERGEN_GIT_DIRTY and VERGEN_CARGO_TARGET_TRIPLE for
// the `--version` output.
fn main() -> Result<(), Box<dyn Error>> {
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::CargoBuilder::default()
                .target_triple(true)
                .build()?,
        )?
        .add_instructions(
            &vergen_gitcl::GitclBuilder::default()
                .sha(true)
                .dirty(true)
                .build()?,
        )?
        .emit()?;
    Ok(())
}
