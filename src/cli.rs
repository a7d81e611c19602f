//! Input assembly for the command-line front end.

/// Joins command-line words into the message to hash, separated by single
/// spaces.
pub fn assemble_input<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
