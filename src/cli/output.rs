//! Output formatting utilities for the CLI.

pub trait CommandOutput {
    fn to_human(&self) -> String;
}

pub fn output<T: CommandOutput>(result: &T) {
    println!("{}", result.to_human());
}

/// Capitalize the first character, e.g. `gemini` -> `Gemini`.
pub fn display_name(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
