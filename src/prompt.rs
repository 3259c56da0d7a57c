/// The instruction prompt given to the recipe suggestion agent.
///
/// Loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// so the wording can be edited without dealing with Rust string syntax.
pub const AGENT_INSTRUCTION: &str = include_str!("prompt.txt");

/// The embedded instruction with surrounding whitespace removed.
pub fn instruction() -> &'static str {
    AGENT_INSTRUCTION.trim()
}
