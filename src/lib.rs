/// Character classes with occurrence quotas, and the catalog of standard
/// class combinations (lowercase, uppercase, digits, symbols).
pub mod charset;
/// The allocation and assembly engine that turns a list of character classes
/// into passwords of a requested length.
pub mod generator;
/// Uniform randomness as an injected capability, so that production code can
/// draw from the operating system's randomness facility and tests can seed a
/// deterministic generator.
pub mod random;

pub(crate) mod error;
