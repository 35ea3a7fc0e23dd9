/// Numeric conversion helpers.
///
/// Provides the checked promotion from integer literals to `f64` used by the
/// evaluator, so that no literal loses precision silently.
pub mod num;
