/// Policy for coercing JSON values into Thrift `bool` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolPolicy {
    /// Explicit coercion (default):
    ///
    /// JSON booleans pass through, numbers are `true` when non-zero, and the
    /// strings `"true"`, `"false"`, `"1"`, `"0"` (any case) are accepted.
    /// Every other input is a type mismatch.
    #[default]
    Strict,
    /// Legacy truthiness: empty strings, empty arrays, empty objects, and zero
    /// are `false`; everything else, including the string `"false"`, is `true`.
    Truthy,
}
