/// Errors that can occur when decoding a numeral.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum NumeralError {
    /// The numeral has no symbols.
    #[display("empty numeral")]
    Empty,
    /// A symbol outside the numeral's alphabet was found.
    #[display("invalid symbol {found:?} at offset {offset}")]
    InvalidSymbol {
        /// The offending character.
        found: char,
        /// Byte offset of `found` within the numeral.
        offset: usize,
    },
    /// A decimal numeral starts with `0`.
    #[display("leading zero")]
    LeadingZero,
    /// The numeral denotes an index that does not fit in a `u64`.
    #[display("numeral out of range")]
    Overflow,
}
