/// A single rewrite performed by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A node whose operands are all constants was replaced by its value.
    FoldConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `0^a = 0`
    PowerZero,

    /// `1^a = 1`
    PowerOne,

    /// `a^0 = 1`
    ZeroExponent,

    /// `a^1 = a`
    OneExponent,
}
