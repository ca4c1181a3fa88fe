/// Inline math (`$x$`) with owned delimiter constant.
pub struct MathSpan;

impl MathSpan {
    pub const DOLLAR: u8 = b'$';
}
