/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: table markers and other inline syntax inside
/// them are inert.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
