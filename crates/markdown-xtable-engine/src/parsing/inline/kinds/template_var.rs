/// Template variable (`{{ name }}`); its interior is a raw zone.
pub struct TemplateVar;

impl TemplateVar {
    pub const OPEN: &'static [u8] = b"{{";
    pub const CLOSE: &'static [u8] = b"}}";
}
