/// Extended table block type with owned delimiter constants.
///
/// ```text
/// #|
/// || cell | cell ||
/// || >    | ^    ||
/// |# {.attrs}
/// ```
pub struct ExtendedTable;

impl ExtendedTable {
    /// Opening fence.
    pub const OPEN: &'static [u8] = b"#|";
    /// Closing fence; attribute text may follow on the same line.
    pub const CLOSE: &'static [u8] = b"|#";
    /// Starts and ends a row.
    pub const ROW: &'static [u8] = b"||";
    /// Separates cells within a row.
    pub const CELL: u8 = b'|';
    /// Cell content that merges the cell into its left neighbour.
    pub const COLSPAN: &'static str = ">";
    /// Cell content that merges the cell into the cell above.
    pub const ROWSPAN: &'static str = "^";
    /// Escape character; an odd run of these disarms a row or cell marker.
    pub const ESCAPE: u8 = b'\\';
}
