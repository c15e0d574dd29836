/// Prices are carried as integer cents everywhere; the decimal point only
/// appears here, at the printing edge.
pub(crate) fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
