//! Output formatting for geodata-cli

use geodata_sdk::FormatDescriptor;

/// Render descriptors as an aligned table.
///
/// The capability column uses a four-flag mask: `b` binary, `e` exportable,
/// `m` minifiable, `p` parseable; `-` where the flag is unset.
pub fn format_table(descriptors: &[&FormatDescriptor]) -> String {
    let mut output = String::new();
    if descriptors.is_empty() {
        output.push_str("No formats match.\n");
        return output;
    }

    let name_width = column_width(descriptors.iter().map(|d| d.name.len()), "NAME".len());
    let ext_width = column_width(descriptors.iter().map(|d| d.extension.len()), "EXT".len());
    let category_width = column_width(
        descriptors.iter().map(|d| d.category.len()),
        "CATEGORY".len(),
    );

    output.push_str(&format!(
        "{:<name_width$}  {:<ext_width$}  {:<category_width$}  {}  {}\n",
        "NAME", "EXT", "CATEGORY", "FLAGS", "MIME"
    ));
    for descriptor in descriptors {
        output.push_str(&format!(
            "{:<name_width$}  {:<ext_width$}  {:<category_width$}  {}   {}\n",
            descriptor.name,
            descriptor.extension,
            descriptor.category,
            flag_mask(descriptor),
            descriptor.primary_mime_type().unwrap_or("-")
        ));
    }
    output
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.fold(header, usize::max)
}

fn flag_mask(descriptor: &FormatDescriptor) -> String {
    let mut mask = String::with_capacity(4);
    mask.push(if descriptor.is_binary { 'b' } else { '-' });
    mask.push(if descriptor.is_exportable { 'e' } else { '-' });
    mask.push(if descriptor.is_minifiable { 'm' } else { '-' });
    mask.push(if descriptor.is_parseable { 'p' } else { '-' });
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_descriptor() {
        let descriptors: Vec<_> = geodata_sdk::formats::all().iter().collect();
        let table = format_table(&descriptors);
        assert!(table.starts_with("NAME"));
        for descriptor in &descriptors {
            assert!(table.contains(descriptor.name));
        }
    }

    #[test]
    fn empty_input_prints_placeholder() {
        assert_eq!(format_table(&[]), "No formats match.\n");
    }
}
