//! Narrative assembly: template substitution plus the fixed payment block.

use crate::data::AppConfig;

/// Substitution marker inside every program template.
pub const LINK_MARKER: &str = "{LINK}";

/// Replace the first marker occurrence only. A template quoting the marker
/// a second time keeps the later occurrences literal.
pub fn substitute_link(template: &str, link: &str) -> String {
    template.replacen(LINK_MARKER, link, 1)
}

/// The fixed bank-account / confirmation block appended to every narrative.
/// The layout (labels, blank lines, emoji glyphs) is part of the output
/// contract and must not be reformatted.
pub fn rekening_block(config: &AppConfig, konfirmasi: &str) -> String {
    let rekening = &config.rekening;
    format!(
        "\n\nRekening:\n🏦 BSI {}\na.n {}\n🏦 Mandiri {}\na.n {}\n\n📞 Konfirmasi: {}",
        rekening.bsi, rekening.an_bsi, rekening.mandiri, rekening.an_mandiri, konfirmasi
    )
}

/// Full narrative: template with the link substituted, then the payment block.
pub fn render_narrative(
    template: &str,
    link: &str,
    config: &AppConfig,
    konfirmasi: &str,
) -> String {
    let mut narrative = substitute_link(template, link);
    narrative.push_str(&rekening_block(config, konfirmasi));
    narrative
}
