//! Every user-facing string in one place. The product copy is Indonesian,
//! matching the audience of the generated narratives.

pub struct UiText {
    pub app_heading: &'static str,
    pub app_subheading: &'static str,

    pub program_heading: &'static str,
    pub program_placeholder: &'static str,

    pub input_mode_heading: &'static str,
    pub mode_code_label: &'static str,
    pub mode_link_label: &'static str,

    pub code_field_label: &'static str,
    pub code_field_hint: &'static str,
    pub link_field_label: &'static str,
    pub link_field_hint: &'static str,
    pub konfirmasi_label: &'static str,
    pub konfirmasi_hint_prefix: &'static str,

    pub generate_button: &'static str,
    pub copy_button: &'static str,
    pub share_button: &'static str,

    pub preview_heading: &'static str,
    pub link_preview_label: &'static str,
    pub narrative_preview_label: &'static str,

    pub status_loading: &'static str,
    pub status_loaded_suffix: &'static str,
    pub status_load_failed: &'static str,

    pub toast_load_failed: &'static str,
    pub toast_data_not_ready: &'static str,
    pub toast_program_missing: &'static str,
    pub toast_code_missing: &'static str,
    pub toast_link_missing: &'static str,
    pub toast_link_malformed: &'static str,
    pub toast_link_missing_param: &'static str,
    pub toast_nothing_generated: &'static str,
    pub toast_generated: &'static str,
    pub toast_copied: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_heading: "Generator Narasi Affiliate",
    app_subheading: "Pilih program, masukkan kode, bagikan narasinya.",

    program_heading: "Program Donasi",
    program_placeholder: "-- Pilih Program --",

    input_mode_heading: "Mode Input",
    mode_code_label: "Kode Affiliate",
    mode_link_label: "Link Lengkap",

    code_field_label: "Kode Affiliate",
    code_field_hint: "contoh: budi123",
    link_field_label: "Link Affiliate Lengkap",
    link_field_hint: "https://...",
    konfirmasi_label: "Nomor Konfirmasi (opsional)",
    konfirmasi_hint_prefix: "Default: ",

    generate_button: "Generate & Copy",
    copy_button: "Copy Narasi",
    share_button: "Share ke WhatsApp",

    preview_heading: "Preview",
    link_preview_label: "Link Affiliate",
    narrative_preview_label: "Narasi",

    status_loading: "Memuat data program...",
    status_loaded_suffix: "program siap",
    status_load_failed: "Data gagal dimuat. Mulai ulang aplikasi untuk mencoba lagi.",

    toast_load_failed: "❌ Gagal memuat data",
    toast_data_not_ready: "❌ Data belum dimuat.",
    toast_program_missing: "⚠️ Pilih program donasi dulu.",
    toast_code_missing: "⚠️ Masukkan kode affiliate dulu.",
    toast_link_missing: "⚠️ Masukkan link affiliate lengkap dulu.",
    toast_link_malformed: "⚠️ Format link tidak valid. Pastikan URL lengkap.",
    toast_link_missing_param: "⚠️ Link harus mengandung parameter ?affiliate_code=",
    toast_nothing_generated: "⚠️ Generate narasi dulu.",
    toast_generated: "✅ Narasi berhasil di-generate & disalin!",
    toast_copied: "📋 Narasi berhasil disalin ke clipboard!",
};
