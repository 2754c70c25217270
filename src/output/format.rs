/// кодпоинты для вставки в исходный код: 0x1f9d1, 0x2695, 0xfe0f
pub fn format_codepoints(codepoints: &[u32]) -> String
{
    codepoints
        .iter()
        .map(|c| format!("0x{:x}", c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// строковый литерал Rust
pub fn format_str(value: impl AsRef<str>) -> String
{
    format!("{:?}", value.as_ref())
}

/// строки через запятую: "face", "grin"
pub fn format_str_vec(values: &[String]) -> String
{
    values
        .iter()
        .map(format_str)
        .collect::<Vec<_>>()
        .join(", ")
}
