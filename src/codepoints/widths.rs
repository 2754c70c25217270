use std::collections::HashMap;

use crate::error::BakeError;

const SOURCE: &str = "EastAsianWidth.txt";

/// East_Asian_Width. кодпоинты, не перечисленные в EastAsianWidth.txt, - нейтральные
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Width
{
    #[default]
    Neutral,
    Ambiguous,
    FullWidth,
    HalfWidth,
    Narrow,
    Wide,
}

impl Width
{
    pub fn from_abbr(abbr: &str) -> Option<Self>
    {
        match abbr {
            "A" => Some(Self::Ambiguous),
            "F" => Some(Self::FullWidth),
            "H" => Some(Self::HalfWidth),
            "N" => Some(Self::Neutral),
            "Na" => Some(Self::Narrow),
            "W" => Some(Self::Wide),
            _ => None,
        }
    }

    /// значение в сгенерированных таблицах
    pub fn id(&self) -> u8
    {
        *self as u8
    }
}

/// ширины кодпоинтов:
///
///   0000..001F     ; N  # Cc    [32] <control-0000>..<control-001F>
///   0020           ; Na # Zs         SPACE
pub fn load_widths(text: &str) -> Result<HashMap<u32, Width>, BakeError>
{
    let mut widths = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = match line.find('#') {
            Some(p) => line[.. p].trim(),
            None => line.trim(),
        };

        if line.is_empty() {
            continue;
        }

        let (range, width) = line
            .split_once(';')
            .ok_or_else(|| BakeError::parse(SOURCE, line_no, format!("нет ';': {line:?}")))?;

        let width = width.trim();
        let width = Width::from_abbr(width).ok_or_else(|| {
            BakeError::parse(SOURCE, line_no, format!("неизвестная ширина {width:?}"))
        })?;

        let (first, last) = match range.trim().split_once("..") {
            Some((first, last)) => (parse_code(first, line_no)?, parse_code(last, line_no)?),
            None => {
                let code = parse_code(range, line_no)?;
                (code, code)
            }
        };

        for code in first ..= last {
            widths.insert(code, width);
        }
    }

    Ok(widths)
}

fn parse_code(code: &str, line_no: usize) -> Result<u32, BakeError>
{
    let code = code.trim();

    u32::from_str_radix(code, 16)
        .map_err(|err| BakeError::parse(SOURCE, line_no, format!("{code:?}: {err}")))
}
