use std::collections::HashMap;

use regex::Regex;

lazy_static! {
    /// строка таблицы мнемоник RFC 1345:
    ///  EG     0097    END OF GUARDED AREA (EPA)
    static ref DIGRAPH_LINE: Regex = Regex::new(r"^ .*?   +[0-9a-f]{4}").unwrap();
}

/// есть в Vim, но не в RFC
const EXTRA_DIGRAPHS: &[(u32, &str)] = &[
    (0x20AC, "=e"), // € EURO SIGN
    (0x20BD, "=R"), // ₽ RUBLE SIGN; в Vim также =P
];

/// диграфы Vim (мнемоники RFC 1345)
pub fn load_digraphs(text: &str) -> HashMap<u32, String>
{
    let mut digraphs: HashMap<u32, String> = text
        .lines()
        .filter(|line| !line.contains("ISO-IR-"))
        .filter(|line| DIGRAPH_LINE.is_match(line))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let digraph = fields.next()?;
            let code = fields.next()?;
            let code = u32::from_str_radix(code.trim_start_matches("U+"), 16).ok()?;

            Some((code, digraph.to_string()))
        })
        .collect();

    for &(code, digraph) in EXTRA_DIGRAPHS {
        digraphs.insert(code, digraph.to_string());
    }

    digraphs
}
