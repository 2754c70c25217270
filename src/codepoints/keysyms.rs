use std::collections::HashMap;

/// названия X11 keysym для кодпоинтов:
///
///   #define XK_space                         0x0020  /* U+0020 SPACE */
///
/// на кодпоинт может приходиться несколько keysym, порядок - как в keysymdef.h
pub fn load_keysyms(text: &str) -> HashMap<u32, Vec<String>>
{
    let mut keysyms: HashMap<u32, Vec<String>> = HashMap::new();

    for line in text.lines().filter(|line| line.starts_with("#define XK")) {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let (Some(name), Some(code)) = (fields.get(1), fields.get(4)) else {
            continue;
        };

        // keysym без кодпоинта: /* Back space, back char */
        let Some(Ok(code)) = code.strip_prefix("U+").map(|c| u32::from_str_radix(c, 16)) else {
            continue;
        };

        keysyms
            .entry(code)
            .or_default()
            .push(name.trim_start_matches("XK_").to_string());
    }

    keysyms
}
