use std::collections::HashMap;

use serde::Deserialize;

use crate::error::BakeError;

#[derive(Deserialize)]
struct Entity
{
    codepoints: Vec<u32>,
}

/// HTML-сущности из entities.json (WHATWG):
///
///   "&quot;": { "codepoints": [34], "characters": "\"" }
///
/// на кодпоинт - одна сущность: самая короткая, при равной длине - первая
/// в обратном алфавитном порядке (&quot; вместо &QUOT;, &nbsp; вместо &NonBreakingSpace;)
pub fn load_entities(json: &[u8]) -> Result<HashMap<u32, String>, BakeError>
{
    let entities: HashMap<String, Entity> = serde_json::from_slice(json)?;

    // версии без завершающей ';' оставлены для обратной совместимости
    let mut names: Vec<&String> = entities.keys().filter(|k| k.ends_with(';')).collect();

    names.sort();
    names.reverse();
    names.sort_by_key(|name| name.len());

    let mut out = HashMap::new();

    for name in names {
        // TODO: сущности из двух кодпоинтов (&NotEqualTilde; - U+2242 U+0338)
        let [code] = entities[name].codepoints[..] else {
            continue;
        };

        out.entry(code)
            .or_insert_with(|| name.trim_matches(['&', ';']).to_string());
    }

    Ok(out)
}
