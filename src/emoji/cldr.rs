use std::collections::HashMap;

use super::variants::{VS15, VS16};
use super::EmojiRecord;
use crate::error::BakeError;

/// короткие названия CLDR: строка эмодзи -> названия
pub type CldrAnnotations = HashMap<String, Vec<String>>;

/// разбор common/annotations/en.xml:
///
///   <annotation cp="😀">face | grin | grinning face</annotation>
///   <annotation cp="😀" type="tts">grinning face</annotation>
///
/// записи type="tts" дублируют название и пропускаются
pub fn parse_cldr(xml: &str) -> Result<CldrAnnotations, BakeError>
{
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    let doc = roxmltree::Document::parse_with_options(xml, options)?;

    let annotations = doc
        .descendants()
        .filter(|node| node.has_tag_name("annotation"))
        .filter(|node| node.attribute("type") != Some("tts"))
        .filter_map(|node| {
            let cp = node.attribute("cp")?;
            let names = node
                .text()
                .unwrap_or("")
                .split(" | ")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();

            Some((cp.to_string(), names))
        })
        .collect();

    Ok(annotations)
}

/// строка эмодзи без селекторов вариантов - ключ в таблице CLDR
pub fn visual_key(codepoints: &[u32]) -> String
{
    codepoints
        .iter()
        .filter(|&&c| c != VS16 && c != VS15)
        .filter_map(|&c| char::from_u32(c))
        .collect()
}

/// добавить короткие названия к готовым записям; отсутствие названий - не ошибка
pub fn attach(emojis: &mut [EmojiRecord], cldr: &CldrAnnotations)
{
    for emoji in emojis.iter_mut() {
        emoji.cldr = cldr
            .get(&visual_key(&emoji.codepoints))
            .cloned()
            .unwrap_or_default();
    }
}
