use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::codepoints::CodepointTables;
use crate::emoji::EmojiTables;
use crate::stats::BakeStats;

use format::{format_codepoints, format_str, format_str_vec};

pub mod format;

/// первая строка сгенерированных файлов
pub const HEADER: &str = "// generated by unidata_bakery; DO NOT EDIT";

/// записать таблицы эмодзи
pub fn write_emojis(filename: impl AsRef<Path>, tables: &EmojiTables) -> io::Result<()>
{
    let mut file = BufWriter::new(File::create(filename.as_ref())?);

    writeln!(file, "{}\n", HEADER)?;

    writeln!(file, "pub static EMOJI_GROUPS: &[&str] = &[")?;
    for group in &tables.groups {
        writeln!(file, "    {},", format_str(group))?;
    }
    writeln!(file, "];\n")?;

    writeln!(file, "pub static EMOJI_SUBGROUPS: &[(&str, &[&str])] = &[")?;
    for (group, subgroups) in tables.groups.iter().zip(&tables.subgroups) {
        writeln!(
            file,
            "    ({}, &[{}]),",
            format_str(group),
            format_str_vec(subgroups)
        )?;
    }
    writeln!(file, "];\n")?;

    writeln!(file, "pub static EMOJIS: &[Emoji] = &[")?;
    for emoji in &tables.emojis {
        writeln!(
            file,
            "    Emoji {{ codepoints: &[{}], name: {}, group: {}, subgroup: {}, cldr: &[{}], \
             skin_tones: {}, genders: {} }},",
            format_codepoints(&emoji.codepoints),
            format_str(&emoji.name),
            emoji.group,
            emoji.subgroup,
            format_str_vec(&emoji.cldr),
            emoji.skin_tones,
            emoji.gender.id(),
        )?;
    }
    writeln!(file, "];")?;

    file.flush()
}

/// записать таблицу кодпоинтов
pub fn write_codepoints(filename: impl AsRef<Path>, tables: &CodepointTables) -> io::Result<()>
{
    let mut file = BufWriter::new(File::create(filename.as_ref())?);

    writeln!(file, "{}\n", HEADER)?;

    writeln!(file, "pub static CODEPOINTS: &[Codepoint] = &[")?;
    for codepoint in &tables.codepoints {
        writeln!(
            file,
            "    Codepoint {{ code: 0x{:x}, width: {}, category: {}, name: {}, digraph: {}, \
             html: {}, keysym: {} }},",
            codepoint.code,
            codepoint.width.id(),
            codepoint.category.id(),
            format_str(&codepoint.name),
            format_str(&codepoint.digraph),
            format_str(&codepoint.html),
            format_str(&codepoint.keysym),
        )?;
    }
    writeln!(file, "];")?;

    file.flush()
}

/// записать статистику запекания
pub fn write_stats(filename: impl AsRef<Path>, stats: &BakeStats) -> io::Result<()>
{
    let mut file = BufWriter::new(File::create(filename.as_ref())?);

    let mut headers: Vec<&String> = stats.blocks.keys().collect();
    headers.sort_by_key(|k| stats.blocks[*k].order);

    for header in &headers {
        let block = &stats.blocks[*header];
        writeln!(file, "{}. {} ({})", block.order, header, block.count)?;
    }

    writeln!(file)?;

    for header in &headers {
        let block = &stats.blocks[*header];
        write!(file, "{}. {} ({})\n\n", block.order, header, block.count)?;

        let mut keys: Vec<&u32> = block.entries.keys().collect();
        keys.sort();

        for key in keys {
            writeln!(file, "{} - {}", stats.format_key(*key), block.entries[key])?;
        }

        writeln!(file)?;
    }

    file.flush()
}
