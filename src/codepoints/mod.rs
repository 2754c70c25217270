//! таблица кодпоинтов: UnicodeData.txt + ширина, HTML-сущность, диграф Vim, X11 keysym

use std::collections::HashMap;

use log::info;

use crate::config::BakeConfig;
use crate::error::BakeError;
use crate::fetch::{into_text, Fetch};
use crate::stats::{BakeStats, StatsKey};

pub use category::Category;
pub use widths::Width;

pub mod category;
pub mod digraphs;
pub mod entities;
pub mod keysyms;
pub mod widths;

const SOURCE: &str = "UnicodeData.txt";

pub const STATS_UNICODE1_NAME: &str = "название Unicode 1.0";
pub const STATS_HTML: &str = "HTML-сущность";
pub const STATS_DIGRAPH: &str = "диграф";
pub const STATS_KEYSYM: &str = "X11 keysym";

/// запись о кодпоинте; отсутствующие данные - пустые строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord
{
    pub code: u32,
    pub width: Width,
    pub category: Category,
    pub name: String,
    pub digraph: String,
    pub html: String,
    pub keysym: String,
}

/// дополнительные данные, присоединяемые по кодпоинту
#[derive(Debug, Clone, Default)]
pub struct Annotations
{
    pub widths: HashMap<u32, Width>,
    pub entities: HashMap<u32, String>,
    pub digraphs: HashMap<u32, String>,
    pub keysyms: HashMap<u32, Vec<String>>,
}

/// запечённая таблица кодпоинтов
#[derive(Debug, Clone)]
pub struct CodepointTables
{
    pub codepoints: Vec<CodepointRecord>,
    pub stats: BakeStats,
}

impl CodepointTables
{
    /// по одной записи на строку UnicodeData.txt, отсортировано по кодпоинту:
    ///
    ///   0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
    ///   0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
    pub fn build(unicode_data: &str, annotations: &Annotations) -> Result<Self, BakeError>
    {
        let mut stats = BakeStats::new(StatsKey::Codepoint);
        let mut codepoints = vec![];

        for (i, line) in unicode_data.lines().enumerate() {
            let line_no = i + 1;
            let line = match line.find('#') {
                Some(p) => line[.. p].trim(),
                None => line.trim(),
            };

            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(';').collect();

            if fields.len() < 3 {
                return Err(BakeError::parse(
                    SOURCE,
                    line_no,
                    format!("ожидалось не меньше 3 полей: {line:?}"),
                ));
            }

            let code = u32::from_str_radix(fields[0], 16).map_err(|err| {
                BakeError::parse(SOURCE, line_no, format!("{:?}: {err}", fields[0]))
            })?;

            let category = Category::from_abbr(fields[2]).ok_or_else(|| {
                BakeError::parse(SOURCE, line_no, format!("неизвестная категория {:?}", fields[2]))
            })?;

            // у управляющих символов название <control>, устаревшее название
            // из Unicode 1.0 полезнее
            let mut name = fields[1];
            let unicode1_name = fields.get(10).copied().unwrap_or("");

            if name.starts_with('<') && unicode1_name.len() > 1 {
                name = unicode1_name;
                stats.touch(STATS_UNICODE1_NAME).inc(code, name);
            }

            let html = annotations.entities.get(&code).cloned().unwrap_or_default();
            let digraph = annotations.digraphs.get(&code).cloned().unwrap_or_default();
            let keysym = annotations
                .keysyms
                .get(&code)
                .and_then(|names| names.first())
                .cloned()
                .unwrap_or_default();

            if !html.is_empty() {
                stats.touch(STATS_HTML).inc(code, &html);
            }
            if !digraph.is_empty() {
                stats.touch(STATS_DIGRAPH).inc(code, &digraph);
            }
            if !keysym.is_empty() {
                stats.touch(STATS_KEYSYM).inc(code, &keysym);
            }

            codepoints.push(CodepointRecord {
                code,
                width: annotations.widths.get(&code).copied().unwrap_or_default(),
                category,
                name: name.to_string(),
                digraph,
                html,
                keysym,
            });
        }

        codepoints.sort_by_key(|c| c.code);

        Ok(Self { codepoints, stats })
    }
}

/// загрузка источников и сборка таблицы кодпоинтов
pub fn bake(fetcher: &dyn Fetch, config: &BakeConfig) -> Result<CodepointTables, BakeError>
{
    let sources = config.sources();

    let annotations = Annotations {
        widths: widths::load_widths(&into_text(
            fetcher.fetch(&sources.east_asian_width)?,
            "EastAsianWidth.txt",
        )?)?,
        entities: entities::load_entities(&fetcher.fetch(&sources.entities)?)?,
        digraphs: digraphs::load_digraphs(&into_text(
            fetcher.fetch(&sources.rfc1345)?,
            "rfc1345.txt",
        )?),
        keysyms: keysyms::load_keysyms(&into_text(
            fetcher.fetch(&sources.keysymdef)?,
            "keysymdef.h",
        )?),
    };

    let unicode_data = into_text(fetcher.fetch(&sources.unicode_data)?, SOURCE)?;
    let tables = CodepointTables::build(&unicode_data, &annotations)?;

    info!(
        "event=bake module=codepoints status=ok codepoints={} widths={} html={} digraphs={} keysyms={}",
        tables.codepoints.len(),
        annotations.widths.len(),
        tables.stats.count(STATS_HTML),
        tables.stats.count(STATS_DIGRAPH),
        tables.stats.count(STATS_KEYSYM),
    );

    Ok(tables)
}
