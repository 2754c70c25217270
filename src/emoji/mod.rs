//! нормализация последовательностей эмодзи из emoji-test.txt
//!
//! один и тот же эмодзи встречается в списке в виде множества последовательностей:
//! базовая форма, с оттенком кожи, со знаком пола, с мужчиной / женщиной вместо
//! нейтрального человека, и их сочетания. в таблицу попадают только базовые формы,
//! варианты отмечаются флагами у своей базовой формы.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::config::BakeConfig;
use crate::error::BakeError;
use crate::fetch::{into_text, Fetch};
use crate::stats::{BakeStats, StatsKey};

use groups::OrderedSet;
use line::{parse_line, Line, Qualification, RawSequence};
use variants::{classify, Candidate, KnownEmoji, Variant, ROLE_GENDERED_VERSION};

pub mod cldr;
pub mod groups;
pub mod line;
pub mod variants;

#[cfg(test)]
mod tests;

/// последовательность кодпоинтов - ключ таблицы эмодзи
pub type EmojiKey = Vec<u32>;

pub const STATS_BASE: &str = "базовая форма";
pub const STATS_SKIN_TONE: &str = "вариант: оттенок кожи";
pub const STATS_GENDER_SIGN: &str = "вариант: знак пола";
pub const STATS_GENDER_ROLE: &str = "вариант: гендерная роль";
pub const STATS_EXCLUDED: &str = "отброшено: оттенки по участникам";
pub const STATS_NOT_FULLY_QUALIFIED: &str = "отброшено: не fully-qualified";
pub const STATS_DUPLICATE: &str = "отброшено: повтор базовой формы";

/// какие гендерные варианты есть у эмодзи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderKind
{
    #[default]
    None,
    /// базовая форма + ZWJ + ♀ / ♂
    Sign,
    /// 👨 / 👩 вместо 🧑
    Role,
}

impl GenderKind
{
    /// значение в сгенерированных таблицах
    pub fn id(&self) -> u8
    {
        match self {
            Self::None => 0,
            Self::Sign => 1,
            Self::Role => 2,
        }
    }
}

/// базовая форма эмодзи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord
{
    pub codepoints: EmojiKey,
    pub name: String,
    pub group: usize,
    pub subgroup: usize,
    pub skin_tones: bool,
    pub gender: GenderKind,
    pub cldr: Vec<String>,
}

/// результат нормализации
#[derive(Debug, Clone)]
pub struct EmojiTables
{
    pub groups: Vec<String>,
    /// подгруппы для каждой группы, в порядке идентификаторов групп
    pub subgroups: Vec<Vec<String>>,
    pub emojis: Vec<EmojiRecord>,
    pub stats: BakeStats,
}

/// построчная нормализация. строки обрабатываются строго по порядку:
/// варианты ссылаются на базовые формы, встреченные раньше
pub struct EmojiNormalizer
{
    groups: OrderedSet,
    subgroups: Vec<OrderedSet>,
    group: Option<usize>,
    subgroup: Option<usize>,
    emojis: Vec<EmojiRecord>,
    index: HashMap<EmojiKey, usize>,
    stats: BakeStats,
}

impl KnownEmoji for EmojiNormalizer
{
    fn contains(&self, key: &[u32]) -> bool
    {
        self.index.contains_key(key)
    }
}

impl Default for EmojiNormalizer
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl EmojiNormalizer
{
    pub fn new() -> Self
    {
        Self {
            groups: OrderedSet::new(),
            subgroups: vec![],
            group: None,
            subgroup: None,
            emojis: vec![],
            index: HashMap::new(),
            stats: BakeStats::new(StatsKey::Line),
        }
    }

    /// весь файл emoji-test.txt
    pub fn feed(&mut self, text: &str) -> Result<(), BakeError>
    {
        for (i, line) in text.lines().enumerate() {
            self.push_line(i + 1, line)?;
        }

        Ok(())
    }

    /// одна строка файла
    pub fn push_line(&mut self, line_no: usize, line: &str) -> Result<(), BakeError>
    {
        match parse_line(line_no, line)? {
            Line::Blank => (),
            Line::Group(name) => self.enter_group(&name),
            Line::Subgroup(name) => self.enter_subgroup(&name),
            Line::Sequence(sequence) => self.push_sequence(&sequence)?,
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, key: &[u32]) -> Option<&EmojiRecord>
    {
        self.index.get(key).map(|&i| &self.emojis[i])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize
    {
        self.emojis.len()
    }

    pub fn finish(self) -> EmojiTables
    {
        EmojiTables {
            groups: self.groups.into_names(),
            subgroups: self
                .subgroups
                .into_iter()
                .map(|subgroups| subgroups.into_names())
                .collect(),
            emojis: self.emojis,
            stats: self.stats,
        }
    }

    fn enter_group(&mut self, name: &str)
    {
        let group = self.groups.insert(name);

        if group == self.subgroups.len() {
            debug!("event=group module=emoji status=new group={:?}", name);
            self.subgroups.push(OrderedSet::new());
        }

        self.group = Some(group);
        self.subgroup = None;
    }

    fn enter_subgroup(&mut self, name: &str)
    {
        let group = self.current_group();

        self.subgroup = Some(self.subgroups[group].insert(name));
    }

    /// текущая группа; строки до первого заголовка попадают в безымянную группу
    fn current_group(&mut self) -> usize
    {
        match self.group {
            Some(group) => group,
            None => {
                self.enter_group("");
                self.groups.insert("")
            }
        }
    }

    fn current_subgroup(&mut self) -> (usize, usize)
    {
        let group = self.current_group();

        let subgroup = match self.subgroup {
            Some(subgroup) => subgroup,
            None => {
                let subgroup = self.subgroups[group].insert("");
                self.subgroup = Some(subgroup);
                subgroup
            }
        };

        (group, subgroup)
    }

    fn push_sequence(&mut self, sequence: &RawSequence) -> Result<(), BakeError>
    {
        let line = sequence.line as u32;

        // "only fully-qualified emoji zwj sequences should be generated by
        // keyboards and other user input devices"
        if !sequence.is_fully_qualified() {
            if let Qualification::Other(qualification) = &sequence.qualification {
                warn!(
                    "event=qualification module=emoji status=unknown line={} qualification={:?}",
                    sequence.line, qualification
                );
            }

            self.stats
                .touch(STATS_NOT_FULLY_QUALIFIED)
                .inc(line, &sequence.name);
            return Ok(());
        }

        let candidate = Candidate::scan(sequence);

        match classify(&*self, &candidate)? {
            Some(Variant::Excluded) => {
                debug!(
                    "event=excluded module=emoji line={} name={:?}",
                    sequence.line, sequence.name
                );
                self.stats.touch(STATS_EXCLUDED).inc(line, &sequence.name);
            }
            Some(Variant::RoleGendered(key)) => {
                self.set_gender(&key, GenderKind::Role, sequence)?;
                self.stats.touch(STATS_GENDER_ROLE).inc(line, &sequence.name);
            }
            Some(Variant::SignGendered(key)) => {
                self.set_gender(&key, GenderKind::Sign, sequence)?;
                self.stats.touch(STATS_GENDER_SIGN).inc(line, &sequence.name);
            }
            Some(Variant::SkinToned(key)) => {
                let i = self.position(&key, sequence)?;
                self.emojis[i].skin_tones = true;
                self.stats.touch(STATS_SKIN_TONE).inc(line, &sequence.name);
            }
            None => self.create(candidate.base, sequence),
        }

        Ok(())
    }

    /// гендер записывается один раз: знак и роль у одной формы взаимоисключающие
    fn set_gender(
        &mut self,
        key: &[u32],
        gender: GenderKind,
        sequence: &RawSequence,
    ) -> Result<(), BakeError>
    {
        let i = self.position(key, sequence)?;
        let emoji = &mut self.emojis[i];

        match emoji.gender {
            GenderKind::None => emoji.gender = gender,
            current if current == gender => (),
            current => warn!(
                "event=gender_conflict module=emoji status=kept line={} name={:?} kept={:?} ignored={:?}",
                sequence.line, sequence.name, current, gender
            ),
        }

        Ok(())
    }

    /// индекс записи, к которой относится вариант
    fn position(&self, key: &[u32], sequence: &RawSequence) -> Result<usize, BakeError>
    {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| BakeError::NotFound {
                key: key.to_vec(),
                name: sequence.name.clone(),
            })
    }

    fn create(&mut self, key: EmojiKey, sequence: &RawSequence)
    {
        let line = sequence.line as u32;

        if self.index.contains_key(&key) {
            debug!(
                "event=duplicate module=emoji line={} name={:?}",
                sequence.line, sequence.name
            );
            self.stats.touch(STATS_DUPLICATE).inc(line, &sequence.name);
            return;
        }

        let (group, subgroup) = self.current_subgroup();

        self.index.insert(key.clone(), self.emojis.len());
        self.emojis.push(EmojiRecord {
            codepoints: key,
            name: sequence.name.clone(),
            group,
            subgroup,
            skin_tones: false,
            gender: GenderKind::None,
            cldr: vec![],
        });

        self.stats.touch(STATS_BASE).inc(line, &sequence.name);
    }
}

/// загрузка и нормализация emoji-test.txt, короткие названия из CLDR
pub fn bake(fetcher: &dyn Fetch, config: &BakeConfig) -> Result<EmojiTables, BakeError>
{
    let sources = config.sources();

    if config.emoji_version != ROLE_GENDERED_VERSION {
        warn!(
            "event=allow_list module=emoji status=stale emoji_version={} checked_against={}",
            config.emoji_version, ROLE_GENDERED_VERSION
        );
    }

    let text = into_text(fetcher.fetch(&sources.emoji_test)?, "emoji-test.txt")?;
    let xml = into_text(fetcher.fetch(&sources.cldr)?, "en.xml")?;

    let annotations = cldr::parse_cldr(&xml)?;

    let mut normalizer = EmojiNormalizer::new();
    normalizer.feed(&text)?;

    let mut tables = normalizer.finish();
    cldr::attach(&mut tables.emojis, &annotations);

    info!(
        "event=bake module=emoji status=ok emojis={} groups={} skin_tone={} gender_sign={} gender_role={} excluded={}",
        tables.emojis.len(),
        tables.groups.len(),
        tables.stats.count(STATS_SKIN_TONE),
        tables.stats.count(STATS_GENDER_SIGN),
        tables.stats.count(STATS_GENDER_ROLE),
        tables.stats.count(STATS_EXCLUDED),
    );

    Ok(tables)
}
