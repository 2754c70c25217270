use std::collections::HashMap;

/// как печатать ключи записей статистики
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKey
{
    /// U+XXXX
    Codepoint,
    /// номер строки источника
    Line,
}

/// статистика, собираемая при запекании таблиц
#[derive(Debug, Clone)]
pub struct BakeStats
{
    pub key: StatsKey,
    pub blocks: HashMap<String, BakeStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct BakeStatsBlock
{
    pub count: usize,
    pub order: usize,
    pub entries: HashMap<u32, String>,
}

impl BakeStats
{
    pub fn new(key: StatsKey) -> Self
    {
        Self {
            key,
            blocks: HashMap::new(),
        }
    }

    /// добавляем ключ
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut BakeStatsBlock
    {
        let order = self.blocks.values().map(|e| e.order).max().unwrap_or(0) + 1;

        self.blocks
            .entry(key.as_ref().to_string())
            .or_insert(BakeStatsBlock {
                count: 0,
                order,
                entries: HashMap::new(),
            })
    }

    /// количество записей в блоке, 0 - если блока нет
    pub fn count(&self, key: impl AsRef<str>) -> usize
    {
        self.blocks
            .get(key.as_ref())
            .map(|block| block.count)
            .unwrap_or(0)
    }

    /// ключ записи в виде строки
    pub fn format_key(&self, key: u32) -> String
    {
        match self.key {
            StatsKey::Codepoint => format!("U+{:04X}", key),
            StatsKey::Line => format!("{}", key),
        }
    }
}

impl BakeStatsBlock
{
    /// увеличить значение для какого-то параметра, добавить описание записи
    pub fn inc(&mut self, key: u32, description: impl AsRef<str>)
    {
        self.count += 1;
        self.entries.insert(key, description.as_ref().to_string());
    }
}
