use crate::error::BakeError;

const SOURCE: &str = "emoji-test.txt";

const GROUP_PREFIX: &str = "# group:";
const SUBGROUP_PREFIX: &str = "# subgroup:";

/// уровень квалификации последовательности
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualification
{
    /// единственный уровень, пригодный для пользовательского ввода
    FullyQualified,
    MinimallyQualified,
    Unqualified,
    Component,
    Other(String),
}

impl From<&str> for Qualification
{
    fn from(value: &str) -> Self
    {
        match value {
            "fully-qualified" => Self::FullyQualified,
            "minimally-qualified" => Self::MinimallyQualified,
            "unqualified" => Self::Unqualified,
            "component" => Self::Component,
            other => Self::Other(other.to_string()),
        }
    }
}

/// строка данных emoji-test.txt
///
///   1F44B 1F3FB    ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone
///   ^^^^^^^^^^^      ^^^^^^^^^^^^^^^       ^^ ^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
///   codepoints       qualification        эхо  версия  name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSequence
{
    pub line: usize,
    pub codepoints: Vec<u32>,
    pub qualification: Qualification,
    pub name: String,
}

impl RawSequence
{
    pub fn is_fully_qualified(&self) -> bool
    {
        self.qualification == Qualification::FullyQualified
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line
{
    /// пустая строка или комментарий
    Blank,
    Group(String),
    Subgroup(String),
    Sequence(RawSequence),
}

/// разбор строки emoji-test.txt, line_no - номер строки для сообщений об ошибках
pub fn parse_line(line_no: usize, line: &str) -> Result<Line, BakeError>
{
    if let Some(name) = line.strip_prefix(GROUP_PREFIX) {
        return Ok(Line::Group(name.trim().to_string()));
    }

    if let Some(name) = line.strip_prefix(SUBGROUP_PREFIX) {
        return Ok(Line::Subgroup(name.trim().to_string()));
    }

    let (data, comment) = match line.find('#') {
        Some(p) => (line[.. p].trim(), line[p + 1 ..].trim()),
        None => (line.trim(), ""),
    };

    if data.is_empty() {
        return Ok(Line::Blank);
    }

    let (codepoints, qualification) = match data.split_once(';') {
        Some((codepoints, qualification)) => (codepoints, qualification.trim()),
        None => (data, ""),
    };

    let codepoints = codepoints
        .split_whitespace()
        .map(|c| {
            u32::from_str_radix(c, 16)
                .map_err(|err| BakeError::parse(SOURCE, line_no, format!("{c:?}: {err}")))
        })
        .collect::<Result<Vec<u32>, BakeError>>()?;

    if codepoints.is_empty() {
        return Err(BakeError::parse(SOURCE, line_no, "нет кодпоинтов"));
    }

    let qualification = Qualification::from(qualification);

    let name = match sequence_name(comment) {
        Some(name) => name.to_string(),
        None if qualification != Qualification::FullyQualified => String::new(),
        None => {
            return Err(BakeError::parse(
                SOURCE,
                line_no,
                format!("нет названия в комментарии {comment:?}"),
            ))
        }
    };

    Ok(Line::Sequence(RawSequence {
        line: line_no,
        codepoints,
        qualification,
        name,
    }))
}

/// название - всё, что следует за эхом эмодзи и версией
fn sequence_name(comment: &str) -> Option<&str>
{
    let mut rest = comment.trim_start();

    for _ in 0 .. 2 {
        let end = rest.find(char::is_whitespace)?;
        rest = rest[end ..].trim_start();
    }

    match rest.is_empty() {
        true => None,
        false => Some(rest.trim_end()),
    }
}
