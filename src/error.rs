use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use crate::emoji::EmojiKey;

/// ошибка получения удалённого ресурса
#[derive(Debug)]
pub enum FetchError
{
    CacheDir { path: PathBuf, err: io::Error },
    CacheRead { path: PathBuf, err: io::Error },
    CacheWrite { path: PathBuf, err: io::Error },
    Request { url: String, message: String },
    Status { url: String, status: u16 },
    Body { url: String, err: io::Error },
}

impl Display for FetchError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self {
            Self::CacheDir { path, err } => {
                write!(f, "не удалось создать каталог кэша {}: {err}", path.display())
            }
            Self::CacheRead { path, err } => {
                write!(f, "не удалось прочитать кэш {}: {err}", path.display())
            }
            Self::CacheWrite { path, err } => {
                write!(f, "не удалось записать кэш {}: {err}", path.display())
            }
            Self::Request { url, message } => write!(f, "не удалось загрузить {url:?}: {message}"),
            Self::Status { url, status } => {
                write!(f, "неожиданный код ответа {status} для {url:?}")
            }
            Self::Body { url, err } => write!(f, "не удалось прочитать ответ {url:?}: {err}"),
        }
    }
}

impl Error for FetchError
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        match self {
            Self::CacheDir { err, .. }
            | Self::CacheRead { err, .. }
            | Self::CacheWrite { err, .. }
            | Self::Body { err, .. } => Some(err),
            Self::Request { .. } | Self::Status { .. } => None,
        }
    }
}

/// ошибка сборки таблиц. любая ошибка прерывает сборку целиком
#[derive(Debug)]
pub enum BakeError
{
    Fetch(FetchError),
    /// источник изменил формат - нужна ручная проверка
    Parse {
        source: &'static str,
        line: usize,
        message: String,
    },
    /// вариант эмодзи ссылается на базовую форму, которой нет в таблице
    NotFound { key: EmojiKey, name: String },
    Xml(roxmltree::Error),
    Json(serde_json::Error),
    Utf8 { source: &'static str },
}

impl BakeError
{
    pub fn parse(source: &'static str, line: usize, message: impl Into<String>) -> Self
    {
        Self::Parse {
            source,
            line,
            message: message.into(),
        }
    }
}

impl Display for BakeError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Parse {
                source,
                line,
                message,
            } => write!(f, "{source}, строка {line}: {message}"),
            Self::NotFound { key, name } => {
                write!(f, "базовая форма не найдена: {:?} {name:?}", format_key(key))
            }
            Self::Xml(err) => write!(f, "некорректный XML: {err}"),
            Self::Json(err) => write!(f, "некорректный JSON: {err}"),
            Self::Utf8 { source } => write!(f, "{source}: данные не в UTF-8"),
        }
    }
}

impl Error for BakeError
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        match self {
            Self::Fetch(err) => Some(err),
            Self::Xml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Parse { .. } | Self::NotFound { .. } | Self::Utf8 { .. } => None,
        }
    }
}

impl From<FetchError> for BakeError
{
    fn from(value: FetchError) -> Self
    {
        Self::Fetch(value)
    }
}

impl From<roxmltree::Error> for BakeError
{
    fn from(value: roxmltree::Error) -> Self
    {
        Self::Xml(value)
    }
}

impl From<serde_json::Error> for BakeError
{
    fn from(value: serde_json::Error) -> Self
    {
        Self::Json(value)
    }
}

/// последовательность кодпоинтов в виде "U+1F9D1 U+2695 U+FE0F"
pub fn format_key(key: &[u32]) -> String
{
    key.iter()
        .map(|c| format!("U+{:04X}", c))
        .collect::<Vec<_>>()
        .join(" ")
}
