use std::ffi::OsStr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::bail;

pub const HELP: &str = "\
Usage: unidata_bakery [codepoints|emojis]... [options...]
  -h, --help                Prints help information
  --cache-dir <DIR>         Downloaded sources (default: ./.cache)
  --output-dir <DIR>        Generated tables (default: ./data)
  --stats-dir <DIR>         Bake statistics (default: ./data_stats)
  --emoji-version <V>       emoji-test.txt version (default: 14.0)
  --timeout <SECS>          Timeout of a single download (default: 60)
  --log-level <LEVEL>       error, warn, info, debug, trace (default: info)
  --log-dir <DIR>           Also write rotated log files to DIR

Without a target both tables are baked.
";

/// версия emoji-test.txt по умолчанию
pub const DEFAULT_EMOJI_VERSION: &str = "14.0";

/// таблица, которую нужно собрать
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target
{
    Codepoints,
    Emojis,
}

impl FromStr for Target
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s {
            "codepoints" => Ok(Self::Codepoints),
            "emojis" => Ok(Self::Emojis),
            other => Err(format!("unknown table: {other:?}")),
        }
    }
}

/// адреса исходных данных
#[derive(Debug, Clone)]
pub struct Sources
{
    pub emoji_test: String,
    pub cldr: String,
    pub unicode_data: String,
    pub east_asian_width: String,
    pub entities: String,
    pub rfc1345: String,
    pub keysymdef: String,
}

/// настройки запекания
#[derive(Debug, Clone)]
pub struct BakeConfig
{
    pub targets: Vec<Target>,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stats_dir: PathBuf,
    pub emoji_version: String,
    pub timeout: Duration,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for BakeConfig
{
    fn default() -> Self
    {
        Self {
            targets: vec![Target::Codepoints, Target::Emojis],
            cache_dir: PathBuf::from("./.cache"),
            output_dir: PathBuf::from("./data"),
            stats_dir: PathBuf::from("./data_stats"),
            emoji_version: DEFAULT_EMOJI_VERSION.to_string(),
            timeout: Duration::from_secs(60),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl BakeConfig
{
    /// настройки из аргументов командной строки; None - если запрошена справка
    pub fn from_args(mut args: pico_args::Arguments) -> anyhow::Result<Option<Self>>
    {
        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let defaults = Self::default();

        let mut config = Self {
            targets: vec![],
            cache_dir: args
                .opt_value_from_os_str("--cache-dir", path)?
                .unwrap_or(defaults.cache_dir),
            output_dir: args
                .opt_value_from_os_str("--output-dir", path)?
                .unwrap_or(defaults.output_dir),
            stats_dir: args
                .opt_value_from_os_str("--stats-dir", path)?
                .unwrap_or(defaults.stats_dir),
            emoji_version: args
                .opt_value_from_str("--emoji-version")?
                .unwrap_or(defaults.emoji_version),
            timeout: args
                .opt_value_from_str("--timeout")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            log_level: args
                .opt_value_from_str("--log-level")?
                .unwrap_or(defaults.log_level),
            log_dir: args.opt_value_from_os_str("--log-dir", path)?,
        };

        while let Some(target) = args.opt_free_from_str::<Target>()? {
            if !config.targets.contains(&target) {
                config.targets.push(target);
            }
        }

        let remaining = args.finish();
        if !remaining.is_empty() {
            bail!("unrecognized arguments: {:?}", remaining);
        }

        if config.targets.is_empty() {
            config.targets = defaults.targets;
        }

        Ok(Some(config))
    }

    pub fn sources(&self) -> Sources
    {
        Sources {
            emoji_test: format!(
                "https://unicode.org/Public/emoji/{}/emoji-test.txt",
                self.emoji_version
            ),
            cldr: "https://raw.githubusercontent.com/unicode-org/cldr/main/common/annotations/en.xml"
                .to_string(),
            unicode_data: "https://www.unicode.org/Public/UCD/latest/ucd/UnicodeData.txt"
                .to_string(),
            east_asian_width: "https://www.unicode.org/Public/UCD/latest/ucd/EastAsianWidth.txt"
                .to_string(),
            entities: "https://html.spec.whatwg.org/entities.json".to_string(),
            rfc1345: "https://www.rfc-editor.org/rfc/rfc1345.txt".to_string(),
            keysymdef: "https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/raw/master/include/X11/keysymdef.h"
                .to_string(),
        }
    }
}

fn path(s: &OsStr) -> Result<PathBuf, &'static str>
{
    Ok(s.into())
}
