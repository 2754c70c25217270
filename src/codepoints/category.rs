use std::collections::HashMap;

/// общая категория Unicode (General_Category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Category
{
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    #[default]
    Unassigned,
}

lazy_static! {
    /// сокращённые названия категорий из UnicodeData.txt
    static ref CATEGORIES: HashMap<&'static str, Category> = {
        use Category::*;

        [
            ("Lu", UppercaseLetter),
            ("Ll", LowercaseLetter),
            ("Lt", TitlecaseLetter),
            ("Lm", ModifierLetter),
            ("Lo", OtherLetter),
            ("Mn", NonspacingMark),
            ("Mc", SpacingMark),
            ("Me", EnclosingMark),
            ("Nd", DecimalNumber),
            ("Nl", LetterNumber),
            ("No", OtherNumber),
            ("Pc", ConnectorPunctuation),
            ("Pd", DashPunctuation),
            ("Ps", OpenPunctuation),
            ("Pe", ClosePunctuation),
            ("Pi", InitialPunctuation),
            ("Pf", FinalPunctuation),
            ("Po", OtherPunctuation),
            ("Sm", MathSymbol),
            ("Sc", CurrencySymbol),
            ("Sk", ModifierSymbol),
            ("So", OtherSymbol),
            ("Zs", SpaceSeparator),
            ("Zl", LineSeparator),
            ("Zp", ParagraphSeparator),
            ("Cc", Control),
            ("Cf", Format),
            ("Cs", Surrogate),
            ("Co", PrivateUse),
            ("Cn", Unassigned),
        ]
        .into_iter()
        .collect()
    };
}

impl Category
{
    /// категория по сокращению ("Lu", "Nd", ...)
    pub fn from_abbr(abbr: &str) -> Option<Self>
    {
        CATEGORIES.get(abbr).copied()
    }

    /// значение в сгенерированных таблицах
    pub fn id(&self) -> u8
    {
        *self as u8
    }
}
