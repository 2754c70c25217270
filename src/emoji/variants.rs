use std::collections::HashSet;

use super::line::RawSequence;
use super::EmojiKey;
use crate::blocking_checks;
use crate::error::BakeError;

/// ZERO WIDTH JOINER
pub const ZWJ: u32 = 0x200D;
/// VARIATION SELECTOR-16 (эмодзи-представление)
pub const VS16: u32 = 0xFE0F;
/// VARIATION SELECTOR-15 (текстовое представление)
pub const VS15: u32 = 0xFE0E;
/// FEMALE SIGN
pub const FEMALE_SIGN: u32 = 0x2640;
/// MALE SIGN
pub const MALE_SIGN: u32 = 0x2642;
/// EMOJI MODIFIER FITZPATRICK TYPE-1-2 ..= TYPE-6
pub const SKIN_TONES: std::ops::RangeInclusive<u32> = 0x1F3FB ..= 0x1F3FF;
/// PERSON - гендерно-нейтральная форма
pub const PERSON: u32 = 0x1F9D1;

/// MAN, WOMAN - головы "гендерных ролей"
pub const ROLE_GENDERED_HEADS: [u32; 2] = [0x1F468, 0x1F469];

/// версия emoji-test.txt, с которой сверен список ROLE_GENDERED_ACTIVITIES.
/// при переходе на новую версию список нужно проверить заново
pub const ROLE_GENDERED_VERSION: &str = "14.0";

/// занятия, которые в паре с MAN / WOMAN образуют гендерный вариант
/// нейтральной формы PERSON + занятие:
///
///   1F9D1 200D 2695 FE0F  # 🧑‍⚕️ E12.1 health worker
///   1F468 200D 2695 FE0F  # 👨‍⚕️ E4.0 man health worker
///   1F469 200D 2695 FE0F  # 👩‍⚕️ E4.0 woman health worker
///
/// остальные последовательности с MAN / WOMAN во главе (семьи, причёски) -
/// самостоятельные эмодзи
pub const ROLE_GENDERED_ACTIVITIES: &[&[u32]] = &[
    &[0x2695, VS16], // health worker
    &[0x1F393],      // student
    &[0x1F3EB],      // teacher
    &[0x2696, VS16], // judge
    &[0x1F33E],      // farmer
    &[0x1F373],      // cook
    &[0x1F527],      // mechanic
    &[0x1F3ED],      // factory worker
    &[0x1F4BC],      // office worker
    &[0x1F52C],      // scientist
    &[0x1F4BB],      // technologist
    &[0x1F3A4],      // singer
    &[0x1F3A8],      // artist
    &[0x2708, VS16], // pilot
    &[0x1F680],      // astronaut
    &[0x1F692],      // firefighter
    &[0x1F9AF],      // with white cane
    &[0x1F9BC],      // in motorized wheelchair
    &[0x1F9BD],      // in manual wheelchair
];

/// последовательности с разными оттенками кожи для каждого участника
/// (руки, люди) не выражаются одним флагом - такие строки отбрасываются
pub const PER_LIMB_TONE_NAMES: &[&str] =
    &["holding hands", "handshake", "kiss:", "couple with heart"];

/// уже известные базовые формы
pub trait KnownEmoji
{
    fn contains(&self, key: &[u32]) -> bool;
}

impl KnownEmoji for HashSet<EmojiKey>
{
    fn contains(&self, key: &[u32]) -> bool
    {
        HashSet::contains(self, key)
    }
}

/// последовательность, разобранная на базовую форму и модификаторы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a>
{
    /// кодпоинты без ZWJ, оттенков кожи и знаков пола (кроме стоящих первыми)
    pub base: EmojiKey,
    /// есть модификатор оттенка кожи
    pub tone: bool,
    /// есть знак пола не на первой позиции
    pub gender_sign: bool,
    pub name: &'a str,
}

impl<'a> Candidate<'a>
{
    pub fn scan(sequence: &'a RawSequence) -> Self
    {
        let mut candidate = Self {
            base: Vec::with_capacity(sequence.codepoints.len()),
            tone: false,
            gender_sign: false,
            name: &sequence.name,
        };

        for (i, &code) in sequence.codepoints.iter().enumerate() {
            match code {
                c if SKIN_TONES.contains(&c) => candidate.tone = true,
                ZWJ => (),
                // сами знаки ♀ и ♂ - обычные эмодзи
                FEMALE_SIGN | MALE_SIGN if i > 0 => candidate.gender_sign = true,
                _ => candidate.base.push(code),
            }
        }

        candidate
    }
}

/// вариант уже известной базовой формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant
{
    /// строка отброшена, таблица не меняется
    Excluded,
    /// MAN / WOMAN + занятие, ключ - нейтральная форма PERSON + занятие
    RoleGendered(EmojiKey),
    /// базовая форма + ZWJ + знак пола
    SignGendered(EmojiKey),
    /// базовая форма + оттенок кожи
    SkinToned(EmojiKey),
}

type Classifier = fn(&dyn KnownEmoji, &Candidate) -> Option<Result<Variant, BakeError>>;

/// классификация последовательности. порядок проверок важен: строка,
/// подходящая под несколько вариантов, получает первый из них.
/// None - последовательность задаёт новую базовую форму
pub fn classify(known: &dyn KnownEmoji, candidate: &Candidate) -> Result<Option<Variant>, BakeError>
{
    let variants: &[Classifier] = &[excluded, role_gendered, sign_gendered, skin_toned];

    variants
        .iter()
        .find_map(|f| f(known, candidate))
        .transpose()
}

/// начинается ли базовая форма с MAN / WOMAN + занятие из списка
pub fn is_role_gendered(base: &[u32]) -> bool
{
    match base.split_first() {
        Some((head, rest)) => {
            ROLE_GENDERED_HEADS.contains(head)
                && ROLE_GENDERED_ACTIVITIES
                    .iter()
                    .any(|activity| rest.starts_with(activity))
        }
        None => false,
    }
}

/// оттенки кожи для каждого участника по отдельности
fn excluded(_known: &dyn KnownEmoji, candidate: &Candidate) -> Option<Result<Variant, BakeError>>
{
    blocking_checks!(
        !candidate.tone,
        !PER_LIMB_TONE_NAMES
            .iter()
            .any(|name| candidate.name.contains(name))
    );

    Some(Ok(Variant::Excluded))
}

/// MAN / WOMAN + занятие -> PERSON + занятие
fn role_gendered(known: &dyn KnownEmoji, candidate: &Candidate)
    -> Option<Result<Variant, BakeError>>
{
    blocking_checks!(!is_role_gendered(&candidate.base));

    let mut key = candidate.base.clone();
    key[0] = PERSON;

    Some(match known.contains(&key) {
        true => Ok(Variant::RoleGendered(key)),
        false => Err(BakeError::NotFound {
            key,
            name: candidate.name.to_string(),
        }),
    })
}

/// базовая форма + знак пола; базовая форма бывает записана без VS16
fn sign_gendered(known: &dyn KnownEmoji, candidate: &Candidate)
    -> Option<Result<Variant, BakeError>>
{
    blocking_checks!(!candidate.gender_sign);

    let keys = [Some(candidate.base.clone()), without_selector(&candidate.base)];

    Some(lookup(known, candidate, keys).map(Variant::SignGendered))
}

/// базовая форма + оттенок кожи; VS16 может быть как лишним, так и недостающим
fn skin_toned(known: &dyn KnownEmoji, candidate: &Candidate)
    -> Option<Result<Variant, BakeError>>
{
    blocking_checks!(!candidate.tone);

    let keys = [
        Some(candidate.base.clone()),
        without_selector(&candidate.base),
        with_selector(&candidate.base),
    ];

    Some(lookup(known, candidate, keys).map(Variant::SkinToned))
}

/// первый известный ключ из кандидатов
fn lookup(
    known: &dyn KnownEmoji,
    candidate: &Candidate,
    keys: impl IntoIterator<Item = Option<EmojiKey>>,
) -> Result<EmojiKey, BakeError>
{
    keys.into_iter()
        .flatten()
        .find(|key| known.contains(key))
        .ok_or_else(|| BakeError::NotFound {
            key: candidate.base.clone(),
            name: candidate.name.to_string(),
        })
}

/// ключ без завершающего VS16, если он есть
fn without_selector(key: &[u32]) -> Option<EmojiKey>
{
    match key.split_last() {
        Some((&VS16, rest)) => Some(rest.to_vec()),
        _ => None,
    }
}

/// ключ с добавленным VS16, если его нет
fn with_selector(key: &[u32]) -> Option<EmojiKey>
{
    match key.last() {
        Some(&VS16) => None,
        _ => {
            let mut key = key.to_vec();
            key.push(VS16);
            Some(key)
        }
    }
}
