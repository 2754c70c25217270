use std::collections::HashSet;

use super::cldr::{attach, parse_cldr};
use super::variants::{FEMALE_SIGN, MALE_SIGN, SKIN_TONES, ZWJ};
use super::*;
use crate::config::BakeConfig;
use crate::fetch::tests::MemoryFetcher;

const EMOJI_TEST: &str = "\
# emoji-test.txt
# Version: 14.0

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
263A                                                   ; unqualified         # ☺ E0.6 smiling face

# subgroup: face-affection
1F618                                                  ; fully-qualified     # 😘 E0.6 face blowing a kiss

# group: People & Body

# subgroup: hand-fingers-open
1F44B                                                  ; fully-qualified     # 👋 E0.6 waving hand
1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone
1F44B 1F3FF                                            ; fully-qualified     # 👋🏿 E1.0 waving hand: dark skin tone

# subgroup: hand-fingers-partial
270C FE0F                                              ; fully-qualified     # ✌️ E0.6 victory hand
270C                                                   ; unqualified         # ✌ E0.6 victory hand
270C 1F3FB                                             ; fully-qualified     # ✌🏻 E1.0 victory hand: light skin tone

# subgroup: hands
1F91D                                                  ; fully-qualified     # 🤝 E3.0 handshake
1F91D 1F3FB                                            ; fully-qualified     # 🤝🏻 E14.0 handshake: light skin tone
1FAF1 1F3FB 200D 1FAF2 1F3FC                           ; fully-qualified     # 🫱🏻‍🫲🏼 E14.0 handshake: light skin tone, medium-light skin tone

# subgroup: person-gesture
1F937                                                  ; fully-qualified     # 🤷 E4.0 person shrugging
1F937 1F3FB                                            ; fully-qualified     # 🤷🏻 E4.0 person shrugging: light skin tone
1F937 200D 2642 FE0F                                   ; fully-qualified     # 🤷‍♂️ E4.0 man shrugging
1F937 200D 2642                                        ; minimally-qualified # 🤷‍♂ E4.0 man shrugging
1F937 1F3FB 200D 2642 FE0F                             ; fully-qualified     # 🤷🏻‍♂️ E4.0 man shrugging: light skin tone
1F937 200D 2640 FE0F                                   ; fully-qualified     # 🤷‍♀️ E4.0 woman shrugging

# subgroup: person-role
1F9D1 200D 2695 FE0F                                   ; fully-qualified     # 🧑‍⚕️ E12.1 health worker
1F9D1 1F3FB 200D 2695 FE0F                             ; fully-qualified     # 🧑🏻‍⚕️ E12.1 health worker: light skin tone
1F468 200D 2695 FE0F                                   ; fully-qualified     # 👨‍⚕️ E4.0 man health worker
1F469 1F3FB 200D 2695 FE0F                             ; fully-qualified     # 👩🏻‍⚕️ E4.0 woman health worker: light skin tone
1F575 FE0F                                             ; fully-qualified     # 🕵️ E0.7 detective
1F575 1F3FB                                            ; fully-qualified     # 🕵🏻 E2.0 detective: light skin tone
1F575 FE0F 200D 2642 FE0F                              ; fully-qualified     # 🕵️‍♂️ E4.0 man detective

# subgroup: family
1F9D1 200D 1F91D 200D 1F9D1                            ; fully-qualified     # 🧑‍🤝‍🧑 E12.0 people holding hands
1F9D1 1F3FB 200D 1F91D 200D 1F9D1 1F3FB                ; fully-qualified     # 🧑🏻‍🤝‍🧑🏻 E12.0 people holding hands: light skin tone
1F48F                                                  ; fully-qualified     # 💏 E0.6 kiss
1F48F 1F3FB                                            ; fully-qualified     # 💏🏻 E13.1 kiss: light skin tone
1F468 200D 1F469 200D 1F466                            ; fully-qualified     # 👨‍👩‍👦 E2.0 family: man, woman, boy

# group: Symbols

# subgroup: gender
2640 FE0F                                              ; fully-qualified     # ♀️ E4.0 female sign
2640                                                   ; unqualified         # ♀ E4.0 female sign

#EOF
";

const EN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
	<annotations>
		<annotation cp="😀">face | grin | grinning face</annotation>
		<annotation cp="😀" type="tts">grinning face</annotation>
		<annotation cp="👋">hand | wave | waving</annotation>
		<annotation cp="🕵">detective | sleuth | spy</annotation>
	</annotations>
</ldml>
"#;

fn normalize(text: &str) -> EmojiNormalizer
{
    let mut normalizer = EmojiNormalizer::new();
    normalizer.feed(text).unwrap();
    normalizer
}

fn record<'a>(tables: &'a EmojiTables, codepoints: &[u32]) -> &'a EmojiRecord
{
    tables
        .emojis
        .iter()
        .find(|e| e.codepoints == codepoints)
        .unwrap_or_else(|| panic!("{:X?}", codepoints))
}

#[test]
fn plain_base_line()
{
    let normalizer = normalize("1F44B ; fully-qualified # 👋 E0.6 waving hand");

    assert_eq!(normalizer.len(), 1);

    let emoji = normalizer.get(&[0x1F44B]).unwrap();

    assert_eq!(emoji.name, "waving hand");
    assert_eq!(emoji.gender, GenderKind::None);
    assert!(!emoji.skin_tones);
    assert!(emoji.cldr.is_empty());
}

#[test]
fn skin_tone_marks_existing_base()
{
    let mut normalizer = normalize("1F44B ; fully-qualified # 👋 E0.6 waving hand");

    normalizer
        .push_line(
            2,
            "1F44B 1F3FB ; fully-qualified # 👋🏻 E0.6 waving hand: light skin tone",
        )
        .unwrap();

    assert_eq!(normalizer.len(), 1);
    assert!(normalizer.get(&[0x1F44B]).unwrap().skin_tones);
}

#[test]
fn role_gendered_marks_neutral_person()
{
    let mut normalizer =
        normalize("1F9D1 200D 2695 FE0F ; fully-qualified # 🧑‍⚕️ E12.1 health worker");

    let key = [0x1F9D1, 0x2695, 0xFE0F];
    assert_eq!(normalizer.get(&key).unwrap().gender, GenderKind::None);

    normalizer
        .push_line(
            2,
            "1F468 200D 2695 FE0F ; fully-qualified # 👨‍⚕️ E4.0 man health worker",
        )
        .unwrap();

    assert_eq!(normalizer.len(), 1);
    assert_eq!(normalizer.get(&key).unwrap().gender, GenderKind::Role);
}

#[test]
fn role_gendered_without_neutral_form_fails()
{
    let mut normalizer = EmojiNormalizer::new();

    let err = normalizer
        .push_line(
            10,
            "1F468 200D 1F680 ; fully-qualified # 👨‍🚀 E4.0 man astronaut",
        )
        .unwrap_err();

    match err {
        BakeError::NotFound { key, name } => {
            assert_eq!(key, vec![0x1F9D1, 0x1F680]);
            assert_eq!(name, "man astronaut");
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn tone_without_base_fails()
{
    let mut normalizer = EmojiNormalizer::new();

    let err = normalizer
        .push_line(
            1,
            "1F44B 1F3FB ; fully-qualified # 👋🏻 E0.6 waving hand: light skin tone",
        )
        .unwrap_err();

    assert!(matches!(err, BakeError::NotFound { .. }));
}

#[test]
fn sign_without_base_fails()
{
    let mut normalizer = EmojiNormalizer::new();

    let err = normalizer
        .push_line(
            1,
            "1F937 200D 2642 FE0F ; fully-qualified # 🤷‍♂️ E4.0 man shrugging",
        )
        .unwrap_err();

    match err {
        BakeError::NotFound { key, name } => {
            assert_eq!(key, vec![0x1F937, 0xFE0F]);
            assert_eq!(name, "man shrugging");
        }
        other => panic!("{other:?}"),
    }
}

// знак и роль у одной формы взаимоисключающие: остаётся первый
#[test]
fn first_gender_kind_wins()
{
    let normalizer = normalize(
        "\
1F9D1 200D 2695 FE0F ; fully-qualified # 🧑‍⚕️ E12.1 health worker
1F9D1 200D 2695 FE0F 200D 2640 FE0F ; fully-qualified # 🧑‍⚕️‍♀️ E99.0 health worker: female sign
1F468 200D 2695 FE0F ; fully-qualified # 👨‍⚕️ E4.0 man health worker
",
    );

    assert_eq!(normalizer.len(), 1);
    assert_eq!(
        normalizer.get(&[0x1F9D1, 0x2695, 0xFE0F]).unwrap().gender,
        GenderKind::Sign
    );

    let tables = normalizer.finish();
    assert_eq!(tables.stats.count(STATS_GENDER_SIGN), 1);
    assert_eq!(tables.stats.count(STATS_GENDER_ROLE), 1);
}

#[test]
fn duplicate_base_keeps_first_record()
{
    let normalizer = normalize(
        "\
1F44B ; fully-qualified # 👋 E0.6 waving hand
1F44B ; fully-qualified # 👋 E0.6 hand waving
",
    );

    assert_eq!(normalizer.len(), 1);
    assert_eq!(normalizer.get(&[0x1F44B]).unwrap().name, "waving hand");

    let tables = normalizer.finish();
    assert_eq!(tables.stats.count(STATS_DUPLICATE), 1);
    assert_eq!(tables.stats.count(STATS_BASE), 1);
}

#[test]
fn variant_of_unknown_record_is_an_error()
{
    let mut normalizer = EmojiNormalizer::new();
    let sequence = RawSequence {
        line: 3,
        codepoints: vec![0x1F937, ZWJ, MALE_SIGN],
        qualification: Qualification::FullyQualified,
        name: "man shrugging".to_string(),
    };

    let err = normalizer
        .set_gender(&[0x1F937], GenderKind::Sign, &sequence)
        .unwrap_err();

    assert!(matches!(err, BakeError::NotFound { .. }));
    assert_eq!(normalizer.len(), 0);
}

#[test]
fn per_limb_tones_are_a_no_op()
{
    let before = normalize(
        "1F9D1 200D 1F91D 200D 1F9D1 ; fully-qualified # 🧑‍🤝‍🧑 E12.0 people holding hands",
    );

    let mut after = normalize(
        "1F9D1 200D 1F91D 200D 1F9D1 ; fully-qualified # 🧑‍🤝‍🧑 E12.0 people holding hands",
    );
    after
        .push_line(
            2,
            "1F9D1 1F3FB 200D 1F91D 200D 1F9D1 1F3FF ; fully-qualified # 🧑🏻‍🤝‍🧑🏿 E12.1 people holding hands: light skin tone, dark skin tone",
        )
        .unwrap();
    after
        .push_line(
            3,
            "1FAF1 1F3FB 200D 1FAF2 1F3FC ; fully-qualified # 🫱🏻‍🫲🏼 E14.0 handshake: light skin tone, medium-light skin tone",
        )
        .unwrap();

    assert_eq!(before.finish().emojis, after.finish().emojis);
}

#[test]
fn unknown_qualification_is_skipped()
{
    let tables = normalize(
        "\
1F44B ; fully-qualified # 👋 E0.6 waving hand
1F590 ; fancy-qualified # 🖐 E0.7 hand with fingers splayed
",
    )
    .finish();

    assert_eq!(tables.emojis.len(), 1);
    assert_eq!(tables.stats.count(STATS_NOT_FULLY_QUALIFIED), 1);
}

// тон и знак пола в одной строке: строка считается вариантом со знаком,
// оттенок кожи этой строкой не отмечается
#[test]
fn toned_and_signed_is_sign_only()
{
    let normalizer = normalize(
        "\
1F937 ; fully-qualified # 🤷 E4.0 person shrugging
1F937 1F3FB 200D 2642 FE0F ; fully-qualified # 🤷🏻‍♂️ E4.0 man shrugging: light skin tone
",
    );

    let emoji = normalizer.get(&[0x1F937]).unwrap();

    assert_eq!(emoji.gender, GenderKind::Sign);
    assert!(!emoji.skin_tones);
    assert_eq!(normalizer.len(), 1);
}

#[test]
fn full_sample()
{
    let tables = normalize(EMOJI_TEST).finish();

    assert_eq!(
        tables.groups,
        vec!["Smileys & Emotion", "People & Body", "Symbols"]
    );
    assert_eq!(tables.subgroups[0], vec!["face-smiling", "face-affection"]);
    assert_eq!(
        tables.subgroups[1],
        vec![
            "hand-fingers-open",
            "hand-fingers-partial",
            "hands",
            "person-gesture",
            "person-role",
            "family"
        ]
    );
    assert_eq!(tables.subgroups[2], vec!["gender"]);

    assert_eq!(tables.emojis.len(), 13);

    let waving = record(&tables, &[0x1F44B]);
    assert_eq!((waving.group, waving.subgroup), (1, 0));
    assert!(waving.skin_tones);
    assert_eq!(waving.gender, GenderKind::None);

    let victory = record(&tables, &[0x270C, 0xFE0F]);
    assert!(victory.skin_tones);

    let handshake = record(&tables, &[0x1F91D]);
    assert!(!handshake.skin_tones);

    let shrugging = record(&tables, &[0x1F937]);
    assert!(shrugging.skin_tones);
    assert_eq!(shrugging.gender, GenderKind::Sign);

    let health_worker = record(&tables, &[0x1F9D1, 0x2695, 0xFE0F]);
    assert!(health_worker.skin_tones);
    assert_eq!(health_worker.gender, GenderKind::Role);
    assert_eq!((health_worker.group, health_worker.subgroup), (1, 4));

    let detective = record(&tables, &[0x1F575, 0xFE0F]);
    assert!(detective.skin_tones);
    assert_eq!(detective.gender, GenderKind::Sign);

    let holding_hands = record(&tables, &[0x1F9D1, 0x1F91D, 0x1F9D1]);
    assert!(!holding_hands.skin_tones);

    let kiss = record(&tables, &[0x1F48F]);
    assert!(!kiss.skin_tones);

    let family = record(&tables, &[0x1F468, 0x1F469, 0x1F466]);
    assert_eq!(family.gender, GenderKind::None);

    let female_sign = record(&tables, &[0x2640, 0xFE0F]);
    assert_eq!((female_sign.group, female_sign.subgroup), (2, 0));
    assert_eq!(female_sign.name, "female sign");

    assert_eq!(tables.stats.count(STATS_NOT_FULLY_QUALIFIED), 4);
    assert_eq!(tables.stats.count(STATS_EXCLUDED), 4);
    assert_eq!(tables.stats.count(STATS_BASE), 13);
}

#[test]
fn base_forms_carry_no_signal_codepoints()
{
    let tables = normalize(EMOJI_TEST).finish();

    for emoji in &tables.emojis {
        assert!(!emoji.codepoints.contains(&ZWJ), "{:X?}", emoji.codepoints);
        assert!(
            !emoji.codepoints.iter().any(|c| SKIN_TONES.contains(c)),
            "{:X?}",
            emoji.codepoints
        );
        assert!(
            !emoji.codepoints[1 ..]
                .iter()
                .any(|&c| c == FEMALE_SIGN || c == MALE_SIGN),
            "{:X?}",
            emoji.codepoints
        );
    }

    let keys: HashSet<&EmojiKey> = tables.emojis.iter().map(|e| &e.codepoints).collect();
    assert_eq!(keys.len(), tables.emojis.len());
}

#[test]
fn same_input_same_output()
{
    let first = normalize(EMOJI_TEST).finish();
    let second = normalize(EMOJI_TEST).finish();

    assert_eq!(first.groups, second.groups);
    assert_eq!(first.subgroups, second.subgroups);
    assert_eq!(first.emojis, second.emojis);
}

#[test]
fn repeated_group_header_keeps_first_id()
{
    let tables = normalize(
        "\
# group: Flags
# subgroup: flag
1F3C1 ; fully-qualified # 🏁 E0.6 chequered flag
# group: Symbols
# subgroup: gender
2640 FE0F ; fully-qualified # ♀️ E4.0 female sign
# group: Flags
# subgroup: flag
1F6A9 ; fully-qualified # 🚩 E0.6 triangular flag
",
    )
    .finish();

    assert_eq!(tables.groups, vec!["Flags", "Symbols"]);
    assert_eq!(tables.subgroups, vec![vec!["flag"], vec!["gender"]]);

    let triangular = record(&tables, &[0x1F6A9]);
    assert_eq!((triangular.group, triangular.subgroup), (0, 0));
}

#[test]
fn lines_before_headers_use_unnamed_group()
{
    let tables = normalize(
        "\
1F600 ; fully-qualified # 😀 E1.0 grinning face
# group: Symbols
# subgroup: gender
2640 FE0F ; fully-qualified # ♀️ E4.0 female sign
",
    )
    .finish();

    assert_eq!(tables.groups, vec!["", "Symbols"]);
    assert_eq!(record(&tables, &[0x1F600]).group, 0);
    assert_eq!(record(&tables, &[0x2640, 0xFE0F]).group, 1);
}

#[test]
fn cldr_names_by_visual_string()
{
    let mut tables = normalize(EMOJI_TEST).finish();
    attach(&mut tables.emojis, &parse_cldr(EN_XML).unwrap());

    assert_eq!(
        record(&tables, &[0x1F600]).cldr,
        vec!["face", "grin", "grinning face"]
    );
    // в CLDR детектив записан без VS16
    assert_eq!(
        record(&tables, &[0x1F575, 0xFE0F]).cldr,
        vec!["detective", "sleuth", "spy"]
    );
    assert!(record(&tables, &[0x1F618]).cldr.is_empty());
}

#[test]
fn bake_from_sources()
{
    let config = BakeConfig::default();
    let sources = config.sources();

    let fetcher = MemoryFetcher::default()
        .with(&sources.emoji_test, EMOJI_TEST)
        .with(&sources.cldr, EN_XML);

    let tables = bake(&fetcher, &config).unwrap();

    assert_eq!(tables.emojis.len(), 13);
    assert_eq!(
        record(&tables, &[0x1F44B]).cldr,
        vec!["hand", "wave", "waving"]
    );
    assert_eq!(
        *fetcher.requested.borrow(),
        vec![sources.emoji_test.clone(), sources.cldr.clone()]
    );
}

#[test]
fn bake_fails_without_sources()
{
    let config = BakeConfig::default();

    let err = bake(&MemoryFetcher::default(), &config).unwrap_err();

    assert!(matches!(err, BakeError::Fetch(_)));
}
