use crate::pokedex::core::{Pokedex, PokedexError};

#[test]
fn test_embedded_pokedex_loads() {
    let pokedex = Pokedex::embedded().unwrap();

    assert_eq!(pokedex.entries().len(), 2);
    assert!(pokedex
        .entries()
        .iter()
        .all(|entry| !entry.flavor_texts.is_empty()));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let pokedex = Pokedex::embedded().unwrap();

    let entry = pokedex.lookup("pikachu").unwrap();
    assert_eq!(entry.dex_number, 25);

    let entry = pokedex.lookup(" MIMIKYU ").unwrap();
    assert_eq!(entry.dex_number, 778);
}

#[test]
fn test_lookup_miss_is_none() {
    let pokedex = Pokedex::embedded().unwrap();

    assert!(pokedex.lookup("Background").is_none());
}

#[test]
fn test_lookup_by_model_label() {
    let pokedex = Pokedex::from_json(
        r#"[{
            "dex_number": 25,
            "label": "class_0",
            "name": "ピカチュウ",
            "genus": "ねずみポケモン",
            "flavor_texts_ja": ["でんき"]
        }]"#,
    )
    .unwrap();

    assert_eq!(pokedex.lookup("class_0").unwrap().name, "ピカチュウ");
    assert_eq!(pokedex.lookup("ピカチュウ").unwrap().dex_number, 25);
}

#[test]
fn test_entry_without_flavor_text_is_rejected() {
    let result = Pokedex::from_json(
        r#"[{ "dex_number": 1, "name": "Empty", "genus": "Nothing", "flavor_texts": [] }]"#,
    );

    assert!(matches!(result, Err(PokedexError::NoFlavorText(name)) if name == "Empty"));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        Pokedex::from_json("{"),
        Err(PokedexError::Parse(_))
    ));
}

#[test]
fn test_announcement_text() {
    let pokedex = Pokedex::embedded().unwrap();
    let entry = pokedex.lookup("Pikachu").unwrap();

    assert_eq!(
        entry.announcement("Sparks fly."),
        "Pikachu. Mouse Pokémon. Sparks fly."
    );
    assert_eq!(entry.announcement(""), "Pikachu. Mouse Pokémon.");
}

#[test]
fn test_kana_flavor_texts_are_a_fallback() {
    let pokedex = Pokedex::from_json(
        r#"[
            {
                "dex_number": 778,
                "name": "ミミッキュ",
                "genus": "ばけのかわポケモン",
                "flavor_texts_jahrkt": ["ボロぎれの なかみは なぞ"]
            },
            {
                "dex_number": 25,
                "name": "ピカチュウ",
                "genus": "ねずみポケモン",
                "flavor_texts_ja": [],
                "flavor_texts_jahrkt": ["ほっぺの でんきぶくろ"]
            }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        pokedex.lookup("ミミッキュ").unwrap().flavor_texts,
        vec!["ボロぎれの なかみは なぞ"]
    );
    assert_eq!(
        pokedex.lookup("ピカチュウ").unwrap().flavor_texts,
        vec!["ほっぺの でんきぶくろ"]
    );
}

#[test]
fn test_kanji_flavor_texts_win_over_kana() {
    let pokedex = Pokedex::from_json(
        r#"[{
            "dex_number": 25,
            "name": "ピカチュウ",
            "genus": "ねずみポケモン",
            "flavor_texts_ja": ["電気袋"],
            "flavor_texts_jahrkt": ["でんきぶくろ"]
        }]"#,
    )
    .unwrap();

    assert_eq!(pokedex.entries()[0].flavor_texts, vec!["電気袋"]);
}

#[test]
fn test_entry_without_any_flavor_list_is_rejected() {
    let result = Pokedex::from_json(r#"[{ "dex_number": 1, "name": "Bare", "genus": "Nothing" }]"#);

    assert!(matches!(result, Err(PokedexError::NoFlavorText(name)) if name == "Bare"));
}
