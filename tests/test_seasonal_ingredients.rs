use cooking_agent::{get_seasonal_ingredients, Season};

#[test]
fn test_spring() {
    let result = get_seasonal_ingredients("春");
    assert_eq!(
        result.ingredients().unwrap(),
        &["アスパラガス", "新玉ねぎ", "菜の花", "たけのこ", "いちご"]
    );
}

#[test]
fn test_every_key_returns_five() {
    for key in ["春", "夏", "秋", "冬"] {
        let result = get_seasonal_ingredients(key);
        assert_eq!(result.ingredients().unwrap().len(), 5, "season {}", key);
    }
}

#[test]
fn test_exact_match_only() {
    for input in ["Spring", "spring", " 春", "春 ", "春夏"] {
        assert!(!get_seasonal_ingredients(input).is_success(), "input {:?}", input);
    }
}

#[test]
fn test_error_message_echoes_input_and_lists_seasons() {
    for input in ["", "梅雨", "Spring"] {
        let result = get_seasonal_ingredients(input);
        let message = result.error_message().unwrap();
        assert!(message.contains(&format!("'{}'", input)));
        for season in Season::ALL {
            assert!(message.contains(season.key()));
        }
    }
}

#[test]
fn test_wire_shape() {
    let value = serde_json::to_value(get_seasonal_ingredients("夏")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "status": "success",
            "ingredients": ["トマト", "なす", "きゅうり", "とうもろこし", "すいか"]
        })
    );
}

#[test]
fn test_idempotent() {
    assert_eq!(get_seasonal_ingredients("冬"), get_seasonal_ingredients("冬"));
    assert_eq!(get_seasonal_ingredients("x"), get_seasonal_ingredients("x"));
}
