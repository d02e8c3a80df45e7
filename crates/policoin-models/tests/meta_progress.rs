use policoin_models::{MetaProgress, PointsSummary, SubThemeValue};
use serde_json::json;

fn sample() -> serde_json::Value {
    json!({
        "sales": {
            "vendas_mensais": [
                {"nivel": 1, "objetivo": 10, "descricao": "vender", "valor": 10, "percentual": 100},
                {"nivel": 2, "objetivo": 20, "descricao": "vender", "valor": 5, "percentual": 25}
            ],
            "ticket_medio": {"error": "timeout"}
        },
        "marketing": {
            "criar_cards_flow": [
                {"tooltip": "Cards criados no flow"},
                {"nivel": 1, "objetivo": 5, "descricao": "criar cards", "valor": 1, "percentual": 20}
            ],
            "click_here": {"tooltip": "Saiba mais"},
            "broken": 42
        },
        "not_a_category": "oops"
    })
}

#[test]
fn keeps_backend_key_order() {
    let progress = MetaProgress::from_value(&sample()).unwrap();

    let names: Vec<_> = progress.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["sales", "marketing"]);

    let sales = progress.category("sales").unwrap();
    let sub_themes: Vec<_> = sales.sub_themes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sub_themes, vec!["vendas_mensais", "ticket_medio"]);
}

#[test]
fn error_and_tooltip_sentinels_are_recognised() {
    let progress = MetaProgress::from_value(&sample()).unwrap();

    let sales = progress.category("sales").unwrap();
    assert_eq!(sales.error(), Some("timeout"));

    let marketing = progress.category("marketing").unwrap();
    assert_eq!(marketing.error(), None);

    let cards = marketing.sub_theme("criar_cards_flow").unwrap();
    assert_eq!(cards.tooltip(), Some("Cards criados no flow"));
    assert_eq!(cards.missions().len(), 1);

    let click_here = marketing.sub_theme("click_here").unwrap();
    assert_eq!(click_here.value, SubThemeValue::Tooltip("Saiba mais".to_string()));
    assert!(click_here.missions().is_empty());

    assert!(marketing.sub_theme("broken").is_none());
}

#[test]
fn non_object_root_is_an_error() {
    assert!(MetaProgress::from_value(&json!([1, 2, 3])).is_err());
    assert!(MetaProgress::from_json_str("not json").is_err());
}

#[test]
fn loads_snapshot_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta_progress.json");
    std::fs::write(&path, serde_json::to_vec(&sample()).unwrap()).unwrap();

    let progress = MetaProgress::load_from_path(&path).unwrap();
    assert_eq!(progress.categories.len(), 2);

    assert!(MetaProgress::load_from_path(&dir.path().join("missing.json")).is_err());
}

#[test]
fn points_summary_accepts_numbers_and_strings() {
    let points =
        PointsSummary::from_json_str(r#"{"total_points": "15000.50", "current_points": 320}"#)
            .unwrap();
    assert_eq!(points.total_points, 15000.5);
    assert_eq!(points.current_points, 320.0);

    let points = PointsSummary::from_json_str(r#"{"total_points": 10}"#).unwrap();
    assert_eq!(points.current_points, 0.0);

    let points =
        PointsSummary::from_json_str(r#"{"total_points": 10, "current_points": null}"#).unwrap();
    assert_eq!(points.current_points, 0.0);

    assert!(PointsSummary::from_json_str(r#"{"total_points": "lots"}"#).is_err());
    assert!(PointsSummary::from_json_str(r#"{"current_points": 1}"#).is_err());
}
