use serde_json::json;

use super::*;

fn to_json(message: &Message) -> serde_json::Value {
    serde_json::to_value(message).expect("serialize")
}

#[test]
fn polyline_flattens_points() {
    let message = Message::Polyline {
        points: [(1.0, 2.0), (3.0, 4.0)].into_iter().collect(),
        color: Color::RED,
    };
    assert_eq!(
        to_json(&message),
        json!({"type": "polyline", "points": [1.0, 2.0, 3.0, 4.0], "color": 16_711_680})
    );
}

#[test]
fn circle_uses_point_pair_and_fill() {
    let message = Message::Circle {
        p: Point::new(10.0, 20.0),
        r: 5.0,
        color: Color::RED,
        fill: false,
    };
    assert_eq!(
        to_json(&message),
        json!({"type": "circle", "p": [10.0, 20.0], "r": 5.0, "color": 16_711_680, "fill": false})
    );
}

#[test]
fn rectangle_uses_corner_pairs() {
    let message = Message::Rectangle {
        tl: Point::new(0.0, 1.0),
        br: Point::new(2.0, 3.0),
        color: Paint::Solid(Color::GREEN),
        fill: true,
    };
    assert_eq!(
        to_json(&message),
        json!({"type": "rectangle", "tl": [0.0, 1.0], "br": [2.0, 3.0], "color": 65_280, "fill": true})
    );
}

#[test]
fn triangle_with_vertex_colors_encodes_color_array() {
    let message = Message::Triangle {
        points: [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)].into_iter().collect(),
        color: Paint::from([Color::RED, Color::GREEN, Color::BLUE]),
        fill: true,
    };
    assert_eq!(
        to_json(&message),
        json!({
            "type": "triangle",
            "points": [0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            "color": [16_711_680, 65_280, 255],
            "fill": true
        })
    );
}

#[test]
fn circle_popup_has_point_and_radius() {
    let message = Message::Popup(Popup {
        anchor: PopupAnchor::Circle { p: Point::new(1.0, 2.0), r: 3.0 },
        text: "hello".to_owned(),
    });
    assert_eq!(
        to_json(&message),
        json!({"type": "popup", "p": [1.0, 2.0], "r": 3.0, "text": "hello"})
    );
}

#[test]
fn rect_popup_has_corners_and_no_radius() {
    let message = Message::Popup(Popup {
        anchor: PopupAnchor::Rect { tl: Point::new(1.0, 2.0), br: Point::new(3.0, 4.0) },
        text: "box".to_owned(),
    });
    let json = to_json(&message);
    assert_eq!(json, json!({"type": "popup", "tl": [1.0, 2.0], "br": [3.0, 4.0], "text": "box"}));
    assert!(json.get("r").is_none());
}

#[test]
fn unit_encodes_enums_as_codes() {
    let message = Message::Unit(Unit {
        x: 1.0,
        y: 2.0,
        r: 3.0,
        hp: 40,
        max_hp: 100,
        rem_cooldown: 5,
        cooldown: 60,
        side: Side::Ally,
        course: 1.5,
        selected: true,
        unit_type: UnitType::Helicopter,
    });
    assert_eq!(
        to_json(&message),
        json!({
            "type": "unit",
            "x": 1.0,
            "y": 2.0,
            "r": 3.0,
            "hp": 40,
            "max_hp": 100,
            "rem_cooldown": 5,
            "cooldown": 60,
            "enemy": -1,
            "course": 1.5,
            "selected": true,
            "unit_type": 4
        })
    );
}

#[test]
fn area_encodes_cell_and_type() {
    let message = Message::Area { x: 3, y: 7, area_type: AreaType::Forest };
    assert_eq!(to_json(&message), json!({"type": "area", "x": 3, "y": 7, "area_type": 1}));
}

#[test]
fn text_message_uses_message_discriminator() {
    let message = Message::Text { message: "tick 5".to_owned() };
    assert_eq!(to_json(&message), json!({"type": "message", "message": "tick 5"}));
    assert_eq!(message.kind(), MessageKind::Message);
}

#[test]
fn options_omit_unset_keys() {
    assert_eq!(to_json(&Message::Options(Options::default())), json!({"type": "options"}));

    let layer_only = Message::Options(Options { layer: Some(2), permanent: None });
    assert_eq!(to_json(&layer_only), json!({"type": "options", "layer": 2}));

    let both = Message::Options(Options { layer: Some(1), permanent: Some(true) });
    assert_eq!(to_json(&both), json!({"type": "options", "layer": 1, "permanent": true}));
}

#[test]
fn layer_carries_single_value() {
    assert_eq!(to_json(&Message::Layer { value: 4 }), json!({"type": "layer", "value": 4}));
}

#[test]
fn end_has_only_type() {
    assert_eq!(serde_json::to_string(&Message::End).expect("serialize"), r#"{"type":"end"}"#);
    assert!(Message::End.is_frame_end());
}

#[test]
fn kind_names_match_discriminators() {
    let messages = [
        Message::End,
        Message::Layer { value: 1 },
        Message::Options(Options::default()),
        Message::Area { x: 0, y: 0, area_type: AreaType::Rain },
        Message::Text { message: String::new() },
    ];
    for message in messages {
        assert_eq!(to_json(&message)["type"], message.kind().as_str());
    }
}

#[test]
fn decode_fills_defaults_for_optional_fields() {
    let message: Message =
        serde_json::from_str(r#"{"type":"circle","p":[1,2],"r":3,"color":255}"#).expect("decode");
    assert_eq!(
        message,
        Message::Circle { p: Point::new(1.0, 2.0), r: 3.0, color: Color::BLUE, fill: false }
    );
}

#[test]
fn decode_distinguishes_popup_anchors() {
    let circle: Message =
        serde_json::from_str(r#"{"type":"popup","p":[1,2],"r":3,"text":"a"}"#).expect("circle popup");
    let rect: Message =
        serde_json::from_str(r#"{"type":"popup","tl":[1,2],"br":[3,4],"text":"b"}"#).expect("rect popup");

    assert!(matches!(circle, Message::Popup(Popup { anchor: PopupAnchor::Circle { .. }, .. })));
    assert!(matches!(rect, Message::Popup(Popup { anchor: PopupAnchor::Rect { .. }, .. })));
}

#[test]
fn decode_rejects_unknown_discriminator() {
    let err = serde_json::from_str::<Message>(r#"{"type":"facility","x":1}"#).expect_err("unknown type");
    assert!(err.to_string().contains("facility"));
}
