use zenboard::task::{CardColor, Priority, Task, TaskRecord};

#[test]
fn record_timestamp_accepts_a_number() {
    let record: TaskRecord = serde_json::from_str(
        r#"{
            "id": "t1",
            "title": "Write report",
            "description": "",
            "color": "green",
            "priority": "high",
            "created_at": 1700000000000,
            "order_index": 0
        }"#,
    )
    .unwrap();

    assert_eq!(record.created_at, 1_700_000_000_000);
}

#[test]
fn record_timestamp_accepts_a_numeric_string() {
    let record: TaskRecord = serde_json::from_str(
        r#"{
            "id": "t1",
            "title": "Write report",
            "description": "",
            "color": "green",
            "priority": "high",
            "created_at": " 1700000000000 ",
            "order_index": 3
        }"#,
    )
    .unwrap();

    assert_eq!(record.created_at, 1_700_000_000_000);
    assert_eq!(record.order_index, 3);
}

#[test]
fn record_rejects_a_non_numeric_timestamp() {
    let result = serde_json::from_str::<TaskRecord>(
        r#"{
            "id": "t1",
            "title": "x",
            "description": "",
            "color": "green",
            "priority": "high",
            "created_at": "yesterday",
            "order_index": 0
        }"#,
    );

    assert!(result.is_err());
}

#[test]
fn record_description_defaults_to_empty() {
    let record: TaskRecord = serde_json::from_str(
        r#"{
            "id": "t1",
            "title": "x",
            "color": "blue",
            "priority": "low",
            "created_at": 1,
            "order_index": 0
        }"#,
    )
    .unwrap();

    assert_eq!(record.description, "");
}

#[test]
fn record_to_task_maps_enums() {
    let record = TaskRecord {
        id: "t9".to_string(),
        title: "Ship it".to_string(),
        description: "soon".to_string(),
        color: "rose".to_string(),
        priority: "low".to_string(),
        created_at: 42,
        order_index: 7,
    };

    let task = Task::from(record);
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.color, CardColor::Rose);
    assert_eq!(task.created_at, 42);
    assert_eq!(task.order_index, 7);
}

#[test]
fn unknown_priority_and_color_fall_back_to_defaults() {
    let record = TaskRecord {
        id: "t9".to_string(),
        title: "x".to_string(),
        description: String::new(),
        color: "chartreuse".to_string(),
        priority: "urgent".to_string(),
        created_at: 0,
        order_index: 0,
    };

    let task = Task::from(record);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.color, CardColor::Blue);
}

#[test]
fn task_to_record_writes_lowercase_tags_and_snake_case_columns() {
    let task = Task {
        id: "abc".to_string(),
        title: "Title".to_string(),
        description: "Desc".to_string(),
        priority: Priority::High,
        color: CardColor::Indigo,
        created_at: 123,
        order_index: 4,
    };

    let json = serde_json::to_value(TaskRecord::from(&task)).unwrap();
    assert_eq!(json["priority"], "high");
    assert_eq!(json["color"], "indigo");
    assert_eq!(json["created_at"], 123);
    assert_eq!(json["order_index"], 4);
}

#[test]
fn new_tasks_get_distinct_ids_and_a_timestamp() {
    let a = Task::new("a".into(), String::new(), Priority::Medium, CardColor::Blue, 0);
    let b = Task::new("b".into(), String::new(), Priority::Medium, CardColor::Blue, 1);

    assert_ne!(a.id, b.id);
    assert!(!a.id.is_empty());
    assert!(a.created_at > 0);
    assert_eq!(b.order_index, 1);
}

#[test]
fn priority_and_color_cycles_cover_every_value() {
    let mut priority = Priority::Low;
    for _ in 0..Priority::ALL.len() {
        priority = priority.next();
    }
    assert_eq!(priority, Priority::Low);
    assert_eq!(Priority::High.next(), Priority::Low);
    assert_eq!(Priority::Low.prev(), Priority::High);

    let mut color = CardColor::Blue;
    for _ in 0..CardColor::ALL.len() {
        color = color.next();
    }
    assert_eq!(color, CardColor::Blue);
    assert_eq!(CardColor::Purple.next(), CardColor::Blue);
    assert_eq!(CardColor::Blue.prev(), CardColor::Purple);
}
