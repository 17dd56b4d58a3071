use zenboard::board;
use zenboard::store::TaskPatch;
use zenboard::task::{CardColor, Priority, Task};

fn task(id: &str, order_index: i32) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: String::new(),
        priority: Priority::Medium,
        color: CardColor::Blue,
        created_at: 1_700_000_000_000,
        order_index,
    }
}

fn sequence(ids: &[&str]) -> Vec<Task> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| task(id, i as i32))
        .collect()
}

fn ids_of(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

fn assert_dense(tasks: &[Task]) {
    for (position, t) in tasks.iter().enumerate() {
        assert_eq!(
            t.order_index, position as i32,
            "task {} should have order_index {}",
            t.id, position
        );
    }
}

#[test]
fn move_produces_dense_indices_and_preserves_elements() {
    for from in 0..5 {
        for to in 0..5 {
            if from == to {
                continue;
            }
            let mut tasks = sequence(&["a", "b", "c", "d", "e"]);
            let mut expected_ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();

            assert!(board::move_task(&mut tasks, from, to));

            assert_dense(&tasks);
            assert_eq!(tasks.len(), 5);

            // Same element set, just permuted
            let mut actual_ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
            expected_ids.sort();
            actual_ids.sort();
            assert_eq!(actual_ids, expected_ids);
        }
    }
}

#[test]
fn move_shifts_only_the_span_between_source_and_target() {
    let mut tasks = sequence(&["a", "b", "c", "d", "e"]);
    assert!(board::move_task(&mut tasks, 1, 3));
    assert_eq!(ids_of(&tasks), ["a", "c", "d", "b", "e"]);
    assert_dense(&tasks);
}

#[test]
fn drag_b_to_front_scenario() {
    // [A(0), B(1), C(2)], drag B to position 0 -> [B(0), A(1), C(2)]
    let mut tasks = sequence(&["A", "B", "C"]);
    assert!(board::move_task(&mut tasks, 1, 0));
    assert_eq!(ids_of(&tasks), ["B", "A", "C"]);
    assert_dense(&tasks);
}

#[test]
fn move_is_a_noop_when_out_of_range_or_trivial() {
    let mut tasks = sequence(&["a", "b", "c"]);
    let before = tasks.clone();

    assert!(!board::move_task(&mut tasks, 1, 1));
    assert!(!board::move_task(&mut tasks, 3, 0));
    assert!(!board::move_task(&mut tasks, 0, 3));
    assert_eq!(tasks, before);

    let mut single = sequence(&["only"]);
    assert!(!board::move_task(&mut single, 0, 0));

    let mut empty: Vec<Task> = Vec::new();
    assert!(!board::move_task(&mut empty, 0, 0));
}

#[test]
fn suggested_order_with_full_permutation_is_applied_exactly() {
    let mut tasks = sequence(&["a", "b", "c", "d"]);
    let ids = vec![
        "c".to_string(),
        "a".to_string(),
        "d".to_string(),
        "b".to_string(),
    ];

    assert!(board::apply_suggested_order(&mut tasks, &ids));
    assert_eq!(ids_of(&tasks), ["c", "a", "d", "b"]);
    assert_dense(&tasks);
}

#[test]
fn suggested_order_places_missing_ids_last_in_prior_order() {
    // AI returns ["C", "A"] for [A, B, C] -> [C, A, B] with B as the
    // stable unknown tail
    let mut tasks = sequence(&["A", "B", "C"]);
    let ids = vec!["C".to_string(), "A".to_string()];

    assert!(board::apply_suggested_order(&mut tasks, &ids));
    assert_eq!(ids_of(&tasks), ["C", "A", "B"]);
    assert_dense(&tasks);
}

#[test]
fn suggested_order_keeps_several_missing_ids_stable() {
    let mut tasks = sequence(&["a", "b", "c", "d", "e"]);
    let ids = vec!["d".to_string(), "b".to_string()];

    assert!(board::apply_suggested_order(&mut tasks, &ids));
    // a, c, e keep their relative order after the recognized ids
    assert_eq!(ids_of(&tasks), ["d", "b", "a", "c", "e"]);
    assert_dense(&tasks);
}

#[test]
fn suggested_order_ignores_unknown_ids() {
    let mut tasks = sequence(&["a", "b"]);
    let ids = vec![
        "ghost".to_string(),
        "b".to_string(),
        "phantom".to_string(),
        "a".to_string(),
    ];

    assert!(board::apply_suggested_order(&mut tasks, &ids));
    assert_eq!(ids_of(&tasks), ["b", "a"]);
    assert_dense(&tasks);
}

#[test]
fn suggested_order_refuses_below_two_tasks() {
    let mut single = sequence(&["a"]);
    assert!(!board::apply_suggested_order(&mut single, &["a".to_string()]));
    assert_eq!(single[0].order_index, 0);

    let mut empty: Vec<Task> = Vec::new();
    assert!(!board::apply_suggested_order(&mut empty, &[]));
}

#[test]
fn delete_removes_only_the_target_and_tolerates_gaps() {
    let mut tasks = sequence(&["a", "b", "c", "d"]);

    assert!(board::remove_by_id(&mut tasks, "b"));

    assert_eq!(ids_of(&tasks), ["a", "c", "d"]);
    // Survivors keep their stored indices; the gap at 1 stays until the
    // next bulk reorder
    let indices: Vec<i32> = tasks.iter().map(|t| t.order_index).collect();
    assert_eq!(indices, [0, 2, 3]);

    assert!(!board::remove_by_id(&mut tasks, "b"));
    assert_eq!(tasks.len(), 3);
}

#[test]
fn create_position_is_the_sequence_length() {
    let tasks = sequence(&["a", "b", "c"]);
    assert_eq!(board::next_position(&tasks), 3);
    assert_eq!(board::next_position(&[]), 0);
}

#[test]
fn next_bulk_reorder_closes_delete_gaps() {
    let mut tasks = sequence(&["a", "b", "c", "d"]);
    board::remove_by_id(&mut tasks, "a");

    // Any later move re-densifies the whole sequence
    assert!(board::move_task(&mut tasks, 2, 0));
    assert_eq!(ids_of(&tasks), ["d", "b", "c"]);
    assert_dense(&tasks);
}

#[test]
fn edit_never_changes_position_or_order_index() {
    let mut tasks = sequence(&["a", "b", "c"]);
    let patch = TaskPatch {
        title: "renamed".to_string(),
        description: "new words".to_string(),
        priority: Priority::High,
        color: CardColor::Rose,
    };

    board::merge_patch(&mut tasks[1], &patch);

    assert_eq!(tasks[1].title, "renamed");
    assert_eq!(tasks[1].description, "new words");
    assert_eq!(tasks[1].priority, Priority::High);
    assert_eq!(tasks[1].color, CardColor::Rose);
    assert_eq!(tasks[1].order_index, 1);
    assert_eq!(tasks[1].id, "b");
    assert_eq!(tasks[1].created_at, 1_700_000_000_000);
    assert_eq!(ids_of(&tasks), ["a", "b", "c"]);
}

#[test]
fn position_of_finds_tasks_by_id() {
    let tasks = sequence(&["a", "b", "c"]);
    assert_eq!(board::position_of(&tasks, "b"), Some(1));
    assert_eq!(board::position_of(&tasks, "zz"), None);
}
