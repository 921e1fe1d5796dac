use super::*;

#[test]
fn format_thread_id_uses_user_prefix_and_millis() {
    let id = format_thread_id(1_700_000_000_000, 0);
    assert_eq!(id, "user-1700000000000-000000000");
}

#[test]
fn format_thread_id_encodes_entropy_in_base36() {
    // 35 -> 'z' in the least significant position, which is emitted first.
    let id = format_thread_id(1, 35);
    assert_eq!(id, "user-1-z00000000");
}

#[test]
fn generated_ids_have_expected_shape() {
    let id = generate();
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "user");
    assert!(parts[1].parse::<u64>().is_ok());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn generated_ids_differ() {
    assert_ne!(generate(), generate());
}
