use groundwork::{lookup_table, LookupEntry, LookupTable};

const NUMBERS: LookupTable<u32, &str, 3> = LookupTable::new([
    LookupEntry::new(1, "one"),
    LookupEntry::new(2, "two"),
    LookupEntry::new(3, "three"),
]);

#[test]
fn const_table_finds_each_key() {
    assert_eq!(NUMBERS.len(), 3);
    assert!(!NUMBERS.is_empty());

    assert_eq!(NUMBERS.find(&1), Some(&"one"));
    assert_eq!(NUMBERS.find(&2), Some(&"two"));
    assert_eq!(NUMBERS.find(&3), Some(&"three"));
    assert_eq!(NUMBERS.find(&4), None);
}

#[test]
fn duplicate_keys_resolve_to_the_first_entry() {
    let table = lookup_table![(1, "a"), (2, "first"), (2, "second"), (3, "c"), (4, "d")];

    assert_eq!(table.len(), 5);
    assert_eq!(table.find(&2), Some(&"first"));
}

#[test]
fn empty_table_finds_nothing() {
    const EMPTY: LookupTable<u32, &str, 0> = LookupTable::new([]);

    assert_eq!(EMPTY.len(), 0);
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.find(&1), None);
    assert_eq!(EMPTY.find(&0), None);
}

#[test]
fn string_keys_use_native_equality() {
    let table = lookup_table![("key1", 100), ("key2", 200), ("key3", 300)];

    assert_eq!(table.find(&"key2"), Some(&200));
    assert_eq!(table.find(&"key4"), None);
    assert!(table.contains(&"key1"));
    assert!(!table.contains(&"nope"));
}

#[test]
fn iteration_preserves_declaration_order() {
    let keys: Vec<u32> = NUMBERS.iter().map(|entry| entry.key).collect();
    assert_eq!(keys, vec![1, 2, 3]);

    let mut count = 0;
    for entry in &NUMBERS {
        count += 1;
        assert!(entry.key >= 1 && entry.key <= 3);
    }
    assert_eq!(count, 3);

    assert_eq!(NUMBERS.entries()[0].value, "one");
    assert_eq!(NUMBERS.entries()[2].value, "three");
}

#[test]
fn larger_table_scans_first_middle_and_last() {
    let table = lookup_table![
        (0u8, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (6, "six"),
        (7, "seven"),
        (8, "eight"),
        (9, "nine"),
    ];

    assert_eq!(table.len(), 10);
    assert_eq!(table.find(&0), Some(&"zero"));
    assert_eq!(table.find(&5), Some(&"five"));
    assert_eq!(table.find(&9), Some(&"nine"));
}
