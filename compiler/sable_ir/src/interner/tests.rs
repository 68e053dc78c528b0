use super::*;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("customer");
    let b = interner.intern("customer");
    let c = interner.intern("order");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "customer");
    assert_eq!(interner.lookup(c), "order");
}

#[test]
fn empty_string_is_name_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn builtin_names_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("anydata");
    interner.intern("typedesc");
    assert_eq!(interner.len(), before);
    assert!(!interner.is_empty());
}

#[test]
fn shared_handles_see_the_same_names() {
    let interner = SharedInterner::new();
    let clone = interner.clone();
    let handle = std::thread::spawn(move || clone.intern("from_worker"));
    let from_worker = match handle.join() {
        Ok(name) => name,
        Err(_) => panic!("worker thread panicked"),
    };
    assert_eq!(interner.intern("from_worker"), from_worker);
}
