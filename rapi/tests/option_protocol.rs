use rapi::constants::{OPTION_NOTHING_TO_COPY, OPTION_UNWRAP_NONE};
use rapi::{None, Option, RapiError, Slot, Some};

#[test]
fn is_some_and_is_none() {
    let option = Some(117);
    assert!(option.is_some());
    assert!(!option.is_none());
    let option1: Option<i32> = None;
    assert!(!option1.is_some());
    assert!(option1.is_none());
}

#[test]
fn expect_returns_value_or_caller_message() {
    assert_eq!(Some(117).expect("OH NO!"), Ok(117));
    let err = None::<i32>.expect("OH NO!").unwrap_err();
    assert_eq!(err, RapiError::Unwrap("OH NO!".to_string()));
}

#[test]
fn unwrap_fails_with_fixed_diagnostic() {
    assert_eq!(Some(117).unwrap(), Ok(117));
    let err = None::<i32>.unwrap().unwrap_err();
    assert_eq!(err, RapiError::Unwrap(OPTION_UNWRAP_NONE.to_string()));
}

#[test]
fn unwrap_or_and_unwrap_or_else() {
    assert_eq!(Some(117).unwrap_or(259), 117);
    assert_eq!(None.unwrap_or(259), 259);
    let default_value = 2;
    assert_eq!(Some(117).unwrap_or_else(|| default_value * 2), 117);
    assert_eq!(None.unwrap_or_else(|| default_value * 2), 4);
}

#[test]
fn map_preserves_tag() -> Result<(), RapiError> {
    let length = Some("Hello there!").map(str::len);
    assert!(length.is_some());
    assert_eq!(length.unwrap()?, 12);

    let missing = None::<&str>.map(str::len);
    assert!(missing.is_none());
    assert!(missing.unwrap().is_err());
    Ok(())
}

#[test]
fn map_or_uses_default_only_on_none() {
    let agree = |s: String| s + "\nI agree! :D";
    let contained = Some(String::from("Java is awesome!")).map_or("default".to_string(), agree);
    assert_eq!(contained, "Java is awesome!\nI agree! :D");
    let returned = None.map_or("default".to_string(), agree);
    assert_eq!(returned, "default");
}

#[test]
fn map_or_else_picks_branch() {
    let default_action = || String::from("is away!");
    let some_action = |s: String| s + "world!";
    assert_eq!(
        Some(String::from("Hello ")).map_or_else(default_action, some_action),
        "Hello world!"
    );
    assert_eq!(None.map_or_else(default_action, some_action), "is away!");
}

#[test]
fn ok_or_converts_to_result() {
    assert_eq!(Some("foo").ok_or(0), rapi::Ok("foo"));
    assert_eq!(None::<&str>.ok_or(0), rapi::Err(0));
    assert_eq!(None::<&str>.ok_or_else(|| 0), rapi::Err(0));
}

#[test]
fn and_discards_receiver_value() {
    const CONST: &str = "There was a contained value!";
    let i: Option<i32> = None;
    assert!(i.and(Some(CONST)).is_none());
    assert_eq!(Some(99).and(Some(CONST)), Some(CONST));
}

#[test]
fn and_then_chains() {
    let square = |x: i32| Some(x * x);
    let nope = |_: i32| None::<i32>;

    assert_eq!(Some(2).and_then(square).and_then(square), Some(16));
    assert_eq!(Some(2).and_then(square).and_then(nope), None);
    assert_eq!(Some(2).and_then(nope).and_then(square), None);
    assert_eq!(None.and_then(square).and_then(square), None);
    assert_eq!(
        Some(2).and_then(square).and_then(|_| Some("New type!")),
        Some("New type!")
    );
}

#[test]
fn or_truth_table() {
    assert_eq!(Some("a").or(None), Some("a"));
    assert_eq!(Some("c").or(Some("d")), Some("c"));
    assert_eq!(None.or(Some("f")), Some("f"));
    assert_eq!(None::<&str>.or(None), None);
}

#[test]
fn or_else_only_calls_on_none() {
    let nobody = || None::<&str>;
    let leon = || Some("Leon");

    assert_eq!(Some("August").or_else(leon), Some("August"));
    assert_eq!(None.or_else(leon), Some("Leon"));
    assert_eq!(None.or_else(nobody), None);
}

#[test]
fn get_or_insert_fills_empty_slot() {
    let mut none_option: Slot<Option<&str>> = Slot::new(None);
    let foo = *none_option.get_or_insert("foo");
    assert_eq!(foo, "foo");
    assert_eq!(*none_option.get(), Some("foo"));
}

#[test]
fn get_or_insert_with_fills_empty_option() {
    let mut none_option: Option<String> = None;
    let foo = none_option.get_or_insert_with(|| "foo".to_string()).clone();
    assert_eq!(foo, "foo");
    assert!(none_option.is_some());
}

#[test]
fn get_or_insert_with_fills_empty_slot() {
    let mut none_option: Slot<Option<String>> = Slot::new(None);
    let foo = none_option.get_or_insert_with(|| "foo".to_string()).clone();
    assert_eq!(foo, "foo");
    assert_eq!(*none_option.get(), Some("foo".to_string()));
}

#[test]
fn get_or_insert_on_full_slot_keeps_existing_value() {
    let mut slot = Slot::new(Some("existing"));
    assert_eq!(*slot.get_or_insert("argument"), "existing");
    assert_eq!(*slot.get(), Some("existing"));
}

#[test]
fn take_moves_value_out() {
    let mut integer = Slot::new(Some(117));
    let another_integer = integer.take();
    assert_eq!(*integer.get(), None);
    assert_eq!(another_integer, Some(117));

    let mut x: Slot<Option<i32>> = Slot::new(None);
    assert_eq!(x.take(), None);
    assert_eq!(*x.get(), None);
}

#[test]
fn copy_construction() {
    let foo = Some(String::from("foo"));
    let foo_brother = Option::some_from(&foo).expect("copy of a Some");
    assert_eq!(foo, foo_brother);

    let bar: Option<String> = None;
    let err = Option::some_from(&bar).unwrap_err();
    assert_eq!(err, RapiError::InvalidArgument(OPTION_NOTHING_TO_COPY.to_string()));
}

#[test]
fn use_case_some() -> Result<(), RapiError> {
    let foo = Some(42).map(|x| x * 2).or(Some(68)).map(|x| x + 10).unwrap()?;
    assert_eq!(foo, 94);
    Ok(())
}

#[test]
fn use_case_none() -> Result<(), RapiError> {
    let foo = None::<i32>
        .map(|x| x * 2)
        .or(Some(68))
        .map(|x| x + 10)
        .unwrap()?;
    assert_eq!(foo, 78);
    Ok(())
}
