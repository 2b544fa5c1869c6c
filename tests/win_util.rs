use quick_panel::win_util::virtual_key_from_string;

#[test]
fn maps_named_keys() {
    assert_eq!(virtual_key_from_string("SPACE"), Some(0x20));
    assert_eq!(virtual_key_from_string("Enter"), Some(0x0D));
    assert_eq!(virtual_key_from_string("escape"), Some(0x1B));
}

#[test]
fn maps_letters_and_digits_to_ascii() {
    assert_eq!(virtual_key_from_string("a"), Some(0x41));
    assert_eq!(virtual_key_from_string("Z"), Some(0x5A));
    assert_eq!(virtual_key_from_string("0"), Some(0x30));
    assert_eq!(virtual_key_from_string("9"), Some(0x39));
}

#[test]
fn maps_function_keys() {
    assert_eq!(virtual_key_from_string("F1"), Some(0x70));
    assert_eq!(virtual_key_from_string("F12"), Some(0x7B));
    assert_eq!(virtual_key_from_string("F24"), Some(0x87));
    assert_eq!(virtual_key_from_string("F25"), None);
}

#[test]
fn rejects_unknown_keys() {
    assert_eq!(virtual_key_from_string("FOO"), None);
    assert_eq!(virtual_key_from_string("!"), None);
    assert_eq!(virtual_key_from_string(""), None);
}
