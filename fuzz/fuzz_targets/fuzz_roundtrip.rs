#![no_main]

use libfuzzer_sys::fuzz_target;

// A value that parses must reparse to something equal to itself after one
// trip through the serializer.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = jsonval::parse(text) else {
        return;
    };
    let serialized = jsonval::stringify(&value);
    let Ok(reserialized_text) = core::str::from_utf8(serialized.as_slice()) else {
        panic!("serializer produced non-UTF-8 output for input {text:?}");
    };
    let reparsed =
        jsonval::parse(reserialized_text).expect("serializer output must itself parse");
    assert_eq!(reparsed, value, "round trip changed the parsed value for {text:?}");
});
