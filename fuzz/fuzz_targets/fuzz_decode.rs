#![no_main]

use libfuzzer_sys::fuzz_target;
use wavjoin_core::{codec, concat_wav};

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to the same buffer.
    if let Ok(buffer) = codec::decode(data) {
        let encoded = codec::encode(&buffer).expect("in-memory encode cannot fail");
        let again = codec::decode(&encoded).expect("canonical output must decode");
        assert_eq!(again, buffer);
    }

    let _ = concat_wav(&[data, data]);
});
