#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary input must produce a value or a typed error, never a panic
// or a runaway allocation.
fuzz_target!(|data: &[u8]| {
    let _ = putget::deserialize::<bool>(data);
    let _ = putget::deserialize::<u64>(data);
    let _ = putget::deserialize::<i64>(data);
    let _ = putget::deserialize::<f64>(data);
    let _ = putget::deserialize::<String>(data);
    let _ = putget::deserialize::<Option<String>>(data);
    let _ = putget::deserialize::<Vec<u16>>(data);
    let _ = putget::deserialize::<Vec<(bool, String)>>(data);
});
