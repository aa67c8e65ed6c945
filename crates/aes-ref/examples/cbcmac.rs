//! Demonstrates expanding a key into an aligned buffer and tagging two blocks.

use aes_ref::{expand_key, Aes128, Aes128Key, SCHEDULE_BYTES};
use cbcmac_alloc::AlignedAlloc;
use cbcmac_core::CbcMac;

fn main() {
    let key = Aes128Key::from([0u8; 16]);
    let schedule = expand_key(&key);

    // Park the expanded schedule in a 16-byte-aligned buffer, the layout an
    // accelerated cipher module would consume it from.
    let alloc = AlignedAlloc::new();
    let mut buf = alloc
        .allocate(16, SCHEDULE_BYTES)
        .expect("allocation succeeds");
    buf.copy_from_slice(&schedule.as_bytes());
    assert_eq!(buf.as_ptr() as usize % 16, 0);

    let engine = CbcMac::new(Aes128, schedule);
    let mut message = [0u8; 32];
    message[..16].copy_from_slice(&hex::decode("6a84867cd77e12ad07ea1be895c53fa3").unwrap());
    message[16..].copy_from_slice(&hex::decode("6a84867cd77e12ad07ea1be895c53faa").unwrap());

    let tag = engine.compute(&message).expect("valid message");
    assert_eq!(hex::encode(tag), "e828ff87450d9cdaa62530fbfc149c78");

    alloc.release(buf);
    println!("example succeeded; tag matches the reference vector");
}
