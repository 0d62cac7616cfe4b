#![no_main]

use adf_list::{CodePage, decode_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let latin1 = decode_name(data, CodePage::Latin1);
    assert_eq!(latin1.chars().count(), data.len());

    let ascii = decode_name(data, CodePage::Ascii);
    assert_eq!(ascii.chars().count(), data.len());
});
