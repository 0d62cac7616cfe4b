#![no_main]

use adf_list::{ListOptions, UnexpectedBlock, list_dir, list_volume, list_volume_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Default options must terminate on any input, cyclic chains included
    let listing = match list_volume(data) {
        Ok(l) => l,
        Err(_) => return,
    };

    let _ = listing.to_string();

    // Descend one level into every directory found
    for entry in listing.entries.iter().filter(|e| e.is_dir()) {
        let _ = list_dir(data, entry.block, &ListOptions::default());
    }

    let skip = ListOptions::new().unexpected_block(UnexpectedBlock::Skip);
    let _ = list_volume_with(data, &skip);
});
