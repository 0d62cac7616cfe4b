//! Benchmarks for volume listing and name decoding.

use adf_list::*;

fn main() {
    divan::main();
}

fn write_i32_be(buf: &mut [u8], offset: usize, val: i32) {
    buf[offset..offset + 4].copy_from_slice(&val.to_be_bytes());
}

/// DD image with `per_bucket` files chained in every root hash bucket.
fn build_image(per_bucket: usize) -> Vec<u8> {
    let mut data = vec![0u8; 1760 * BLOCK_SIZE];
    let root = ROOT_BLOCK_DD as usize * BLOCK_SIZE;
    write_i32_be(&mut data, root + OFFSET_BLOCK_TYPE, T_HEADER);
    write_i32_be(&mut data, root + OFFSET_SEC_TYPE, ST_ROOT);

    let mut next_free = ROOT_BLOCK_DD as usize + 2;
    for bucket in 0..HASH_TABLE_SIZE {
        let head = next_free;
        for i in 0..per_bucket {
            let block = next_free;
            next_free += 1;
            let off = block * BLOCK_SIZE;
            let next = if i + 1 < per_bucket { next_free as i32 } else { 0 };

            write_i32_be(&mut data, off + OFFSET_BLOCK_TYPE, T_HEADER);
            write_i32_be(&mut data, off + OFFSET_SEC_TYPE, ST_FILE);
            write_i32_be(&mut data, off + OFFSET_BYTE_SIZE, (block * 10) as i32);
            write_i32_be(&mut data, off + OFFSET_HASH_CHAIN, next);

            let name = format!("File_{bucket:02}_{i:02}");
            data[off + OFFSET_NAME_LEN] = name.len() as u8;
            data[off + OFFSET_NAME..off + OFFSET_NAME + name.len()]
                .copy_from_slice(name.as_bytes());
        }
        if per_bucket > 0 {
            write_i32_be(&mut data, root + OFFSET_HASH_TABLE + bucket * 4, head as i32);
        }
    }

    data
}

#[divan::bench(args = [1, 4, 10])]
fn bench_list_volume(bencher: divan::Bencher, per_bucket: usize) {
    let data = build_image(per_bucket);
    bencher.bench_local(|| divan::black_box(list_volume(divan::black_box(&data))));
}

#[divan::bench]
fn bench_list_volume_empty(bencher: divan::Bencher) {
    let data = build_image(0);
    bencher.bench_local(|| divan::black_box(list_volume(divan::black_box(&data))));
}

#[divan::bench]
fn bench_decode_name_latin1(bencher: divan::Bencher) {
    let name = b"very_long_filename_\xe9\xe0\xc4.txt";
    bencher.bench_local(|| {
        divan::black_box(decode_name(divan::black_box(name), CodePage::Latin1))
    });
}

#[divan::bench]
fn bench_decode_name_ascii(bencher: divan::Bencher) {
    let name = b"very_long_filename_\xe9\xe0\xc4.txt";
    bencher.bench_local(|| divan::black_box(decode_name(divan::black_box(name), CodePage::Ascii)));
}
