#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::{Model, Record};

fn fold(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    // 0xFF-separated chunks: the last is the query, the rest are records
    let mut chunks: Vec<String> = data
        .split(|&b| b == 0xff)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    let query = chunks.pop().unwrap_or_default();

    let model = Model::build(chunks.iter().cloned().map(Record::new).collect()).unwrap();
    let found = model.search(&query).len();

    let needle = fold(&query);
    let expected = chunks.iter().filter(|t| fold(t).contains(&needle)).count();
    assert_eq!(found, expected);
});
