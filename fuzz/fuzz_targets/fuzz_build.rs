#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::{Model, Record};

fuzz_target!(|data: &[u8]| {
    // 0xFF-separated chunks become record texts
    let records: Vec<Record> = data
        .split(|&b| b == 0xff)
        .map(|chunk| Record::new(String::from_utf8_lossy(chunk).into_owned()))
        .collect();
    let model = Model::build(records).unwrap();

    // Every record must be findable through its own full text
    for record in model.records() {
        let text = record.text().unwrap();
        if !text.is_empty() {
            assert!(model.search(text).iter().any(|r| std::ptr::eq(*r, record)));
        }
    }
});
