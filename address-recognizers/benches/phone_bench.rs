use address_recognizers::{phone_number, AddressLines};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use recognizer_framework::{Input, Position};
use regex::Regex;

const PHONE_NUMBERS: [&str; 12] = [
    "555-555",
    "(555) 555-555",
    "555 555-555",
    "555-555-555",
    "555-555 555",
    "+1 555-555 555",
    "+1 (555) 555 555",
    "(089) / 636-48018",
    "+49-89-636-48018",
    "19-49-89-636-48018",
    "5a5-555 555",
    "a555-555 555",
];

fn recognize(text: &str) -> bool {
    let input = Input::new(text);
    let mut pos = Position::new();
    phone_number(&input, &mut pos) && input.is_end(&pos)
}

fn bench_phone_numbers(c: &mut Criterion) {
    let regex = Regex::new(r"^[ ]*[+]?[ ]*[0-9]*[ ]*([(][0-9]+[)])?[ ]*/?[-0-9 ]+$").expect("valid phone regex");

    let mut group = c.benchmark_group("phone_number");

    group.bench_function("recognizer", |b| {
        b.iter(|| {
            PHONE_NUMBERS
                .iter()
                .filter(|text| recognize(black_box(text)))
                .count()
        })
    });

    group.bench_function("regex", |b| {
        b.iter(|| {
            PHONE_NUMBERS
                .iter()
                .filter(|text| regex.is_match(black_box(text)))
                .count()
        })
    });

    let block = "Some address somewhere\n3000 Some street\nEnglewood, CO\n55555\n\
                 Attn:  Some Person\nFax:   (555) 555-555 \nPhone:   555 555 555 \n"
        .repeat(500);
    group.throughput(Throughput::Bytes(block.len() as u64));
    group.bench_function("phone_lines", |b| {
        b.iter(|| black_box(block.as_str()).lines().phone_lines().count())
    });

    group.finish();
}

criterion_group!(benches, bench_phone_numbers);
criterion_main!(benches);
