use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{
    decode, encode, from_str, tabular, to_string, to_value, Decoder, DecodeOptions, Delimiter,
    EncodeOptions, Encoder, Value,
};

#[derive(Serialize, Deserialize, Clone)]
struct Employee {
    id: u32,
    name: String,
    email: String,
    department: String,
    salary: f64,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Team {
    name: String,
    lead: Employee,
    members: Vec<Employee>,
    labels: Vec<String>,
}

fn employees(count: u32) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee {
            id: i,
            name: format!("Employee {}", i),
            email: format!("employee{}@example.com", i),
            department: ["Engineering", "Sales", "Support"][i as usize % 3].to_string(),
            salary: 50_000.0 + f64::from(i) * 125.5,
            active: i % 4 != 0,
        })
        .collect()
}

/// Same records, but every other one carries an extra key so nothing is tabular.
fn ragged(count: u32) -> Value {
    let mut rows = Vec::new();
    for (i, employee) in employees(count).into_iter().enumerate() {
        let mut row = to_value(&employee).unwrap_or(Value::Null);
        if i % 2 == 1 {
            if let Value::Object(map) = &mut row {
                map.insert("note".to_string(), Value::from("on leave, back soon"));
            }
        }
        rows.push(row);
    }
    Value::Array(rows)
}

fn team() -> Team {
    let mut members = employees(8);
    let lead = members.remove(0);
    Team {
        name: "Platform".to_string(),
        lead,
        members,
        labels: vec!["core".to_string(), "on-call".to_string()],
    }
}

fn benchmark_encode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_tabular");

    for size in [10, 100, 1000] {
        let value = to_value(&employees(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_decode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tabular");

    for size in [10, 100, 1000] {
        let text = to_string(&employees(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_list_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_layout");

    let value = ragged(100);
    let text = encode(&value);

    group.bench_function("encode", |b| b.iter(|| encode(black_box(&value))));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&text))));
    group.finish();
}

fn benchmark_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular_detect");

    let uniform = to_value(&employees(500)).unwrap();
    let mixed = ragged(500);

    if let (Value::Array(uniform), Value::Array(mixed)) = (&uniform, &mixed) {
        group.bench_function("uniform", |b| b.iter(|| tabular::detect(black_box(uniform))));
        group.bench_function("mixed", |b| b.iter(|| tabular::detect(black_box(mixed))));
    }
    group.finish();
}

fn benchmark_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiters");
    let value = to_value(&employees(200)).unwrap();

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        let encoder = Encoder::new(options.clone());
        let decoder = Decoder::new(DecodeOptions::from(&options));
        let text = encoder.encode(&value);

        group.bench_function(format!("encode_{:?}", delimiter), |b| {
            b.iter(|| encoder.encode(black_box(&value)))
        });
        group.bench_function(format!("decode_{:?}", delimiter), |b| {
            b.iter(|| decoder.decode(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_serde_nested(c: &mut Criterion) {
    let data = team();
    let text = to_string(&data).unwrap();

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
    c.bench_function("deserialize_nested_struct", |b| {
        b.iter(|| from_str::<Team>(black_box(&text)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data = employees(100);
    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_serialize", |b| {
        b.iter(|| toon_codec::to_string(black_box(&data)))
    });
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    let toon_str = toon_codec::to_string(&data).unwrap();
    let json_str = serde_json::to_string(&data).unwrap();

    group.bench_function("toon_deserialize", |b| {
        b.iter(|| toon_codec::from_str::<Vec<Employee>>(black_box(&toon_str)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Vec<Employee>>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_tabular,
    benchmark_decode_tabular,
    benchmark_list_layout,
    benchmark_detect,
    benchmark_delimiters,
    benchmark_serde_nested,
    benchmark_comparison_with_json
);
criterion_main!(benches);
