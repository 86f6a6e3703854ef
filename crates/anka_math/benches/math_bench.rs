use anka_math::{
    BirthDate, PersonName, SpecialPolicy, letter_value, normalize_letters, reduce_digit,
    reduce_matrix,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("reduce_digit_preserve", |b| {
        b.iter(|| reduce_digit(black_box(987_654), SpecialPolicy::Preserve))
    });
    group.bench_function("reduce_matrix", |b| {
        b.iter(|| reduce_matrix(black_box(987_654)))
    });
    group.finish();
}

fn input_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("input");
    group.bench_function("birth_date_parse", |b| {
        b.iter(|| BirthDate::parse(black_box("1990-03-15")))
    });
    group.bench_function("normalize_letters", |b| {
        b.iter(|| normalize_letters(black_box("Élodie-Françoise Müller")))
    });
    group.bench_function("person_name_parse", |b| {
        b.iter(|| PersonName::parse(black_box("Jean-Baptiste Poquelin")))
    });
    group.bench_function("letter_sum", |b| {
        b.iter(|| {
            black_box("JEANBAPTISTEPOQUELIN")
                .chars()
                .map(letter_value)
                .sum::<u32>()
        })
    });
    group.finish();
}

criterion_group!(benches, reduce_bench, input_bench);
criterion_main!(benches);
