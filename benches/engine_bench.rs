use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rug::Integer;

use rieselhunt::lucas::{gen_u2, gen_un};
use rieselhunt::riesel::{riesel_mod, RieselNumber};
use rieselhunt::seed::{gen_v1, SeedMethod};

fn bench_riesel_mod(c: &mut Criterion) {
    // A square-sized operand, the shape the U(n) loop reduces every step
    let r = RieselNumber::new(15, 4096).unwrap();
    let a = Integer::from(&r.value - 12_345u32);
    let squared = Integer::from(&a * &a);
    c.bench_function("riesel_mod(square, 15*2^4096-1)", |b| {
        b.iter(|| {
            let mut t = squared.clone();
            riesel_mod(black_box(&mut t), &r);
            t
        });
    });
}

fn bench_generic_mod(c: &mut Criterion) {
    // Baseline: the same reduction through full division
    use rug::ops::RemRounding;
    let r = RieselNumber::new(15, 4096).unwrap();
    let a = Integer::from(&r.value - 12_345u32);
    let squared = Integer::from(&a * &a);
    c.bench_function("rem_euc(square, 15*2^4096-1)", |b| {
        b.iter(|| squared.clone().rem_euc(&r.value));
    });
}

fn bench_gen_v1(c: &mut Criterion) {
    let r = RieselNumber::new(1095, 2_992_587).unwrap();
    c.bench_function("gen_v1(1095*2^2992587-1, rodseth)", |b| {
        b.iter(|| gen_v1(black_box(&r), SeedMethod::Rodseth));
    });
}

fn bench_gen_u2(c: &mut Criterion) {
    let r = RieselNumber::new(507, 8192).unwrap();
    c.bench_function("gen_u2(507*2^8192-1)", |b| {
        b.iter(|| gen_u2(black_box(&r), 17));
    });
}

fn bench_gen_un(c: &mut Criterion) {
    let r = RieselNumber::new(15, 2048).unwrap();
    let u2 = gen_u2(&r, 11).unwrap();
    c.bench_function("gen_un(15*2^2048-1)", |b| {
        b.iter(|| gen_un(black_box(&r), u2.clone()));
    });
}

criterion_group!(
    benches,
    bench_riesel_mod,
    bench_generic_mod,
    bench_gen_v1,
    bench_gen_u2,
    bench_gen_un
);
criterion_main!(benches);
