use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use scatha::{Architecture, DecodeOptions, Engine, ErrorPolicy, Mode};

// A short x86-64 function body repeated into a buffer of realistic size.
const X86_BODY: &str = "554889e54883ec20897dfc488975f0c745ec00000000\
                        8b45fc0345ec8945ec488b45f0488b00488945e0\
                        c5fdefc062f17548efc2f00fb10a0f05c9c3";

const MIPS_BODY: [u32; 8] = [
    0x27bd_ffe0,
    0xafbf_001c,
    0x0c10_0000,
    0x0000_0000,
    0x8fbf_001c,
    0x0085_1021,
    0x03e0_0008,
    0x27bd_0020,
];

fn repeat(body: &[u8], total: usize) -> Vec<u8> {
    body.iter().copied().cycle().take(total - total % body.len()).collect()
}

fn bench_decode(c: &mut Criterion) {
    let x86 = repeat(&hex::decode(X86_BODY).unwrap_or_default(), 64 * 1024);
    let mips_body: Vec<u8> = MIPS_BODY.iter().flat_map(|w| w.to_be_bytes()).collect();
    let mips = repeat(&mips_body, 64 * 1024);

    let cases = [
        ("x86-64", Architecture::X86, Mode::MODE_64, &x86),
        ("mips32-be", Architecture::Mips, Mode::MIPS32 | Mode::BIG_ENDIAN, &mips),
    ];

    let mut group = c.benchmark_group("disasm-all");
    for (name, arch, mode, data) in cases {
        let Ok(engine) = Engine::new(arch, mode) else {
            continue;
        };
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(name, |b| b.iter(|| engine.disasm_all(data, 0x40_0000)));

        let lean = engine.with_options(DecodeOptions {
            detail: false,
            ..Default::default()
        });
        group.bench_function(format!("{name}-no-detail"), |b| {
            b.iter(|| lean.disasm_all(data, 0x40_0000))
        });
    }
    group.finish();
}

fn bench_noise(c: &mut Criterion) {
    // pseudo-random bytes exercise the failure and skip paths
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let noise: Vec<u8> = (0..16 * 1024)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect();

    let mut group = c.benchmark_group("disasm-noise");
    group.throughput(Throughput::Bytes(noise.len() as u64));
    for (name, arch, mode) in [
        ("x86-64", Architecture::X86, Mode::MODE_64),
        ("mips32-be", Architecture::Mips, Mode::MIPS32 | Mode::BIG_ENDIAN),
    ] {
        let Ok(engine) = Engine::new(arch, mode) else {
            continue;
        };
        let engine = engine.with_options(DecodeOptions {
            on_error: ErrorPolicy::SkipByte,
            ..Default::default()
        });
        group.bench_function(name, |b| {
            b.iter_batched(
                || noise.clone(),
                |buf| engine.disasm_all(&buf, 0),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let body = hex::decode(X86_BODY).unwrap_or_default();
    let buffers: Vec<Vec<u8>> = (0..32).map(|_| repeat(&body, 16 * 1024)).collect();
    let inputs: Vec<(&[u8], u64)> = buffers
        .iter()
        .enumerate()
        .map(|(i, b)| (&b[..], (i as u64) << 20))
        .collect();
    let Ok(engine) = Engine::new(Architecture::X86, Mode::MODE_64) else {
        return;
    };

    let mut group = c.benchmark_group("disasm-parallel");
    group.throughput(Throughput::Bytes((32 * 16 * 1024) as u64));
    group.bench_function("x86-64-32x16k", |b| {
        b.iter(|| engine.disasm_many_parallel(&inputs))
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_noise, bench_parallel);
criterion_main!(benches);
