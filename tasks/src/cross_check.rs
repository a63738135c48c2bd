use charconv::integer::Emulated128;
use charconv::numeric::UnsignedInteger;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Error, ErrorKind};

// Full width operands rarely exercise the single word paths, so a share of them is narrowed
fn operand(rng: &mut StdRng) -> u128 {
    match rng.gen_range(0..4) {
        0 => rng.gen::<u128>(),
        1 => u128::from(rng.gen::<u64>()),
        2 => u128::from(rng.gen::<u32>()),
        _ => rng.gen::<u128>() >> rng.gen_range(0..128u32),
    }
}

fn report(op: &str, a: u128, b: u128, emulated: Emulated128, native: u128) {
    error!("Mismatch on {a} {op} {b}: emulated {emulated} native {native}");
    debug!("a        = {}", a.to_bits_string(64));
    debug!("b        = {}", b.to_bits_string(64));
    debug!("emulated = {}", emulated.to_bits_string(64));
    debug!("native   = {}", native.to_bits_string(64));
}

/// Runs `iterations` rounds of random operands through every [`Emulated128`] operator and compares
/// the results with the ones of `u128`.
pub fn cross_check(iterations: u64, seed: Option<u64>) -> Result<(), Error> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Cross checking {iterations} operand pairs with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut mismatches = 0u64;
    for _ in 0..iterations {
        let (a, b) = (operand(&mut rng), operand(&mut rng));
        let (ea, eb) = (Emulated128::from(a), Emulated128::from(b));
        let shift = rng.gen_range(0..128u32);

        let mut results = vec![
            ("+", ea + eb, a.wrapping_add(b)),
            ("-", ea - eb, a.wrapping_sub(b)),
            ("*", ea * eb, a.wrapping_mul(b)),
            ("&", ea & eb, a & b),
            ("|", ea | eb, a | b),
            ("^", ea ^ eb, a ^ b),
            ("<<", ea << shift, a << shift),
            (">>", ea >> shift, a >> shift),
        ];
        if b != 0 {
            results.push(("/", ea / eb, a / b));
            results.push(("%", ea % eb, a % b));
        }

        for (op, emulated, native) in results {
            if emulated != native {
                let rhs = if op == "<<" || op == ">>" {
                    u128::from(shift)
                } else {
                    b
                };
                report(op, a, rhs, emulated, native);
                mismatches += 1;
            }
        }

        if ea.cmp(&eb) != a.cmp(&b) {
            error!("Comparison mismatch between {a} and {b}");
            mismatches += 1;
        }
    }

    if mismatches > 0 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("{mismatches} mismatches found with seed {seed}"),
        ));
    }

    info!("No mismatch found");
    Ok(())
}
