//! PRN Sequence Simulator
//!
//! Generates a chip sequence (plain SSRG or Gold code), maps it onto a
//! baseband waveform with a selectable pulse shape, up-converts it to
//! passband and computes its autocorrelation. Register states and chips
//! are persisted as CSV, waveforms and the correlation function as PNG.
//!
//! Usage:
//!   cargo run --bin prnsim -- [OPTIONS]
//!
//! Options:
//!   --feedback <bits>     Feedback tap vector, e.g. 0010000001 (default: G1)
//!   --init <bits>         Initial register state (default: all ones)
//!   --gold <a,b>          Use the Gold generator with G2 taps a and b
//!   -b, --bits <n>        Chips per code period (default: 1023)
//!   -p, --periods <n>     Number of code periods (default: 1)
//!   -r, --rate <Hz>       Chip rate (default: 1000)
//!   -o, --oversample <n>  Samples per chip (default: 8)
//!   --offset <sec>        Signal delay from the axis origin (default: 0)
//!   --shape <kind>        Pulse shape: rect | sinc | rcos (default: rect)
//!   --alpha <v>           Raised-cosine roll-off (default: 0.8)
//!   --qpsk                QPSK mapping instead of BPSK
//!   -f, --carrier <Hz>    Carrier frequency (default: 5000)
//!   --phase0 <rad>        Local-oscillator phase offset (default: 0)
//!   --phase-error <rad>   I/Q quadrature imbalance (default: 0)
//!   -s, --snr <dB>        SNR target when noise is enabled (default: 10)
//!   -n, --noise           Add white Gaussian noise to the passband signal
//!   --outdir <path>       Output directory (default: .)
//!   -h, --help            Show this help message

use rustyprn::sequence::{self, gold};
use rustyprn::{correlation, mapping, modulator, noise, plot, tracing_init};
use rustyprn::{MappingOptions, ShapeKind, TimeAxis};
use rustyprn::state_log::StateLog;

struct SimConfig {
    feedback: Vec<u8>,
    init: Option<Vec<u8>>,
    gold_taps: Option<(usize, usize)>,
    bits: usize,
    periods: usize,
    chip_rate: f64,
    oversample: usize,
    offset: f64,
    shape: ShapeKind,
    alpha: f64,
    qpsk: bool,
    carrier: f64,
    phase0: f64,
    phase_error: f64,
    snr_db: f64,
    add_noise: bool,
    outdir: String,
}

impl SimConfig {
    fn parse_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();

        let mut feedback = gold::G1_FEEDBACK.to_vec();
        let mut init = None;
        let mut gold_taps = None;
        let mut bits = 1023usize;
        let mut periods = 1usize;
        let mut chip_rate = 1000.0;
        let mut oversample = 8usize;
        let mut offset = 0.0;
        let mut shape = ShapeKind::Rect;
        let mut alpha = 0.8;
        let mut qpsk = false;
        let mut carrier = 5000.0;
        let mut phase0 = 0.0;
        let mut phase_error = 0.0;
        let mut snr_db = 10.0;
        let mut add_noise = false;
        let mut outdir = ".".to_string();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--feedback" => {
                    feedback = parse_bits(next_value(&args, &mut i, "--feedback")?)?;
                }
                "--init" => {
                    init = Some(parse_bits(next_value(&args, &mut i, "--init")?)?);
                }
                "--gold" => {
                    let v = next_value(&args, &mut i, "--gold")?;
                    let (a, b) = v
                        .split_once(',')
                        .ok_or_else(|| format!("Expected two taps a,b, got: {v}"))?;
                    let a = a.trim().parse().map_err(|_| format!("Invalid tap: {a}"))?;
                    let b = b.trim().parse().map_err(|_| format!("Invalid tap: {b}"))?;
                    gold_taps = Some((a, b));
                }
                "-b" | "--bits" => {
                    bits = parse_value(next_value(&args, &mut i, "--bits")?)?;
                }
                "-p" | "--periods" => {
                    periods = parse_value(next_value(&args, &mut i, "--periods")?)?;
                }
                "-r" | "--rate" => {
                    chip_rate = parse_value(next_value(&args, &mut i, "--rate")?)?;
                }
                "-o" | "--oversample" => {
                    oversample = parse_value(next_value(&args, &mut i, "--oversample")?)?;
                }
                "--offset" => {
                    offset = parse_value(next_value(&args, &mut i, "--offset")?)?;
                }
                "--shape" => {
                    shape = match next_value(&args, &mut i, "--shape")? {
                        "rect" => ShapeKind::Rect,
                        "sinc" => ShapeKind::Sinc,
                        "rcos" => ShapeKind::RaisedCosine,
                        other => return Err(format!("Unknown pulse shape: {other}")),
                    };
                }
                "--alpha" => {
                    alpha = parse_value(next_value(&args, &mut i, "--alpha")?)?;
                }
                "--qpsk" => qpsk = true,
                "-f" | "--carrier" => {
                    carrier = parse_value(next_value(&args, &mut i, "--carrier")?)?;
                }
                "--phase0" => {
                    phase0 = parse_value(next_value(&args, &mut i, "--phase0")?)?;
                }
                "--phase-error" => {
                    phase_error = parse_value(next_value(&args, &mut i, "--phase-error")?)?;
                }
                "-s" | "--snr" => {
                    snr_db = parse_value(next_value(&args, &mut i, "--snr")?)?;
                }
                "-n" | "--noise" => add_noise = true,
                "--outdir" => {
                    outdir = next_value(&args, &mut i, "--outdir")?.to_string();
                }
                "-h" | "--help" => {
                    print_help(&args[0]);
                    std::process::exit(0);
                }
                arg => return Err(format!("Unknown option: {arg}")),
            }
            i += 1;
        }

        Ok(SimConfig {
            feedback,
            init,
            gold_taps,
            bits,
            periods,
            chip_rate,
            oversample,
            offset,
            shape,
            alpha,
            qpsk,
            carrier,
            phase0,
            phase_error,
            snr_db,
            add_noise,
            outdir,
        })
    }
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing value for {flag}"))
}

fn parse_value<T: std::str::FromStr>(s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("Invalid value: {s}"))
}

fn parse_bits(s: &str) -> Result<Vec<u8>, String> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(0u8),
            '1' => Ok(1u8),
            _ => Err(format!("Bit vectors are strings of 0/1, got: {s}")),
        })
        .collect()
}

fn print_help(program: &str) {
    eprintln!("PRN Sequence Simulator");
    eprintln!();
    eprintln!("Usage: {program} [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --feedback <bits>     Feedback tap vector, e.g. 0010000001");
    eprintln!("  --init <bits>         Initial register state (default: all ones)");
    eprintln!("  --gold <a,b>          Use the Gold generator with G2 taps a and b");
    eprintln!("  -b, --bits <n>        Chips per code period (default: 1023)");
    eprintln!("  -p, --periods <n>     Number of code periods (default: 1)");
    eprintln!("  -r, --rate <Hz>       Chip rate (default: 1000)");
    eprintln!("  -o, --oversample <n>  Samples per chip (default: 8)");
    eprintln!("  --offset <sec>        Signal delay from the axis origin (default: 0)");
    eprintln!("  --shape <kind>        Pulse shape: rect | sinc | rcos (default: rect)");
    eprintln!("  --alpha <v>           Raised-cosine roll-off (default: 0.8)");
    eprintln!("  --qpsk                QPSK mapping instead of BPSK");
    eprintln!("  -f, --carrier <Hz>    Carrier frequency (default: 5000)");
    eprintln!("  --phase0 <rad>        Local-oscillator phase offset (default: 0)");
    eprintln!("  --phase-error <rad>   I/Q quadrature imbalance (default: 0)");
    eprintln!("  -s, --snr <dB>        SNR target when noise is enabled (default: 10)");
    eprintln!("  -n, --noise           Add white Gaussian noise to the passband");
    eprintln!("  --outdir <path>       Output directory (default: .)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} --gold 2,6 --shape rcos --alpha 0.5");
    eprintln!("  {program} --feedback 00101 --init 10010 -b 31 -p 2 --qpsk");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init::init_tracing();
    let config = SimConfig::parse_args()?;

    println!("PRN Sequence Simulator");
    println!("======================");
    match config.gold_taps {
        Some((a, b)) => println!("Generator:    Gold code, G2 taps ({a},{b})"),
        None => println!(
            "Generator:    SSRG, degree {}",
            config.feedback.len()
        ),
    }
    println!("Chips:        {} x {} periods", config.bits, config.periods);
    println!("Chip rate:    {:.1} Hz", config.chip_rate);
    println!("Oversample:   {}x", config.oversample);
    println!("Mapping:      {}", if config.qpsk { "QPSK" } else { "BPSK" });
    println!("Carrier:      {:.1} Hz", config.carrier);
    println!();

    let total_chips = config.bits * config.periods;
    if total_chips == 0 {
        return Err("need at least one chip (--bits and --periods must be positive)".into());
    }
    let outdir = std::path::Path::new(&config.outdir);
    std::fs::create_dir_all(outdir)?;

    // Step 1: chip sequence, with per-step CSV persistence
    println!("Step 1: Generating chip sequence...");
    let mut chip_log = StateLog::create(outdir.join("chips.csv"), "chip")?;
    let chips = match config.gold_taps {
        Some((a, b)) => {
            let chips = gold::gold_sequence(a, b, config.bits, config.periods)?;
            for (i, &c) in chips.iter().enumerate() {
                chip_log.append(i + 1, &[c])?;
            }
            chips
        }
        None => {
            let m = sequence::build_transition(&config.feedback)?;
            let init = config
                .init
                .clone()
                .unwrap_or_else(|| vec![1u8; config.feedback.len()]);
            if init.len() != config.feedback.len() {
                return Err(format!(
                    "--init has {} cells but --feedback has {}",
                    init.len(),
                    config.feedback.len()
                )
                .into());
            }
            let mut state_log = StateLog::create(outdir.join("ssrg_state.csv"), "ssrg_state")?;

            let mut state = init;
            let mut chips = Vec::with_capacity(total_chips);
            state_log.append(1, &state)?;
            chips.push(state[state.len() - 1]);
            chip_log.append(1, &[chips[0]])?;
            for i in 2..=total_chips {
                state = sequence::step(&state, &m)?;
                state_log.append(i, &state)?;
                let chip = state[state.len() - 1];
                chips.push(chip);
                chip_log.append(i, &[chip])?;
            }
            state_log.flush()?;
            chips
        }
    };
    chip_log.flush()?;
    println!("  ✓ {} chips written to CSV", chips.len());

    // Step 2: time axis
    let duration = total_chips as f64 / config.chip_rate;
    let n_samples = total_chips * config.oversample;
    let t = TimeAxis::linspace(0.0, duration, n_samples)?;
    println!("Step 2: Time axis: {} samples over {:.4} s", t.len(), duration);

    // Step 3: baseband mapping
    println!("Step 3: Mapping to baseband...");
    let opts = MappingOptions {
        delay: config.offset,
        rolloff: config.alpha,
        ..Default::default()
    };
    let baseband = if config.qpsk {
        mapping::qpsk_baseband(t.samples(), &chips, config.chip_rate, config.shape, &opts)?
    } else {
        mapping::bpsk_baseband(t.samples(), &chips, config.chip_rate, config.shape, &opts)?
    };
    println!("  ✓ {} baseband samples", baseband.len());

    // Step 4: up-conversion
    println!("Step 4: Up-converting to passband...");
    let mut passband = modulator::up_convert(
        &baseband,
        t.samples(),
        config.carrier,
        config.phase0,
        config.phase_error,
        0.0,
    )?;
    if config.add_noise {
        noise::add_noise_for_snr(&mut passband, config.snr_db);
        println!("  ✓ added white Gaussian noise, target SNR {:.1} dB", config.snr_db);
    }

    // Step 5: autocorrelation of the baseband signal
    println!("Step 5: Computing autocorrelation...");
    let autocorr = correlation::frequency_domain(&baseband, &baseband)?;
    let magnitude: Vec<f64> = autocorr.iter().map(|c| c.norm()).collect();
    let lag_seconds: Vec<f64> = (0..magnitude.len())
        .map(|k| k as f64 * t.step())
        .collect();
    println!("  ✓ peak {:.3} at lag 0", magnitude[0]);

    // Step 6: figures
    println!("Step 6: Writing figures...");
    let i_branch: Vec<f64> = baseband.iter().map(|c| c.re).collect();
    plot::line_chart(
        &outdir.join("baseband.png"),
        "Baseband (I branch)",
        t.samples(),
        &i_branch,
    )?;
    plot::line_chart(
        &outdir.join("passband.png"),
        "Passband",
        t.samples(),
        &passband,
    )?;
    plot::line_chart(
        &outdir.join("autocorr.png"),
        "Autocorrelation magnitude",
        &lag_seconds,
        &magnitude,
    )?;
    println!("  ✓ baseband.png, passband.png, autocorr.png");

    println!();
    println!("✓ Simulation complete!");

    Ok(())
}
