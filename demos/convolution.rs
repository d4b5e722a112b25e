//! Prints the signals the convolution demo plots: a rectangular pulse, a
//! short impulse response, and their full convolution.
//!
//! Run with `RUST_LOG=debug` to see the library's log output.
use libdsp::typenum::{U4, U12};
use libdsp::{convolve1d, decompose_even_odd, decompose_interlaced, RealBuffer};

fn print_signal(title: &str, samples: &[f64]) {
    println!("{}", title);
    for (i, v) in samples.iter().enumerate() {
        println!("  {:>3}  {:>8.4}", i, v);
    }
}

fn main() -> Result<(), libdsp::DspError> {
    env_logger::init();

    let mut signal = RealBuffer::<U12>::new();
    for i in 4..8 {
        signal.set(i, 1.0)?;
    }
    let impulse_response = RealBuffer::<U4>::from_slice(&[0.0, 0.5, -0.2, -0.1])?;

    let output = convolve1d(&signal, &impulse_response);

    print_signal("Original signal", signal.as_slice());
    print_signal("Impulse response", impulse_response.as_slice());
    print_signal("Output signal", output.as_slice());
    let e = output.extremes();
    println!("output range: [{:.4}, {:.4}]", e.min, e.max);

    let even_odd = decompose_even_odd(&signal);
    print_signal("Even part", even_odd.even.as_slice());
    print_signal("Odd part", even_odd.odd.as_slice());

    let interlaced = decompose_interlaced(&signal);
    print_signal("Even samples", interlaced.even.as_slice());
    print_signal("Odd samples", interlaced.odd.as_slice());

    Ok(())
}
