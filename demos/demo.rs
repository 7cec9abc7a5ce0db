//! Transforms a constant signal of length 4 and back, printing each step.
//!
//! Set `RUST_LOG=ctfft=debug` to see the library's tracing output.
use ctfft::{fft_64, ifft_64, FftError};
use num_complex::Complex64;
use tracing_subscriber::EnvFilter;

fn print_signal(name: &str, signal: &[Complex64]) {
    for (j, z) in signal.iter().enumerate() {
        println!("{name}[{j}]=({},{})", z.re, z.im);
    }
}

fn main() -> Result<(), FftError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let f = vec![Complex64::new(1.0, 0.0); 4];
    println!("f:");
    print_signal("f", &f);

    let f_hat = fft_64(&f)?;
    println!("fft(f):");
    print_signal("fhat", &f_hat);

    let f = ifft_64(&f_hat)?;
    println!("ifft(fft(f)):");
    print_signal("f", &f);

    Ok(())
}
