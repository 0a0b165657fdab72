//! Prints the power, source and volume of a NAD receiver.
//!
//! ```text
//! RUST_LOG=nad_tseries=debug cargo run --example receiver_status -- /dev/ttyUSB0 T777
//! ```

use nad_tseries::{Model, Receiver, list_ports};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(port) = args.next() else {
        eprintln!("usage: receiver_status <port> [model]");
        eprintln!("available ports: {:?}", list_ports()?);
        return Ok(());
    };
    let model: Model = args.next().as_deref().unwrap_or("generic").parse()?;

    let receiver = Receiver::serial(port, model);
    receiver.connect().await?;

    println!("Model:  {}", receiver.get("Main.Model").await?);
    println!("Power:  {}", receiver.get("Main.Power").await?);
    println!("Source: {}", receiver.get_value("Main.Source").await?);
    println!("Volume: {} dB", receiver.get_value("Main.Volume").await?);

    receiver.disconnect().await?;
    Ok(())
}
