//! # Training a small MLP on four samples
//!
//! Builds a 3-4-4-1 tanh network, then runs 60 gradient-descent steps at a
//! learning rate of 0.01 over the toy dataset, logging the loss every 10
//! steps. Finishes with the final predictions and the trained parameters.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use picograd_core::model::MlpConfig;
use picograd_core::train::{toy_dataset, TrainConfig, Trainer};
use picograd_core::PicogradError;

fn main() -> Result<(), PicogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainConfig::default();
    let shape = MlpConfig::default();
    let mut trainer = Trainer::new(config, shape)?;
    let samples = toy_dataset();

    let report = trainer.fit(&samples)?;
    println!(
        "loss: {:.6} -> {:.6} after {} steps",
        report.initial_loss().unwrap_or(f64::NAN),
        report.final_loss().unwrap_or(f64::NAN),
        report.steps()
    );

    for sample in &samples {
        let prediction = trainer.predict(&sample.inputs)?;
        println!("{:?} -> {:+.4} (target {:+.1})", sample.inputs, prediction[0], sample.targets[0]);
    }

    println!("\nparameters (value, grad):");
    print!("{}", trainer.parameters().describe(trainer.graph())?);
    Ok(())
}
