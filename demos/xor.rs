use sigmanet::{train_epoch, Dataset, NetworkSpec};

fn main() -> sigmanet::Result<()> {
    tracing_subscriber::fmt::init();

    let spec = NetworkSpec {
        name: "xor".into(),
        topology: vec![2, 2, 1],
        learning_rate: 0.1,
        seed: 42,
        ..NetworkSpec::default()
    };
    let mut network = spec.build()?;
    let data = Dataset::xor();
    let epochs = 50_000;

    for epoch in 0..epochs {
        let sse = train_epoch(&mut network, &data)?;
        if epoch % 5000 == 0 {
            println!("Epoch {epoch}: sse = {sse:.6}");
        }
    }

    for example in &data {
        let output = network.predict(&example.input)?;
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }
    Ok(())
}
